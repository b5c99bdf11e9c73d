//! Composition root.
//!
//! Wires configuration, persistence and the HTTP client into the stores and
//! use cases. Front-ends build one `AppContext` at startup.

use std::sync::Arc;

use cattle_core::api::BreedApi;
use cattle_core::config::RootConfig;
use cattle_core::error::Result;
use cattle_core::storage::BlobStore;
use cattle_infrastructure::{
    BlobSessionRepository, BlobSettingsRepository, CattlePaths, ConfigService, FileBlobStore,
};
use cattle_interaction::BreedApiClient;

use crate::auth_service::AuthService;
use crate::dashboard_service::DashboardService;
use crate::profile_service::ProfileService;
use crate::records_service::RecordsService;
use crate::scan_workflow::ScanWorkflow;
use crate::store::{ScanStore, SessionStore, SettingsStore};

pub struct AppContext {
    pub config: RootConfig,
    pub api: Arc<dyn BreedApi>,
    pub session_store: Arc<SessionStore>,
    pub settings_store: Arc<SettingsStore>,
    pub scan_store: Arc<ScanStore>,
    pub auth: AuthService,
    pub profile: ProfileService,
    pub records: RecordsService,
    pub dashboard: DashboardService,
}

impl AppContext {
    /// Loads `config.toml`, opens the state directory and builds the HTTP client.
    pub fn bootstrap(paths: &CattlePaths) -> Result<Self> {
        let config = ConfigService::new(paths)?.get_config()?;
        let api: Arc<dyn BreedApi> = Arc::new(BreedApiClient::from_config(&config.backend)?);
        let blob_store: Arc<dyn BlobStore> = Arc::new(FileBlobStore::new(paths.state_dir()?));

        tracing::info!("[Bootstrap] Backend: {}", api.base_url());
        Ok(Self::with_parts(config, api, blob_store))
    }

    pub fn with_parts(
        config: RootConfig,
        api: Arc<dyn BreedApi>,
        blob_store: Arc<dyn BlobStore>,
    ) -> Self {
        let session_store = Arc::new(SessionStore::load(Arc::new(BlobSessionRepository::new(
            blob_store.clone(),
        ))));
        let settings_store = Arc::new(SettingsStore::load(Arc::new(
            BlobSettingsRepository::new(blob_store),
        )));
        let scan_store = Arc::new(ScanStore::new());

        Self {
            auth: AuthService::new(api.clone(), session_store.clone()),
            profile: ProfileService::new(api.clone(), session_store.clone()),
            records: RecordsService::new(api.clone(), session_store.clone()),
            dashboard: DashboardService::new(api.clone(), session_store.clone()),
            config,
            api,
            session_store,
            settings_store,
            scan_store,
        }
    }

    /// Starts a scan workflow over the shared scan store.
    pub fn scan_workflow(&self) -> ScanWorkflow {
        ScanWorkflow::new(
            self.api.clone(),
            self.scan_store.clone(),
            self.session_store.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FakeBreedApi;
    use cattle_core::scan::{ImageRef, Prediction, ScanPhase};
    use cattle_core::settings::Language;
    use cattle_infrastructure::InMemoryBlobStore;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_login_is_visible_to_scan_workflow() {
        let api = Arc::new(FakeBreedApi::with_predictions(vec![Prediction::new("Gir", 0.92)]));
        let context = AppContext::with_parts(
            RootConfig::default(),
            api.clone(),
            Arc::new(InMemoryBlobStore::new()),
        );

        context.auth.verify("9876543210", "1234").await.unwrap();
        let mut workflow = context.scan_workflow();
        workflow.capture(ImageRef::from("/tmp/cow.jpg")).unwrap();
        assert_eq!(workflow.confirm_preview().await.unwrap(), ScanPhase::ResultHigh);
        assert!(api.calls().contains(&"classify_breed:9876543210".to_string()));
    }

    #[test]
    fn test_bootstrap_restores_persisted_state() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CattlePaths::new(Some(temp_dir.path().to_path_buf()));

        {
            let context = AppContext::bootstrap(&paths).unwrap();
            context.session_store.login("9876543210");
            context.settings_store.set_language(Language::Gu);
        }

        let context = AppContext::bootstrap(&paths).unwrap();
        assert_eq!(context.session_store.user_mobile().as_deref(), Some("9876543210"));
        assert_eq!(context.settings_store.snapshot().language, Language::Gu);
        assert!(temp_dir.path().join("state").join("auth-storage.json").exists());
    }
}
