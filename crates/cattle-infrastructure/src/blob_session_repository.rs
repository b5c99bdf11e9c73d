//! Session repository backed by a `BlobStore`.
//!
//! Persists the login state as a flat versioned JSON blob under
//! `auth-storage`. Uses version-migrate for schema migration.

use std::sync::Arc;

use version_migrate::Migrator;

use cattle_core::CattleError;
use cattle_core::auth::{AuthSession, SessionRepository};
use cattle_core::error::Result;
use cattle_core::storage::{AUTH_STORAGE_KEY, BlobStore};

use crate::dto::create_auth_session_migrator;

pub struct BlobSessionRepository {
    store: Arc<dyn BlobStore>,
    migrator: Migrator,
}

impl BlobSessionRepository {
    pub fn new(store: Arc<dyn BlobStore>) -> Self {
        Self {
            store,
            migrator: create_auth_session_migrator(),
        }
    }
}

impl SessionRepository for BlobSessionRepository {
    fn load(&self) -> Result<AuthSession> {
        let Some(blob) = self.store.load(AUTH_STORAGE_KEY)? else {
            return Ok(AuthSession::default());
        };

        let json_value: serde_json::Value = serde_json::from_str(&blob)?;
        self.migrator
            .load_flat_from("auth_session", json_value)
            .map_err(|e| CattleError::Migration(format!("Failed to migrate auth session: {}", e)))
    }

    fn save(&self, session: &AuthSession) -> Result<()> {
        let serialized = self
            .migrator
            .save_domain_flat("auth_session", session.clone())?;
        self.store.save(AUTH_STORAGE_KEY, &serialized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FileBlobStore, InMemoryBlobStore};
    use tempfile::TempDir;

    #[test]
    fn test_load_default_when_missing() {
        let repo = BlobSessionRepository::new(Arc::new(InMemoryBlobStore::new()));
        assert_eq!(repo.load().unwrap(), AuthSession::default());
    }

    #[test]
    fn test_session_survives_a_new_repository() {
        let temp_dir = TempDir::new().unwrap();
        let store: Arc<dyn BlobStore> = Arc::new(FileBlobStore::new(temp_dir.path().to_path_buf()));

        BlobSessionRepository::new(store.clone())
            .save(&AuthSession::logged_in("9876543210"))
            .unwrap();

        let loaded = BlobSessionRepository::new(store).load().unwrap();
        assert_eq!(loaded.active_mobile(), Some("9876543210"));
    }

    #[test]
    fn test_blob_is_flat_versioned_json() {
        let store = Arc::new(InMemoryBlobStore::new());
        let repo = BlobSessionRepository::new(store.clone());
        repo.save(&AuthSession::logged_in("9876543210")).unwrap();

        let blob = store.load(AUTH_STORAGE_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&blob).unwrap();
        assert_eq!(value["version"], "1.0.0");
        assert_eq!(value["userMobile"], "9876543210");
        assert_eq!(value["isLoggedIn"], true);
    }

    #[test]
    fn test_logged_in_flag_without_mobile_loads_logged_out() {
        let store = Arc::new(InMemoryBlobStore::new());
        store
            .save(AUTH_STORAGE_KEY, r#"{"version":"1.0.0","isLoggedIn":true}"#)
            .unwrap();

        let session = BlobSessionRepository::new(store).load().unwrap();
        assert!(!session.is_logged_in);
    }

    #[test]
    fn test_corrupt_blob_is_an_error() {
        let store = Arc::new(InMemoryBlobStore::new());
        store.save(AUTH_STORAGE_KEY, "not json").unwrap();

        let err = BlobSessionRepository::new(store).load().unwrap_err();
        assert!(err.is_serialization());
    }
}
