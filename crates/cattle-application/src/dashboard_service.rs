//! Home screen summary use case.

use std::sync::Arc;

use cattle_core::api::BreedApi;
use cattle_core::error::Result;
use cattle_core::media::resolve_media_url;
use cattle_core::record::{ScanRecord, ScanStats};

use crate::store::SessionStore;

const RECENT_SCAN_COUNT: usize = 3;
const DEFAULT_DISPLAY_NAME: &str = "Cattle Officer";

/// Everything the home screen shows.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub display_name: String,
    pub profile_picture: Option<String>,
    pub stats: ScanStats,
    /// Most recent scans first, at most three.
    pub recent_scans: Vec<ScanRecord>,
}

pub struct DashboardService {
    api: Arc<dyn BreedApi>,
    session_store: Arc<SessionStore>,
}

impl DashboardService {
    pub fn new(api: Arc<dyn BreedApi>, session_store: Arc<SessionStore>) -> Self {
        Self { api, session_store }
    }

    /// Loads profile, stats and recent scans. Any failed call fails the whole load.
    pub async fn load(&self) -> Result<Dashboard> {
        let mobile = self.session_store.effective_mobile();
        let base_url = self.api.base_url();

        let profile = self.api.get_profile(&mobile).await?;
        let stats = self.api.get_stats(&mobile).await?;
        let scans = self.api.get_scans(&mobile).await?;

        let display_name = if profile.full_name.trim().is_empty() {
            DEFAULT_DISPLAY_NAME.to_string()
        } else {
            profile.full_name
        };

        let recent_scans = scans
            .into_iter()
            .take(RECENT_SCAN_COUNT)
            .map(|mut record| {
                record.image = resolve_media_url(base_url, &record.image);
                record
            })
            .collect();

        Ok(Dashboard {
            display_name,
            profile_picture: profile
                .profile_picture
                .map(|path| resolve_media_url(base_url, &path)),
            stats,
            recent_scans,
        })
    }
}
