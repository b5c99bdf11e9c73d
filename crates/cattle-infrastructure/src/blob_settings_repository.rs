//! Settings repository backed by a `BlobStore`.
//!
//! Persists preferences as a flat versioned JSON blob under
//! `settings-storage`.

use std::sync::Arc;

use version_migrate::Migrator;

use cattle_core::CattleError;
use cattle_core::error::Result;
use cattle_core::settings::{Settings, SettingsRepository};
use cattle_core::storage::{BlobStore, SETTINGS_STORAGE_KEY};

use crate::dto::create_settings_migrator;

pub struct BlobSettingsRepository {
    store: Arc<dyn BlobStore>,
    migrator: Migrator,
}

impl BlobSettingsRepository {
    pub fn new(store: Arc<dyn BlobStore>) -> Self {
        Self {
            store,
            migrator: create_settings_migrator(),
        }
    }
}

impl SettingsRepository for BlobSettingsRepository {
    fn load(&self) -> Result<Settings> {
        let Some(blob) = self.store.load(SETTINGS_STORAGE_KEY)? else {
            return Ok(Settings::default());
        };

        let json_value: serde_json::Value = serde_json::from_str(&blob)?;
        self.migrator
            .load_flat_from("settings", json_value)
            .map_err(|e| CattleError::Migration(format!("Failed to migrate settings: {}", e)))
    }

    fn save(&self, settings: &Settings) -> Result<()> {
        let serialized = self
            .migrator
            .save_domain_flat("settings", settings.clone())?;
        self.store.save(SETTINGS_STORAGE_KEY, &serialized)
    }
}
