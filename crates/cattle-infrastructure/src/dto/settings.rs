//! Settings DTOs and migrations
//!
//! ## Version History
//! - **1.0.0**: Initial schema with language and the four preference toggles

use serde::{Deserialize, Serialize};
use version_migrate::{FromDomain, IntoDomain, Versioned};

use cattle_core::settings::{Language, Settings};

/// Persisted user preferences V1.0.0
///
/// Missing toggles fall back to the domain defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Versioned)]
#[versioned(version = "1.0.0")]
#[serde(rename_all = "camelCase")]
pub struct SettingsV1_0_0 {
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub offline_mode: bool,
    #[serde(default = "default_true")]
    pub auto_sync: bool,
    #[serde(default = "default_true")]
    pub notifications: bool,
    #[serde(default)]
    pub dark_mode: bool,
}

fn default_true() -> bool {
    true
}

impl IntoDomain<Settings> for SettingsV1_0_0 {
    fn into_domain(self) -> Settings {
        Settings {
            language: self.language,
            offline_mode: self.offline_mode,
            auto_sync: self.auto_sync,
            notifications: self.notifications,
            dark_mode: self.dark_mode,
        }
    }
}

impl FromDomain<Settings> for SettingsV1_0_0 {
    fn from_domain(settings: Settings) -> Self {
        SettingsV1_0_0 {
            language: settings.language,
            offline_mode: settings.offline_mode,
            auto_sync: settings.auto_sync,
            notifications: settings.notifications,
            dark_mode: settings.dark_mode,
        }
    }
}

/// Creates a Migrator for Settings entities.
pub fn create_settings_migrator() -> version_migrate::Migrator {
    version_migrate::migrator!("settings" => [
        SettingsV1_0_0,
        Settings
    ], save = true)
    .expect("Failed to create settings migrator")
}
