//! Settings repository trait.

use crate::error::Result;
use crate::settings::model::Settings;

/// Persistence for user preferences.
pub trait SettingsRepository: Send + Sync {
    /// Loads persisted settings, or defaults when none exist.
    fn load(&self) -> Result<Settings>;

    /// Replaces the persisted settings.
    fn save(&self, settings: &Settings) -> Result<()>;
}
