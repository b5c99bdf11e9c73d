use std::sync::{Arc, RwLock};

use cattle_core::settings::{Language, Settings, SettingsRepository};

/// Holds user preferences and persists every change.
pub struct SettingsStore {
    state: RwLock<Settings>,
    repository: Arc<dyn SettingsRepository>,
}

impl SettingsStore {
    pub fn load(repository: Arc<dyn SettingsRepository>) -> Self {
        let settings = repository.load().unwrap_or_else(|e| {
            tracing::warn!("[SettingsStore] Failed to restore settings, using defaults: {}", e);
            Settings::default()
        });

        Self {
            state: RwLock::new(settings),
            repository,
        }
    }

    pub fn snapshot(&self) -> Settings {
        self.state.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn set_language(&self, language: Language) {
        self.update(|settings| settings.language = language);
    }

    pub fn toggle_offline_mode(&self) {
        self.update(|settings| settings.offline_mode = !settings.offline_mode);
    }

    pub fn toggle_auto_sync(&self) {
        self.update(|settings| settings.auto_sync = !settings.auto_sync);
    }

    pub fn toggle_notifications(&self) {
        self.update(|settings| settings.notifications = !settings.notifications);
    }

    pub fn toggle_dark_mode(&self) {
        self.update(|settings| settings.dark_mode = !settings.dark_mode);
    }

    fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut Settings),
    {
        // Saved under the write lock so concurrent updates persist in order.
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        f(&mut state);
        if let Err(e) = self.repository.save(&state) {
            tracing::warn!("[SettingsStore] Failed to persist settings: {}", e);
        }
    }
}
