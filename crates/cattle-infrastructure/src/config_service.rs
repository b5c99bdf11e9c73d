//! Configuration service implementation.
//!
//! Loads the root configuration from `config.toml`
//! (`~/.config/cattle-sense/config.toml` by default). A missing file means
//! all defaults.

use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use cattle_core::config::RootConfig;
use cattle_core::error::Result;

use crate::paths::CattlePaths;
use crate::storage::AtomicFile;

/// Configuration service that loads and caches the root configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
    /// Cached configuration loaded from file.
    config: Arc<RwLock<Option<RootConfig>>>,
}

impl ConfigService {
    /// Creates a ConfigService reading `config.toml` from the given paths.
    pub fn new(paths: &CattlePaths) -> Result<Self> {
        Ok(Self::with_path(paths.config_file()?))
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self {
            path,
            config: Arc::new(RwLock::new(None)),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Gets the root configuration, loading from file if not cached.
    ///
    /// A malformed file is an error; nothing is cached in that case.
    pub fn get_config(&self) -> Result<RootConfig> {
        {
            let read_lock = self.config.read().unwrap_or_else(|e| e.into_inner());
            if let Some(ref cached) = *read_lock {
                return Ok(cached.clone());
            }
        }

        let loaded = self.load_config()?;

        {
            let mut write_lock = self.config.write().unwrap_or_else(|e| e.into_inner());
            *write_lock = Some(loaded.clone());
        }

        Ok(loaded)
    }

    /// Writes `config` to disk and replaces the cached copy.
    pub fn save_config(&self, config: &RootConfig) -> Result<()> {
        let content = toml::to_string_pretty(config)?;
        AtomicFile::new(self.path.clone()).write(&content)?;

        let mut write_lock = self.config.write().unwrap_or_else(|e| e.into_inner());
        *write_lock = Some(config.clone());
        tracing::info!("[ConfigService] Wrote {}", self.path.display());
        Ok(())
    }

    fn load_config(&self) -> Result<RootConfig> {
        match AtomicFile::new(self.path.clone()).read()? {
            Some(content) => {
                let config: RootConfig = toml::from_str(&content)?;
                tracing::debug!("[ConfigService] Loaded {}", self.path.display());
                Ok(config)
            }
            None => {
                tracing::debug!(
                    "[ConfigService] {} not found, using defaults",
                    self.path.display()
                );
                Ok(RootConfig::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cattle_core::config::ResolverTier;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::with_path(temp_dir.path().join("config.toml"));
        assert_eq!(service.get_config().unwrap(), RootConfig::default());
    }

    #[test]
    fn test_reads_backend_section() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(
            &path,
            "[backend]\nplatform = \"android\"\nresolver_order = [\"platform_default\", \"fixed\"]\n",
        )
        .unwrap();

        let config = ConfigService::with_path(path).get_config().unwrap();
        assert_eq!(config.backend.platform.as_deref(), Some("android"));
        assert_eq!(
            config.backend.resolver_order,
            vec![ResolverTier::PlatformDefault, ResolverTier::Fixed]
        );
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[backend\nport = ").unwrap();

        let err = ConfigService::with_path(path).get_config().unwrap_err();
        assert!(err.is_serialization());
    }

    #[test]
    fn test_save_then_reload() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CattlePaths::new(Some(temp_dir.path().to_path_buf()));
        let service = ConfigService::new(&paths).unwrap();

        let mut config = RootConfig::default();
        config.backend.dev_host_uri = Some("192.168.1.5:8081".to_string());
        service.save_config(&config).unwrap();

        let reloaded = ConfigService::new(&paths).unwrap().get_config().unwrap();
        assert_eq!(reloaded, config);
    }
}
