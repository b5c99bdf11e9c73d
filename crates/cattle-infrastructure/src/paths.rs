//! Unified path management for Cattle Sense files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/cattle-sense/          # Config directory (platform config dir)
//! ├── config.toml                  # Backend discovery settings
//! └── state/                       # Persisted store blobs
//!     ├── auth-storage.json
//!     └── settings-storage.json
//! ```

use std::path::PathBuf;

use cattle_core::CattleError;

const APP_DIR_NAME: &str = "cattle-sense";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for CattleError {
    fn from(err: PathError) -> Self {
        CattleError::config(err.to_string())
    }
}

/// Resolves every on-disk location used by the client.
///
/// A base override replaces the platform config directory, which is how
/// tests and `--config-dir` keep everything inside one folder.
#[derive(Debug, Clone, Default)]
pub struct CattlePaths {
    base: Option<PathBuf>,
}

impl CattlePaths {
    pub fn new(base: Option<PathBuf>) -> Self {
        Self { base }
    }

    /// Returns the Cattle Sense configuration directory.
    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        if let Some(base) = &self.base {
            return Ok(base.clone());
        }
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or(PathError::ConfigDirNotFound)
    }

    pub fn config_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("config.toml"))
    }

    /// Directory holding the persisted store blobs.
    pub fn state_dir(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("state"))
    }
}
