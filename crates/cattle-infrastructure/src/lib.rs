//! Persistence and configuration for the Cattle Sense client.

pub mod blob_session_repository;
pub mod blob_settings_repository;
pub mod config_service;
pub mod dto;
pub mod paths;
pub mod storage;

pub use crate::blob_session_repository::BlobSessionRepository;
pub use crate::blob_settings_repository::BlobSettingsRepository;
pub use crate::config_service::ConfigService;
pub use crate::paths::CattlePaths;
pub use crate::storage::{FileBlobStore, InMemoryBlobStore};
