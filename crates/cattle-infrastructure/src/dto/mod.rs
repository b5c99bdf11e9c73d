//! Data Transfer Objects (DTOs) for persistence.
//!
//! These DTOs represent the versioned schema of the persisted store blobs.
//! They are private to the infrastructure layer and handle the evolution
//! of the storage format over time.
//!
//! ## Schema Versioning (Semantic Versioning)
//!
//! - **MAJOR (X.0.0)**: Breaking changes (field removal, type changes)
//! - **MINOR (1.X.0)**: Backward-compatible additions (new optional fields)
//!
//! Blobs are stored flat: the `version` key sits beside the data fields.

mod auth_session;
mod settings;

pub use auth_session::{AuthSessionV1_0_0, create_auth_session_migrator};
pub use settings::{SettingsV1_0_0, create_settings_migrator};
