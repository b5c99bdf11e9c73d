//! Domain layer of the Cattle Sense client.
//!
//! Models, routing rules and the traits the outer layers implement. Nothing
//! in this crate performs I/O.

pub mod api;
pub mod auth;
pub mod breed_catalog;
pub mod breed_library;
pub mod config;
pub mod error;
pub mod media;
pub mod record;
pub mod scan;
pub mod settings;
pub mod storage;
pub mod user;

// Re-export common error type
pub use error::{CattleError, Result};

/// Mobile number the backend assumes when a scan is uploaded without a login.
pub const GUEST_MOBILE: &str = "1234567890";
