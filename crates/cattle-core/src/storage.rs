//! Opaque key → blob persistence.
//!
//! Stores keep their persisted form as a single serialized blob per key
//! (`auth-storage`, `settings-storage`). The mechanics of where the bytes
//! live are an infrastructure concern.

use crate::error::Result;

/// Key under which the login session is persisted.
pub const AUTH_STORAGE_KEY: &str = "auth-storage";
/// Key under which user preferences are persisted.
pub const SETTINGS_STORAGE_KEY: &str = "settings-storage";

/// Minimal blob store.
pub trait BlobStore: Send + Sync {
    /// Returns the blob for `key`, or `None` if nothing was stored yet.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the blob for `key`.
    fn save(&self, key: &str, blob: &str) -> Result<()>;

    /// Deletes the blob for `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
