//! In-process state containers.
//!
//! Each store owns one piece of client state behind a `RwLock`. The session
//! and settings stores write through to their repository on every mutation;
//! the scan store is transient.

mod scan_store;
mod session_store;
mod settings_store;

pub use scan_store::ScanStore;
pub use session_store::SessionStore;
pub use settings_store::SettingsStore;
