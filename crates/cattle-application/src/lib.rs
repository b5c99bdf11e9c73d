//! Application layer for Cattle Sense.
//!
//! State stores and use cases that coordinate the domain, persistence and
//! backend client.

pub mod auth_service;
pub mod context;
pub mod dashboard_service;
pub mod profile_service;
pub mod records_service;
pub mod scan_workflow;
pub mod store;

#[cfg(test)]
mod test_support;

pub use auth_service::AuthService;
pub use context::AppContext;
pub use dashboard_service::{Dashboard, DashboardService};
pub use profile_service::ProfileService;
pub use records_service::RecordsService;
pub use scan_workflow::ScanWorkflow;
pub use store::{ScanStore, SessionStore, SettingsStore};
