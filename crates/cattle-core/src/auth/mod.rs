//! Authenticated session domain.
//!
//! - `model`: the persisted login state
//! - `repository`: persistence trait implemented by the infrastructure layer

mod model;
mod repository;

pub use model::AuthSession;
pub use repository::SessionRepository;
