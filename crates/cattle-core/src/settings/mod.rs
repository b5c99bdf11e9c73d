//! User preference domain.

mod model;
mod repository;

pub use model::{Language, Settings};
pub use repository::SettingsRepository;
