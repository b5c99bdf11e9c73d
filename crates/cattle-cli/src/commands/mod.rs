pub mod auth;
pub mod breeds;
pub mod config;
pub mod home;
pub mod profile;
pub mod records;
pub mod scan;
pub mod settings;
