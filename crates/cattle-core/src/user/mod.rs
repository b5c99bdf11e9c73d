//! User profile domain module.
//!
//! # Usage
//!
//! ```ignore
//! use cattle_core::user::{UserProfile, ProfileUpdate, ProfilePicture};
//! ```

mod model;
mod picture;

// Re-export public API
pub use model::{ProfilePictureUpload, ProfileUpdate, ProfileUpdateAck, UserProfile};
pub use picture::ProfilePicture;
