//! Backend access for the Cattle Sense client.
//!
//! - `address`: base address discovery
//! - `api_client`: reqwest implementation of `cattle_core::api::BreedApi`

pub mod address;
pub mod api_client;

pub use address::{BackendEnv, resolve_base_url};
pub use api_client::BreedApiClient;
