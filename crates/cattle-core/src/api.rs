//! Backend API contract.
//!
//! The classification backend is a black box reached over HTTP. This trait
//! is the seam between the use cases and the HTTP client so that workflows
//! can be exercised without a network.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::record::{ScanRecord, ScanStats};
use crate::scan::{ImageRef, Prediction};
use crate::user::{ProfilePictureUpload, ProfileUpdate, ProfileUpdateAck, UserProfile};

/// Response of `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

/// Response of `POST /auth/verify`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub token: Option<String>,
}

/// Typed calls against the breed-identification backend.
///
/// Every method performs exactly one request and returns any failure
/// (transport, timeout, non-2xx status, malformed body) to the caller.
/// Implementations must not retry.
#[async_trait]
pub trait BreedApi: Send + Sync {
    /// Asks the backend to send an OTP to `mobile`.
    async fn send_otp(&self, mobile: &str) -> Result<OtpResponse>;

    /// Checks the OTP the user typed.
    async fn verify_otp(&self, mobile: &str, otp: &str) -> Result<VerifyResponse>;

    /// Uploads an image and returns the ordered breed predictions.
    async fn classify_breed(&self, image: &ImageRef, mobile: &str) -> Result<Vec<Prediction>>;

    async fn get_profile(&self, mobile: &str) -> Result<UserProfile>;

    async fn update_profile(&self, mobile: &str, update: &ProfileUpdate)
    -> Result<ProfileUpdateAck>;

    async fn upload_profile_picture(
        &self,
        mobile: &str,
        image: &ImageRef,
    ) -> Result<ProfilePictureUpload>;

    /// Saved scans, most recent first.
    async fn get_scans(&self, mobile: &str) -> Result<Vec<ScanRecord>>;

    async fn get_stats(&self, mobile: &str) -> Result<ScanStats>;

    /// Base address used for requests; relative media paths are resolved against it.
    fn base_url(&self) -> &str;
}
