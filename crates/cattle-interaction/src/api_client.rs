//! BreedApiClient - reqwest client for the breed-identification backend.
//!
//! Every call is a single request bounded by the configured timeout. Failures
//! are mapped onto `CattleError` and returned; nothing is retried.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use cattle_core::CattleError;
use cattle_core::api::{BreedApi, OtpResponse, VerifyResponse};
use cattle_core::config::BackendConfig;
use cattle_core::error::Result;
use cattle_core::record::{ScanRecord, ScanStats};
use cattle_core::scan::{ImageRef, Prediction};
use cattle_core::user::{ProfilePictureUpload, ProfileUpdate, ProfileUpdateAck, UserProfile};

use crate::address::{BackendEnv, resolve_base_url};

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    mobile: &'a str,
}

#[derive(Debug, Serialize)]
struct VerifyRequest<'a> {
    mobile: &'a str,
    otp: &'a str,
}

#[derive(Debug, Deserialize)]
struct PredictionResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

/// HTTP implementation of `BreedApi`.
#[derive(Clone)]
pub struct BreedApiClient {
    client: Client,
    base_url: String,
}

impl BreedApiClient {
    /// Creates a client for an explicit base address.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CattleError::internal(format!("Failed to build HTTP client: {}", e)))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        tracing::info!("[ApiClient] Using backend URL: {}", base_url);

        Ok(Self { client, base_url })
    }

    /// Resolves the base address from configuration and process environment.
    pub fn from_config(config: &BackendConfig) -> Result<Self> {
        Self::from_config_with_env(config, &BackendEnv::from_env())
    }

    pub fn from_config_with_env(config: &BackendConfig, env: &BackendEnv) -> Result<Self> {
        Self::new(
            resolve_base_url(config, env),
            Duration::from_secs(config.timeout_secs),
        )
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends the request and decodes a 2xx JSON body.
    async fn execute<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        request: RequestBuilder,
    ) -> Result<T> {
        let response = request
            .send()
            .await
            .map_err(|e| transport_error(operation, e))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!(
                "[ApiClient] {} failed with status {}: {}",
                operation,
                status.as_u16(),
                error_text
            );
            return Err(CattleError::http_status(status.as_u16(), error_text));
        }

        let body = response
            .text()
            .await
            .map_err(|e| transport_error(operation, e))?;

        serde_json::from_str(&body).map_err(|e| CattleError::Serialization {
            format: "JSON".to_string(),
            message: format!("Malformed {} response: {}", operation, e),
        })
    }

    /// Multipart body with the image as `file` and the owner as `mobile`.
    ///
    /// The boundary and `Content-Type` header are generated by reqwest.
    async fn upload_form(image: &ImageRef, mobile: &str) -> Result<Form> {
        let bytes = tokio::fs::read(image.path())
            .await
            .map_err(|e| CattleError::io(format!("Failed to read image {}: {}", image, e)))?;

        let mime = mime_guess::from_path(image.path()).first_or_octet_stream();
        let part = Part::bytes(bytes)
            .file_name(image.file_name())
            .mime_str(mime.essence_str())
            .map_err(|e| CattleError::internal(format!("Invalid MIME type {}: {}", mime, e)))?;

        Ok(Form::new()
            .part("file", part)
            .text("mobile", mobile.to_string()))
    }
}

fn transport_error(operation: &str, err: reqwest::Error) -> CattleError {
    let is_timeout = err.is_timeout();
    tracing::warn!(
        "[ApiClient] {} request failed (timeout: {}): {}",
        operation,
        is_timeout,
        err
    );
    CattleError::network(format!("{} request failed: {}", operation, err), is_timeout)
}

#[async_trait]
impl BreedApi for BreedApiClient {
    async fn send_otp(&self, mobile: &str) -> Result<OtpResponse> {
        let request = self
            .client
            .post(self.url("/auth/login"))
            .json(&LoginRequest { mobile });
        self.execute("send_otp", request).await
    }

    async fn verify_otp(&self, mobile: &str, otp: &str) -> Result<VerifyResponse> {
        let request = self
            .client
            .post(self.url("/auth/verify"))
            .json(&VerifyRequest { mobile, otp });
        self.execute("verify_otp", request).await
    }

    async fn classify_breed(&self, image: &ImageRef, mobile: &str) -> Result<Vec<Prediction>> {
        tracing::info!(
            "[ApiClient] Uploading {} to {}/predict",
            image.file_name(),
            self.base_url
        );
        let form = Self::upload_form(image, mobile).await?;
        let request = self.client.post(self.url("/predict")).multipart(form);
        let response: PredictionResponse = self.execute("classify_breed", request).await?;
        tracing::debug!(
            "[ApiClient] Received {} predictions",
            response.predictions.len()
        );
        Ok(response.predictions)
    }

    async fn get_profile(&self, mobile: &str) -> Result<UserProfile> {
        let request = self.client.get(self.url(&format!("/profile/{}", mobile)));
        self.execute("get_profile", request).await
    }

    async fn update_profile(
        &self,
        mobile: &str,
        update: &ProfileUpdate,
    ) -> Result<ProfileUpdateAck> {
        let request = self
            .client
            .put(self.url(&format!("/profile/{}", mobile)))
            .json(update);
        self.execute("update_profile", request).await
    }

    async fn upload_profile_picture(
        &self,
        mobile: &str,
        image: &ImageRef,
    ) -> Result<ProfilePictureUpload> {
        tracing::info!("[ApiClient] Uploading profile picture {}", image.file_name());
        let form = Self::upload_form(image, mobile).await?;
        let request = self.client.post(self.url("/profile/upload")).multipart(form);
        self.execute("upload_profile_picture", request).await
    }

    async fn get_scans(&self, mobile: &str) -> Result<Vec<ScanRecord>> {
        let request = self.client.get(self.url(&format!("/scans/{}", mobile)));
        self.execute("get_scans", request).await
    }

    async fn get_stats(&self, mobile: &str) -> Result<ScanStats> {
        let request = self.client.get(self.url(&format!("/stats/{}", mobile)));
        self.execute("get_stats", request).await
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}
