//! Scriptable `BreedApi` for use case tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

use cattle_core::api::{BreedApi, OtpResponse, VerifyResponse};
use cattle_core::error::Result;
use cattle_core::record::{ScanRecord, ScanStats};
use cattle_core::scan::{ImageRef, Prediction};
use cattle_core::user::{ProfilePictureUpload, ProfileUpdate, ProfileUpdateAck, UserProfile};

pub const FAKE_BASE_URL: &str = "http://backend.test:8000";

pub struct FakeBreedApi {
    pub classify: Mutex<Result<Vec<Prediction>>>,
    pub send_otp: Mutex<Result<OtpResponse>>,
    pub verify: Mutex<Result<VerifyResponse>>,
    pub profile: Mutex<Result<UserProfile>>,
    pub update: Mutex<Result<ProfileUpdateAck>>,
    pub upload: Mutex<Result<ProfilePictureUpload>>,
    pub scans: Mutex<Result<Vec<ScanRecord>>>,
    pub stats: Mutex<Result<ScanStats>>,
    /// When set, `classify_breed` never completes.
    pub classify_hangs: AtomicBool,
    /// `operation:mobile` for every call, in order.
    pub calls: Mutex<Vec<String>>,
}

impl Default for FakeBreedApi {
    fn default() -> Self {
        Self {
            classify: Mutex::new(Ok(Vec::new())),
            send_otp: Mutex::new(Ok(OtpResponse {
                success: true,
                message: "OTP sent".to_string(),
            })),
            verify: Mutex::new(Ok(VerifyResponse {
                success: true,
                message: "Login successful".to_string(),
                token: Some("token".to_string()),
            })),
            profile: Mutex::new(Ok(sample_profile())),
            update: Mutex::new(Ok(ProfileUpdateAck {
                message: "Profile updated successfully".to_string(),
            })),
            upload: Mutex::new(Ok(ProfilePictureUpload {
                success: true,
                profile_picture: Some("/uploads/pfp_new.jpg".to_string()),
            })),
            scans: Mutex::new(Ok(Vec::new())),
            stats: Mutex::new(Ok(ScanStats::default())),
            classify_hangs: AtomicBool::new(false),
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl FakeBreedApi {
    pub fn with_predictions(predictions: Vec<Prediction>) -> Self {
        let api = Self::default();
        *api.classify.lock().unwrap() = Ok(predictions);
        api
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, operation: &str, mobile: &str) {
        self.calls
            .lock()
            .unwrap()
            .push(format!("{}:{}", operation, mobile));
    }
}

pub fn sample_profile() -> UserProfile {
    UserProfile {
        mobile: "9876543210".to_string(),
        full_name: "Asha Patel".to_string(),
        email: "asha@example.org".to_string(),
        location: "Anand, Gujarat".to_string(),
        role: "Veterinarian".to_string(),
        profile_picture: Some("/uploads/pfp_old.jpg".to_string()),
    }
}

pub fn sample_record(id: i64, breed: &str, date: &str) -> ScanRecord {
    ScanRecord {
        id,
        breed: breed.to_string(),
        confidence: 0.9,
        date: date.to_string(),
        location: "India".to_string(),
        image: format!("/uploads/scan_{}.jpg", id),
    }
}

#[async_trait]
impl BreedApi for FakeBreedApi {
    async fn send_otp(&self, mobile: &str) -> Result<OtpResponse> {
        self.record("send_otp", mobile);
        self.send_otp.lock().unwrap().clone()
    }

    async fn verify_otp(&self, mobile: &str, _otp: &str) -> Result<VerifyResponse> {
        self.record("verify_otp", mobile);
        self.verify.lock().unwrap().clone()
    }

    async fn classify_breed(&self, _image: &ImageRef, mobile: &str) -> Result<Vec<Prediction>> {
        self.record("classify_breed", mobile);
        if self.classify_hangs.load(Ordering::SeqCst) {
            std::future::pending::<()>().await;
        }
        self.classify.lock().unwrap().clone()
    }

    async fn get_profile(&self, mobile: &str) -> Result<UserProfile> {
        self.record("get_profile", mobile);
        self.profile.lock().unwrap().clone()
    }

    async fn update_profile(
        &self,
        mobile: &str,
        _update: &ProfileUpdate,
    ) -> Result<ProfileUpdateAck> {
        self.record("update_profile", mobile);
        self.update.lock().unwrap().clone()
    }

    async fn upload_profile_picture(
        &self,
        mobile: &str,
        _image: &ImageRef,
    ) -> Result<ProfilePictureUpload> {
        self.record("upload_profile_picture", mobile);
        self.upload.lock().unwrap().clone()
    }

    async fn get_scans(&self, mobile: &str) -> Result<Vec<ScanRecord>> {
        self.record("get_scans", mobile);
        self.scans.lock().unwrap().clone()
    }

    async fn get_stats(&self, mobile: &str) -> Result<ScanStats> {
        self.record("get_stats", mobile);
        self.stats.lock().unwrap().clone()
    }

    fn base_url(&self) -> &str {
        FAKE_BASE_URL
    }
}
