//! OTP login use case.

use std::sync::Arc;

use cattle_core::CattleError;
use cattle_core::api::BreedApi;
use cattle_core::error::Result;

use crate::store::SessionStore;

const MOBILE_DIGITS: usize = 10;
const OTP_DIGITS: usize = 4;

pub struct AuthService {
    api: Arc<dyn BreedApi>,
    session_store: Arc<SessionStore>,
}

impl AuthService {
    pub fn new(api: Arc<dyn BreedApi>, session_store: Arc<SessionStore>) -> Self {
        Self { api, session_store }
    }

    /// Asks the backend to text an OTP. Returns the backend's message.
    pub async fn request_otp(&self, mobile: &str) -> Result<String> {
        let mobile = validate_digits(mobile, MOBILE_DIGITS, "Mobile number")?;

        let response = self.api.send_otp(mobile).await?;
        if !response.success {
            return Err(CattleError::rejected(response.message));
        }
        tracing::info!("[AuthService] OTP requested");
        Ok(response.message)
    }

    /// Verifies the OTP and logs the user in on success.
    pub async fn verify(&self, mobile: &str, otp: &str) -> Result<String> {
        let mobile = validate_digits(mobile, MOBILE_DIGITS, "Mobile number")?;
        let otp = validate_digits(otp, OTP_DIGITS, "OTP")?;

        let response = self.api.verify_otp(mobile, otp).await?;
        if !response.success {
            tracing::info!("[AuthService] OTP rejected");
            return Err(CattleError::rejected(response.message));
        }

        self.session_store.login(mobile);
        Ok(response.message)
    }

    pub fn logout(&self) {
        self.session_store.logout();
    }
}

fn validate_digits<'a>(value: &'a str, len: usize, label: &str) -> Result<&'a str> {
    let value = value.trim();
    if value.len() == len && value.bytes().all(|b| b.is_ascii_digit()) {
        Ok(value)
    } else {
        Err(CattleError::validation(format!(
            "{} must be exactly {} digits",
            label, len
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FakeBreedApi;
    use cattle_core::api::{OtpResponse, VerifyResponse};
    use cattle_infrastructure::{BlobSessionRepository, InMemoryBlobStore};

    fn service(api: FakeBreedApi) -> (Arc<FakeBreedApi>, Arc<SessionStore>, AuthService) {
        let api = Arc::new(api);
        let store = Arc::new(SessionStore::load(Arc::new(BlobSessionRepository::new(
            Arc::new(InMemoryBlobStore::new()),
        ))));
        let service = AuthService::new(api.clone(), store.clone());
        (api, store, service)
    }

    #[tokio::test]
    async fn test_invalid_mobile_makes_no_request() {
        let (api, _, service) = service(FakeBreedApi::default());

        for mobile in ["98765", "98765432101", "98765abcde", ""] {
            let err = service.request_otp(mobile).await.unwrap_err();
            assert!(matches!(err, CattleError::Validation(_)), "{mobile}");
        }
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_request_otp_returns_message() {
        let (api, _, service) = service(FakeBreedApi::default());

        let message = service.request_otp("9876543210").await.unwrap();
        assert_eq!(message, "OTP sent");
        assert_eq!(api.calls(), vec!["send_otp:9876543210".to_string()]);
    }

    #[tokio::test]
    async fn test_backend_refusal_is_rejection() {
        let api = FakeBreedApi::default();
        *api.send_otp.lock().unwrap() = Ok(OtpResponse {
            success: false,
            message: "Failed to send SMS".to_string(),
        });
        let (_, _, service) = service(api);

        let err = service.request_otp("9876543210").await.unwrap_err();
        assert_eq!(err.to_string(), "Rejected by backend: Failed to send SMS");
    }

    #[tokio::test]
    async fn test_verify_logs_in() {
        let (_, store, service) = service(FakeBreedApi::default());

        service.verify("9876543210", "1234").await.unwrap();
        assert_eq!(store.user_mobile().as_deref(), Some("9876543210"));

        service.logout();
        assert!(!store.is_logged_in());
    }

    #[tokio::test]
    async fn test_wrong_otp_stays_logged_out() {
        let api = FakeBreedApi::default();
        *api.verify.lock().unwrap() = Ok(VerifyResponse {
            success: false,
            message: "Invalid OTP. Please try again.".to_string(),
            token: None,
        });
        let (_, store, service) = service(api);

        let err = service.verify("9876543210", "0000").await.unwrap_err();
        assert!(matches!(err, CattleError::Rejected(_)));
        assert!(!store.is_logged_in());
    }

    #[tokio::test]
    async fn test_otp_must_be_four_digits() {
        let (api, _, service) = service(FakeBreedApi::default());

        assert!(service.verify("9876543210", "12345").await.is_err());
        assert!(service.verify("9876543210", "12a4").await.is_err());
        assert!(api.calls().is_empty());
    }
}
