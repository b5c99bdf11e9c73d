//! AuthSession DTOs and migrations
//!
//! ## Version History
//! - **1.0.0**: Initial schema with userMobile and isLoggedIn

use serde::{Deserialize, Serialize};
use version_migrate::{FromDomain, IntoDomain, Versioned};

use cattle_core::auth::AuthSession;

/// Persisted login state V1.0.0
#[derive(Debug, Clone, Serialize, Deserialize, Versioned)]
#[versioned(version = "1.0.0")]
#[serde(rename_all = "camelCase")]
pub struct AuthSessionV1_0_0 {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_mobile: Option<String>,
    #[serde(default)]
    pub is_logged_in: bool,
}

impl IntoDomain<AuthSession> for AuthSessionV1_0_0 {
    fn into_domain(self) -> AuthSession {
        // A login flag without a mobile number cannot be used for any request.
        let is_logged_in = self.is_logged_in && self.user_mobile.is_some();
        AuthSession {
            user_mobile: self.user_mobile,
            is_logged_in,
        }
    }
}

impl FromDomain<AuthSession> for AuthSessionV1_0_0 {
    fn from_domain(session: AuthSession) -> Self {
        AuthSessionV1_0_0 {
            user_mobile: session.user_mobile,
            is_logged_in: session.is_logged_in,
        }
    }
}

/// Creates a Migrator for AuthSession entities.
pub fn create_auth_session_migrator() -> version_migrate::Migrator {
    version_migrate::migrator!("auth_session" => [
        AuthSessionV1_0_0,
        AuthSession
    ], save = true)
    .expect("Failed to create auth_session migrator")
}
