//! AuthSession domain model.

use serde::{Deserialize, Serialize};

/// Login state of the device user.
///
/// Created on successful OTP verification and cleared on logout. Survives
/// application restarts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    /// Mobile number the user verified with.
    pub user_mobile: Option<String>,
    /// Whether a verified login is active.
    pub is_logged_in: bool,
}

impl AuthSession {
    /// Creates a logged-in session for the given mobile number.
    pub fn logged_in(mobile: impl Into<String>) -> Self {
        Self {
            user_mobile: Some(mobile.into()),
            is_logged_in: true,
        }
    }

    /// Returns the mobile number when a login is active.
    pub fn active_mobile(&self) -> Option<&str> {
        if self.is_logged_in {
            self.user_mobile.as_deref()
        } else {
            None
        }
    }
}
