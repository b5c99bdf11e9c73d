//! Error types for the Cattle Sense client.

use thiserror::Error;

/// A shared error type for the entire client.
///
/// Network and HTTP failures are always propagated to the caller; the
/// calling workflow decides what to show the user.
#[derive(Error, Debug, Clone)]
pub enum CattleError {
    /// IO error (file system operations, reading local images)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Stored state schema migration error
    #[error("Migration error: {0}")]
    Migration(String),

    /// Transport-level failure (connect, DNS, timeout, reset)
    #[error("Network error: {message}")]
    Network { message: String, is_timeout: bool },

    /// Backend answered with a non-2xx status
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// Input rejected before any request was made
    #[error("Validation error: {0}")]
    Validation(String),

    /// Backend processed the request but answered `success: false`
    #[error("Rejected by backend: {0}")]
    Rejected(String),

    /// Workflow action not allowed in the current phase
    #[error("Action '{action}' is not allowed in phase {phase}")]
    InvalidTransition {
        phase: &'static str,
        action: &'static str,
    },

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CattleError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a Network error
    pub fn network(message: impl Into<String>, is_timeout: bool) -> Self {
        Self::Network {
            message: message.into(),
            is_timeout,
        }
    }

    /// Creates an HttpStatus error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a Rejected error
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a timed-out request
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Network { is_timeout: true, .. })
    }

    /// Check if this is an HTTP status error
    pub fn is_http_status(&self) -> bool {
        matches!(self, Self::HttpStatus { .. })
    }

    /// Check if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }

    /// Whether the user may simply try the same action again.
    ///
    /// Transport failures, timeouts and server-side (5xx) statuses qualify.
    /// The client itself never retries.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network { .. } => true,
            Self::HttpStatus { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for CattleError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for CattleError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for CattleError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for CattleError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<version_migrate::MigrationError> for CattleError {
    fn from(err: version_migrate::MigrationError) -> Self {
        use version_migrate::MigrationError;

        match err {
            MigrationError::DeserializationError(_) | MigrationError::SerializationError(_) => {
                Self::Serialization {
                    format: "migration".to_string(),
                    message: err.to_string(),
                }
            }
            _ => Self::Migration(err.to_string()),
        }
    }
}

/// A type alias for `Result<T, CattleError>`.
pub type Result<T> = std::result::Result<T, CattleError>;
