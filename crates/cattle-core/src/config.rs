//! Client configuration models.
//!
//! Loaded from `config.toml` by the infrastructure layer. Every literal used
//! for backend discovery lives here so tests can swap it out.

use serde::{Deserialize, Serialize};

pub const DEFAULT_BACKEND_PORT: u16 = 8000;
pub const DEFAULT_ANDROID_FALLBACK: &str = "http://10.0.2.2:8000";
pub const DEFAULT_FIXED_FALLBACK: &str = "http://10.227.72.151:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// One tier of backend address discovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolverTier {
    /// Host reported by dev tooling, combined with the backend port.
    DevHost,
    /// Platform-specific default (Android emulator loopback).
    PlatformDefault,
    /// Hardcoded literal fallback.
    Fixed,
}

fn default_resolver_order() -> Vec<ResolverTier> {
    vec![
        ResolverTier::DevHost,
        ResolverTier::PlatformDefault,
        ResolverTier::Fixed,
    ]
}

fn default_port() -> u16 {
    DEFAULT_BACKEND_PORT
}

fn default_android_fallback() -> String {
    DEFAULT_ANDROID_FALLBACK.to_string()
}

fn default_fixed_fallback() -> String {
    DEFAULT_FIXED_FALLBACK.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Backend discovery and request settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// `host:port` reported by dev tooling; only the host part is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dev_host_uri: Option<String>,

    /// Port the backend listens on when reached through the dev host.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Target platform name (`android`, `ios`, ...). Defaults to the host OS.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,

    #[serde(default = "default_android_fallback")]
    pub android_fallback: String,

    #[serde(default = "default_fixed_fallback")]
    pub default_fallback: String,

    /// Per-request timeout. Requests are never retried.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_resolver_order")]
    pub resolver_order: Vec<ResolverTier>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            dev_host_uri: None,
            port: default_port(),
            platform: None,
            android_fallback: default_android_fallback(),
            default_fallback: default_fixed_fallback(),
            timeout_secs: default_timeout_secs(),
            resolver_order: default_resolver_order(),
        }
    }
}

impl BackendConfig {
    /// Platform used for the platform-default tier.
    pub fn effective_platform(&self) -> &str {
        self.platform.as_deref().unwrap_or(std::env::consts::OS)
    }
}

/// Root of `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootConfig {
    #[serde(default)]
    pub backend: BackendConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: RootConfig = toml::from_str(
            r#"
            [backend]
            dev_host_uri = "192.168.1.5:8081"
            "#,
        )
        .unwrap();
        assert_eq!(config.backend.dev_host_uri.as_deref(), Some("192.168.1.5:8081"));
        assert_eq!(config.backend.port, 8000);
        assert_eq!(config.backend.timeout_secs, 15);
        assert_eq!(config.backend.resolver_order.len(), 3);
    }

    #[test]
    fn test_resolver_order_is_configurable() {
        let config: RootConfig = toml::from_str(
            r#"
            [backend]
            resolver_order = ["fixed"]
            default_fallback = "http://backend.local:9000"
            "#,
        )
        .unwrap();
        assert_eq!(config.backend.resolver_order, vec![ResolverTier::Fixed]);
        assert_eq!(config.backend.default_fallback, "http://backend.local:9000");
    }

    #[test]
    fn test_empty_file_is_default() {
        let config: RootConfig = toml::from_str("").unwrap();
        assert_eq!(config, RootConfig::default());
    }
}
