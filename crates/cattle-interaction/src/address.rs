//! Backend base address discovery.
//!
//! An ordered list of resolvers is tried until one yields an address:
//!
//! 1. `DevHostResolver`: host reported by dev tooling plus the backend port
//! 2. `PlatformDefaultResolver`: emulator loopback on Android
//! 3. `FixedResolver`: hardcoded fallback
//!
//! `CATTLE_BACKEND_URL` bypasses the list entirely.

use std::env;

use cattle_core::config::{BackendConfig, ResolverTier};

pub const ENV_DEV_HOST_URI: &str = "CATTLE_DEV_HOST_URI";
pub const ENV_BACKEND_URL: &str = "CATTLE_BACKEND_URL";

/// One strategy for finding the backend.
pub trait BaseUrlResolver: Send + Sync {
    fn name(&self) -> &'static str;

    /// Returns the base address, or `None` when this strategy does not apply.
    fn resolve(&self) -> Option<String>;
}

/// Uses the host part of a `host:port` URI reported by dev tooling.
pub struct DevHostResolver {
    host_uri: Option<String>,
    port: u16,
}

impl DevHostResolver {
    pub fn new(host_uri: Option<String>, port: u16) -> Self {
        Self { host_uri, port }
    }
}

impl BaseUrlResolver for DevHostResolver {
    fn name(&self) -> &'static str {
        "dev_host"
    }

    fn resolve(&self) -> Option<String> {
        let uri = self.host_uri.as_deref()?.trim();
        let without_scheme = uri.split("://").last().unwrap_or(uri);
        let host = without_scheme.split(['/', ':']).next().unwrap_or("").trim();
        if host.is_empty() {
            return None;
        }
        Some(format!("http://{}:{}", host, self.port))
    }
}

/// Emulator loopback address, only on Android.
pub struct PlatformDefaultResolver {
    platform: String,
    android_url: String,
}

impl PlatformDefaultResolver {
    pub fn new(platform: impl Into<String>, android_url: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
            android_url: android_url.into(),
        }
    }
}

impl BaseUrlResolver for PlatformDefaultResolver {
    fn name(&self) -> &'static str {
        "platform_default"
    }

    fn resolve(&self) -> Option<String> {
        if self.platform.eq_ignore_ascii_case("android") {
            Some(self.android_url.clone())
        } else {
            None
        }
    }
}

/// Always yields the configured address.
pub struct FixedResolver {
    url: String,
}

impl FixedResolver {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl BaseUrlResolver for FixedResolver {
    fn name(&self) -> &'static str {
        "fixed"
    }

    fn resolve(&self) -> Option<String> {
        let url = self.url.trim();
        (!url.is_empty()).then(|| url.to_string())
    }
}

/// Environment overrides read at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackendEnv {
    pub dev_host_uri: Option<String>,
    pub backend_url: Option<String>,
}

impl BackendEnv {
    pub fn from_env() -> Self {
        Self {
            dev_host_uri: non_empty_var(ENV_DEV_HOST_URI),
            backend_url: non_empty_var(ENV_BACKEND_URL),
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Builds the resolver chain in configured order.
pub fn resolver_chain(config: &BackendConfig, env: &BackendEnv) -> Vec<Box<dyn BaseUrlResolver>> {
    let dev_host_uri = env
        .dev_host_uri
        .clone()
        .or_else(|| config.dev_host_uri.clone());

    config
        .resolver_order
        .iter()
        .map(|tier| -> Box<dyn BaseUrlResolver> {
            match tier {
                ResolverTier::DevHost => {
                    Box::new(DevHostResolver::new(dev_host_uri.clone(), config.port))
                }
                ResolverTier::PlatformDefault => Box::new(PlatformDefaultResolver::new(
                    config.effective_platform(),
                    config.android_fallback.clone(),
                )),
                ResolverTier::Fixed => Box::new(FixedResolver::new(config.default_fallback.clone())),
            }
        })
        .collect()
}

/// Resolves the backend base address, without a trailing slash.
///
/// When no configured tier applies the fixed fallback is used.
pub fn resolve_base_url(config: &BackendConfig, env: &BackendEnv) -> String {
    if let Some(url) = &env.backend_url {
        tracing::debug!("[BackendAddress] Using {} override", ENV_BACKEND_URL);
        return url.trim().trim_end_matches('/').to_string();
    }

    for resolver in resolver_chain(config, env) {
        if let Some(url) = resolver.resolve() {
            tracing::debug!("[BackendAddress] Resolved via {}", resolver.name());
            return url.trim_end_matches('/').to_string();
        }
    }

    config.default_fallback.trim_end_matches('/').to_string()
}
