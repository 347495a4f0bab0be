//! Gateway configuration.
//!
//! The backend base URL and access key are injected at construction instead
//! of living in module-level constants, so tests can point a gateway at a
//! mock server. Load from the environment with [`GatewayConfig::from_env`]
//! or build explicitly with [`GatewayConfig::new`].

use std::time::Duration;

use url::Url;
use zeroize::Zeroizing;

/// Client-wide request timeout when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Bound on the notification list request when none is configured.
pub const DEFAULT_NOTIFICATION_TIMEOUT_SECS: u64 = 10;

/// Configuration for connecting to the storefront backend.
///
/// Custom `Debug` implementation redacts the `access_key` field
/// to prevent credential leakage in log output.
#[derive(Clone)]
pub struct GatewayConfig {
    /// Base URL that endpoint paths such as `login.php` are joined onto.
    /// Always ends with `/`.
    pub base_url: Url,
    /// Access key sent with every request as `accesskey`.
    pub access_key: Zeroizing<String>,
    /// Request timeout in seconds, applied to every call.
    pub timeout_secs: u64,
    /// Timeout in seconds for the notification list fetch. Capped at
    /// `timeout_secs`; see [`GatewayConfig::notification_list_timeout`].
    pub notification_timeout_secs: u64,
}

impl std::fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("base_url", &self.base_url)
            .field("access_key", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .field("notification_timeout_secs", &self.notification_timeout_secs)
            .finish()
    }
}

impl GatewayConfig {
    /// Build a configuration with default timeouts.
    pub fn new(base_url: &str, access_key: &str) -> Result<Self, ConfigError> {
        if access_key.trim().is_empty() {
            return Err(ConfigError::MissingAccessKey);
        }
        Ok(Self {
            base_url: parse_base_url("base_url", base_url)?,
            access_key: Zeroizing::new(access_key.to_string()),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            notification_timeout_secs: DEFAULT_NOTIFICATION_TIMEOUT_SECS,
        })
    }

    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `SHOPFRONT_API_URL` (required)
    /// - `SHOPFRONT_ACCESS_KEY` (required)
    /// - `SHOPFRONT_TIMEOUT_SECS` (default: 30)
    /// - `SHOPFRONT_NOTIFICATION_TIMEOUT_SECS` (default: 10)
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw_url =
            std::env::var("SHOPFRONT_API_URL").map_err(|_| ConfigError::MissingBaseUrl)?;
        let access_key = std::env::var("SHOPFRONT_ACCESS_KEY")
            .map(Zeroizing::new)
            .map_err(|_| ConfigError::MissingAccessKey)?;
        if access_key.trim().is_empty() {
            return Err(ConfigError::MissingAccessKey);
        }

        Ok(Self {
            base_url: parse_base_url("SHOPFRONT_API_URL", &raw_url)?,
            access_key,
            timeout_secs: env_secs("SHOPFRONT_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS),
            notification_timeout_secs: env_secs(
                "SHOPFRONT_NOTIFICATION_TIMEOUT_SECS",
                DEFAULT_NOTIFICATION_TIMEOUT_SECS,
            ),
        })
    }

    /// Create a configuration pointing at a local mock server (for testing).
    ///
    /// Uses short timeouts so unreachable-server tests finish quickly.
    pub fn local_mock(base_url: &str, access_key: &str) -> Result<Self, ConfigError> {
        let mut config = Self::new(base_url, access_key)?;
        config.timeout_secs = 5;
        config.notification_timeout_secs = 2;
        Ok(config)
    }

    /// Client-wide request timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Bound on the notification list fetch: the notification timeout, but
    /// never longer than the client-wide one.
    pub fn notification_list_timeout(&self) -> Duration {
        Duration::from_secs(self.notification_timeout_secs.min(self.timeout_secs))
    }
}

/// Parse a base URL and make sure relative endpoint paths join beneath it.
fn parse_base_url(source: &str, raw: &str) -> Result<Url, ConfigError> {
    let mut url =
        Url::parse(raw.trim()).map_err(|e| ConfigError::InvalidUrl(source.to_string(), e.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidUrl(
            source.to_string(),
            "URL cannot be used as a base".to_string(),
        ));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

fn env_secs(var: &str, default: u64) -> u64 {
    std::env::var(var)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(default)
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("SHOPFRONT_API_URL environment variable is required")]
    MissingBaseUrl,
    #[error("an access key is required (SHOPFRONT_ACCESS_KEY)")]
    MissingAccessKey,
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
}
