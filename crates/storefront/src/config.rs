//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; the defaults produce a working local demo.
//!
//! - `STOREFRONT_DATA_DIR` - Directory for the file-backed state store
//!   (default: `./storefront-data`)
//! - `STOREFRONT_DEMO_AUTH` - Accept any credentials at login, synthesizing
//!   an account for unknown emails (default: `true`). Set to `false` for the
//!   hardened variant where unknown emails are rejected.
//! - `STOREFRONT_NETWORK_DELAY_MS` - Upper bound for the simulated network
//!   latency of login/signup, in milliseconds (default: `500`)
//! - `STOREFRONT_CHECKOUT_DELAY_MS` - Simulated order-processing delay in
//!   milliseconds (default: `2000`)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

const DEFAULT_DATA_DIR: &str = "./storefront-data";
const DEFAULT_NETWORK_DELAY_MS: u64 = 500;
const DEFAULT_CHECKOUT_DELAY_MS: u64 = 2000;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Directory for the file-backed state store.
    pub data_dir: PathBuf,
    /// Whether login accepts any credentials (the demo-grade contract).
    pub demo_auth: bool,
    /// Upper bound for simulated login/signup latency.
    pub network_delay: Duration,
    /// Simulated order-processing delay.
    pub checkout_delay: Duration,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            demo_auth: true,
            network_delay: Duration::from_millis(DEFAULT_NETWORK_DELAY_MS),
            checkout_delay: Duration::from_millis(DEFAULT_CHECKOUT_DELAY_MS),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = PathBuf::from(get_env_or_default("STOREFRONT_DATA_DIR", DEFAULT_DATA_DIR));
        let demo_auth = parse_env("STOREFRONT_DEMO_AUTH", true)?;
        let network_delay = Duration::from_millis(parse_env(
            "STOREFRONT_NETWORK_DELAY_MS",
            DEFAULT_NETWORK_DELAY_MS,
        )?);
        let checkout_delay = Duration::from_millis(parse_env(
            "STOREFRONT_CHECKOUT_DELAY_MS",
            DEFAULT_CHECKOUT_DELAY_MS,
        )?);

        Ok(Self {
            data_dir,
            demo_auth,
            network_delay,
            checkout_delay,
        })
    }

    /// A configuration with no simulated delays, for tests.
    #[must_use]
    pub fn without_delays() -> Self {
        Self {
            network_delay: Duration::ZERO,
            checkout_delay: Duration::ZERO,
            ..Self::default()
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse an environment variable, falling back to a default when unset.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string())),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::default();
        assert!(config.demo_auth);
        assert_eq!(config.data_dir, PathBuf::from("./storefront-data"));
        assert_eq!(config.network_delay, Duration::from_millis(500));
        assert_eq!(config.checkout_delay, Duration::from_millis(2000));
    }

    #[test]
    fn test_without_delays() {
        let config = StorefrontConfig::without_delays();
        assert!(config.network_delay.is_zero());
        assert!(config.checkout_delay.is_zero());
        assert!(config.demo_auth);
    }

    #[test]
    fn test_parse_env_uses_default_when_unset() {
        // Key intentionally never set in the environment
        let value: u64 = parse_env("STOREFRONT_TEST_UNSET_SENTINEL", 7).unwrap();
        assert_eq!(value, 7);
    }
}
