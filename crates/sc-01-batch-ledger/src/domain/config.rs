//! Ledger configuration and validation
//!
//! # Example
//!
//! ```ignore
//! use sc_01_batch_ledger::domain::LedgerConfigBuilder;
//!
//! let config = LedgerConfigBuilder::new()
//!     .app_base_url("https://tracker.example")
//!     .latency(LatencyProfile::demo())
//!     .build()
//!     .expect("Valid config");
//! ```

use super::errors::LedgerError;
use sc_shared_types::{LatencyProfile, DEFAULT_APP_URL};
use std::env;
use url::Url;

/// Default number of attempts to draw an unused batch id.
pub const DEFAULT_MAX_ID_ATTEMPTS: u32 = 16;

/// Ledger configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LedgerConfig {
    /// Base URL embedded in verify deep links.
    pub app_base_url: String,
    /// Artificial pacing of operations.
    pub latency: LatencyProfile,
    /// Attempts to draw an unused batch id before giving up.
    pub max_id_attempts: u32,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            app_base_url: DEFAULT_APP_URL.to_string(),
            latency: LatencyProfile::none(),
            max_id_attempts: DEFAULT_MAX_ID_ATTEMPTS,
        }
    }
}

impl LedgerConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `SC_APP_URL`: Base URL for verify links (default: https://yourapp.vercel.app)
    /// - `SC_SIMULATE_LATENCY`: `true`/`1` paces operations like the demo dashboards
    pub fn from_env() -> Self {
        let simulate = env::var("SC_SIMULATE_LATENCY")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        Self {
            app_base_url: env::var("SC_APP_URL").unwrap_or_else(|_| DEFAULT_APP_URL.to_string()),
            latency: if simulate {
                LatencyProfile::demo()
            } else {
                LatencyProfile::none()
            },
            max_id_attempts: DEFAULT_MAX_ID_ATTEMPTS,
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), LedgerError> {
        let url = Url::parse(&self.app_base_url).map_err(|e| {
            LedgerError::InvalidConfig(format!("app_base_url {:?}: {e}", self.app_base_url))
        })?;
        if url.cannot_be_a_base() {
            return Err(LedgerError::InvalidConfig(format!(
                "app_base_url {:?} cannot carry a path",
                self.app_base_url
            )));
        }

        if self.max_id_attempts == 0 {
            return Err(LedgerError::InvalidConfig(
                "max_id_attempts cannot be 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Builder-style method to set latency
    pub fn with_latency(mut self, latency: LatencyProfile) -> Self {
        self.latency = latency;
        self
    }

    /// Builder-style method to set the app base URL
    pub fn with_app_base_url(mut self, url: impl Into<String>) -> Self {
        self.app_base_url = url.into();
        self
    }
}

/// Builder for LedgerConfig with validation
#[derive(Default)]
pub struct LedgerConfigBuilder {
    app_base_url: Option<String>,
    latency: Option<LatencyProfile>,
    max_id_attempts: Option<u32>,
}

impl LedgerConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set base URL for verify links
    pub fn app_base_url(mut self, url: impl Into<String>) -> Self {
        self.app_base_url = Some(url.into());
        self
    }

    /// Set operation pacing
    pub fn latency(mut self, latency: LatencyProfile) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Set id allocation attempts
    pub fn max_id_attempts(mut self, attempts: u32) -> Self {
        self.max_id_attempts = Some(attempts);
        self
    }

    /// Build the LedgerConfig, validating all parameters
    pub fn build(self) -> Result<LedgerConfig, LedgerError> {
        let defaults = LedgerConfig::default();

        let config = LedgerConfig {
            app_base_url: self.app_base_url.unwrap_or(defaults.app_base_url),
            latency: self.latency.unwrap_or(defaults.latency),
            max_id_attempts: self.max_id_attempts.unwrap_or(defaults.max_id_attempts),
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = LedgerConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.latency.is_none());
    }

    #[test]
    fn test_rejects_relative_url() {
        let config = LedgerConfig::default().with_app_base_url("not a url");
        assert!(matches!(
            config.validate(),
            Err(LedgerError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_rejects_non_base_url() {
        let config = LedgerConfig::default().with_app_base_url("mailto:ops@example.com");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_attempts() {
        let result = LedgerConfigBuilder::new().max_id_attempts(0).build();
        assert!(matches!(result, Err(LedgerError::InvalidConfig(_))));
    }

    #[test]
    fn test_builder_uses_defaults() {
        let config = LedgerConfigBuilder::new()
            .latency(LatencyProfile::demo())
            .build()
            .expect("Should use defaults for other fields");
        assert_eq!(config.app_base_url, DEFAULT_APP_URL);
        assert_eq!(config.max_id_attempts, DEFAULT_MAX_ID_ATTEMPTS);
        assert_eq!(config.latency, LatencyProfile::demo());
    }
}
