//! Integrity evaluator configuration

use super::errors::IntegrityError;
use super::report::IntegrityStatus;
use sc_shared_types::LatencyProfile;
use std::env;

/// Default lower bound of a `WARNING` verdict.
pub const DEFAULT_WARNING_THRESHOLD: u8 = 70;

/// Default lower bound of a `SAFE` verdict.
pub const DEFAULT_SAFE_THRESHOLD: u8 = 90;

/// Integrity evaluator configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntegrityConfig {
    /// Artificial pacing of evaluations and reports.
    pub latency: LatencyProfile,
    /// Scores at or above this are at least `WARNING`.
    pub warning_threshold: u8,
    /// Scores at or above this are `SAFE`.
    pub safe_threshold: u8,
}

impl Default for IntegrityConfig {
    fn default() -> Self {
        Self {
            latency: LatencyProfile::none(),
            warning_threshold: DEFAULT_WARNING_THRESHOLD,
            safe_threshold: DEFAULT_SAFE_THRESHOLD,
        }
    }
}

impl IntegrityConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `SC_SIMULATE_LATENCY`: `true`/`1` paces evaluations like the demo dashboards
    pub fn from_env() -> Self {
        let simulate = env::var("SC_SIMULATE_LATENCY")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        Self {
            latency: if simulate {
                LatencyProfile::demo()
            } else {
                LatencyProfile::none()
            },
            ..Self::default()
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), IntegrityError> {
        if self.warning_threshold > self.safe_threshold {
            return Err(IntegrityError::InvalidConfig(format!(
                "warning_threshold ({}) must not exceed safe_threshold ({})",
                self.warning_threshold, self.safe_threshold
            )));
        }
        if self.safe_threshold > 100 {
            return Err(IntegrityError::InvalidConfig(format!(
                "safe_threshold ({}) must be at most 100",
                self.safe_threshold
            )));
        }
        Ok(())
    }

    /// Builder-style method to set latency
    pub fn with_latency(mut self, latency: LatencyProfile) -> Self {
        self.latency = latency;
        self
    }

    /// Map a score to a verdict.
    pub fn classify(&self, score: u8) -> IntegrityStatus {
        if score >= self.safe_threshold {
            IntegrityStatus::Safe
        } else if score >= self.warning_threshold {
            IntegrityStatus::Warning
        } else {
            IntegrityStatus::Tampered
        }
    }
}

/// Map a score to a verdict using the default thresholds.
pub fn classify(score: u8) -> IntegrityStatus {
    IntegrityConfig::default().classify(score)
}
