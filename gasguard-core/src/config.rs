//! Engine configuration
//!
//! Everything the engine needs is supplied once at startup and never
//! changes afterwards. [`EngineConfig::validate`] is the single gate: an
//! engine or controller is only ever built from a configuration that passed
//! it.
//!
//! With the `std` feature a configuration can be loaded from JSON. Missing
//! fields take their defaults:
//!
//! ```rust
//! use gasguard_core::EngineConfig;
//!
//! let config = EngineConfig::from_json_str(r#"{
//!     "baseline": { "primary": 1.75, "secondary": 1.62, "tertiary": 1.68 },
//!     "activation_threshold": 0.1
//! }"#)?;
//!
//! assert_eq!(config.activation_threshold, 0.1);
//! assert_eq!(config.cycle_period_ms, 4000);
//! # Ok::<(), gasguard_core::ConfigurationError>(())
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    classifier::SeverityTable,
    constants::{discrimination::DEFAULT_ACTIVATION_THRESHOLD, time::DEFAULT_CYCLE_PERIOD_MS},
    discriminator::validate_threshold,
    errors::{ConfigResult, ConfigurationError},
    estimator::{validate_scale_factors, ScaleFactors, CALIBRATED_SCALE},
    normalizer::Baseline,
};

/// Startup configuration for the engine and cycle controller
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Clean-air rest voltages
    pub baseline: Baseline,
    /// ppm per unit of normalized response
    pub scale_factors: ScaleFactors,
    /// Severity bands, least severe first
    pub severity_table: SeverityTable,
    /// Discriminator activation threshold τ
    pub activation_threshold: f32,
    /// Cycle period in milliseconds
    pub cycle_period_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            baseline: Baseline::default(),
            scale_factors: CALIBRATED_SCALE,
            severity_table: SeverityTable::default(),
            activation_threshold: DEFAULT_ACTIVATION_THRESHOLD,
            cycle_period_ms: DEFAULT_CYCLE_PERIOD_MS,
        }
    }
}

impl EngineConfig {
    /// Set the clean-air baseline
    pub fn with_baseline(mut self, baseline: Baseline) -> Self {
        self.baseline = baseline;
        self
    }

    /// Set the concentration scale factors
    pub fn with_scale_factors(mut self, scale_factors: ScaleFactors) -> Self {
        self.scale_factors = scale_factors;
        self
    }

    /// Set the severity table
    pub fn with_severity_table(mut self, severity_table: SeverityTable) -> Self {
        self.severity_table = severity_table;
        self
    }

    /// Set the activation threshold τ
    pub fn with_activation_threshold(mut self, threshold: f32) -> Self {
        self.activation_threshold = threshold;
        self
    }

    /// Set the cycle period
    pub fn with_cycle_period_ms(mut self, period_ms: u64) -> Self {
        self.cycle_period_ms = period_ms;
        self
    }

    /// Check every parameter; the first violation is reported
    pub fn validate(&self) -> ConfigResult<()> {
        self.baseline.validate()?;
        validate_scale_factors(&self.scale_factors)?;
        self.severity_table.validate()?;
        validate_threshold(self.activation_threshold)?;
        if self.cycle_period_ms == 0 {
            return Err(ConfigurationError::ZeroCyclePeriod);
        }
        Ok(())
    }

    /// Parse and validate a JSON document
    #[cfg(feature = "std")]
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json).map_err(|err| {
            use serde_json::error::Category;

            let reason = match err.classify() {
                Category::Io => "i/o failure",
                Category::Syntax => "syntax error",
                Category::Data => "invalid field value",
                Category::Eof => "unexpected end of input",
            };
            ConfigurationError::Malformed { reason }
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON
    #[cfg(feature = "std")]
    pub fn to_json_string(&self) -> ConfigResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|_| ConfigurationError::Malformed { reason: "serialization failed" })
    }
}
