//! Error Types for Configuration and Per-Cycle Failures
//!
//! ## Design Philosophy
//!
//! GasGuard separates two failure classes with very different lifetimes:
//!
//! 1. **Configuration errors** are fatal and only happen at startup. An
//!    engine is never constructed from an invalid configuration, so no cycle
//!    can run against a zero baseline or a misordered severity table.
//!
//! 2. **Sensor read errors** are per-cycle and recoverable. The affected
//!    cycle is abandoned without emitting a result; the next cycle runs
//!    unchanged.
//!
//! Both enums are small, `Copy`, and heap-free (`&'static str` context only)
//! so they can be returned from the hot path and queued on embedded targets.
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use gasguard_core::{AirQualityEngine, EngineConfig, SensorReadError, SensorSample};
//!
//! let engine = AirQualityEngine::new(EngineConfig::default())?;
//!
//! match engine.process(&SensorSample::new(1.2, 1.5, 1.7)) {
//!     Ok(result) => {
//!         // publish(result);
//!         # let _ = result;
//!     }
//!     Err(SensorReadError::NonFiniteVoltage { channel }) => {
//!         // Wiring fault or ADC glitch on one channel
//!         # let _ = channel;
//!     }
//!     Err(_) => {
//!         // Skip this cycle, try again at the next tick
//!     }
//! }
//! # Ok::<(), gasguard_core::ConfigurationError>(())
//! ```

use thiserror_no_std::Error;

use crate::types::{SensorChannel, TargetGas};

/// Result type for configuration validation
pub type ConfigResult<T> = Result<T, ConfigurationError>;

/// Result type for a single sensing cycle
pub type ReadResult<T> = Result<T, SensorReadError>;

/// Startup configuration errors - the engine refuses to start
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigurationError {
    /// Baseline voltage must be positive and finite
    #[error("Baseline for {channel} must be positive, got {value} V")]
    InvalidBaseline {
        /// Offending sensor channel
        channel: SensorChannel,
        /// Configured baseline voltage
        value: f32,
    },

    /// Scale factors must be non-negative and finite
    #[error("Scale factor for {gas} must be non-negative, got {value}")]
    InvalidScaleFactor {
        /// Gas whose scale factor is invalid
        gas: TargetGas,
        /// Configured scale factor
        value: f32,
    },

    /// Severity table bands must increase strictly in index and threshold
    #[error("Severity table not strictly ordered at band {band}: {reason}")]
    UnorderedSeverityTable {
        /// Position of the first offending band
        band: u8,
        /// What broke the ordering
        reason: &'static str,
    },

    /// Activation threshold must be positive and finite
    #[error("Activation threshold must be positive, got {value}")]
    InvalidActivationThreshold {
        /// Configured threshold
        value: f32,
    },

    /// Cycle period must be non-zero
    #[error("Cycle period must be non-zero")]
    ZeroCyclePeriod,

    /// Configuration document could not be parsed
    #[error("Malformed configuration: {reason}")]
    Malformed {
        /// Parser category
        reason: &'static str,
    },
}

/// Per-cycle failures - the cycle is abandoned, the next one runs unchanged
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SensorReadError {
    /// The acquisition collaborator could not supply a sample
    #[error("Sample acquisition failed: {reason}")]
    Acquisition {
        /// Source-specific description
        reason: &'static str,
    },

    /// A raw voltage was NaN or infinite
    #[error("Non-finite voltage on {channel}")]
    NonFiniteVoltage {
        /// Channel that produced the bad reading
        channel: SensorChannel,
    },

    /// A normalized value came out as NaN
    #[error("Normalized value on {channel} is not a number")]
    InvalidNormalized {
        /// Channel whose normalized value is invalid
        channel: SensorChannel,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigurationError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidBaseline { channel, value } =>
                defmt::write!(fmt, "Baseline {} invalid: {} V", channel.model(), value),
            Self::InvalidScaleFactor { gas, value } =>
                defmt::write!(fmt, "Scale factor {} invalid: {}", gas.formula(), value),
            Self::UnorderedSeverityTable { band, reason } =>
                defmt::write!(fmt, "Severity band {}: {}", band, reason),
            Self::InvalidActivationThreshold { value } =>
                defmt::write!(fmt, "Activation threshold invalid: {}", value),
            Self::ZeroCyclePeriod =>
                defmt::write!(fmt, "Zero cycle period"),
            Self::Malformed { reason } =>
                defmt::write!(fmt, "Malformed config: {}", reason),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for SensorReadError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::Acquisition { reason } =>
                defmt::write!(fmt, "Acquisition failed: {}", reason),
            Self::NonFiniteVoltage { channel } =>
                defmt::write!(fmt, "Non-finite voltage on {}", channel.model()),
            Self::InvalidNormalized { channel } =>
                defmt::write!(fmt, "NaN normalized value on {}", channel.model()),
        }
    }
}
