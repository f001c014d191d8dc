//! Baseline Normalization
//!
//! ## Sensor Physics
//!
//! An MQ sensor is a heated tin-dioxide film in a voltage divider. Target
//! gas lowers the film resistance, which pulls the divider output *down*
//! from its clean-air rest voltage. The relative drop
//!
//! ```text
//! n = (V_baseline - V) / V_baseline
//! ```
//!
//! is a unit-less concentration proxy: 0 in clean air, growing with
//! contamination. Heavily contaminated air can drive `V` toward 0, so `n`
//! may legitimately exceed 1 and is never capped above.
//!
//! A reading *above* baseline (air cleaner than at calibration, or drift)
//! would give a negative proxy. That is clamped to 0.
//!
//! ## Failure Modes
//!
//! - Non-finite voltage (floating ADC pin, driver bug): the cycle fails with
//!   [`SensorReadError::NonFiniteVoltage`].
//! - NaN or `+inf` result: the cycle fails with
//!   [`SensorReadError::InvalidNormalized`]. A voltage so far above
//!   baseline that the drop overflows to `-inf` is still a negative
//!   response and clamps to 0. NaN is never clamped away, since
//!   `f32::max(0.0, NaN)` would silently report clean air.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::sensors::{MQ131_BASELINE_V, MQ135_BASELINE_V, MQ138_BASELINE_V},
    errors::{ConfigResult, ConfigurationError, ReadResult, SensorReadError},
    types::{SensorChannel, SensorSample},
};

/// Clean-air rest voltage per sensor
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Baseline {
    /// MQ-131 rest voltage (V)
    pub primary: f32,
    /// MQ-135 rest voltage (V)
    pub secondary: f32,
    /// MQ-138 rest voltage (V)
    pub tertiary: f32,
}

impl Default for Baseline {
    fn default() -> Self {
        Self {
            primary: MQ131_BASELINE_V,
            secondary: MQ135_BASELINE_V,
            tertiary: MQ138_BASELINE_V,
        }
    }
}

impl Baseline {
    /// Baseline from three rest voltages
    pub const fn new(primary: f32, secondary: f32, tertiary: f32) -> Self {
        Self { primary, secondary, tertiary }
    }

    /// Rest voltage of a single channel
    pub const fn voltage(&self, channel: SensorChannel) -> f32 {
        match channel {
            SensorChannel::Primary => self.primary,
            SensorChannel::Secondary => self.secondary,
            SensorChannel::Tertiary => self.tertiary,
        }
    }

    /// Every rest voltage must be positive and finite
    pub fn validate(&self) -> ConfigResult<()> {
        for channel in SensorChannel::ALL {
            let value = self.voltage(channel);
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigurationError::InvalidBaseline { channel, value });
            }
        }
        Ok(())
    }
}

/// Baseline-relative response of the three sensors, each in `[0, ∞)`
///
/// Cannot hold NaN or infinity: every constructor checks.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct NormalizedReading {
    primary: f32,
    secondary: f32,
    tertiary: f32,
}

impl NormalizedReading {
    /// Build from already-normalized values
    ///
    /// Negative values clamp to 0. NaN and `+inf` are rejected.
    pub fn new(primary: f32, secondary: f32, tertiary: f32) -> ReadResult<Self> {
        Ok(Self {
            primary: checked(SensorChannel::Primary, primary)?,
            secondary: checked(SensorChannel::Secondary, secondary)?,
            tertiary: checked(SensorChannel::Tertiary, tertiary)?,
        })
    }

    /// All-zero reading (clean air)
    pub const fn clean() -> Self {
        Self { primary: 0.0, secondary: 0.0, tertiary: 0.0 }
    }

    /// MQ-131 response (n1)
    pub const fn primary(&self) -> f32 {
        self.primary
    }

    /// MQ-135 response (n2)
    pub const fn secondary(&self) -> f32 {
        self.secondary
    }

    /// MQ-138 response (n3)
    pub const fn tertiary(&self) -> f32 {
        self.tertiary
    }

    /// Response of a single channel
    pub const fn get(&self, channel: SensorChannel) -> f32 {
        match channel {
            SensorChannel::Primary => self.primary,
            SensorChannel::Secondary => self.secondary,
            SensorChannel::Tertiary => self.tertiary,
        }
    }
}

// Negative values, -inf included, clamp to 0; NaN and +inf are rejected.
fn checked(channel: SensorChannel, value: f32) -> ReadResult<f32> {
    if value.is_nan() || value == f32::INFINITY {
        Err(SensorReadError::InvalidNormalized { channel })
    } else {
        Ok(value.max(0.0))
    }
}

/// Converts raw voltages into baseline-relative responses
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalizer {
    baseline: Baseline,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self { baseline: Baseline::default() }
    }
}

impl Normalizer {
    /// Normalizer over a validated baseline
    pub fn new(baseline: Baseline) -> ConfigResult<Self> {
        baseline.validate()?;
        Ok(Self { baseline })
    }

    /// Calibration in use
    pub const fn baseline(&self) -> &Baseline {
        &self.baseline
    }

    /// Normalize one sample
    pub fn normalize(&self, sample: &SensorSample) -> ReadResult<NormalizedReading> {
        Ok(NormalizedReading {
            primary: self.channel(sample, SensorChannel::Primary)?,
            secondary: self.channel(sample, SensorChannel::Secondary)?,
            tertiary: self.channel(sample, SensorChannel::Tertiary)?,
        })
    }

    fn channel(&self, sample: &SensorSample, channel: SensorChannel) -> ReadResult<f32> {
        let voltage = sample.voltage(channel);
        if !voltage.is_finite() {
            return Err(SensorReadError::NonFiniteVoltage { channel });
        }

        let baseline = self.baseline.voltage(channel);
        checked(channel, (baseline - voltage) / baseline)
    }
}
