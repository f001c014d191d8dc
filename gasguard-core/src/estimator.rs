//! Linear concentration estimates
//!
//! Each channel's normalized response is scaled into ppm of the gas it is
//! calibrated for, using one fixed slope per gas.

use crate::{
    constants::quality::{HCHO_PPM_PER_UNIT, NO2_PPM_PER_UNIT, O3_PPM_PER_UNIT},
    errors::{ConfigResult, ConfigurationError},
    normalizer::NormalizedReading,
    types::{PerGas, TargetGas},
};

/// Estimated concentration per gas (ppm)
pub type ConcentrationEstimate = PerGas<f32>;

/// ppm per unit of normalized response, per gas
pub type ScaleFactors = PerGas<f32>;

/// Bench prototype slopes for MQ-131 / MQ-135 / MQ-138
pub const CALIBRATED_SCALE: ScaleFactors =
    PerGas::new(O3_PPM_PER_UNIT, NO2_PPM_PER_UNIT, HCHO_PPM_PER_UNIT);

/// Scale factors must be non-negative and finite
pub fn validate_scale_factors(scale: &ScaleFactors) -> ConfigResult<()> {
    for (gas, &value) in scale.iter() {
        if !(value.is_finite() && value >= 0.0) {
            return Err(ConfigurationError::InvalidScaleFactor { gas, value });
        }
    }
    Ok(())
}

/// Scales normalized responses into ppm
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConcentrationEstimator {
    scale: ScaleFactors,
}

impl Default for ConcentrationEstimator {
    fn default() -> Self {
        Self { scale: CALIBRATED_SCALE }
    }
}

impl ConcentrationEstimator {
    /// Estimator with validated scale factors
    pub fn new(scale: ScaleFactors) -> ConfigResult<Self> {
        validate_scale_factors(&scale)?;
        Ok(Self { scale })
    }

    /// Slopes in use
    pub const fn scale(&self) -> &ScaleFactors {
        &self.scale
    }

    /// Estimate concentrations; never fails
    pub fn estimate(&self, reading: &NormalizedReading) -> ConcentrationEstimate {
        self.scale.map(|gas: TargetGas, factor| reading.get(gas.channel()) * factor)
    }
}
