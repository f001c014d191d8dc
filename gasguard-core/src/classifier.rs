//! Air-Quality Severity Classification
//!
//! ## Overview
//!
//! Concentrations are mapped onto five ordered severity levels:
//!
//! ```text
//! EXCELLENT < GOOD < MODERATE < POLLUTED < HAZARDOUS
//!     0        1        2          3          4
//! ```
//!
//! Each level is a band in a [`SeverityTable`] carrying an inclusive upper
//! bound per gas. The table is an explicit ordered sequence, scanned from the
//! least to the most severe band.
//!
//! ## Resolution Rules
//!
//! For each gas independently:
//!
//! 1. Walk the bands in increasing severity.
//! 2. The gas resolves to the first band whose bound is still `>=` the
//!    concentration. A value exactly on a bound belongs to that band.
//! 3. A value above every bound saturates to HAZARDOUS. Extreme pollution is
//!    never reported as clean air.
//!
//! The overall level is the worst of the three per-gas levels. No gas is
//! privileged; when several gases share the worst level they are all
//! reported as dominant.
//!
//! ```text
//! O3 = 0.06 ppm   → MODERATE  (0.05 < 0.06 <= 0.08)
//! NO2 = 0.04 ppm  → GOOD      (on the bound)
//! HCHO = 0.20 ppm → HAZARDOUS (above 0.12, saturated)
//! overall         → HAZARDOUS, dominant: [HCHO]
//! ```
//!
//! ## Monotonicity
//!
//! Because bounds strictly increase band to band (checked at construction),
//! raising any concentration can only move its gas to the same or a more
//! severe band, and the worst-of-three can only stay or rise.

use core::fmt;

use heapless::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::quality::*,
    errors::{ConfigResult, ConfigurationError},
    estimator::ConcentrationEstimate,
    types::{PerGas, TargetGas},
};

/// Ordered air-quality severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AirQualityLevel {
    /// Ideal air
    Excellent,
    /// Acceptable for everyone
    Good,
    /// Sensitive groups affected
    Moderate,
    /// Everyone may feel effects
    Polluted,
    /// Health emergency
    Hazardous,
}

impl AirQualityLevel {
    /// All levels, least severe first
    pub const ALL: [AirQualityLevel; SEVERITY_LEVEL_COUNT] = [
        Self::Excellent,
        Self::Good,
        Self::Moderate,
        Self::Polluted,
        Self::Hazardous,
    ];

    /// Most severe level, used for saturation
    pub const MOST_SEVERE: AirQualityLevel = Self::Hazardous;

    /// Severity index 0-4
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Level for a severity index
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Upper-case level name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Excellent => "EXCELLENT",
            Self::Good => "GOOD",
            Self::Moderate => "MODERATE",
            Self::Polluted => "POLLUTED",
            Self::Hazardous => "HAZARDOUS",
        }
    }

    /// Short display tag
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Excellent => "[E]",
            Self::Good => "[G]",
            Self::Moderate => "[M]",
            Self::Polluted => "[P]",
            Self::Hazardous => "[H]",
        }
    }

    /// Health advisory for this level
    pub const fn advisory(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent - ideal air for outdoor activity",
            Self::Good => "Good - acceptable quality, no effects for the general population",
            Self::Moderate => "Moderate - sensitive groups should consider reducing activity",
            Self::Polluted => "Polluted - everyone may begin to experience effects",
            Self::Hazardous => "Hazardous - health emergency, avoid exposure",
        }
    }
}

impl fmt::Display for AirQualityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One row of the severity table
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SeverityBand {
    /// Level this band resolves to
    pub level: AirQualityLevel,
    /// Inclusive upper bound per gas (ppm)
    pub limits: PerGas<f32>,
}

impl SeverityBand {
    /// Band for `level` with per-gas bounds
    pub const fn new(level: AirQualityLevel, limits: PerGas<f32>) -> Self {
        Self { level, limits }
    }
}

/// Five bands ordered least to most severe
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SeverityTable {
    bands: [SeverityBand; SEVERITY_LEVEL_COUNT],
}

impl Default for SeverityTable {
    fn default() -> Self {
        use AirQualityLevel::*;

        Self {
            bands: [
                SeverityBand::new(Excellent, PerGas::new(O3_EXCELLENT_PPM, NO2_EXCELLENT_PPM, HCHO_EXCELLENT_PPM)),
                SeverityBand::new(Good, PerGas::new(O3_GOOD_PPM, NO2_GOOD_PPM, HCHO_GOOD_PPM)),
                SeverityBand::new(Moderate, PerGas::new(O3_MODERATE_PPM, NO2_MODERATE_PPM, HCHO_MODERATE_PPM)),
                SeverityBand::new(Polluted, PerGas::new(O3_POLLUTED_PPM, NO2_POLLUTED_PPM, HCHO_POLLUTED_PPM)),
                SeverityBand::new(Hazardous, PerGas::new(O3_HAZARDOUS_PPM, NO2_HAZARDOUS_PPM, HCHO_HAZARDOUS_PPM)),
            ],
        }
    }
}

impl SeverityTable {
    /// Validated table from explicit bands
    pub fn new(bands: [SeverityBand; SEVERITY_LEVEL_COUNT]) -> ConfigResult<Self> {
        let table = Self { bands };
        table.validate()?;
        Ok(table)
    }

    /// Bands, least severe first
    pub fn bands(&self) -> &[SeverityBand] {
        &self.bands
    }

    /// Bands must increase strictly in level and in every per-gas bound
    pub fn validate(&self) -> ConfigResult<()> {
        for (band, row) in self.bands.iter().enumerate() {
            if row.limits.iter().any(|(_, limit)| !(limit.is_finite() && *limit >= 0.0)) {
                return Err(ConfigurationError::UnorderedSeverityTable {
                    band: band as u8,
                    reason: "bound must be finite and non-negative",
                });
            }

            let Some(previous) = band.checked_sub(1).map(|i| &self.bands[i]) else {
                continue;
            };

            if row.level <= previous.level {
                return Err(ConfigurationError::UnorderedSeverityTable {
                    band: band as u8,
                    reason: "level index does not increase",
                });
            }

            for gas in TargetGas::ALL {
                if row.limits[gas] <= previous.limits[gas] {
                    return Err(ConfigurationError::UnorderedSeverityTable {
                        band: band as u8,
                        reason: "gas bound does not increase",
                    });
                }
            }
        }
        Ok(())
    }
}

/// Classifier output
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Classification {
    /// Worst of the per-gas levels
    pub overall: AirQualityLevel,
    /// Level resolved for each gas
    pub per_gas: PerGas<AirQualityLevel>,
}

impl Classification {
    /// Gases whose level equals the overall level
    pub fn dominant_gases(&self) -> Vec<TargetGas, 3> {
        self.per_gas
            .iter()
            .filter(|(_, level)| **level == self.overall)
            .map(|(gas, _)| gas)
            .collect()
    }
}

/// Maps concentrations onto severity levels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AirQualityClassifier {
    table: SeverityTable,
}

impl AirQualityClassifier {
    /// Classifier over a validated table
    pub fn new(table: SeverityTable) -> ConfigResult<Self> {
        table.validate()?;
        Ok(Self { table })
    }

    /// Table in use
    pub const fn table(&self) -> &SeverityTable {
        &self.table
    }

    /// Resolve a single gas concentration
    pub fn resolve(&self, gas: TargetGas, concentration: f32) -> AirQualityLevel {
        for band in &self.table.bands {
            if concentration <= band.limits[gas] {
                return band.level;
            }
        }
        AirQualityLevel::MOST_SEVERE
    }

    /// Classify all three concentrations; never fails
    pub fn classify(&self, estimate: &ConcentrationEstimate) -> Classification {
        let per_gas = estimate.map(|gas, concentration| self.resolve(gas, concentration));
        let overall = per_gas
            .iter()
            .map(|(_, level)| *level)
            .max()
            .unwrap_or(AirQualityLevel::Excellent);

        Classification { overall, per_gas }
    }
}
