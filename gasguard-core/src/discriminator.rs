//! Multi-Gas Discrimination Across Cross-Sensitive Sensors
//!
//! ## The Problem
//!
//! No sensor in the array is selective. MQ-131 reacts to ozone but also to
//! NO2; MQ-135 reacts to NO2 but also to CO and, weakly, ozone; MQ-138 reacts
//! to formaldehyde and a broad range of VOCs. A single high channel therefore
//! does not identify a gas. The *pattern* across channels does.
//!
//! ## Decision Procedure
//!
//! Inputs are the normalized responses `n1, n2, n3` (MQ-131, MQ-135, MQ-138)
//! and an activation threshold τ.
//!
//! ```text
//! r12 = n1 / (n2 + ε)     r13 = n1 / (n3 + ε)     r23 = n2 / (n3 + ε)
//! active = |{ i : n_i > τ }|
//!
//! active = 0  → clean air
//!
//! active = 1  → first match:
//!               n1 > τ, n2 < 0.6τ, n3 < 0.6τ   → O3
//!               n2 > τ, n1 < 0.7τ              → NO2
//!               n3 > τ, n1 < 0.5τ              → HCHO
//!               otherwise                      → nothing flagged
//!
//! active ≥ 2  → first match:
//!           a.  r12 > 2.0, n3 < 0.8τ   → O3  (+ NO2 if n2 > 0.7τ)
//!           b.  r23 > 1.5, n1 > 0.6τ   → NO2 + O3
//!           c.  n3 > 1.2τ, r13 < 0.8   → HCHO (+ NO2 if n2 > τ)
//!           d.  otherwise              → each gas with n_i > 0.8τ
//! ```
//!
//! The single-sensor guards are asymmetric. MQ-131 bleeds into
//! both neighbours, so an ozone call needs both quiet; an NO2 or HCHO call
//! only needs MQ-131 quiet.
//!
//! ## Properties
//!
//! - Stateless: the output depends only on the reading and τ.
//! - Total: every finite reading yields a result. NaN cannot reach this
//!   module because [`NormalizedReading`] rejects it at construction.
//! - Independent of severity: a clean-air verdict does not alter the
//!   severity level, and both are reported side by side.

use heapless::Vec;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{
    constants::discrimination::*,
    errors::{ConfigResult, ConfigurationError},
    normalizer::NormalizedReading,
    types::{PerGas, SensorChannel, TargetGas},
};

/// Pairwise response ratios, ε-guarded
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PairwiseRatios {
    /// n1 / (n2 + ε), MQ-131 over MQ-135
    pub primary_secondary: f32,
    /// n1 / (n3 + ε), MQ-131 over MQ-138
    pub primary_tertiary: f32,
    /// n2 / (n3 + ε), MQ-135 over MQ-138
    pub secondary_tertiary: f32,
}

impl PairwiseRatios {
    /// Ratios for a reading
    pub fn of(reading: &NormalizedReading) -> Self {
        let (n1, n2, n3) = (reading.primary(), reading.secondary(), reading.tertiary());
        Self {
            primary_secondary: n1 / (n2 + RATIO_EPSILON),
            primary_tertiary: n1 / (n3 + RATIO_EPSILON),
            secondary_tertiary: n2 / (n3 + RATIO_EPSILON),
        }
    }
}

/// Which branch of the decision procedure produced the verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum DiscriminationRule {
    /// No sensor above τ
    CleanAir,
    /// Exactly one sensor above τ and its cross-sensitivity guard held
    SingleSensor(SensorChannel),
    /// Exactly one sensor above τ but a neighbour was too high to attribute it
    SingleSensorAmbiguous(SensorChannel),
    /// Rule (a): MQ-131 dominates MQ-135 with MQ-138 quiet
    OzoneDominant,
    /// Rule (b): MQ-135 dominates MQ-138 with MQ-131 elevated
    NitrogenDioxideWithOzone,
    /// Rule (c): MQ-138 high and above MQ-131
    FormaldehydeDominant,
    /// Rule (d): no pattern matched, per-sensor fallback
    ComplexMixture,
}

/// Discriminator verdict for one reading
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Discrimination {
    /// Presence flag per gas
    pub present: PerGas<bool>,
    /// Ratios used for the decision
    pub ratios: PairwiseRatios,
    /// Sensors strictly above τ
    pub active_sensors: u8,
    /// Branch that fired
    pub rule: DiscriminationRule,
}

impl Discrimination {
    /// Gases flagged present, in discrimination order
    pub fn detected_gases(&self) -> Vec<TargetGas, 3> {
        self.present
            .iter()
            .filter(|(_, present)| **present)
            .map(|(gas, _)| gas)
            .collect()
    }

    /// No gas flagged
    pub fn is_clean_air(&self) -> bool {
        !(self.present.ozone || self.present.nitrogen_dioxide || self.present.formaldehyde)
    }
}

/// Stateless pattern classifier over normalized responses
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasDiscriminator {
    threshold: f32,
}

impl Default for GasDiscriminator {
    fn default() -> Self {
        Self { threshold: DEFAULT_ACTIVATION_THRESHOLD }
    }
}

impl GasDiscriminator {
    /// Discriminator with activation threshold τ
    pub fn new(threshold: f32) -> ConfigResult<Self> {
        validate_threshold(threshold)?;
        Ok(Self { threshold })
    }

    /// Activation threshold τ
    pub const fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Decide which gases are present
    pub fn discriminate(&self, reading: &NormalizedReading) -> Discrimination {
        let tau = self.threshold;
        let (n1, n2, n3) = (reading.primary(), reading.secondary(), reading.tertiary());
        let ratios = PairwiseRatios::of(reading);

        let active_sensors = SensorChannel::ALL
            .iter()
            .filter(|&&channel| reading.get(channel) > tau)
            .count() as u8;

        let mut present = PerGas::new(false, false, false);

        let rule = match active_sensors {
            0 => DiscriminationRule::CleanAir,
            1 => {
                if n1 > tau && n2 < PRIMARY_ALONE_GUARD * tau && n3 < PRIMARY_ALONE_GUARD * tau {
                    present.ozone = true;
                    DiscriminationRule::SingleSensor(SensorChannel::Primary)
                } else if n2 > tau && n1 < SECONDARY_ALONE_GUARD * tau {
                    present.nitrogen_dioxide = true;
                    DiscriminationRule::SingleSensor(SensorChannel::Secondary)
                } else if n3 > tau && n1 < TERTIARY_ALONE_GUARD * tau {
                    present.formaldehyde = true;
                    DiscriminationRule::SingleSensor(SensorChannel::Tertiary)
                } else {
                    DiscriminationRule::SingleSensorAmbiguous(active_channel(reading, tau))
                }
            }
            _ => {
                if ratios.primary_secondary > OZONE_DOMINANCE_RATIO
                    && n3 < OZONE_TERTIARY_CEILING * tau
                {
                    present.ozone = true;
                    present.nitrogen_dioxide = n2 > OZONE_COMPANION_NO2 * tau;
                    DiscriminationRule::OzoneDominant
                } else if ratios.secondary_tertiary > NO2_DOMINANCE_RATIO
                    && n1 > NO2_PRIMARY_FLOOR * tau
                {
                    present.nitrogen_dioxide = true;
                    present.ozone = true;
                    DiscriminationRule::NitrogenDioxideWithOzone
                } else if n3 > HCHO_TERTIARY_FLOOR * tau
                    && ratios.primary_tertiary < HCHO_PRIMARY_RATIO_CEILING
                {
                    present.formaldehyde = true;
                    present.nitrogen_dioxide = n2 > tau;
                    DiscriminationRule::FormaldehydeDominant
                } else {
                    present.ozone = n1 > MIXTURE_FLOOR * tau;
                    present.nitrogen_dioxide = n2 > MIXTURE_FLOOR * tau;
                    present.formaldehyde = n3 > MIXTURE_FLOOR * tau;
                    DiscriminationRule::ComplexMixture
                }
            }
        };

        Discrimination { present, ratios, active_sensors, rule }
    }
}

/// τ must be positive and finite
pub fn validate_threshold(threshold: f32) -> ConfigResult<()> {
    if threshold.is_finite() && threshold > 0.0 {
        Ok(())
    } else {
        Err(ConfigurationError::InvalidActivationThreshold { value: threshold })
    }
}

// Only called with exactly one channel above τ.
fn active_channel(reading: &NormalizedReading, tau: f32) -> SensorChannel {
    SensorChannel::ALL
        .into_iter()
        .find(|&channel| reading.get(channel) > tau)
        .unwrap_or(SensorChannel::Primary)
}
