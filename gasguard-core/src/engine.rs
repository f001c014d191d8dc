//! Per-cycle classification pipeline
//!
//! ```text
//! SensorSample ──▶ Normalizer ──▶ NormalizedReading
//!                                   │            │
//!                                   ▼            ▼
//!                     ConcentrationEstimator   GasDiscriminator
//!                                   │            │
//!                                   ▼            │
//!                     AirQualityClassifier       │
//!                                   │            │
//!                                   └────┬───────┘
//!                                        ▼
//!                              DiscriminationResult
//! ```
//!
//! [`AirQualityEngine::process`] either returns a complete result or a
//! [`SensorReadError`](crate::SensorReadError); nothing is ever half-populated. The engine holds
//! only validated, immutable configuration, so one instance can be shared
//! across threads and used for any number of independent sensing nodes.

use heapless::Vec;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{
    classifier::{AirQualityClassifier, AirQualityLevel, Classification},
    config::EngineConfig,
    discriminator::{DiscriminationRule, GasDiscriminator, PairwiseRatios},
    errors::{ConfigResult, ReadResult},
    estimator::{ConcentrationEstimate, ConcentrationEstimator},
    normalizer::{NormalizedReading, Normalizer},
    types::{PerGas, SensorSample, TargetGas},
};

/// Complete output of one sensing cycle
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DiscriminationResult {
    /// Gases the discriminator flagged
    pub present: PerGas<bool>,
    /// Estimated concentrations (ppm)
    pub concentrations: ConcentrationEstimate,
    /// Severity, overall and per gas
    pub classification: Classification,
    /// Discrimination ratios (r12, r13, r23)
    pub ratios: PairwiseRatios,
    /// Normalized responses the decision was based on
    pub reading: NormalizedReading,
    /// Sensors above the activation threshold
    pub active_sensors: u8,
    /// Discrimination branch that fired
    pub rule: DiscriminationRule,
}

impl DiscriminationResult {
    /// Overall severity level
    pub fn severity(&self) -> AirQualityLevel {
        self.classification.overall
    }

    /// Overall severity index 0-4
    pub fn severity_index(&self) -> u8 {
        self.classification.overall.index()
    }

    /// Gases flagged present, in discrimination order
    pub fn detected_gases(&self) -> Vec<TargetGas, 3> {
        self.present
            .iter()
            .filter(|(_, present)| **present)
            .map(|(gas, _)| gas)
            .collect()
    }

    /// No gas flagged. Severity may still be above EXCELLENT.
    pub fn is_clean_air(&self) -> bool {
        self.detected_gases().is_empty()
    }
}

/// Validated normalize → estimate → classify → discriminate pipeline
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AirQualityEngine {
    normalizer: Normalizer,
    estimator: ConcentrationEstimator,
    classifier: AirQualityClassifier,
    discriminator: GasDiscriminator,
}

impl AirQualityEngine {
    /// Build from a configuration; refuses invalid ones
    pub fn new(config: EngineConfig) -> ConfigResult<Self> {
        config.validate()?;

        Ok(Self {
            normalizer: Normalizer::new(config.baseline)?,
            estimator: ConcentrationEstimator::new(config.scale_factors)?,
            classifier: AirQualityClassifier::new(config.severity_table)?,
            discriminator: GasDiscriminator::new(config.activation_threshold)?,
        })
    }

    /// Normalizer stage
    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Classifier stage
    pub fn classifier(&self) -> &AirQualityClassifier {
        &self.classifier
    }

    /// Discriminator stage
    pub fn discriminator(&self) -> &GasDiscriminator {
        &self.discriminator
    }

    /// Run one full cycle over a raw sample
    pub fn process(&self, sample: &SensorSample) -> ReadResult<DiscriminationResult> {
        let reading = self.normalizer.normalize(sample)?;
        Ok(self.evaluate(&reading))
    }

    /// Estimate, classify and discriminate an already-normalized reading
    pub fn evaluate(&self, reading: &NormalizedReading) -> DiscriminationResult {
        let concentrations = self.estimator.estimate(reading);
        let classification = self.classifier.classify(&concentrations);
        let discrimination = self.discriminator.discriminate(reading);

        DiscriminationResult {
            present: discrimination.present,
            concentrations,
            classification,
            ratios: discrimination.ratios,
            reading: *reading,
            active_sensors: discrimination.active_sensors,
            rule: discrimination.rule,
        }
    }
}
