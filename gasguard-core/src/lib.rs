//! Air-quality classification and multi-gas discrimination for GasGuard
//!
//! Three cross-sensitive metal-oxide sensors (MQ-131, MQ-135, MQ-138) are
//! read once per cycle. Their voltage drop from a clean-air baseline is
//! turned into O3/NO2/HCHO concentration estimates, a five-level severity,
//! and a decision about which gases are actually present.
//!
//! Key constraints:
//! - `no_std` capable, no heap allocation per cycle
//! - Configuration validated once at startup, immutable afterwards
//! - A cycle either yields a complete result or an explicit error
//!
//! ```rust
//! use gasguard_core::{AirQualityEngine, EngineConfig, SensorSample, TargetGas};
//!
//! let engine = AirQualityEngine::new(EngineConfig::default())?;
//!
//! // MQ-131 well below its 1.8 V baseline, the others at rest
//! let result = engine.process(&SensorSample::new(1.26, 1.6, 1.7))?;
//! assert_eq!(result.detected_gases().as_slice(), &[TargetGas::Ozone]);
//! println!("{} {}", result.severity().symbol(), result.severity().advisory());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod classifier;
pub mod config;
pub mod constants;
pub mod cycle;
pub mod discriminator;
pub mod engine;
pub mod errors;
pub mod estimator;
pub mod normalizer;
pub mod source;
pub mod time;
pub mod types;

// Public API
pub use classifier::{AirQualityClassifier, AirQualityLevel, Classification, SeverityBand, SeverityTable};
pub use config::EngineConfig;
pub use cycle::{CycleController, CycleOutcome, CycleStats};
pub use discriminator::{Discrimination, DiscriminationRule, GasDiscriminator, PairwiseRatios};
pub use engine::{AirQualityEngine, DiscriminationResult};
pub use errors::{ConfigResult, ConfigurationError, ReadResult, SensorReadError};
pub use estimator::{ConcentrationEstimate, ConcentrationEstimator, ScaleFactors};
pub use normalizer::{Baseline, NormalizedReading, Normalizer};
pub use source::{MemorySource, SampleSource};
pub use time::{FixedTime, TimeSource, Timestamp};
pub use types::{PerGas, SensorChannel, SensorSample, TargetGas};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
