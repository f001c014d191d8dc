//! Constants for GasGuard Core
//!
//! Centralized defaults for the sensor array, the air-quality table, the
//! discrimination rules and the cycle cadence. Every numeric value used by the
//! engine is defined here with its unit and origin.
//!
//! ## Organization
//!
//! - **Sensors**: clean-air baselines and ADC conversion
//! - **Quality**: severity table and concentration scale factors
//! - **Discrimination**: activation threshold and rule coefficients
//! - **Time**: cycle cadence
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. Include the unit in the name (`_V`, `_PPM`, `_MS`)
//! 3. Discrimination coefficients encode measured cross-sensitivity; change
//!    them only together with the rule tests

/// Sensor array characteristics: baselines and ADC conversion.
pub mod sensors;

/// Air-quality severity thresholds and concentration scale factors.
pub mod quality;

/// Gas discrimination threshold and rule coefficients.
pub mod discrimination;

/// Cycle cadence.
pub mod time;

pub use sensors::{
    MQ131_BASELINE_V, MQ135_BASELINE_V, MQ138_BASELINE_V,
    ADC_REFERENCE_V, ADC_FULL_SCALE,
};

pub use quality::{
    O3_PPM_PER_UNIT, NO2_PPM_PER_UNIT, HCHO_PPM_PER_UNIT,
    SEVERITY_LEVEL_COUNT,
};

pub use discrimination::{DEFAULT_ACTIVATION_THRESHOLD, RATIO_EPSILON};

pub use time::{MS_PER_SECOND, DEFAULT_CYCLE_PERIOD_MS};
