//! Air-Quality Thresholds and Concentration Scaling
//!
//! Upper bounds (ppm) for each severity level, per target gas. A reading
//! equal to a bound still belongs to that level. Values are the bench
//! prototype's calibration table.
//!
//! ```text
//! Level       O3     NO2    HCHO
//! EXCELLENT   0.02   0.02   0.01
//! GOOD        0.05   0.04   0.03
//! MODERATE    0.08   0.06   0.05
//! POLLUTED    0.12   0.10   0.08
//! HAZARDOUS   0.15   0.15   0.12
//! ```
//!
//! Concentrations above the HAZARDOUS bound still classify as HAZARDOUS.

/// Number of ordered severity levels.
pub const SEVERITY_LEVEL_COUNT: usize = 5;

// ===== OZONE (O3) BOUNDS, ppm =====

/// Ozone upper bound for EXCELLENT (ppm).
pub const O3_EXCELLENT_PPM: f32 = 0.02;
/// Ozone upper bound for GOOD (ppm).
pub const O3_GOOD_PPM: f32 = 0.05;
/// Ozone upper bound for MODERATE (ppm).
pub const O3_MODERATE_PPM: f32 = 0.08;
/// Ozone upper bound for POLLUTED (ppm).
pub const O3_POLLUTED_PPM: f32 = 0.12;
/// Ozone upper bound for HAZARDOUS (ppm).
pub const O3_HAZARDOUS_PPM: f32 = 0.15;

// ===== NITROGEN DIOXIDE (NO2) BOUNDS, ppm =====

/// Nitrogen dioxide upper bound for EXCELLENT (ppm).
pub const NO2_EXCELLENT_PPM: f32 = 0.02;
/// Nitrogen dioxide upper bound for GOOD (ppm).
pub const NO2_GOOD_PPM: f32 = 0.04;
/// Nitrogen dioxide upper bound for MODERATE (ppm).
pub const NO2_MODERATE_PPM: f32 = 0.06;
/// Nitrogen dioxide upper bound for POLLUTED (ppm).
pub const NO2_POLLUTED_PPM: f32 = 0.10;
/// Nitrogen dioxide upper bound for HAZARDOUS (ppm).
pub const NO2_HAZARDOUS_PPM: f32 = 0.15;

// ===== FORMALDEHYDE (HCHO) BOUNDS, ppm =====

/// Formaldehyde upper bound for EXCELLENT (ppm).
pub const HCHO_EXCELLENT_PPM: f32 = 0.01;
/// Formaldehyde upper bound for GOOD (ppm).
pub const HCHO_GOOD_PPM: f32 = 0.03;
/// Formaldehyde upper bound for MODERATE (ppm).
pub const HCHO_MODERATE_PPM: f32 = 0.05;
/// Formaldehyde upper bound for POLLUTED (ppm).
pub const HCHO_POLLUTED_PPM: f32 = 0.08;
/// Formaldehyde upper bound for HAZARDOUS (ppm).
pub const HCHO_HAZARDOUS_PPM: f32 = 0.12;

// ===== CONCENTRATION SCALE FACTORS =====

/// Ozone estimate per unit of normalized MQ-131 response (ppm).
///
/// Source: bench prototype scaling
pub const O3_PPM_PER_UNIT: f32 = 0.20;

/// Nitrogen dioxide estimate per unit of normalized MQ-135 response (ppm).
pub const NO2_PPM_PER_UNIT: f32 = 0.30;

/// Formaldehyde estimate per unit of normalized MQ-138 response (ppm).
pub const HCHO_PPM_PER_UNIT: f32 = 0.15;
