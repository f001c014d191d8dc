//! Gas Discrimination Coefficients
//!
//! All guards are expressed as fractions of the activation threshold τ so a
//! deployment can retune sensitivity with a single parameter. The fractions
//! themselves encode how strongly each sensor responds to its neighbours'
//! gases and are not symmetric.

/// Default activation threshold τ (normalized units).
///
/// A sensor whose normalized reading exceeds τ is "responding".
pub const DEFAULT_ACTIVATION_THRESHOLD: f32 = 0.08;

/// Denominator offset for pairwise ratios.
pub const RATIO_EPSILON: f32 = 0.001;

// ===== SINGLE ACTIVE SENSOR GUARDS (× τ) =====

/// MQ-131 alone: MQ-135 and MQ-138 must both stay below this fraction.
pub const PRIMARY_ALONE_GUARD: f32 = 0.6;

/// MQ-135 alone: MQ-131 must stay below this fraction.
pub const SECONDARY_ALONE_GUARD: f32 = 0.7;

/// MQ-138 alone: MQ-131 must stay below this fraction.
pub const TERTIARY_ALONE_GUARD: f32 = 0.5;

// ===== MULTI-SENSOR PATTERN RULES =====

/// Rule (a): minimum MQ-131/MQ-135 ratio for ozone dominance.
pub const OZONE_DOMINANCE_RATIO: f32 = 2.0;

/// Rule (a): MQ-138 ceiling (× τ).
pub const OZONE_TERTIARY_CEILING: f32 = 0.8;

/// Rule (a): MQ-135 level (× τ) above which NO2 accompanies ozone.
pub const OZONE_COMPANION_NO2: f32 = 0.7;

/// Rule (b): minimum MQ-135/MQ-138 ratio for NO2 with ozone.
pub const NO2_DOMINANCE_RATIO: f32 = 1.5;

/// Rule (b): MQ-131 floor (× τ).
pub const NO2_PRIMARY_FLOOR: f32 = 0.6;

/// Rule (c): MQ-138 floor (× τ) for formaldehyde dominance.
pub const HCHO_TERTIARY_FLOOR: f32 = 1.2;

/// Rule (c): maximum MQ-131/MQ-138 ratio.
pub const HCHO_PRIMARY_RATIO_CEILING: f32 = 0.8;

/// Catch-all: per-sensor level (× τ) for mixtures.
pub const MIXTURE_FLOOR: f32 = 0.8;
