//! Sensor Array Characteristics
//!
//! The array pairs three Hanwei MQ-series metal-oxide sensors. Each one drops
//! its output voltage as the target gas concentration rises, and each one
//! also responds to a second gas (cross-sensitivity).
//!
//! ```text
//! Channel    Sensor   Primary target   Cross-sensitive to
//! primary    MQ-131   O3               NO2
//! secondary  MQ-135   NO2              CO
//! tertiary   MQ-138   HCHO             VOC
//! ```

// ===== CLEAN-AIR BASELINES =====

/// MQ-131 rest voltage in clean air (V).
///
/// Must be recalibrated per deployment.
pub const MQ131_BASELINE_V: f32 = 1.8;

/// MQ-135 rest voltage in clean air (V).
pub const MQ135_BASELINE_V: f32 = 1.6;

/// MQ-138 rest voltage in clean air (V).
pub const MQ138_BASELINE_V: f32 = 1.7;

// ===== ADC CONVERSION =====

/// ADC reference voltage (V).
///
/// RP2040 and most 3.3 V microcontrollers read the sensor divider against
/// the supply rail.
pub const ADC_REFERENCE_V: f32 = 3.3;

/// Full-scale count of a 16-bit left-justified ADC reading.
///
/// MicroPython and most HALs normalize reads to `u16` regardless of the
/// converter's native resolution.
pub const ADC_FULL_SCALE: u16 = u16::MAX;
