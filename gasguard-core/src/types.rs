//! Sensor channels, target gases and the raw sample record
//!
//! The array has one physical sensor per target gas, so channels and gases
//! map one-to-one. They are still kept as distinct types: a channel is a
//! piece of hardware with a voltage, a gas is a pollutant with a
//! concentration.

use core::fmt;
use core::ops::{Index, IndexMut};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::sensors::{ADC_FULL_SCALE, ADC_REFERENCE_V};

/// Physical sensor channel in the array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SensorChannel {
    /// MQ-131, ozone sensor
    Primary,
    /// MQ-135, nitrogen dioxide / general air-quality sensor
    Secondary,
    /// MQ-138, formaldehyde / VOC sensor
    Tertiary,
}

impl SensorChannel {
    /// All channels in array order
    pub const ALL: [SensorChannel; 3] = [Self::Primary, Self::Secondary, Self::Tertiary];

    /// Sensor part number
    pub const fn model(self) -> &'static str {
        match self {
            Self::Primary => "MQ-131",
            Self::Secondary => "MQ-135",
            Self::Tertiary => "MQ-138",
        }
    }

    /// Gas pair the sensor responds to
    pub const fn cross_sensitivity(self) -> &'static str {
        match self {
            Self::Primary => "O3/NO2",
            Self::Secondary => "NO2/CO",
            Self::Tertiary => "HCHO/VOC",
        }
    }

    /// Gas this channel is calibrated for
    pub const fn target(self) -> TargetGas {
        match self {
            Self::Primary => TargetGas::Ozone,
            Self::Secondary => TargetGas::NitrogenDioxide,
            Self::Tertiary => TargetGas::Formaldehyde,
        }
    }
}

impl fmt::Display for SensorChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.model())
    }
}

/// Pollutant the engine discriminates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TargetGas {
    /// O3 (gas1)
    Ozone,
    /// NO2 (gas2)
    NitrogenDioxide,
    /// HCHO (gas3)
    Formaldehyde,
}

impl TargetGas {
    /// All gases in discrimination order
    pub const ALL: [TargetGas; 3] = [Self::Ozone, Self::NitrogenDioxide, Self::Formaldehyde];

    /// Chemical formula
    pub const fn formula(self) -> &'static str {
        match self {
            Self::Ozone => "O3",
            Self::NitrogenDioxide => "NO2",
            Self::Formaldehyde => "HCHO",
        }
    }

    /// Human-readable name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ozone => "ozone",
            Self::NitrogenDioxide => "nitrogen dioxide",
            Self::Formaldehyde => "formaldehyde",
        }
    }

    /// Sensor channel calibrated for this gas
    pub const fn channel(self) -> SensorChannel {
        match self {
            Self::Ozone => SensorChannel::Primary,
            Self::NitrogenDioxide => SensorChannel::Secondary,
            Self::Formaldehyde => SensorChannel::Tertiary,
        }
    }
}

impl fmt::Display for TargetGas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.formula())
    }
}

/// One value per target gas
///
/// Used for concentrations, scale factors, severity bounds and presence
/// flags. Indexable by [`TargetGas`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PerGas<T> {
    /// O3 value
    pub ozone: T,
    /// NO2 value
    pub nitrogen_dioxide: T,
    /// HCHO value
    pub formaldehyde: T,
}

impl<T> PerGas<T> {
    /// Build from values in discrimination order (O3, NO2, HCHO)
    pub const fn new(ozone: T, nitrogen_dioxide: T, formaldehyde: T) -> Self {
        Self { ozone, nitrogen_dioxide, formaldehyde }
    }

    /// Apply `f` to each gas
    pub fn map<U>(self, mut f: impl FnMut(TargetGas, T) -> U) -> PerGas<U> {
        PerGas {
            ozone: f(TargetGas::Ozone, self.ozone),
            nitrogen_dioxide: f(TargetGas::NitrogenDioxide, self.nitrogen_dioxide),
            formaldehyde: f(TargetGas::Formaldehyde, self.formaldehyde),
        }
    }

    /// Iterate `(gas, &value)` in discrimination order
    pub fn iter(&self) -> impl Iterator<Item = (TargetGas, &T)> {
        [
            (TargetGas::Ozone, &self.ozone),
            (TargetGas::NitrogenDioxide, &self.nitrogen_dioxide),
            (TargetGas::Formaldehyde, &self.formaldehyde),
        ]
        .into_iter()
    }
}

impl<T> Index<TargetGas> for PerGas<T> {
    type Output = T;

    fn index(&self, gas: TargetGas) -> &T {
        match gas {
            TargetGas::Ozone => &self.ozone,
            TargetGas::NitrogenDioxide => &self.nitrogen_dioxide,
            TargetGas::Formaldehyde => &self.formaldehyde,
        }
    }
}

impl<T> IndexMut<TargetGas> for PerGas<T> {
    fn index_mut(&mut self, gas: TargetGas) -> &mut T {
        match gas {
            TargetGas::Ozone => &mut self.ozone,
            TargetGas::NitrogenDioxide => &mut self.nitrogen_dioxide,
            TargetGas::Formaldehyde => &mut self.formaldehyde,
        }
    }
}

/// Raw sensor voltages captured in one cycle
///
/// Values are passed through untouched; range handling happens during
/// normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SensorSample {
    /// MQ-131 output (V)
    pub primary: f32,
    /// MQ-135 output (V)
    pub secondary: f32,
    /// MQ-138 output (V)
    pub tertiary: f32,
}

impl SensorSample {
    /// Sample from three voltages
    pub const fn new(primary: f32, secondary: f32, tertiary: f32) -> Self {
        Self { primary, secondary, tertiary }
    }

    /// Convert 16-bit ADC counts to volts against `reference_volts`
    pub fn from_adc_counts(counts: [u16; 3], reference_volts: f32) -> Self {
        let to_volts = |raw: u16| raw as f32 * reference_volts / ADC_FULL_SCALE as f32;
        Self::new(to_volts(counts[0]), to_volts(counts[1]), to_volts(counts[2]))
    }

    /// Convert 16-bit ADC counts using the default 3.3 V reference
    pub fn from_adc_counts_default(counts: [u16; 3]) -> Self {
        Self::from_adc_counts(counts, ADC_REFERENCE_V)
    }

    /// Voltage of a single channel
    pub const fn voltage(&self, channel: SensorChannel) -> f32 {
        match channel {
            SensorChannel::Primary => self.primary,
            SensorChannel::Secondary => self.secondary,
            SensorChannel::Tertiary => self.tertiary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_map_to_gases_both_ways() {
        for channel in SensorChannel::ALL {
            assert_eq!(channel.target().channel(), channel);
        }
        for gas in TargetGas::ALL {
            assert_eq!(gas.channel().target(), gas);
        }
    }

    #[test]
    fn labels_describe_hardware_and_gas() {
        assert_eq!(SensorChannel::Primary.cross_sensitivity(), "O3/NO2");
        assert_eq!(SensorChannel::Secondary.cross_sensitivity(), "NO2/CO");
        assert_eq!(SensorChannel::Tertiary.cross_sensitivity(), "HCHO/VOC");

        assert_eq!(TargetGas::Ozone.name(), "ozone");
        assert_eq!(TargetGas::NitrogenDioxide.name(), "nitrogen dioxide");
        assert_eq!(TargetGas::Formaldehyde.name(), "formaldehyde");

        assert_eq!(TargetGas::Formaldehyde.to_string(), "HCHO");
        assert_eq!(SensorChannel::Secondary.to_string(), "MQ-135");
    }

    #[test]
    fn per_gas_indexing() {
        let mut values = PerGas::new(1.0, 2.0, 3.0);
        assert_eq!(values[TargetGas::NitrogenDioxide], 2.0);

        values[TargetGas::Formaldehyde] = 4.0;
        assert_eq!(values.formaldehyde, 4.0);

        let doubled = values.map(|_, v| v * 2.0);
        assert_eq!(doubled, PerGas::new(2.0, 4.0, 8.0));

        let gases: Vec<TargetGas> = values.iter().map(|(gas, _)| gas).collect();
        assert_eq!(gases, TargetGas::ALL.to_vec());
    }

    #[test]
    fn adc_counts_to_volts() {
        let sample = SensorSample::from_adc_counts_default([0, u16::MAX, 32768]);
        assert_eq!(sample.primary, 0.0);
        assert!((sample.secondary - 3.3).abs() < 1e-6);
        assert!((sample.tertiary - 1.65).abs() < 1e-3);
    }

    #[test]
    fn sample_voltage_by_channel() {
        let sample = SensorSample::new(1.0, 1.1, 1.2);
        assert_eq!(sample.voltage(SensorChannel::Primary), 1.0);
        assert_eq!(sample.voltage(SensorChannel::Secondary), 1.1);
        assert_eq!(sample.voltage(SensorChannel::Tertiary), 1.2);
    }
}
