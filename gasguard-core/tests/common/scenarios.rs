//! Hand-checked normalized-reading scenarios
//!
//! Each entry was worked through the decision table at τ = 0.08 and lists
//! the gases expected to be flagged.

use gasguard_core::{DiscriminationRule, SensorChannel, TargetGas};

pub struct ReadingScenario {
    pub name: &'static str,
    pub reading: (f32, f32, f32),
    pub expected: &'static [TargetGas],
    pub rule: DiscriminationRule,
}

use TargetGas::{Formaldehyde as Hcho, NitrogenDioxide as No2, Ozone as O3};

pub const READING_SCENARIOS: &[ReadingScenario] = &[
    ReadingScenario {
        name: "all channels at rest",
        reading: (0.0, 0.0, 0.0),
        expected: &[],
        rule: DiscriminationRule::CleanAir,
    },
    ReadingScenario {
        name: "weak response everywhere stays clean",
        reading: (0.079, 0.079, 0.079),
        expected: &[],
        rule: DiscriminationRule::CleanAir,
    },
    ReadingScenario {
        name: "isolated ozone",
        reading: (0.30, 0.02, 0.01),
        expected: &[O3],
        rule: DiscriminationRule::SingleSensor(SensorChannel::Primary),
    },
    ReadingScenario {
        name: "isolated NO2",
        reading: (0.03, 0.25, 0.02),
        expected: &[No2],
        rule: DiscriminationRule::SingleSensor(SensorChannel::Secondary),
    },
    ReadingScenario {
        name: "isolated formaldehyde",
        reading: (0.02, 0.03, 0.40),
        expected: &[Hcho],
        rule: DiscriminationRule::SingleSensor(SensorChannel::Tertiary),
    },
    ReadingScenario {
        name: "MQ-131 alone but MQ-135 leaking",
        reading: (0.30, 0.05, 0.01),
        expected: &[],
        rule: DiscriminationRule::SingleSensorAmbiguous(SensorChannel::Primary),
    },
    ReadingScenario {
        name: "ozone dominant with NO2 companion",
        reading: (0.50, 0.10, 0.02),
        expected: &[O3, No2],
        rule: DiscriminationRule::OzoneDominant,
    },
    ReadingScenario {
        name: "NO2 dragging ozone along",
        reading: (0.20, 0.40, 0.10),
        expected: &[O3, No2],
        rule: DiscriminationRule::NitrogenDioxideWithOzone,
    },
    ReadingScenario {
        name: "formaldehyde with NO2",
        reading: (0.05, 0.15, 0.40),
        expected: &[No2, Hcho],
        rule: DiscriminationRule::FormaldehydeDominant,
    },
    ReadingScenario {
        name: "balanced mixture",
        reading: (0.20, 0.22, 0.18),
        expected: &[O3, No2, Hcho],
        rule: DiscriminationRule::ComplexMixture,
    },
];
