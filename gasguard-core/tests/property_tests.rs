//! Property-based tests for the classification pipeline

use gasguard_core::{
    AirQualityClassifier, AirQualityEngine, AirQualityLevel, Baseline, EngineConfig,
    GasDiscriminator, NormalizedReading, Normalizer, PerGas, SensorSample, TargetGas,
};
use proptest::prelude::*;

fn voltage() -> impl Strategy<Value = f32> {
    -1.0f32..5.0
}

fn response() -> impl Strategy<Value = f32> {
    0.0f32..1.0
}

fn gas() -> impl Strategy<Value = TargetGas> {
    prop_oneof![
        Just(TargetGas::Ozone),
        Just(TargetGas::NitrogenDioxide),
        Just(TargetGas::Formaldehyde),
    ]
}

proptest! {
    #[test]
    fn normalized_responses_are_never_negative(v1 in voltage(), v2 in voltage(), v3 in voltage()) {
        let reading = Normalizer::default()
            .normalize(&SensorSample::new(v1, v2, v3))
            .unwrap();
        prop_assert!(reading.primary() >= 0.0);
        prop_assert!(reading.secondary() >= 0.0);
        prop_assert!(reading.tertiary() >= 0.0);
    }

    #[test]
    fn baseline_voltage_normalizes_to_zero(b1 in 0.5f32..3.3, b2 in 0.5f32..3.3, b3 in 0.5f32..3.3) {
        let normalizer = Normalizer::new(Baseline::new(b1, b2, b3)).unwrap();
        let reading = normalizer.normalize(&SensorSample::new(b1, b2, b3)).unwrap();
        prop_assert_eq!(reading, NormalizedReading::clean());
    }

    #[test]
    fn severity_is_monotonic_in_concentration(gas in gas(), a in 0.0f32..0.5, b in 0.0f32..0.5) {
        let classifier = AirQualityClassifier::default();
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(classifier.resolve(gas, low) <= classifier.resolve(gas, high));
    }

    #[test]
    fn overall_severity_never_drops_when_one_gas_rises(
        gas in gas(),
        o3 in 0.0f32..0.3,
        no2 in 0.0f32..0.3,
        hcho in 0.0f32..0.3,
        increase in 0.0f32..0.3,
    ) {
        let classifier = AirQualityClassifier::default();
        let before = PerGas::new(o3, no2, hcho);
        let mut after = before;
        after[gas] += increase;

        let low = classifier.classify(&before);
        let high = classifier.classify(&after);
        prop_assert!(low.overall <= high.overall);
        prop_assert!(low.overall.index() <= high.overall.index());
    }

    #[test]
    fn severity_saturates_above_table(gas in gas(), excess in 0.0f32..10.0) {
        let classifier = AirQualityClassifier::default();
        let top = classifier.table().bands()[4].limits[gas];
        prop_assert_eq!(classifier.resolve(gas, top + 0.001 + excess), AirQualityLevel::Hazardous);
    }

    #[test]
    fn quiet_channels_are_clean_air(n1 in 0.0f32..=0.08, n2 in 0.0f32..=0.08, n3 in 0.0f32..=0.08) {
        let reading = NormalizedReading::new(n1, n2, n3).unwrap();
        let discrimination = GasDiscriminator::default().discriminate(&reading);
        prop_assert!(discrimination.is_clean_air());
        prop_assert_eq!(discrimination.active_sensors, 0);
    }

    #[test]
    fn discrimination_flags_only_responding_channels(n1 in response(), n2 in response(), n3 in response()) {
        let reading = NormalizedReading::new(n1, n2, n3).unwrap();
        let discrimination = GasDiscriminator::default().discriminate(&reading);

        // Weakest path to an HCHO flag is the mixture floor
        if discrimination.present.formaldehyde {
            prop_assert!(n3 > 0.8 * 0.08 - f32::EPSILON);
        }
        prop_assert!(discrimination.detected_gases().len() <= 3);
        prop_assert_eq!(
            discrimination.is_clean_air(),
            discrimination.detected_gases().is_empty()
        );
    }

    #[test]
    fn processing_is_deterministic(v1 in voltage(), v2 in voltage(), v3 in voltage()) {
        let engine = AirQualityEngine::new(EngineConfig::default()).unwrap();
        let sample = SensorSample::new(v1, v2, v3);
        prop_assert_eq!(engine.process(&sample), engine.process(&sample));
    }

    #[test]
    fn concentrations_scale_linearly(n in response(), k in 1.0f32..4.0) {
        let engine = AirQualityEngine::new(EngineConfig::default()).unwrap();
        let base = engine.evaluate(&NormalizedReading::new(n, n, n).unwrap()).concentrations;
        let scaled = engine
            .evaluate(&NormalizedReading::new(n * k, n * k, n * k).unwrap())
            .concentrations;

        let expected: PerGas<f32> = base.map(|_, c| c * k);
        for (gas, c) in scaled.iter() {
            prop_assert!((c - expected[gas]).abs() <= 1e-5 * (1.0 + c.abs()));
        }
    }
}
