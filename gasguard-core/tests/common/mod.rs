//! Common fixtures for integration tests
//!
//! - A simulated 80 s exposure cycle reproducing the bench rig: clean air,
//!   then ozone, NO2, formaldehyde and finally a mixture
//! - A scripted sample source that can stall or fail on demand

#![allow(dead_code)]

use std::collections::VecDeque;

use gasguard_core::{
    constants::{MQ131_BASELINE_V, MQ135_BASELINE_V, MQ138_BASELINE_V},
    SampleSource, SensorReadError, SensorSample, TargetGas,
};

pub mod scenarios;

/// Lowest voltage the simulated sensors fall to
pub const VOLTAGE_FLOOR: f32 = 0.8;

/// Volts of drop per unit of exposure, per channel
pub const RESPONSE_SLOPE: [f32; 3] = [0.8, 0.7, 0.7];

/// Length of one full simulated exposure cycle
pub const EXPOSURE_CYCLE_SECS: u64 = 80;

/// Phase of the simulated exposure cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GasPhase {
    Clean,
    Ozone,
    NitrogenDioxide,
    Formaldehyde,
    Mixture,
}

impl GasPhase {
    /// Phase active `secs` into the cycle
    pub fn at(secs: u64) -> Self {
        match secs % EXPOSURE_CYCLE_SECS {
            0..=19 => Self::Clean,
            20..=34 => Self::Ozone,
            35..=49 => Self::NitrogenDioxide,
            50..=64 => Self::Formaldehyde,
            _ => Self::Mixture,
        }
    }

    /// Exposure felt by MQ-131, MQ-135, MQ-138
    pub fn exposure(self) -> [f32; 3] {
        match self {
            Self::Clean => [0.0, 0.0, 0.0],
            Self::Ozone => [0.6, 0.1, 0.05],
            Self::NitrogenDioxide => [0.3, 0.8, 0.2],
            Self::Formaldehyde => [0.1, 0.3, 0.9],
            Self::Mixture => [0.4, 0.5, 0.4],
        }
    }

    /// Gas the phase is built around, `None` for clean air and mixture
    pub fn target(self) -> Option<TargetGas> {
        match self {
            Self::Ozone => Some(TargetGas::Ozone),
            Self::NitrogenDioxide => Some(TargetGas::NitrogenDioxide),
            Self::Formaldehyde => Some(TargetGas::Formaldehyde),
            Self::Clean | Self::Mixture => None,
        }
    }

    /// Whether a detection counts as correct for this phase
    ///
    /// Clean air must flag nothing, a mixture at least two gases, and a
    /// single-gas phase must include its target.
    pub fn accepts(self, detected: &[TargetGas]) -> bool {
        match self {
            Self::Clean => detected.is_empty(),
            Self::Mixture => detected.len() >= 2,
            _ => self.target().map_or(false, |gas| detected.contains(&gas)),
        }
    }
}

/// Deterministic generator for the simulated exposure cycle
pub struct GasCycleGenerator {
    seed: u32,
    noise_volts: f32,
}

impl GasCycleGenerator {
    /// Generator with uniform noise in `±noise_volts`
    pub fn new(noise_volts: f32) -> Self {
        Self { seed: 42, noise_volts }
    }

    /// Sample taken `secs` into the run
    pub fn sample_at(&mut self, secs: u64) -> SensorSample {
        let exposure = GasPhase::at(secs).exposure();
        let baselines = [MQ131_BASELINE_V, MQ135_BASELINE_V, MQ138_BASELINE_V];

        let mut volts = [0.0f32; 3];
        for i in 0..3 {
            let noise = self.random_noise();
            volts[i] = (baselines[i] - exposure[i] * RESPONSE_SLOPE[i] + noise).max(VOLTAGE_FLOOR);
        }
        SensorSample::new(volts[0], volts[1], volts[2])
    }

    /// One sample every `step_secs` for `duration_secs`
    pub fn series(&mut self, step_secs: u64, duration_secs: u64) -> Vec<(u64, GasPhase, SensorSample)> {
        (0..duration_secs)
            .step_by(step_secs as usize)
            .map(|secs| (secs, GasPhase::at(secs), self.sample_at(secs)))
            .collect()
    }

    fn random_noise(&mut self) -> f32 {
        self.seed = self.seed.wrapping_mul(1664525).wrapping_add(1013904223);
        let uniform = (self.seed as f32) / (u32::MAX as f32);
        (uniform * 2.0 - 1.0) * self.noise_volts
    }
}

/// One scripted response from [`ScriptedSource`]
#[derive(Debug, Clone, Copy)]
pub enum Step {
    /// Deliver a sample after `busy_polls` WouldBlock answers
    Sample { sample: SensorSample, busy_polls: u8 },
    /// Fail acquisition
    Fail(&'static str),
}

impl Step {
    pub fn ready(sample: SensorSample) -> Self {
        Self::Sample { sample, busy_polls: 0 }
    }
}

/// Source that plays back a script of samples and failures
pub struct ScriptedSource {
    script: VecDeque<Step>,
    polls: usize,
}

impl ScriptedSource {
    pub fn new(script: impl IntoIterator<Item = Step>) -> Self {
        Self { script: script.into_iter().collect(), polls: 0 }
    }

    /// Total calls to `poll_sample`, WouldBlock included
    pub fn polls(&self) -> usize {
        self.polls
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl SampleSource for ScriptedSource {
    fn poll_sample(&mut self) -> nb::Result<SensorSample, SensorReadError> {
        self.polls += 1;
        match self.script.front_mut() {
            Some(Step::Sample { busy_polls, .. }) if *busy_polls > 0 => {
                *busy_polls -= 1;
                Err(nb::Error::WouldBlock)
            }
            Some(_) => match self.script.pop_front() {
                Some(Step::Sample { sample, .. }) => Ok(sample),
                Some(Step::Fail(reason)) => Err(nb::Error::Other(SensorReadError::Acquisition { reason })),
                None => unreachable!(),
            },
            None => Err(nb::Error::Other(SensorReadError::Acquisition { reason: "script finished" })),
        }
    }
}
