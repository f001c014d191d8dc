//! Sample acquisition seam
//!
//! The ADC driver lives outside this crate. It plugs in through
//! [`SampleSource`], a pull-based interface using the `nb` crate so the
//! same driver works on bare metal (polling) and on a host (blocking):
//!
//! - `Ok(sample)`: a sample is ready
//! - `Err(nb::Error::WouldBlock)`: conversion still in progress
//! - `Err(nb::Error::Other(e))`: acquisition failed for this cycle
//!
//! ```rust
//! use gasguard_core::{SampleSource, SensorReadError, SensorSample};
//!
//! struct Adc { ready: bool }
//!
//! impl SampleSource for Adc {
//!     fn poll_sample(&mut self) -> nb::Result<SensorSample, SensorReadError> {
//!         if !self.ready {
//!             self.ready = true;
//!             return Err(nb::Error::WouldBlock);
//!         }
//!         Ok(SensorSample::from_adc_counts_default([35000, 31000, 33000]))
//!     }
//! }
//! ```

use crate::{errors::SensorReadError, types::SensorSample};

/// Supplier of one [`SensorSample`] per cycle
pub trait SampleSource {
    /// Attempt to take the next sample
    fn poll_sample(&mut self) -> nb::Result<SensorSample, SensorReadError>;
}

impl<S: SampleSource + ?Sized> SampleSource for &mut S {
    fn poll_sample(&mut self) -> nb::Result<SensorSample, SensorReadError> {
        (**self).poll_sample()
    }
}

/// Replays recorded samples in order
///
/// Useful for bench replay and tests. Once exhausted, every poll fails with
/// an acquisition error.
#[derive(Debug, Clone)]
pub struct MemorySource<'a> {
    samples: &'a [SensorSample],
    position: usize,
}

impl<'a> MemorySource<'a> {
    /// Replay `samples` from the start
    pub fn new(samples: &'a [SensorSample]) -> Self {
        Self { samples, position: 0 }
    }

    /// Rewind to the first sample
    pub fn reset(&mut self) {
        self.position = 0;
    }

    /// Samples not yet delivered
    pub fn remaining(&self) -> usize {
        self.samples.len().saturating_sub(self.position)
    }

    /// True once every sample has been delivered
    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }
}

impl SampleSource for MemorySource<'_> {
    fn poll_sample(&mut self) -> nb::Result<SensorSample, SensorReadError> {
        let sample = self
            .samples
            .get(self.position)
            .copied()
            .ok_or(nb::Error::Other(SensorReadError::Acquisition {
                reason: "recorded samples exhausted",
            }))?;
        self.position += 1;
        Ok(sample)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_source_replays_in_order() {
        let samples = [
            SensorSample::new(1.8, 1.6, 1.7),
            SensorSample::new(1.2, 1.5, 1.6),
        ];
        let mut source = MemorySource::new(&samples);
        assert_eq!(source.remaining(), 2);

        assert_eq!(source.poll_sample(), Ok(samples[0]));
        assert_eq!(source.poll_sample(), Ok(samples[1]));
        assert!(source.is_exhausted());

        match source.poll_sample() {
            Err(nb::Error::Other(SensorReadError::Acquisition { .. })) => {}
            other => panic!("Expected acquisition error, got {:?}", other),
        }

        source.reset();
        assert_eq!(source.poll_sample(), Ok(samples[0]));
    }
}
