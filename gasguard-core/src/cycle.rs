//! Cycle Controller
//!
//! Drives sample → normalize → estimate → classify → discriminate once per
//! period and owns the cadence policy.
//!
//! ## Scheduling
//!
//! The controller never sleeps. The caller invokes [`CycleController::poll`]
//! from its own timer or main loop; a cycle runs only once the period has
//! elapsed since the previous scheduled slot. Missed slots (the caller was
//! late by more than one period) are skipped rather than replayed, so a
//! stalled node does not burst through stale cycles.
//!
//! ```text
//! t:     0        4000      8000      12000
//!        │ cycle   │ cycle   │ (late)   │ cycle at 13100, next due 16000
//! ```
//!
//! ## Failures
//!
//! A failed acquisition or invalid reading abandons that cycle only. The
//! error is returned to the caller, logged and counted; the next slot runs
//! exactly as it would have. There is no retry within a cycle.
//!
//! ## Cancellation
//!
//! [`CycleController::stop`] is cooperative: after it, `poll` schedules
//! nothing. A cycle in progress always completes, and each cycle either
//! yields a whole result or a failure.

use crate::{
    config::EngineConfig,
    engine::{AirQualityEngine, DiscriminationResult},
    errors::{ConfigResult, ReadResult, SensorReadError},
    source::SampleSource,
    time::{TimeSource, Timestamp},
};

/// Result of one cycle: a complete result or an explicit failure
pub type CycleOutcome = ReadResult<DiscriminationResult>;

/// Counters for telemetry
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CycleStats {
    /// Cycles that produced a result
    pub completed: u64,
    /// Cycles abandoned with an error
    pub failed: u64,
    /// Most recent failure, if any
    pub last_error: Option<SensorReadError>,
    /// Start time of the most recent cycle
    pub last_cycle_at: Option<Timestamp>,
}

impl CycleStats {
    /// Total cycles attempted
    pub fn attempted(&self) -> u64 {
        self.completed + self.failed
    }
}

/// Periodic driver around an [`AirQualityEngine`]
pub struct CycleController<S, T> {
    engine: AirQualityEngine,
    source: S,
    clock: T,
    period_ms: u64,
    next_due: Option<Timestamp>,
    stopped: bool,
    stats: CycleStats,
}

impl<S: SampleSource, T: TimeSource> CycleController<S, T> {
    /// Build from a configuration; refuses invalid ones
    pub fn new(config: EngineConfig, source: S, clock: T) -> ConfigResult<Self> {
        let engine = AirQualityEngine::new(config)?;

        log_info!(
            "cycle controller ready: period {} ms, activation threshold {}",
            config.cycle_period_ms,
            config.activation_threshold
        );

        Ok(Self {
            engine,
            source,
            clock,
            period_ms: config.cycle_period_ms,
            next_due: None,
            stopped: false,
            stats: CycleStats::default(),
        })
    }

    /// Run a cycle if one is due
    ///
    /// Returns `None` when the period has not elapsed or the controller is
    /// stopped. The first poll always runs a cycle.
    pub fn poll(&mut self) -> Option<CycleOutcome> {
        if self.stopped {
            return None;
        }

        let now = self.clock.now();
        let due = self.next_due.unwrap_or(now);
        if now < due {
            return None;
        }

        let missed = (now - due) / self.period_ms;
        if missed > 0 {
            log_warn!("skipping {} missed cycle slot(s)", missed);
        }
        self.next_due = Some(due.saturating_add((missed + 1).saturating_mul(self.period_ms)));

        Some(self.run_cycle())
    }

    /// Run exactly one cycle now, regardless of schedule
    pub fn run_cycle(&mut self) -> CycleOutcome {
        self.stats.last_cycle_at = Some(self.clock.now());

        let outcome = nb::block!(self.source.poll_sample())
            .and_then(|sample| self.engine.process(&sample));

        match &outcome {
            Ok(result) => {
                self.stats.completed += 1;
                log_debug!(
                    "cycle ok: severity {} ({}), gases {:?}, rule {:?}",
                    result.severity(),
                    result.severity_index(),
                    result.detected_gases(),
                    result.rule
                );
            }
            Err(err) => {
                self.stats.failed += 1;
                self.stats.last_error = Some(*err);
                log_warn!("cycle abandoned: {}", err);
            }
        }

        outcome
    }

    /// Stop scheduling further cycles
    pub fn stop(&mut self) {
        if !self.stopped {
            log_info!("cycle controller stopped after {} cycles", self.stats.attempted());
        }
        self.stopped = true;
    }

    /// True once [`stop`](Self::stop) was called
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Milliseconds until the next cycle is due, `None` when stopped
    pub fn millis_until_next(&self) -> Option<u64> {
        if self.stopped {
            return None;
        }
        Some(
            self.next_due
                .map_or(0, |due| due.saturating_sub(self.clock.now())),
        )
    }

    /// Cycle period in milliseconds
    pub fn period_ms(&self) -> u64 {
        self.period_ms
    }

    /// Telemetry counters
    pub fn stats(&self) -> &CycleStats {
        &self.stats
    }

    /// Engine in use
    pub fn engine(&self) -> &AirQualityEngine {
        &self.engine
    }

    /// Sample source
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Time source
    pub fn clock_mut(&mut self) -> &mut T {
        &mut self.clock
    }
}
