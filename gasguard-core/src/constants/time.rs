//! Time-Related Constants

/// Milliseconds per second.
pub const MS_PER_SECOND: u64 = 1000;

/// Default cycle period (milliseconds).
///
/// MQ sensors settle within 1-2 s of a concentration step; sampling every
/// 4 s keeps consecutive cycles independent.
pub const DEFAULT_CYCLE_PERIOD_MS: u64 = 4 * MS_PER_SECOND;
