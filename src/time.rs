//! Time abstraction traits for platform-agnostic timing.
//!
//! Debounce and cadence logic runs against these traits instead of a real
//! clock, so it can be exercised on the host by advancing a mock time source.

/// Trait for abstracting monotonic time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to microseconds.
    fn as_micros(&self) -> u64;

    /// Creates duration from microseconds.
    fn from_micros(micros: u64) -> Self;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self {
        Self::from_micros(millis * 1_000)
    }
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}

/// Trait for blocking delays.
pub trait DelaySource<D: TimeDuration> {
    /// Blocks the calling context for the full duration.
    fn delay(&mut self, duration: D);
}
