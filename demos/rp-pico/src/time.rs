//! Hardware timer wrappers for the digit-matrix time traits.
//!
//! This module wraps the RP2040 hardware timer (using fugit types) to
//! implement the digit-matrix time traits, plus a SysTick-backed blocking
//! delay source.

use fugit::{MicrosDurationU64, TimerInstantU64};

use digit_matrix::{DelaySource, TimeDuration, TimeInstant, TimeSource};

/// Duration type backed by fugit microsecond duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Duration(MicrosDurationU64);

impl TimeDuration for Duration {
    const ZERO: Self = Duration(MicrosDurationU64::from_ticks(0));

    fn as_micros(&self) -> u64 {
        self.0.to_micros()
    }

    fn from_micros(micros: u64) -> Self {
        Duration(MicrosDurationU64::micros(micros))
    }
}

/// Instant type backed by fugit timer instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Instant(TimerInstantU64<1_000_000>);

impl TimeInstant for Instant {
    type Duration = Duration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        let ticks = self.0.ticks().saturating_sub(earlier.0.ticks());
        Duration(MicrosDurationU64::from_ticks(ticks))
    }
}

impl From<TimerInstantU64<1_000_000>> for Instant {
    fn from(instant: TimerInstantU64<1_000_000>) -> Self {
        Instant(instant)
    }
}

/// Time source wrapper around the RP2040 Timer
pub struct HardwareTimer {
    timer: rp_pico::hal::Timer,
}

impl HardwareTimer {
    /// Create a new hardware timer wrapper
    pub fn new(timer: rp_pico::hal::Timer) -> Self {
        Self { timer }
    }
}

impl TimeSource<Instant> for HardwareTimer {
    fn now(&self) -> Instant {
        Instant(self.timer.get_counter())
    }
}

/// Blocking delay source backed by the SysTick timer
pub struct SystickDelay(cortex_m::delay::Delay);

impl SystickDelay {
    pub fn new(delay: cortex_m::delay::Delay) -> Self {
        Self(delay)
    }
}

impl DelaySource<Duration> for SystickDelay {
    fn delay(&mut self, duration: Duration) {
        self.0.delay_us(duration.as_micros() as u32);
    }
}
