//! Fixed-cadence status indicator blinking.

use crate::time::{DelaySource, TimeDuration};

/// On/off cycles per blink invocation.
pub const BLINK_CYCLES: u32 = 5;

/// Time the status output holds each level, in milliseconds.
pub const BLINK_HALF_PERIOD_MILLIS: u64 = 100;

/// Trait for the status output line.
pub trait StatusLed {
    /// Drives the output high (`true`) or low (`false`).
    fn set_state(&mut self, on: bool);
}

/// Toggles a status output through a fixed number of on/off cycles per
/// invocation, independent of digit state.
///
/// # Type Parameters
/// * `L` - Status output implementation type
/// * `S` - Delay source implementation type
/// * `D` - Duration type
pub struct BlinkController<L: StatusLed, S: DelaySource<D>, D: TimeDuration> {
    led: L,
    delay: S,
    cycles: u32,
    half_period: D,
}

impl<L: StatusLed, S: DelaySource<D>, D: TimeDuration> BlinkController<L, S, D> {
    /// Creates the controller with the default cadence: 5 cycles of 100 ms
    /// on + 100 ms off, one second per invocation.
    pub fn new(led: L, delay: S) -> Self {
        Self::with_timing(
            led,
            delay,
            BLINK_CYCLES,
            D::from_millis(BLINK_HALF_PERIOD_MILLIS),
        )
    }

    /// Creates the controller with a custom cadence.
    pub fn with_timing(led: L, delay: S, cycles: u32, half_period: D) -> Self {
        Self {
            led,
            delay,
            cycles,
            half_period,
        }
    }

    /// Runs one full blink invocation.
    ///
    /// Blocks the calling context for the entire duration (cycles times two
    /// half-periods). In a blink-then-poll loop this bounds button latency:
    /// a pending event can wait up to one full invocation (about a second
    /// at the default cadence) before it is acted on - a scheduling
    /// consequence of the loop, not of the input controller.
    pub fn run_cycle(&mut self) {
        for _ in 0..self.cycles {
            self.led.set_state(true);
            self.delay.delay(self.half_period);
            self.led.set_state(false);
            self.delay.delay(self.half_period);
        }
    }
}
