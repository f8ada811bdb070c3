//! Debounced button input: interrupt-context edge filtering and the
//! pending-event hand-off to the polling consumer.
//!
//! Provides [`ButtonInput`], which turns noisy falling-edge interrupts on
//! the two button lines into debounced, coalesced logical events, and
//! [`ButtonEvents`], the atomic flag record those events are delivered
//! through. Also defines the [`ButtonPin`] trait for level sampling.

use core::sync::atomic::{AtomicBool, Ordering};

use crate::time::{TimeDuration, TimeInstant};

/// Debounce window applied to each button channel, in milliseconds.
pub const DEBOUNCE_WINDOW_MILLIS: u64 = 200;

/// The two logical button channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonChannel {
    /// Advances the displayed digit.
    Increment,

    /// Retreats the displayed digit.
    Decrement,
}

impl ButtonChannel {
    const fn index(self) -> usize {
        match self {
            ButtonChannel::Increment => 0,
            ButtonChannel::Decrement => 1,
        }
    }
}

/// Pending-event flags shared between the edge handler and the polling
/// consumer, one per channel.
///
/// The interrupt context raises flags, the consumer takes them. The atomic
/// swap in [`take`](Self::take) means an edge raised concurrently with a
/// take is either observed by that take or left pending for the next poll,
/// never lost. `const`-constructible so the record can live in a `static`.
pub struct ButtonEvents {
    pending: [AtomicBool; 2],
}

impl ButtonEvents {
    /// Creates the record with no events pending.
    pub const fn new() -> Self {
        Self {
            pending: [AtomicBool::new(false), AtomicBool::new(false)],
        }
    }

    /// Raises a channel's pending flag.
    ///
    /// Raising an already-set flag changes nothing: events between two
    /// consumption points collapse to one.
    pub(crate) fn raise(&self, channel: ButtonChannel) {
        self.pending[channel.index()].store(true, Ordering::Release);
    }

    /// Atomically reads and clears a channel's pending flag.
    ///
    /// A `true` result authorizes exactly one digit step; subsequent takes
    /// return `false` until a new edge is accepted.
    pub fn take(&self, channel: ButtonChannel) -> bool {
        self.pending[channel.index()].swap(false, Ordering::AcqRel)
    }

    /// Returns whether an event is pending without consuming it.
    pub fn is_pending(&self, channel: ButtonChannel) -> bool {
        self.pending[channel.index()].load(Ordering::Acquire)
    }
}

impl Default for ButtonEvents {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for sampling a button's input level.
///
/// The buttons are wired active-low with pull-ups; implementations report
/// `true` while the line reads low.
pub trait ButtonPin {
    /// Samples the line. Returns `true` while the button reads pressed.
    fn is_pressed(&mut self) -> bool;
}

struct EdgeChannel<P: ButtonPin, I: TimeInstant> {
    pin: P,
    last_accepted: Option<I>,
}

impl<P: ButtonPin, I: TimeInstant> EdgeChannel<P, I> {
    fn accept(&mut self, now: I, window: I::Duration) -> bool {
        if let Some(last) = self.last_accepted {
            if now.duration_since(last).as_micros() <= window.as_micros() {
                return false;
            }
        }

        // The edge fired some microseconds ago; count it only if the line
        // still reads pressed, filtering bounce that already released.
        if !self.pin.is_pressed() {
            return false;
        }

        self.last_accepted = Some(now);
        true
    }
}

/// Converts raw falling-edge interrupts on the two button lines into
/// debounced, coalesced logical events.
///
/// Owned by the interrupt context. Each channel keeps its own
/// last-accepted timestamp; the only state shared with the consumer is the
/// [`ButtonEvents`] record.
///
/// # Type Parameters
/// * `'e` - Lifetime of the shared event record
/// * `A` - Increment pin type
/// * `B` - Decrement pin type
/// * `I` - Time instant type
pub struct ButtonInput<'e, A: ButtonPin, B: ButtonPin, I: TimeInstant> {
    increment: EdgeChannel<A, I>,
    decrement: EdgeChannel<B, I>,
    events: &'e ButtonEvents,
    window: I::Duration,
}

impl<'e, A: ButtonPin, B: ButtonPin, I: TimeInstant> ButtonInput<'e, A, B, I> {
    /// Creates the controller with the default 200 ms debounce window.
    pub fn new(increment_pin: A, decrement_pin: B, events: &'e ButtonEvents) -> Self {
        Self::with_window(
            increment_pin,
            decrement_pin,
            events,
            I::Duration::from_millis(DEBOUNCE_WINDOW_MILLIS),
        )
    }

    /// Creates the controller with a custom debounce window.
    pub fn with_window(
        increment_pin: A,
        decrement_pin: B,
        events: &'e ButtonEvents,
        window: I::Duration,
    ) -> Self {
        Self {
            increment: EdgeChannel {
                pin: increment_pin,
                last_accepted: None,
            },
            decrement: EdgeChannel {
                pin: decrement_pin,
                last_accepted: None,
            },
            events,
            window,
        }
    }

    /// Handles a falling-edge interrupt on a button line.
    ///
    /// Call from the interrupt handler with the triggering channel and the
    /// current monotonic time. An edge is accepted only if the channel's
    /// debounce window has elapsed since its last accepted edge and the pin
    /// still reads pressed; acceptance raises the channel's pending flag
    /// and rebases its timestamp. Edges inside the window are silently
    /// discarded and touch neither. The first edge after startup always
    /// passes the window check.
    ///
    /// A button held past the debounce window re-arms and emits another
    /// event without a release cycle - the window only has to elapse. This
    /// repeat-fire behavior is intended.
    ///
    /// Never blocks and never touches the display.
    pub fn handle_edge(&mut self, channel: ButtonChannel, now: I) {
        let accepted = match channel {
            ButtonChannel::Increment => self.increment.accept(now, self.window),
            ButtonChannel::Decrement => self.decrement.accept(now, self.window),
        };

        if accepted {
            self.events.raise(channel);
        }
    }

    /// The increment pin, for platform interrupt bookkeeping.
    pub fn increment_pin_mut(&mut self) -> &mut A {
        &mut self.increment.pin
    }

    /// The decrement pin, for platform interrupt bookkeeping.
    pub fn decrement_pin_mut(&mut self) -> &mut B {
        &mut self.decrement.pin
    }
}
