//! The display context object: current digit, foreground color, transport.

use palette::Srgb;

use crate::button::{ButtonChannel, ButtonEvents};
use crate::frame;
use crate::transport::{LedMatrix, PixelBus};
use crate::types::Digit;

/// Owns the mutable display state and the transport.
///
/// The control loop holds the panel. The interrupt path only ever sees the
/// [`ButtonEvents`] record, never the panel itself.
pub struct DigitPanel<B: PixelBus> {
    matrix: LedMatrix<B>,
    digit: Digit,
    foreground: Srgb<u8>,
}

impl<B: PixelBus> DigitPanel<B> {
    /// Creates the panel and immediately renders digit 0.
    pub fn new(bus: B, foreground: Srgb<u8>) -> Self {
        let mut panel = Self {
            matrix: LedMatrix::new(bus),
            digit: Digit::ZERO,
            foreground,
        };
        panel.redraw();
        panel
    }

    /// The digit currently displayed.
    pub fn digit(&self) -> Digit {
        self.digit
    }

    /// The configured foreground color.
    pub fn foreground(&self) -> Srgb<u8> {
        self.foreground
    }

    /// Displays a specific digit.
    pub fn set_digit(&mut self, digit: Digit) {
        self.digit = digit;
        self.redraw();
    }

    /// Re-renders the current digit and streams the frame.
    pub fn redraw(&mut self) {
        let frame = frame::render(self.digit, self.foreground);
        self.matrix.show(&frame);
    }

    /// Drains pending button events and updates the display.
    ///
    /// The increment channel is checked first, then the decrement channel.
    /// Each consumed event steps the digit with wraparound (9 wraps to 0 on
    /// increment, 0 to 9 on decrement) and redraws once.
    ///
    /// Returns `true` if any event was consumed.
    pub fn poll_events(&mut self, events: &ButtonEvents) -> bool {
        let mut consumed = false;

        if events.take(ButtonChannel::Increment) {
            self.digit = self.digit.wrapping_next();
            self.redraw();
            consumed = true;
        }

        if events.take(ButtonChannel::Decrement) {
            self.digit = self.digit.wrapping_prev();
            self.redraw();
            consumed = true;
        }

        consumed
    }
}
