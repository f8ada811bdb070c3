#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Digit`**: A validated decimal digit 0-9 with wraparound stepping
//! - **`Glyph` / `DIGIT_GLYPHS`**: Fixed 5x5 on/off bitmaps, one per digit
//! - **`Frame`**: The 25 packed pixel words rendered from a digit and a color
//! - **`ButtonInput`**: Debounced edge-to-event state machine for the two buttons
//! - **`ButtonEvents`**: Atomic pending flags between interrupt and poll contexts
//! - **`LedMatrix` / `PixelBus`**: Blocking frame transport over the serial wire protocol
//! - **`BlinkController` / `StatusLed`**: Fixed-cadence status indicator
//! - **`DigitPanel`**: Context object tying digit, color and transport together
//! - **`TimeSource` / `DelaySource`**: Traits to implement for your timing system
//!
//! Colors are `Srgb<u8>` (8-bit channels); [`color::pack`] encodes them into
//! the chain's GRB wire words.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod time;
pub mod types;
pub mod color;
pub mod glyph;
pub mod frame;
pub mod button;
pub mod transport;
pub mod blink;
pub mod display;

pub use blink::{BLINK_CYCLES, BLINK_HALF_PERIOD_MILLIS, BlinkController, StatusLed};
pub use button::{ButtonChannel, ButtonEvents, ButtonInput, ButtonPin, DEBOUNCE_WINDOW_MILLIS};
pub use color::PixelWord;
pub use display::DigitPanel;
pub use frame::{Frame, render};
pub use glyph::{DIGIT_GLYPHS, Glyph, MATRIX_HEIGHT, MATRIX_WIDTH, PIXEL_COUNT};
pub use time::{DelaySource, TimeDuration, TimeInstant, TimeSource};
pub use transport::{LedMatrix, PixelBus};
pub use types::{Digit, DigitError};

/// Default foreground color for lit pixels: a dim violet.
pub const DEFAULT_FOREGROUND: Srgb<u8> = Srgb::new(50, 0, 60);

#[cfg(test)]
mod tests {
    use super::*;

    // Basic compilation tests - behavioral tests live with their modules
    #[test]
    fn types_compile() {
        let _ = ButtonChannel::Increment;
        let _ = ButtonChannel::Decrement;
        let _ = PixelWord::OFF;
        let _ = Digit::ZERO;
        let _ = DEFAULT_FOREGROUND;
    }
}
