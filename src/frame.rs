//! Frame rendering: the pure mapping from digit and color to pixel words.

use palette::Srgb;

use crate::color::{self, PixelWord};
use crate::glyph::{self, PIXEL_COUNT};
use crate::types::Digit;

/// One rendered frame: the complete ordered set of pixel words for a glyph.
///
/// Pixels are index-aligned with [`Glyph`](crate::glyph::Glyph) raster
/// order. Constructed fresh per render call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pixels: [PixelWord; PIXEL_COUNT],
}

impl Frame {
    /// Returns the pixel words in transmission order.
    pub fn pixels(&self) -> &[PixelWord; PIXEL_COUNT] {
        &self.pixels
    }

    /// Number of pixels carrying a non-off word.
    pub fn lit_count(&self) -> usize {
        self.pixels.iter().filter(|&&px| px != PixelWord::OFF).count()
    }
}

/// Renders a digit into a frame with the given foreground color.
///
/// Lit glyph positions take the packed foreground word, unlit positions the
/// off word. Deterministic and side-effect free: identical inputs always
/// produce identical frames.
pub fn render(digit: Digit, foreground: Srgb<u8>) -> Frame {
    let glyph = glyph::glyph_for(digit);
    let fg = color::pack(foreground);

    let mut pixels = [PixelWord::OFF; PIXEL_COUNT];
    for (index, pixel) in pixels.iter_mut().enumerate() {
        if glyph.is_lit(index) {
            *pixel = fg;
        }
    }

    Frame { pixels }
}
