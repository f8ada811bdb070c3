//! Wire-format color encoding for the LED chain.
//!
//! Each element on the chain consumes one 32-bit word per transmission
//! cycle, green channel first. The word therefore packs green into the
//! highest byte, then red, then blue; the lowest byte is unused and stays
//! zero. This channel ordering is a wire-format contract.

use palette::Srgb;

/// A single pixel's color, packed for the serial wire protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PixelWord(u32);

impl PixelWord {
    /// The "off" word: all channels zero.
    pub const OFF: Self = PixelWord(0);

    /// Returns the raw 32-bit word as sent on the wire.
    pub fn value(&self) -> u32 {
        self.0
    }
}

/// Packs an 8-bit RGB color into the chain's GRB word layout.
pub fn pack(color: Srgb<u8>) -> PixelWord {
    PixelWord(
        ((color.green as u32) << 24) | ((color.red as u32) << 16) | ((color.blue as u32) << 8),
    )
}

impl From<Srgb<u8>> for PixelWord {
    fn from(color: Srgb<u8>) -> Self {
        pack(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn off_word_is_all_zero() {
        assert_eq!(PixelWord::OFF.value(), 0);
        assert_eq!(pack(Srgb::new(0u8, 0, 0)), PixelWord::OFF);
    }

    #[test]
    fn pack_orders_green_red_blue_high_to_low() {
        let word = pack(Srgb::new(0x11u8, 0x22, 0x33));
        assert_eq!(word.value(), 0x2211_3300);
    }

    #[test]
    fn low_byte_stays_zero() {
        let word = pack(Srgb::new(0xFFu8, 0xFF, 0xFF));
        assert_eq!(word.value() & 0xFF, 0);
    }
}
