//! Custom 5x8 glyph bitmaps
//!
//! Loaded into the display's programmable character slots at boot.
//! Slot numbers double as the byte written to show the glyph.

/// The programmable glyphs and their CGRAM slot assignments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Glyph {
    Happy = 0,
    Sad = 1,
    RightArrow = 2,
    UpArrow = 3,
    DownArrow = 4,
    OkSign = 5,
}

const HAPPY: [u8; 8] = [
    0b00000, 0b01010, 0b01010, 0b00000, 0b00000, 0b10001, 0b01110, 0b00000,
];

const SAD: [u8; 8] = [
    0b00000, 0b01010, 0b01010, 0b00000, 0b00000, 0b01110, 0b10001, 0b00000,
];

const RIGHT_ARROW: [u8; 8] = [
    0b00000, 0b00000, 0b00100, 0b00010, 0b11101, 0b00010, 0b00100, 0b00000,
];

const UP_ARROW: [u8; 8] = [
    0b01111, 0b00011, 0b00101, 0b01001, 0b10000, 0b00111, 0b00010, 0b00010,
];

const DOWN_ARROW: [u8; 8] = [
    0b00111, 0b00010, 0b00010, 0b10000, 0b01001, 0b00101, 0b00011, 0b01111,
];

const OK_SIGN: [u8; 8] = [
    0b01000, 0b10100, 0b10100, 0b01000, 0b00000, 0b00101, 0b00110, 0b00101,
];

impl Glyph {
    /// Every glyph, in slot order
    pub const ALL: [Glyph; 6] = [
        Glyph::Happy,
        Glyph::Sad,
        Glyph::RightArrow,
        Glyph::UpArrow,
        Glyph::DownArrow,
        Glyph::OkSign,
    ];

    /// CGRAM slot this glyph occupies
    pub fn slot(self) -> u8 {
        self as u8
    }

    /// 5x8 pixel rows, one per byte
    pub fn bitmap(self) -> [u8; 8] {
        match self {
            Glyph::Happy => HAPPY,
            Glyph::Sad => SAD,
            Glyph::RightArrow => RIGHT_ARROW,
            Glyph::UpArrow => UP_ARROW,
            Glyph::DownArrow => DOWN_ARROW,
            Glyph::OkSign => OK_SIGN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slots_match_order() {
        for (i, glyph) in Glyph::ALL.iter().enumerate() {
            assert_eq!(glyph.slot() as usize, i);
        }
    }

    #[test]
    fn test_bitmaps_fit_five_columns() {
        for glyph in Glyph::ALL {
            for row in glyph.bitmap() {
                assert!(row < 0b100000);
            }
        }
    }
}
