//! Character display trait

/// Number of visible rows
pub const DISPLAY_ROWS: u8 = 2;

/// Number of visible columns
pub const DISPLAY_COLS: u8 = 16;

/// Errors that can occur with display communication
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Bus transfer failed
    Bus,
    /// Cursor position outside the visible area
    InvalidPosition,
    /// Glyph slot outside CGRAM (0-7)
    InvalidGlyph,
}

/// Trait for two-line character displays
///
/// Models an HD44780-class module: a 16x2 text grid, eight
/// programmable glyph slots, and a switchable backlight.
pub trait CharDisplay {
    /// Clear the entire screen and home the cursor
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Move the cursor
    ///
    /// - `row`: row number (0-1)
    /// - `col`: column number (0-15)
    fn set_cursor(&mut self, row: u8, col: u8) -> Result<(), DisplayError>;

    /// Write ASCII text starting at the cursor
    fn write_text(&mut self, text: &str) -> Result<(), DisplayError>;

    /// Write one programmable glyph at the cursor
    fn write_glyph(&mut self, slot: u8) -> Result<(), DisplayError>;

    /// Program a 5x8 glyph bitmap into a CGRAM slot (0-7)
    ///
    /// Each byte holds one pixel row in its low five bits.
    fn define_glyph(&mut self, slot: u8, bitmap: [u8; 8]) -> Result<(), DisplayError>;

    /// Switch the backlight
    fn set_backlight(&mut self, on: bool) -> Result<(), DisplayError>;
}
