//! Screen rendering
//!
//! Formats the two 16-column status lines and draws them, with the
//! trend glyph on the top row and the mood glyph on the bottom row.

pub mod glyphs;

pub use glyphs::Glyph;

use core::fmt::Write as _;

use heapless::String;

use crate::status::{StatusFrame, Trend};
use crate::traits::{CharDisplay, DisplayError};

/// Column where the trend and mood glyphs sit
pub const GLYPH_COL: u8 = 12;

/// Append a 0.1-resolution fixed-point value as "whole.frac"
///
/// Handles the -0.x case that integer division would render as 0.x.
fn push_x10(line: &mut String<16>, value_x10: i32) {
    let whole = value_x10 / 10;
    let frac = (value_x10 % 10).abs();
    if value_x10 < 0 && whole == 0 {
        let _ = write!(line, "-0.{}", frac);
    } else {
        let _ = write!(line, "{}.{}", whole, frac);
    }
}

/// Format the top row: "Temp: 72.5F"
pub fn temp_line(temp_f_x10: i16) -> String<16> {
    let mut line = String::new();
    let _ = line.push_str("Temp: ");
    push_x10(&mut line, temp_f_x10 as i32);
    let _ = line.push('F');
    line
}

/// Format the bottom row: "Humi: 45.0%"
pub fn humidity_line(humidity_x10: u16) -> String<16> {
    let mut line = String::new();
    let _ = line.push_str("Humi: ");
    push_x10(&mut line, humidity_x10 as i32);
    let _ = line.push('%');
    line
}

/// Glyph shown for each trend direction
pub fn trend_glyph(trend: Trend) -> Glyph {
    match trend {
        Trend::Stable => Glyph::RightArrow,
        Trend::Rising => Glyph::UpArrow,
        Trend::Lowering => Glyph::DownArrow,
    }
}

/// Glyph shown for the humidity mood
pub fn mood_glyph(comfortable: bool) -> Glyph {
    if comfortable {
        Glyph::Happy
    } else {
        Glyph::Sad
    }
}

/// Program every custom glyph into the display
pub fn load_glyphs<D: CharDisplay>(lcd: &mut D) -> Result<(), DisplayError> {
    for glyph in Glyph::ALL {
        lcd.define_glyph(glyph.slot(), glyph.bitmap())?;
    }
    Ok(())
}

/// Clear and redraw the full status screen
pub fn draw<D: CharDisplay>(lcd: &mut D, frame: &StatusFrame) -> Result<(), DisplayError> {
    lcd.clear()?;

    lcd.set_cursor(0, 0)?;
    lcd.write_text(&temp_line(frame.temp_f_x10))?;
    lcd.set_cursor(0, GLYPH_COL)?;
    lcd.write_glyph(trend_glyph(frame.trend).slot())?;

    lcd.set_cursor(1, 0)?;
    lcd.write_text(&humidity_line(frame.humidity_x10))?;
    lcd.set_cursor(1, GLYPH_COL)?;
    lcd.write_glyph(mood_glyph(frame.comfortable).slot())?;

    Ok(())
}
