//! HD44780 character LCD behind a PCF8574 I2C backpack
//!
//! The backpack maps the expander pins as RS=P0, RW=P1, EN=P2,
//! backlight=P3, data D4-D7=P4-P7, so the controller runs in 4-bit
//! mode and every byte goes out as two strobed nibbles. RW is tied
//! low; the driver never reads back, it waits instead.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use hearth_core::traits::{CharDisplay, DisplayError, DISPLAY_COLS, DISPLAY_ROWS};

/// Factory address of most PCF8574 backpacks
pub const DEFAULT_ADDR: u8 = 0x27;

// Expander bit assignments
const RS: u8 = 0b0000_0001;
const EN: u8 = 0b0000_0100;
const BACKLIGHT: u8 = 0b0000_1000;

// HD44780 commands
const CMD_CLEAR: u8 = 0x01;
const CMD_ENTRY_MODE: u8 = 0x06; // increment, no shift
const CMD_DISPLAY_OFF: u8 = 0x08;
const CMD_DISPLAY_ON: u8 = 0x0C; // display on, cursor off
const CMD_FUNCTION_SET: u8 = 0x28; // 4-bit, 2 lines, 5x8 font
const CMD_SET_CGRAM: u8 = 0x40;
const CMD_SET_DDRAM: u8 = 0x80;

/// DDRAM offset of the second row
const ROW1_OFFSET: u8 = 0x40;

/// HD44780 LCD driver over a PCF8574 expander
pub struct Hd44780Lcd<I2C, DELAY> {
    i2c: I2C,
    delay: DELAY,
    addr: u8,
    backlight: bool,
}

impl<I2C: I2c, DELAY: DelayNs> Hd44780Lcd<I2C, DELAY> {
    /// Create an uninitialized driver; call [`init`](Self::init)
    /// before anything else.
    pub fn new(i2c: I2C, delay: DELAY, addr: u8) -> Self {
        Self {
            i2c,
            delay,
            addr,
            backlight: false,
        }
    }

    /// Run the power-on initialization sequence into 4-bit mode
    pub fn init(&mut self) -> Result<(), DisplayError> {
        // The controller needs >40 ms after power-on before it listens
        self.delay.delay_ms(50);

        // Three times 0x03 forces a known state from any mode, then
        // 0x02 switches to 4-bit transfers
        self.write_nibble(0x03, false)?;
        self.delay.delay_ms(5);
        self.write_nibble(0x03, false)?;
        self.delay.delay_us(150);
        self.write_nibble(0x03, false)?;
        self.delay.delay_us(150);
        self.write_nibble(0x02, false)?;

        self.command(CMD_FUNCTION_SET)?;
        self.command(CMD_DISPLAY_OFF)?;
        self.command(CMD_CLEAR)?;
        self.delay.delay_ms(2);
        self.command(CMD_ENTRY_MODE)?;
        self.command(CMD_DISPLAY_ON)?;
        Ok(())
    }

    /// Push one byte to the expander, with the backlight bit folded in
    fn expander_write(&mut self, data: u8) -> Result<(), DisplayError> {
        let data = if self.backlight {
            data | BACKLIGHT
        } else {
            data
        };
        self.i2c.write(self.addr, &[data]).map_err(|_| DisplayError::Bus)
    }

    /// Strobe one nibble into the controller
    fn write_nibble(&mut self, nibble: u8, rs: bool) -> Result<(), DisplayError> {
        let mut data = (nibble & 0x0F) << 4;
        if rs {
            data |= RS;
        }
        self.expander_write(data | EN)?;
        self.delay.delay_us(1);
        self.expander_write(data)?;
        // Most commands complete in ~37 µs; wait it out instead of
        // polling the busy flag (RW is grounded on the backpack)
        self.delay.delay_us(50);
        Ok(())
    }

    fn write_raw(&mut self, byte: u8, rs: bool) -> Result<(), DisplayError> {
        self.write_nibble(byte >> 4, rs)?;
        self.write_nibble(byte & 0x0F, rs)
    }

    fn command(&mut self, cmd: u8) -> Result<(), DisplayError> {
        self.write_raw(cmd, false)
    }

    fn data(&mut self, byte: u8) -> Result<(), DisplayError> {
        self.write_raw(byte, true)
    }
}

impl<I2C: I2c, DELAY: DelayNs> CharDisplay for Hd44780Lcd<I2C, DELAY> {
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.command(CMD_CLEAR)?;
        // Clear is the slow one: ~1.5 ms
        self.delay.delay_ms(2);
        Ok(())
    }

    fn set_cursor(&mut self, row: u8, col: u8) -> Result<(), DisplayError> {
        if row >= DISPLAY_ROWS || col >= DISPLAY_COLS {
            return Err(DisplayError::InvalidPosition);
        }
        let addr = col + row * ROW1_OFFSET;
        self.command(CMD_SET_DDRAM | addr)
    }

    fn write_text(&mut self, text: &str) -> Result<(), DisplayError> {
        for byte in text.bytes() {
            self.data(byte)?;
        }
        Ok(())
    }

    fn write_glyph(&mut self, slot: u8) -> Result<(), DisplayError> {
        if slot >= 8 {
            return Err(DisplayError::InvalidGlyph);
        }
        self.data(slot)
    }

    fn define_glyph(&mut self, slot: u8, bitmap: [u8; 8]) -> Result<(), DisplayError> {
        if slot >= 8 {
            return Err(DisplayError::InvalidGlyph);
        }
        self.command(CMD_SET_CGRAM | (slot << 3))?;
        for row in bitmap {
            self.data(row)?;
        }
        // Leave the address counter back in DDRAM
        self.command(CMD_SET_DDRAM)
    }

    fn set_backlight(&mut self, on: bool) -> Result<(), DisplayError> {
        self.backlight = on;
        // Push an idle byte so the new backlight bit takes effect now
        self.expander_write(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::i2c::{ErrorType, Operation};
    use std::vec::Vec;

    /// Captures every byte written to the expander
    #[derive(Default)]
    struct MockBus {
        written: Vec<u8>,
    }

    impl ErrorType for MockBus {
        type Error = Infallible;
    }

    impl I2c for MockBus {
        fn transaction(
            &mut self,
            _address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            for op in operations {
                if let Operation::Write(bytes) = op {
                    self.written.extend_from_slice(bytes);
                }
            }
            Ok(())
        }
    }

    struct NoopDelay;

    impl DelayNs for NoopDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    fn lcd() -> Hd44780Lcd<MockBus, NoopDelay> {
        Hd44780Lcd::new(MockBus::default(), NoopDelay, DEFAULT_ADDR)
    }

    #[test]
    fn test_cursor_bounds() {
        let mut lcd = lcd();
        assert_eq!(lcd.set_cursor(2, 0), Err(DisplayError::InvalidPosition));
        assert_eq!(lcd.set_cursor(0, 16), Err(DisplayError::InvalidPosition));
        assert!(lcd.set_cursor(1, 15).is_ok());
    }

    #[test]
    fn test_cursor_addressing() {
        let mut lcd = lcd();
        lcd.set_cursor(1, 3).unwrap();

        // 0x80 | (0x40 + 3) = 0xC3, sent as nibbles 0xC then 0x3 with
        // the EN strobe on the first write of each pair
        let high = 0xC0 | EN;
        let low = 0x30 | EN;
        assert_eq!(lcd.i2c.written, [high, 0xC0, low, 0x30]);
    }

    #[test]
    fn test_glyph_slot_bounds() {
        let mut lcd = lcd();
        assert_eq!(lcd.write_glyph(8), Err(DisplayError::InvalidGlyph));
        assert_eq!(
            lcd.define_glyph(8, [0; 8]),
            Err(DisplayError::InvalidGlyph)
        );
    }

    #[test]
    fn test_backlight_bit_rides_along() {
        let mut lcd = lcd();
        lcd.set_backlight(true).unwrap();
        lcd.set_cursor(0, 0).unwrap();

        assert!(lcd.i2c.written.iter().all(|byte| byte & BACKLIGHT != 0));

        lcd.i2c.written.clear();
        lcd.set_backlight(false).unwrap();
        lcd.set_cursor(0, 0).unwrap();

        assert!(lcd.i2c.written.iter().all(|byte| byte & BACKLIGHT == 0));
    }

    #[test]
    fn test_define_glyph_returns_to_ddram() {
        let mut lcd = lcd();
        lcd.define_glyph(2, [0x1F; 8]).unwrap();

        // First command selects CGRAM slot 2 (0x40 | 0x10 = 0x50)
        assert_eq!(lcd.i2c.written[0] & 0xF0, 0x50);
        // Last command returns addressing to DDRAM (0x80)
        let len = lcd.i2c.written.len();
        assert_eq!(lcd.i2c.written[len - 4] & 0xF0, 0x80);
    }
}
