//! DHT11 single-wire temperature/humidity sensor
//!
//! The DHT11 talks over one open-drain line. The host holds the line
//! low for 18 ms to request a sample, then the sensor answers with an
//! ~80 µs low/high preamble followed by 40 bits. Each bit starts with
//! ~50 µs low; the length of the following high phase encodes the
//! value (~26 µs = 0, ~70 µs = 1). The fifth byte is a checksum over
//! the first four.
//!
//! Minimum sampling period is about one second; callers are expected
//! to pace reads themselves.

use embedded_hal::delay::DelayNs;

use hearth_core::traits::{ClimateSensor, RawReading, SensorError};

/// Open-drain line abstraction for the single-wire bus
///
/// The line idles high through a pull-up. Implementations switch the
/// pin between driven-low output and floating input.
pub trait SensorLine {
    /// Drive the line low
    fn set_low(&mut self);

    /// Release the line and let the pull-up raise it
    fn release(&mut self);

    /// Sample the line level
    fn is_high(&mut self) -> bool;
}

/// Host start-signal hold time (ms)
const START_LOW_MS: u32 = 18;

/// Longest level phase the protocol allows before we declare a timeout (µs)
const PHASE_TIMEOUT_US: u32 = 120;

/// High phases longer than this decode as a 1 bit (µs)
const BIT_THRESHOLD_US: u32 = 40;

/// DHT11 driver, generic over the data line and a delay source
pub struct Dht11<LINE, DELAY> {
    line: LINE,
    delay: DELAY,
}

impl<LINE: SensorLine, DELAY: DelayNs> Dht11<LINE, DELAY> {
    /// Create a driver on a released (idle-high) line
    pub fn new(line: LINE, delay: DELAY) -> Self {
        Self { line, delay }
    }

    /// Busy-wait until the line reaches `level`, in ~1 µs steps
    ///
    /// Returns the time spent waiting, which doubles as the length of
    /// the phase that just ended.
    fn wait_for(&mut self, level: bool, timeout_us: u32) -> Result<u32, SensorError> {
        let mut elapsed_us = 0;
        while self.line.is_high() != level {
            if elapsed_us >= timeout_us {
                return Err(SensorError::Timeout);
            }
            self.delay.delay_us(1);
            elapsed_us += 1;
        }
        Ok(elapsed_us)
    }

    /// Read one bit: 50 µs low preamble, then a timed high phase
    fn read_bit(&mut self) -> Result<bool, SensorError> {
        self.wait_for(false, PHASE_TIMEOUT_US)?;
        self.wait_for(true, PHASE_TIMEOUT_US)?;
        let high_us = self.wait_for(false, PHASE_TIMEOUT_US)?;
        Ok(high_us > BIT_THRESHOLD_US)
    }

    fn read_byte(&mut self) -> Result<u8, SensorError> {
        let mut byte = 0u8;
        for _ in 0..8 {
            byte = (byte << 1) | self.read_bit()? as u8;
        }
        Ok(byte)
    }

    /// Run one full transfer: start signal, preamble, five bytes
    fn transfer(&mut self) -> Result<[u8; 5], SensorError> {
        self.line.set_low();
        self.delay.delay_ms(START_LOW_MS);
        self.line.release();

        // Sensor response preamble: pulls low ~80 µs, then high ~80 µs.
        // The first data bit begins at the next falling edge, which
        // read_bit picks up.
        self.wait_for(false, PHASE_TIMEOUT_US)?;
        self.wait_for(true, PHASE_TIMEOUT_US)?;

        let mut data = [0u8; 5];
        for byte in &mut data {
            *byte = self.read_byte()?;
        }
        Ok(data)
    }
}

/// Decode a five-byte frame into a raw reading
///
/// Byte layout: humidity integral, humidity decimal, temperature
/// integral, temperature decimal, checksum. Bit 7 of the temperature
/// decimal byte flags a negative value on some parts.
fn decode(data: [u8; 5]) -> Result<RawReading, SensorError> {
    let sum = data[0]
        .wrapping_add(data[1])
        .wrapping_add(data[2])
        .wrapping_add(data[3]);
    if sum != data[4] {
        return Err(SensorError::ChecksumMismatch);
    }

    let humidity_x10 = data[0] as u16 * 10 + data[1] as u16;

    let mut temp_c_x10 = data[2] as i16 * 10 + (data[3] & 0x7F) as i16;
    if data[3] & 0x80 != 0 {
        temp_c_x10 = -temp_c_x10;
    }

    // 0-100 %RH and -40..80 °C covers the whole DHT11/DHT12 family
    if humidity_x10 > 1000 || !(-400..=800).contains(&temp_c_x10) {
        return Err(SensorError::OutOfRange);
    }

    Ok(RawReading {
        temp_c_x10,
        humidity_x10,
    })
}

impl<LINE: SensorLine, DELAY: DelayNs> ClimateSensor for Dht11<LINE, DELAY> {
    fn read(&mut self) -> Result<RawReading, SensorError> {
        let data = self.transfer()?;
        decode(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(h_int: u8, h_dec: u8, t_int: u8, t_dec: u8) -> [u8; 5] {
        let sum = h_int
            .wrapping_add(h_dec)
            .wrapping_add(t_int)
            .wrapping_add(t_dec);
        [h_int, h_dec, t_int, t_dec, sum]
    }

    #[test]
    fn test_decode_typical_frame() {
        let reading = decode(frame(45, 5, 23, 4)).unwrap();
        assert_eq!(reading.humidity_x10, 455);
        assert_eq!(reading.temp_c_x10, 234);
    }

    #[test]
    fn test_decode_negative_temperature() {
        let reading = decode(frame(60, 0, 2, 0x85)).unwrap();
        assert_eq!(reading.temp_c_x10, -25);
    }

    #[test]
    fn test_decode_bad_checksum() {
        let mut data = frame(45, 0, 23, 0);
        data[4] ^= 0x01;
        assert_eq!(decode(data), Err(SensorError::ChecksumMismatch));
    }

    #[test]
    fn test_decode_out_of_range() {
        // 110 % humidity cannot come from a working sensor
        assert_eq!(decode(frame(110, 0, 23, 0)), Err(SensorError::OutOfRange));
        // 90 °C is past the family's ceiling
        assert_eq!(decode(frame(45, 0, 90, 0)), Err(SensorError::OutOfRange));
    }

    /// Line stuck at one level; a read must time out, not hang
    struct StuckLine(bool);

    impl SensorLine for StuckLine {
        fn set_low(&mut self) {}
        fn release(&mut self) {}
        fn is_high(&mut self) -> bool {
            self.0
        }
    }

    /// Delay source that returns immediately
    struct NoopDelay;

    impl DelayNs for NoopDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    #[test]
    fn test_stuck_high_line_times_out() {
        let mut sensor = Dht11::new(StuckLine(true), NoopDelay);
        assert_eq!(sensor.read(), Err(SensorError::Timeout));
    }

    #[test]
    fn test_stuck_low_line_times_out() {
        let mut sensor = Dht11::new(StuckLine(false), NoopDelay);
        assert_eq!(sensor.read(), Err(SensorError::Timeout));
    }
}
