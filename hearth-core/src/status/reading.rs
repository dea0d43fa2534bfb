//! Unit-converted sensor readings

use crate::traits::RawReading;

/// A good sensor sample, converted for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reading {
    /// Temperature in 0.1 °F units (e.g. 725 = 72.5 °F)
    pub temp_f_x10: i16,
    /// Relative humidity in 0.1 %RH units
    pub humidity_x10: u16,
    /// When the sample was taken (monotonic ms)
    pub taken_at_ms: u64,
}

impl Reading {
    /// Convert a raw Celsius sample and stamp it
    pub fn from_raw(raw: RawReading, now_ms: u64) -> Self {
        Self {
            temp_f_x10: celsius_to_fahrenheit_x10(raw.temp_c_x10),
            humidity_x10: raw.humidity_x10,
            taken_at_ms: now_ms,
        }
    }
}

/// Convert 0.1 °C units to 0.1 °F units
///
/// Widens to i32 for the multiply; the sensor range keeps the result
/// well inside i16.
pub fn celsius_to_fahrenheit_x10(temp_c_x10: i16) -> i16 {
    (temp_c_x10 as i32 * 9 / 5 + 320) as i16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_freezing_point() {
        assert_eq!(celsius_to_fahrenheit_x10(0), 320); // 0°C = 32.0°F
    }

    #[test]
    fn test_boiling_point() {
        assert_eq!(celsius_to_fahrenheit_x10(1000), 2120); // 100°C = 212.0°F
    }

    #[test]
    fn test_negative_temperature() {
        assert_eq!(celsius_to_fahrenheit_x10(-100), 140); // -10°C = 14.0°F
        assert_eq!(celsius_to_fahrenheit_x10(-400), -400); // -40°C = -40.0°F
    }

    #[test]
    fn test_from_raw_stamps_time() {
        let raw = RawReading {
            temp_c_x10: 235,
            humidity_x10: 455,
        };
        let reading = Reading::from_raw(raw, 12_000);
        assert_eq!(reading.temp_f_x10, 743); // 23.5°C = 74.3°F
        assert_eq!(reading.humidity_x10, 455);
        assert_eq!(reading.taken_at_ms, 12_000);
    }
}
