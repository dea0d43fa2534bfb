//! Climate sensor trait

/// Errors that can occur while reading the climate sensor
///
/// Single-wire sensors fail transiently and often; every variant here
/// is recoverable by retrying on the next loop iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// The sensor did not answer within the protocol timing window
    Timeout,
    /// The checksum byte did not match the payload
    ChecksumMismatch,
    /// Decoded values fall outside the sensor's measurable range
    OutOfRange,
}

/// A raw temperature/humidity sample as produced by the sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawReading {
    /// Temperature in 0.1 °C units (e.g. 235 = 23.5 °C)
    pub temp_c_x10: i16,
    /// Relative humidity in 0.1 %RH units (e.g. 455 = 45.5 %)
    pub humidity_x10: u16,
}

/// Trait for combined temperature/humidity sensors
///
/// Implementations handle the specific sensor type (DHT11, DHT22,
/// SHT3x behind an adapter, ...). Values are fixed point with 0.1
/// resolution; 45.5 %RH is reported as 455.
pub trait ClimateSensor {
    /// Take one sample from the sensor
    ///
    /// Takes `&mut self` because single-wire reads drive the bus.
    fn read(&mut self) -> Result<RawReading, SensorError>;
}
