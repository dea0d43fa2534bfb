//! PIR motion detector input
//!
//! HC-SR501-class modules drive their output high while presence is
//! detected; there is no protocol, just a level.

use embedded_hal::digital::InputPin;

use hearth_core::traits::MotionInput;

/// PIR module on a digital input pin
pub struct PirSensor<PIN> {
    pin: PIN,
}

impl<PIN: InputPin> PirSensor<PIN> {
    /// Wrap an input pin carrying the detector's output
    pub fn new(pin: PIN) -> Self {
        Self { pin }
    }
}

impl<PIN: InputPin> MotionInput for PirSensor<PIN> {
    fn is_active(&mut self) -> bool {
        // A pin that cannot be read reports no motion
        self.pin.is_high().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType;

    struct MockPin {
        high: bool,
    }

    impl ErrorType for MockPin {
        type Error = Infallible;
    }

    impl InputPin for MockPin {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            Ok(self.high)
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            Ok(!self.high)
        }
    }

    #[test]
    fn test_tracks_pin_level() {
        let mut pir = PirSensor::new(MockPin { high: false });
        assert!(!pir.is_active());

        pir.pin.high = true;
        assert!(pir.is_active());
    }
}
