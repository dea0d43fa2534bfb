//! Board wiring for the Pico-class reference build
//!
//! Pin map:
//! - GPIO17: DHT11 data line (external 4.7k pull-up)
//! - GPIO4/GPIO5: I2C0 SDA/SCL to the PCF8574 LCD backpack
//! - GPIO12: PIR detector output
//! - GPIO15: stop button to ground

use embassy_rp::gpio::{Flex, Input};
use embassy_rp::i2c::{Blocking, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_time::Delay;

use hearth_drivers::display::Hd44780Lcd;
use hearth_drivers::motion::PirSensor;
use hearth_drivers::sensor::{Dht11, SensorLine};

/// DHT11 data line on a direction-switchable pin
///
/// The bus idles high through the pull-up; driving low means taking
/// the pin as an output, releasing means going back to input.
pub struct FlexLine<'d> {
    pin: Flex<'d>,
}

impl<'d> FlexLine<'d> {
    pub fn new(mut pin: Flex<'d>) -> Self {
        pin.set_as_input();
        Self { pin }
    }
}

impl SensorLine for FlexLine<'_> {
    fn set_low(&mut self) {
        self.pin.set_low();
        self.pin.set_as_output();
    }

    fn release(&mut self) {
        self.pin.set_as_input();
    }

    fn is_high(&mut self) -> bool {
        self.pin.is_high()
    }
}

// Concrete driver types, so tasks stay non-generic
pub type BoardSensor = Dht11<FlexLine<'static>, Delay>;
pub type BoardLcd = Hd44780Lcd<I2c<'static, I2C0, Blocking>, Delay>;
pub type BoardMotion = PirSensor<Input<'static>>;
