//! Hearth - ambient room climate display
//!
//! Main firmware binary for RP2040-based boards. Reads a DHT11
//! temperature/humidity sensor once a second, keeps a 16x2 character
//! LCD current, and holds the backlight on for a minute whenever the
//! PIR detector sees someone.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Flex, Input, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_time::{Delay, Timer};
use {defmt_rtt as _, panic_probe as _};

use hearth_core::config::StatusConfig;
use hearth_drivers::display::{Hd44780Lcd, DEFAULT_ADDR};
use hearth_drivers::motion::PirSensor;
use hearth_drivers::sensor::Dht11;

mod boards;
mod channels;
mod tasks;

use boards::FlexLine;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Hearth firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = StatusConfig::default();

    // DHT11 data line (single-wire, external pull-up)
    let sensor = Dht11::new(FlexLine::new(Flex::new(p.PIN_17)), Delay);

    // PCF8574 LCD backpack on I2C0
    let bus = I2c::new_blocking(p.I2C0, p.PIN_5, p.PIN_4, i2c::Config::default());
    let lcd = Hd44780Lcd::new(bus, Delay, DEFAULT_ADDR);

    // PIR output is push-pull active-high
    let pir = PirSensor::new(Input::new(p.PIN_12, Pull::Down));

    // Stop button shorts to ground
    let stop_button = Input::new(p.PIN_15, Pull::Up);

    info!("Drivers initialized");

    spawner.spawn(tasks::stop_task(stop_button)).unwrap();
    spawner
        .spawn(tasks::status_task(sensor, lcd, pir, config))
        .unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in the
    // status task. Keep a heartbeat for debugging.
    loop {
        Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
