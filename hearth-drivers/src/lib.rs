//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in hearth-core for the display's hardware:
//!
//! - DHT11 single-wire temperature/humidity sensor
//! - HD44780 character LCD behind a PCF8574 I2C backpack
//! - PIR motion detector input

#![no_std]
#![deny(unsafe_code)]

// Tests run on the host with the standard library available.
#[cfg(test)]
extern crate std;

pub mod display;
pub mod motion;
pub mod sensor;
