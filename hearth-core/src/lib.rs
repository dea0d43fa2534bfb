//! Board-agnostic core logic for the Hearth climate display
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (climate sensor, character display,
//!   motion input)
//! - Status loop state (reading cache, trend tracking, redraw
//!   suppression, backlight gate)
//! - Screen rendering and the custom glyph table
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

// Tests run on the host with the standard library available.
#[cfg(test)]
extern crate std;

pub mod config;
pub mod render;
pub mod status;
pub mod traits;
