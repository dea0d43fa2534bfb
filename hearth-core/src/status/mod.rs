//! Status loop state
//!
//! Everything the periodic read/render loop mutates lives here as
//! explicit state structs. Core code never reads a clock; callers
//! pass the current monotonic time in milliseconds.

pub mod backlight;
pub mod controller;
pub mod reading;
pub mod trend;

pub use backlight::BacklightGate;
pub use controller::{StatusController, StatusFrame};
pub use reading::{celsius_to_fahrenheit_x10, Reading};
pub use trend::{Trend, TrendTracker};
