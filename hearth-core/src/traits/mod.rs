//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic
//! and hardware-specific implementations.

pub mod display;
pub mod motion;
pub mod sensor;

pub use display::{CharDisplay, DisplayError, DISPLAY_COLS, DISPLAY_ROWS};
pub use motion::MotionInput;
pub use sensor::{ClimateSensor, RawReading, SensorError};
