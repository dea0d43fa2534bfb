//! Motion detector inputs

pub mod pir;

pub use pir::PirSensor;
