//! Inter-task signaling
//!
//! The status loop is a single cooperative task; the only cross-task
//! traffic is the stop request. Uses embassy-sync primitives for safe
//! async communication.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

/// Raised once when the stop button fires; the status task answers by
/// running its cleanup and parking.
pub static STOP: Signal<CriticalSectionRawMutex, ()> = Signal::new();
