//! Stop button task
//!
//! The embedded stand-in for an interrupt from the outside world: an
//! async edge wait on a dedicated button raises the stop signal.

use defmt::*;
use embassy_rp::gpio::Input;

use crate::channels::STOP;

/// Stop task - raises STOP once when the button fires
#[embassy_executor::task]
pub async fn stop_task(mut button: Input<'static>) {
    button.wait_for_falling_edge().await;
    info!("Stop button pressed");
    STOP.signal(());
}
