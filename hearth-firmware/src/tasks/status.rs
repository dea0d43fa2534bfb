//! Status loop task
//!
//! The single cooperative loop: read the sensor, update trend state,
//! redraw when content changed, gate the backlight on motion. Runs at
//! the configured cadence until a stop request arrives, then releases
//! the display exactly once.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_time::{Duration, Instant, Ticker, Timer};

use hearth_core::config::StatusConfig;
use hearth_core::render::{self, Glyph};
use hearth_core::status::StatusController;
use hearth_core::traits::{CharDisplay, ClimateSensor, MotionInput};

use crate::boards::{BoardLcd, BoardMotion, BoardSensor};
use crate::channels::STOP;

/// Status task - the periodic read/render loop
#[embassy_executor::task]
pub async fn status_task(
    mut sensor: BoardSensor,
    mut lcd: BoardLcd,
    mut pir: BoardMotion,
    config: StatusConfig,
) {
    info!("Status task started");

    unwrap!(lcd.init());
    boot_check(&mut lcd).await;

    // Start dark and empty; the first good reading paints the screen
    unwrap!(lcd.clear());
    unwrap!(lcd.set_backlight(false));

    let mut controller = StatusController::new(config);
    let mut backlight_on = false;

    let started = Instant::now();
    let mut ticker = Ticker::every(Duration::from_millis(config.read_interval_ms));

    loop {
        match select(ticker.next(), STOP.wait()).await {
            Either::First(()) => {
                let now_ms = started.elapsed().as_millis();

                // Acquire the reading; failures degrade to stale data
                let sample = sensor.read();
                if let Err(e) = sample {
                    warn!("Sensor read failed: {:?}; keeping last good reading", e);
                }
                if controller.record(sample, now_ms) {
                    debug!("Trend recomputed: {:?}", controller.trend());
                }

                if let Some(reading) = controller.reading() {
                    info!(
                        "Reading: temp {}.{} F, humidity {}.{} %, trend {:?}",
                        reading.temp_f_x10 / 10,
                        (reading.temp_f_x10 % 10).abs(),
                        reading.humidity_x10 / 10,
                        reading.humidity_x10 % 10,
                        controller.trend(),
                    );
                }

                // Redraw only when the displayed triple changed
                if let Some(frame) = controller.frame() {
                    unwrap!(render::draw(&mut lcd, &frame));
                }

                // Motion-gated backlight with a non-blocking dwell
                let lamp = controller.backlight(pir.is_active(), now_ms);
                if lamp != backlight_on {
                    if lamp {
                        info!("Motion detected, backlight on");
                    } else {
                        info!("Dwell expired, backlight off");
                    }
                    unwrap!(lcd.set_backlight(lamp));
                    backlight_on = lamp;
                }
            }

            Either::Second(()) => {
                // Deterministic cleanup, exactly once, then park
                info!("Stop requested, releasing display");
                unwrap!(lcd.clear());
                unwrap!(lcd.set_backlight(false));
                break;
            }
        }
    }
}

/// Glyph self-test shown once at boot
///
/// Loads the custom characters, splashes, and steps through every
/// slot in the last column so a bad solder joint shows up immediately.
async fn boot_check(lcd: &mut BoardLcd) {
    unwrap!(lcd.set_backlight(true));
    unwrap!(render::load_glyphs(lcd));

    unwrap!(lcd.clear());
    unwrap!(lcd.set_cursor(0, 0));
    unwrap!(lcd.write_text("Reading"));
    unwrap!(lcd.set_cursor(1, 0));
    unwrap!(lcd.write_text("Temperature..."));
    Timer::after_secs(1).await;

    for glyph in Glyph::ALL {
        unwrap!(lcd.set_cursor(1, 15));
        unwrap!(lcd.write_glyph(glyph.slot()));
        Timer::after_millis(500).await;
    }
}
