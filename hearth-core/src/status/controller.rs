//! Status controller
//!
//! Owns every piece of loop state and executes the acquire, trend,
//! render and backlight steps. The firmware task feeds it samples and
//! timestamps and applies its outputs to the hardware; nothing in
//! here touches a pin.

use crate::config::StatusConfig;
use crate::status::{BacklightGate, Reading, Trend, TrendTracker};
use crate::traits::{RawReading, SensorError};

/// What the display should show
///
/// Produced by [`StatusController::frame`] only when the content
/// actually changed since the last frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusFrame {
    /// Temperature in 0.1 °F units
    pub temp_f_x10: i16,
    /// Relative humidity in 0.1 %RH units
    pub humidity_x10: u16,
    /// Trend indicator
    pub trend: Trend,
    /// Whether humidity sits inside the comfort band
    pub comfortable: bool,
}

/// The displayed triple; redraws are suppressed while it is unchanged
type Shown = (i16, u16, Trend);

/// Remembers what is on the glass to suppress redundant redraws
#[derive(Debug, Clone, Default)]
struct DisplayCache {
    last_shown: Option<Shown>,
}

impl DisplayCache {
    fn needs_redraw(&self, shown: Shown) -> bool {
        self.last_shown != Some(shown)
    }

    fn mark_shown(&mut self, shown: Shown) {
        self.last_shown = Some(shown);
    }
}

/// State for the periodic read/render loop
pub struct StatusController {
    config: StatusConfig,
    last_good: Option<Reading>,
    trend: TrendTracker,
    cache: DisplayCache,
    backlight: BacklightGate,
}

impl StatusController {
    /// Create a controller from configuration
    pub fn new(config: StatusConfig) -> Self {
        Self {
            config,
            last_good: None,
            trend: TrendTracker::new(config.trend_window_ms),
            cache: DisplayCache::default(),
            backlight: BacklightGate::new(config.backlight_hold_ms),
        }
    }

    /// Feed one sensor sample (steps 1 and 2 of the loop)
    ///
    /// Failures leave the last good reading in place so the display
    /// degrades to stale data instead of going blank; successes are
    /// unit-converted and stored. The trend tracker then sees the
    /// current last-good temperature whenever one exists, so a window
    /// boundary crossed during a run of failed reads still recomputes.
    /// Returns true when the trend was recomputed this call.
    pub fn record(&mut self, sample: Result<RawReading, SensorError>, now_ms: u64) -> bool {
        if let Ok(raw) = sample {
            self.last_good = Some(Reading::from_raw(raw, now_ms));
        }

        match self.last_good {
            Some(reading) => self.trend.update(reading.temp_f_x10, now_ms),
            None => false,
        }
    }

    /// Last good reading, if any read has succeeded yet
    pub fn reading(&self) -> Option<&Reading> {
        self.last_good.as_ref()
    }

    /// Current trend indicator
    pub fn trend(&self) -> Trend {
        self.trend.trend()
    }

    /// Produce the next frame (step 3)
    ///
    /// Returns `Some` only when the (temperature, humidity, trend)
    /// triple differs from what is already on the glass; `None` before
    /// the first good read or while nothing changed.
    pub fn frame(&mut self) -> Option<StatusFrame> {
        let reading = self.last_good?;
        let shown = (reading.temp_f_x10, reading.humidity_x10, self.trend.trend());

        if !self.cache.needs_redraw(shown) {
            return None;
        }
        self.cache.mark_shown(shown);

        let (low, high) = self.config.comfort_band_x10;
        Some(StatusFrame {
            temp_f_x10: reading.temp_f_x10,
            humidity_x10: reading.humidity_x10,
            trend: self.trend.trend(),
            comfortable: reading.humidity_x10 >= low && reading.humidity_x10 <= high,
        })
    }

    /// Gate the backlight on motion (step 4)
    pub fn backlight(&mut self, motion: bool, now_ms: u64) -> bool {
        self.backlight.update(motion, now_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn raw(temp_c_x10: i16, humidity_x10: u16) -> RawReading {
        RawReading {
            temp_c_x10,
            humidity_x10,
        }
    }

    fn controller() -> StatusController {
        StatusController::new(StatusConfig::default())
    }

    #[test]
    fn test_no_frame_before_first_reading() {
        let mut c = controller();
        assert!(c.frame().is_none());

        c.record(Err(SensorError::Timeout), 1_000);
        assert!(c.frame().is_none());
    }

    #[test]
    fn test_failed_read_keeps_last_good() {
        let mut c = controller();
        c.record(Ok(raw(250, 500)), 1_000);
        let shown = c.frame().expect("first frame");

        c.record(Err(SensorError::ChecksumMismatch), 2_000);
        let reading = c.reading().expect("still has a reading");
        assert_eq!(reading.temp_f_x10, shown.temp_f_x10);
        assert_eq!(reading.humidity_x10, shown.humidity_x10);
    }

    #[test]
    fn test_redraw_suppressed_while_unchanged() {
        let mut c = controller();
        c.record(Ok(raw(250, 500)), 1_000);

        assert!(c.frame().is_some());
        assert!(c.frame().is_none());

        // Same values read again: still no redraw
        c.record(Ok(raw(250, 500)), 2_000);
        assert!(c.frame().is_none());

        // A changed humidity forces one
        c.record(Ok(raw(250, 510)), 3_000);
        assert!(c.frame().is_some());
        assert!(c.frame().is_none());
    }

    #[test]
    fn test_mood_band_is_inclusive() {
        let cases = [
            (400, true),
            (600, true),
            (390, false),
            (610, false),
        ];

        let mut c = controller();
        for (i, (humidity_x10, comfortable)) in cases.iter().enumerate() {
            c.record(Ok(raw(250, *humidity_x10)), (i as u64 + 1) * 1_000);
            let frame = c.frame().expect("humidity changed");
            assert_eq!(frame.comfortable, *comfortable, "humidity {}", humidity_x10);
        }
    }

    #[test]
    fn test_trend_recomputes_from_stale_reading() {
        let window = StatusConfig::default().trend_window_ms;
        let mut c = controller();

        c.record(Ok(raw(200, 500)), window);

        // Every later read fails; the boundary still recomputes from
        // the stale temperature.
        assert!(!c.record(Err(SensorError::Timeout), window + 1_000));
        assert!(c.record(Err(SensorError::Timeout), 2 * window));
        assert_eq!(c.trend(), Trend::Stable);
    }

    #[test]
    fn test_trend_flows_into_frame() {
        let window = StatusConfig::default().trend_window_ms;
        let mut c = controller();

        c.record(Ok(raw(200, 500)), window);
        assert_eq!(c.frame().expect("frame").trend, Trend::Stable);

        c.record(Ok(raw(250, 500)), 2 * window);
        assert_eq!(c.frame().expect("frame").trend, Trend::Rising);
    }

    proptest! {
        /// Once one read succeeded, any pattern of later failures
        /// still leaves values to display.
        #[test]
        fn failures_never_blank_the_display(
            failures in proptest::array::uniform32(any::<bool>()),
        ) {
            let mut c = controller();
            c.record(Ok(raw(220, 450)), 1_000);

            let mut now_ms = 1_000u64;
            for failed in failures {
                now_ms += 1_000;
                let sample = if failed {
                    Err(SensorError::Timeout)
                } else {
                    Ok(raw(220, 450))
                };
                c.record(sample, now_ms);
                prop_assert!(c.reading().is_some());
            }
        }
    }
}
