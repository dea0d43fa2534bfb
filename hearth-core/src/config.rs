//! Configuration types
//!
//! All settings live in memory and reset on restart; there is no
//! persistence layer.

/// Default loop cadence in milliseconds
pub const DEFAULT_READ_INTERVAL_MS: u64 = 1_000;

/// Default trend recomputation window (10 minutes)
pub const DEFAULT_TREND_WINDOW_MS: u64 = 600_000;

/// Default backlight dwell after motion (60 seconds)
pub const DEFAULT_BACKLIGHT_HOLD_MS: u64 = 60_000;

/// Default comfort band for the mood glyph, in 0.1 %RH units (40-60 %)
pub const DEFAULT_COMFORT_BAND_X10: (u16, u16) = (400, 600);

/// Status loop configuration
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusConfig {
    /// Loop cadence in milliseconds
    pub read_interval_ms: u64,
    /// Minimum spacing between trend recomputations (ms)
    pub trend_window_ms: u64,
    /// How long the backlight stays forced on after motion (ms)
    pub backlight_hold_ms: u64,
    /// Inclusive humidity band that reads as comfortable (0.1 %RH)
    pub comfort_band_x10: (u16, u16),
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            read_interval_ms: DEFAULT_READ_INTERVAL_MS,
            trend_window_ms: DEFAULT_TREND_WINDOW_MS,
            backlight_hold_ms: DEFAULT_BACKLIGHT_HOLD_MS,
            comfort_band_x10: DEFAULT_COMFORT_BAND_X10,
        }
    }
}
