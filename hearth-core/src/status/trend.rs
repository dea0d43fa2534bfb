//! Long-window temperature trend
//!
//! The trend is a step function: recomputed at most once per window,
//! comparing the current temperature against the one captured at the
//! previous recomputation. Intermediate readings never move it.

/// Coarse temperature direction indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Trend {
    #[default]
    Stable,
    Rising,
    Lowering,
}

/// Tracks the reference temperature and the recomputation schedule
#[derive(Debug, Clone)]
pub struct TrendTracker {
    window_ms: u64,
    reference_temp_f_x10: Option<i16>,
    last_check_ms: u64,
    trend: Trend,
}

impl TrendTracker {
    /// Create a tracker; the first recomputation happens one full
    /// window after start, matching the displayed default of Stable.
    pub fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            reference_temp_f_x10: None,
            last_check_ms: 0,
            trend: Trend::Stable,
        }
    }

    /// Current trend indicator
    pub fn trend(&self) -> Trend {
        self.trend
    }

    /// Feed the latest good temperature
    ///
    /// Recomputes only when a full window has elapsed since the last
    /// recomputation; strict comparison against the reference sets
    /// Rising/Lowering, equality sets Stable. Returns true when a
    /// recomputation happened.
    pub fn update(&mut self, temp_f_x10: i16, now_ms: u64) -> bool {
        if now_ms.saturating_sub(self.last_check_ms) < self.window_ms {
            return false;
        }

        if let Some(reference) = self.reference_temp_f_x10 {
            self.trend = if temp_f_x10 > reference {
                Trend::Rising
            } else if temp_f_x10 < reference {
                Trend::Lowering
            } else {
                Trend::Stable
            };
        }

        self.reference_temp_f_x10 = Some(temp_f_x10);
        self.last_check_ms = now_ms;
        true
    }
}
