//! Motion-gated backlight hold
//!
//! The reference behavior slept through the whole dwell; the gate
//! records a hold-until timestamp instead and answers from the
//! current time, so the loop keeps reading and rendering while the
//! lamp is held.

/// Decides whether the backlight should currently be on
#[derive(Debug, Clone)]
pub struct BacklightGate {
    hold_ms: u64,
    hold_until_ms: Option<u64>,
}

impl BacklightGate {
    /// Create a gate with the given dwell in milliseconds
    pub fn new(hold_ms: u64) -> Self {
        Self {
            hold_ms,
            hold_until_ms: None,
        }
    }

    /// Sample the gate
    ///
    /// Motion starts a fresh dwell. Once started, the lamp stays
    /// forced on until the dwell expires even if motion drops; with
    /// no pending hold the lamp is off.
    pub fn update(&mut self, motion: bool, now_ms: u64) -> bool {
        if motion {
            self.hold_until_ms = Some(now_ms + self.hold_ms);
            return true;
        }

        match self.hold_until_ms {
            Some(until) if now_ms < until => true,
            _ => {
                self.hold_until_ms = None;
                false
            }
        }
    }
}
