//! Motion input trait

/// Trait for motion detector inputs (PIR modules and similar)
///
/// A plain level input: no protocol, no error channel. A detector
/// that cannot be read reports no motion.
pub trait MotionInput {
    /// Sample the detector; true while presence is asserted
    fn is_active(&mut self) -> bool;
}
