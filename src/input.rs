//! Operator Input
//!
//! Converts raw pin levels and quadrature samples into discrete,
//! debounced control events consumed by the frequency controller.

pub mod debounce;
pub mod encoder;

/// Discrete, debounced input event
///
/// Produced at most once per physical transition; never duplicated
/// within one debounce window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    /// One clockwise encoder tick
    TuneUp,
    /// One counter-clockwise encoder tick
    TuneDown,
    /// Encoder switch pressed: cycle the tuning step
    StepCycle,
    /// PTT line asserted: enter transmit
    PttAsserted,
    /// PTT line released: return to receive
    PttReleased,
}

#[cfg(feature = "embedded")]
impl defmt::Format for InputEvent {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::TuneUp => defmt::write!(f, "TuneUp"),
            Self::TuneDown => defmt::write!(f, "TuneDown"),
            Self::StepCycle => defmt::write!(f, "StepCycle"),
            Self::PttAsserted => defmt::write!(f, "PttAsserted"),
            Self::PttReleased => defmt::write!(f, "PttReleased"),
        }
    }
}
