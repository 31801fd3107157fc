//! Tuning State
//!
//! The authoritative record of frequency, step size, and transmit/receive
//! mode. Implements immutable state transitions for predictable behavior;
//! every reachable value satisfies the tuning invariants by construction.

use crate::config::DEFAULT_FREQUENCY_HZ;
use crate::types::{Frequency, StepIndex, TxRx};

/// Complete tuning state (immutable)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TuningState {
    /// Current dial frequency
    frequency: Frequency,
    /// Index into the tuning step table
    step: StepIndex,
    /// TX/RX state
    txrx: TxRx,
}

impl TuningState {
    /// Create a new tuning state in receive mode
    #[must_use]
    pub const fn new(frequency: Frequency, step: StepIndex) -> Self {
        Self {
            frequency,
            step,
            txrx: TxRx::Rx,
        }
    }

    /// Get current frequency
    #[must_use]
    pub const fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Get the step table index
    #[must_use]
    pub const fn step(&self) -> StepIndex {
        self.step
    }

    /// Get the current step size in Hz
    #[must_use]
    pub const fn step_size_hz(&self) -> u32 {
        self.step.size_hz()
    }

    /// Get TX/RX state
    #[must_use]
    pub const fn txrx(&self) -> TxRx {
        self.txrx
    }

    /// Check if transmitting
    #[must_use]
    pub const fn is_transmitting(&self) -> bool {
        self.txrx.is_tx()
    }

    /// Tune up one step, `None` when clamped at the band edge
    #[must_use]
    pub const fn tuned_up(self) -> Option<Self> {
        match self.frequency.stepped_up(self.step.size_hz()) {
            Some(frequency) => Some(Self { frequency, ..self }),
            None => None,
        }
    }

    /// Tune down one step, `None` when clamped at the band edge
    #[must_use]
    pub const fn tuned_down(self) -> Option<Self> {
        match self.frequency.stepped_down(self.step.size_hz()) {
            Some(frequency) => Some(Self { frequency, ..self }),
            None => None,
        }
    }

    /// Cycle to the next step size (returns new state)
    #[must_use]
    pub const fn with_step_cycled(self) -> Self {
        Self {
            step: self.step.cycled(),
            ..self
        }
    }

    /// Set TX/RX state (returns new state)
    #[must_use]
    pub const fn with_txrx(self, txrx: TxRx) -> Self {
        Self { txrx, ..self }
    }
}

impl Default for TuningState {
    fn default() -> Self {
        Self::new(
            Frequency::from_hz_const(DEFAULT_FREQUENCY_HZ),
            StepIndex::DEFAULT,
        )
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for TuningState {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "Tuning({}, step {}, {})",
            self.frequency,
            self.step,
            self.txrx
        );
    }
}
