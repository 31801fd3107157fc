//! Frequency Controller
//!
//! Consumes debounced input events, applies bounded step adjustments to
//! the tuning state, and drives the synthesizer and transmit-enable
//! capabilities. Bound checks happen strictly before mutation; the
//! synthesizer is never commanded with an out-of-range value.

use crate::config::{BFO_FREQUENCY_HZ, IF_OFFSET_HZ};
use crate::input::InputEvent;
use crate::render::RenderScheduler;
use crate::types::TxRx;
use super::state::TuningState;

/// Logical synthesizer output channel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SynthChannel {
    /// Tunable channel, retuned on every frequency change
    Vfo,
    /// Fixed channel, programmed once at startup
    Bfo,
}

#[cfg(feature = "embedded")]
impl defmt::Format for SynthChannel {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Vfo => defmt::write!(f, "VFO"),
            Self::Bfo => defmt::write!(f, "BFO"),
        }
    }
}

/// Frequency synthesizer capability
///
/// Frequencies are commanded in centihertz (0.01 Hz units).
pub trait Synthesizer {
    /// Synthesizer error type
    type Error;

    /// Set the output frequency of a channel
    fn set_centihertz(&mut self, channel: SynthChannel, centihertz: u64)
        -> Result<(), Self::Error>;
}

/// Transmit-enable output capability
pub trait TxSwitch {
    /// Switch error type
    type Error;

    /// Drive the transmit-enable line
    fn set_tx(&mut self, enabled: bool) -> Result<(), Self::Error>;
}

/// Error from a dispatched control operation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlError<S, T> {
    /// Synthesizer command failed
    Synth(S),
    /// Transmit-enable output failed
    TxSwitch(T),
}

/// Persistence request returned by [`FrequencyController::dispatch`]
///
/// Settings are persisted only on step-size changes, never on plain
/// tuning, to limit non-volatile write frequency.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum PersistAction {
    /// Nothing to persist
    None,
    /// Step size changed; the caller should save the settings snapshot
    SaveSettings,
}

/// Frequency/state controller
///
/// Sole owner and mutator of the [`TuningState`].
pub struct FrequencyController<S, T>
where
    S: Synthesizer,
    T: TxSwitch,
{
    state: TuningState,
    synth: S,
    tx_switch: T,
}

impl<S, T> FrequencyController<S, T>
where
    S: Synthesizer,
    T: TxSwitch,
{
    /// Create a controller around an initial state and its capabilities
    pub const fn new(state: TuningState, synth: S, tx_switch: T) -> Self {
        Self {
            state,
            synth,
            tx_switch,
        }
    }

    /// Get the current tuning state snapshot
    #[must_use]
    pub const fn state(&self) -> &TuningState {
        &self.state
    }

    /// Borrow the synthesizer capability
    #[must_use]
    pub const fn synth(&self) -> &S {
        &self.synth
    }

    /// Borrow the transmit-enable capability
    #[must_use]
    pub const fn tx_switch(&self) -> &T {
        &self.tx_switch
    }

    /// Program the synthesizer and transmit line for the initial state
    ///
    /// Sets the fixed BFO channel (never touched again), tunes the VFO,
    /// and forces the transmit line off. A failure here is fatal to the
    /// caller: without the synthesizer no further operation is meaningful.
    pub fn initialize(&mut self) -> Result<(), ControlError<S::Error, T::Error>> {
        self.synth
            .set_centihertz(SynthChannel::Bfo, u64::from(BFO_FREQUENCY_HZ) * 100)
            .map_err(ControlError::Synth)?;
        self.retune()?;
        self.tx_switch.set_tx(false).map_err(ControlError::TxSwitch)
    }

    /// Apply one input event
    ///
    /// Returns whether the caller should persist the settings snapshot.
    pub fn dispatch(
        &mut self,
        event: InputEvent,
        render: &mut RenderScheduler,
    ) -> Result<PersistAction, ControlError<S::Error, T::Error>> {
        match event {
            InputEvent::TuneUp => {
                if let Some(next) = self.state.tuned_up() {
                    self.state = next;
                    self.retune()?;
                    render.mark_dirty();
                }
                Ok(PersistAction::None)
            }
            InputEvent::TuneDown => {
                if let Some(next) = self.state.tuned_down() {
                    self.state = next;
                    self.retune()?;
                    render.mark_dirty();
                }
                Ok(PersistAction::None)
            }
            InputEvent::StepCycle => {
                self.state = self.state.with_step_cycled();
                render.mark_dirty();
                Ok(PersistAction::SaveSettings)
            }
            InputEvent::PttAsserted => {
                self.set_txrx(TxRx::Tx, render)?;
                Ok(PersistAction::None)
            }
            InputEvent::PttReleased => {
                self.set_txrx(TxRx::Rx, render)?;
                Ok(PersistAction::None)
            }
        }
    }

    /// Command the VFO channel for the current frequency
    fn retune(&mut self) -> Result<(), ControlError<S::Error, T::Error>> {
        let carrier_hz = u64::from(self.state.frequency().as_hz()) + u64::from(IF_OFFSET_HZ);
        self.synth
            .set_centihertz(SynthChannel::Vfo, carrier_hz * 100)
            .map_err(ControlError::Synth)
    }

    /// Change TX/RX mode; no-op when the mode already matches
    ///
    /// The transmit line drives a mechanical relay, so redundant toggles
    /// must never reach it.
    fn set_txrx(
        &mut self,
        txrx: TxRx,
        render: &mut RenderScheduler,
    ) -> Result<(), ControlError<S::Error, T::Error>> {
        if self.state.txrx() == txrx {
            return Ok(());
        }
        self.tx_switch
            .set_tx(txrx.is_tx())
            .map_err(ControlError::TxSwitch)?;
        self.state = self.state.with_txrx(txrx);
        render.mark_dirty();
        Ok(())
    }
}
