//! GPIO Abstractions
//!
//! Type-safe wrappers for the control-loop pins. The input wrappers
//! expose raw levels only; debouncing lives in the core input module.

use embassy_stm32::gpio::{Input, Output};

use crate::radio::tuner::TxSwitch;

/// Status LED state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LedState {
    /// LED is off
    #[default]
    Off,
    /// LED is on
    On,
}

impl LedState {
    /// Toggle the LED state
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Off => Self::On,
            Self::On => Self::Off,
        }
    }
}

impl defmt::Format for LedState {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Off => defmt::write!(f, "OFF"),
            Self::On => defmt::write!(f, "ON"),
        }
    }
}

/// Status LED, doubling as the diagnostic output
pub struct StatusLed<'d> {
    pin: Output<'d>,
    state: LedState,
}

impl<'d> StatusLed<'d> {
    /// Create a new status LED (initially off)
    #[must_use]
    pub fn new(pin: Output<'d>) -> Self {
        Self {
            pin,
            state: LedState::Off,
        }
    }

    /// Turn LED on
    pub fn on(&mut self) {
        self.pin.set_high();
        self.state = LedState::On;
    }

    /// Turn LED off
    pub fn off(&mut self) {
        self.pin.set_low();
        self.state = LedState::Off;
    }

    /// Toggle LED state
    pub fn toggle(&mut self) {
        match self.state {
            LedState::Off => self.on(),
            LedState::On => self.off(),
        }
    }

    /// Get current state
    #[must_use]
    pub const fn state(&self) -> LedState {
        self.state
    }
}

/// PTT (Push-to-Talk) input, active low with internal pull-up
pub struct PttInput<'d> {
    pin: Input<'d>,
}

impl<'d> PttInput<'d> {
    /// Create a new PTT input
    #[must_use]
    pub fn new(pin: Input<'d>) -> Self {
        Self { pin }
    }

    /// Read the raw line level (true = high = released)
    #[must_use]
    pub fn level(&self) -> bool {
        self.pin.is_high()
    }
}

/// Encoder push switch input, active low with internal pull-up
pub struct EncoderSwitch<'d> {
    pin: Input<'d>,
}

impl<'d> EncoderSwitch<'d> {
    /// Create a new switch input
    #[must_use]
    pub fn new(pin: Input<'d>) -> Self {
        Self { pin }
    }

    /// Read the raw line level (true = high = released)
    #[must_use]
    pub fn level(&self) -> bool {
        self.pin.is_high()
    }
}

/// Transmit-enable relay output
///
/// Implements the [`TxSwitch`] capability for the frequency controller.
pub struct TxRelay<'d> {
    pin: Output<'d>,
    is_tx: bool,
}

impl<'d> TxRelay<'d> {
    /// Create the relay control (starts in RX)
    #[must_use]
    pub fn new(pin: Output<'d>) -> Self {
        Self { pin, is_tx: false }
    }

    /// Check if in transmit mode
    #[must_use]
    pub const fn is_tx(&self) -> bool {
        self.is_tx
    }
}

impl TxSwitch for TxRelay<'_> {
    type Error = core::convert::Infallible;

    fn set_tx(&mut self, enabled: bool) -> Result<(), Self::Error> {
        if enabled {
            self.pin.set_high();
        } else {
            self.pin.set_low();
        }
        self.is_tx = enabled;
        Ok(())
    }
}
