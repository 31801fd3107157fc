//! Radio Control Logic
//!
//! Tuning state and the frequency controller.
//! Implements the functional core of the transceiver control loop.

pub mod state;
pub mod tuner;
