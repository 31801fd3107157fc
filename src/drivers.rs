//! Peripheral Drivers
//!
//! High-level drivers for the external ICs. Each driver implements the
//! matching core capability trait, so the control logic never sees the
//! bus details.

pub mod display;
pub mod eeprom;
pub mod si5351;
