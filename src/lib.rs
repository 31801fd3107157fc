//! Transceiver Control Firmware Library
//!
//! Core functionality for the control head of an STM32G474-based,
//! manually-tuned 40m transceiver: tuning state, input debouncing,
//! bounded frequency stepping, settings persistence, and display
//! scheduling. The RF chain is analog; this firmware only steers the
//! `Si5351A` local oscillators and the transmit relay.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     CONTROL CORE                             │
//! │  InputDebouncer → FrequencyController → RenderScheduler      │
//! │                     TuningState · SettingsStore              │
//! ├─────────────────────────────────────────────────────────────┤
//! │                 CAPABILITY TRAITS                            │
//! │  Synthesizer │ TxSwitch │ FrameSink │ SettingsBackend        │
//! ├─────────────────────────────────────────────────────────────┤
//! │              HAL / DRIVER LAYER (embedded only)              │
//! │  Si5351A │ SSD1306 │ 24C EEPROM │ GPIO │ I2C                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! One reactive loop per millisecond: sample inputs, debounce,
//! dispatch at most one event of each kind, render if the state
//! changed. No other tasks touch the tuning state.
//!
//! # Design Principles
//!
//! - **Immutable-by-default**: state transitions return new instances
//! - **Type-driven design**: custom types enforce invariants at compile time
//! - **No unsafe in application code**
//! - **Functional core, imperative shell**: pure logic separated from I/O
//! - **Explicit error handling**: all fallible operations return `Result`

#![cfg_attr(feature = "embedded", no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Re-export dependencies needed by applications (only in embedded mode)
#[cfg(feature = "embedded")]
pub use embassy_executor;
#[cfg(feature = "embedded")]
pub use embassy_stm32;
#[cfg(feature = "embedded")]
pub use embassy_time;

/// Hardware Abstraction Layer
///
/// Safe abstractions over STM32G474 peripherals.
#[cfg(feature = "embedded")]
pub mod hal;

/// Peripheral Drivers
///
/// Capability implementations for the external ICs (Si5351, display,
/// settings EEPROM).
#[cfg(feature = "embedded")]
pub mod drivers;

/// Operator Input
///
/// Quadrature decoding, debouncing, discrete input events.
pub mod input;

/// Radio Control Logic
///
/// Tuning state and the frequency controller.
pub mod radio;

/// Render Scheduling
///
/// Dirty-flag display invocation.
pub mod render;

/// Settings Persistence
///
/// Validated settings records over byte-level non-volatile storage.
pub mod settings;

/// Shared types used across modules
pub mod types;

/// System configuration and constants
pub mod config;

/// Prelude module for common imports
#[cfg(feature = "embedded")]
pub mod prelude {
    //! Convenient re-exports for common types and traits.

    pub use crate::config::*;
    pub use crate::types::*;

    // Embassy
    pub use embassy_time::{Duration, Instant, Timer};

    // Error handling
    pub use core::result::Result;

    // Logging
    pub use defmt::{debug, error, info, trace, warn};
}
