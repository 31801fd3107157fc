//! Settings Persistence
//!
//! Serializes the tuning state to non-volatile storage and validates it
//! on the way back in. The record carries a magic sentinel; a record
//! with a bad sentinel, an out-of-band frequency, or an out-of-table
//! step index is discarded whole and the caller falls back to defaults.
//!
//! Saves happen only on step-size changes, not on every tuning step,
//! trading persistence freshness for storage wear. Writes are
//! fire-and-forget: a failure is reported to the caller but never
//! retried.

use crate::config::{SETTINGS_MAGIC, SETTINGS_OFFSET};
use crate::radio::state::TuningState;
use crate::types::{Frequency, StepIndex};

/// Persisted record length in bytes
///
/// Layout: frequency (u32 LE) at 0, step index (u8) at 4,
/// magic sentinel (u16 LE) at 5.
pub const RECORD_LEN: usize = 7;

/// Byte-level non-volatile storage capability
pub trait SettingsBackend {
    /// Storage error type
    type Error;

    /// Read `buf.len()` bytes starting at `offset`
    fn read(&mut self, offset: u16, buf: &mut [u8]) -> Result<(), Self::Error>;

    /// Write `data` starting at `offset`
    fn write(&mut self, offset: u16, data: &[u8]) -> Result<(), Self::Error>;
}

/// Reason a stored record was rejected
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordError {
    /// Sentinel mismatch (blank or foreign storage)
    BadMagic(u16),
    /// Stored frequency outside the band
    FrequencyOutOfRange(u32),
    /// Stored step index beyond the step table
    StepOutOfRange(u8),
}

#[cfg(feature = "embedded")]
impl defmt::Format for RecordError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::BadMagic(m) => defmt::write!(f, "bad magic 0x{:04X}", m),
            Self::FrequencyOutOfRange(hz) => defmt::write!(f, "frequency {} Hz out of range", hz),
            Self::StepOutOfRange(i) => defmt::write!(f, "step index {} out of range", i),
        }
    }
}

/// Error loading settings
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingsError<E> {
    /// The storage read itself failed
    Storage(E),
    /// The record was read but failed validation
    Record(RecordError),
}

/// Encode a tuning state into record bytes
#[must_use]
pub fn encode(state: &TuningState) -> [u8; RECORD_LEN] {
    let mut raw = [0u8; RECORD_LEN];
    raw[0..4].copy_from_slice(&state.frequency().as_hz().to_le_bytes());
    raw[4] = state.step().index();
    raw[5..7].copy_from_slice(&SETTINGS_MAGIC.to_le_bytes());
    raw
}

/// Decode and validate record bytes
///
/// The decoded state is always in receive mode; the TX/RX mode is not
/// persisted.
pub fn decode(raw: &[u8; RECORD_LEN]) -> Result<TuningState, RecordError> {
    let magic = u16::from_le_bytes([raw[5], raw[6]]);
    if magic != SETTINGS_MAGIC {
        return Err(RecordError::BadMagic(magic));
    }

    let hz = u32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]);
    let frequency = Frequency::from_hz(hz).ok_or(RecordError::FrequencyOutOfRange(hz))?;
    let step = StepIndex::new(raw[4]).ok_or(RecordError::StepOutOfRange(raw[4]))?;

    Ok(TuningState::new(frequency, step))
}

/// Settings store over a byte-level storage backend
pub struct SettingsStore<B: SettingsBackend> {
    backend: B,
}

impl<B: SettingsBackend> SettingsStore<B> {
    /// Create a store around a storage backend
    pub const fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Load and validate the stored tuning state
    ///
    /// Never returns a partially-initialized state: any validation
    /// failure discards the entire record.
    pub fn load(&mut self) -> Result<TuningState, SettingsError<B::Error>> {
        let mut raw = [0u8; RECORD_LEN];
        self.backend
            .read(SETTINGS_OFFSET, &mut raw)
            .map_err(SettingsError::Storage)?;
        decode(&raw).map_err(SettingsError::Record)
    }

    /// Persist a tuning state snapshot
    ///
    /// All record fields go out in a single backend write.
    pub fn save(&mut self, state: &TuningState) -> Result<(), B::Error> {
        self.backend.write(SETTINGS_OFFSET, &encode(state))
    }
}
