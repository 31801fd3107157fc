//! Settings EEPROM Driver
//!
//! 24C02-class I2C EEPROM holding the persisted settings record.
//! Implements the [`SettingsBackend`] capability with single-byte
//! addressing; the settings record fits one write page, so a save is a
//! single page write.

use crate::config::{EEPROM_PAGE_SIZE, SETTINGS_OFFSET};
use crate::hal::i2c::{I2cAddress, I2cBus, I2cResult};
use crate::settings::{SettingsBackend, RECORD_LEN};
use embassy_stm32::i2c::{Error as I2cError, I2c};
use embassy_stm32::mode::Blocking;

// The record must not straddle a page boundary; a page write wraps
// within the page and would corrupt the record.
const _: () = assert!(SETTINGS_OFFSET as usize % EEPROM_PAGE_SIZE == 0);
const _: () = assert!(RECORD_LEN <= EEPROM_PAGE_SIZE);

/// Worst-case internal write cycle for 24C-class parts
const WRITE_CYCLE_MS: u64 = 5;

/// 24C-series settings EEPROM
pub struct SettingsEeprom<'d> {
    bus: I2cBus<'d>,
}

impl<'d> SettingsEeprom<'d> {
    /// Create a driver over a blocking I2C bus
    #[must_use]
    pub fn new(i2c: I2c<'d, Blocking>) -> Self {
        Self {
            bus: I2cBus::new(i2c),
        }
    }
}

impl SettingsBackend for SettingsEeprom<'_> {
    type Error = I2cError;

    fn read(&mut self, offset: u16, buf: &mut [u8]) -> I2cResult<()> {
        self.bus.write_read(I2cAddress::EEPROM, &[offset as u8], buf)
    }

    fn write(&mut self, offset: u16, data: &[u8]) -> I2cResult<()> {
        let mut frame = [0u8; EEPROM_PAGE_SIZE + 1];
        let len = data.len().min(EEPROM_PAGE_SIZE);
        frame[0] = offset as u8;
        frame[1..=len].copy_from_slice(&data[..len]);
        self.bus.write(I2cAddress::EEPROM, &frame[..=len])?;

        // The part NAKs until its internal write cycle completes.
        embassy_time::block_for(embassy_time::Duration::from_millis(WRITE_CYCLE_MS));
        Ok(())
    }
}
