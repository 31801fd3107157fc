//! I2C Bus Abstractions
//!
//! Blocking I2C wrappers for the control peripherals. The reactive
//! loop performs all bus traffic inline, so the buses run in blocking
//! mode; every transfer completes before the next input sample.

use embassy_stm32::i2c::{Error as I2cError, I2c};
use embassy_stm32::mode::Blocking;

/// I2C operation result
pub type I2cResult<T> = Result<T, I2cError>;

/// I2C device address wrapper
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct I2cAddress(u8);

impl I2cAddress {
    /// `Si5351A` clock synthesizer address
    pub const SI5351: Self = Self(0x60);

    /// SSD1306 OLED display address
    pub const SSD1306: Self = Self(0x3C);

    /// 24C-series settings EEPROM address
    pub const EEPROM: Self = Self(0x50);

    /// Create from 7-bit address
    #[must_use]
    pub const fn new(addr: u8) -> Self {
        Self(addr & 0x7F)
    }

    /// Get the 7-bit address
    #[must_use]
    pub const fn addr(self) -> u8 {
        self.0
    }
}

impl defmt::Format for I2cAddress {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "0x{:02X}", self.0);
    }
}

/// Blocking I2C bus wrapper
pub struct I2cBus<'d> {
    i2c: I2c<'d, Blocking>,
}

impl<'d> I2cBus<'d> {
    /// Create a new I2C bus wrapper
    #[must_use]
    pub fn new(i2c: I2c<'d, Blocking>) -> Self {
        Self { i2c }
    }

    /// Write bytes to a device
    pub fn write(&mut self, addr: I2cAddress, data: &[u8]) -> I2cResult<()> {
        self.i2c.blocking_write(addr.addr(), data)
    }

    /// Write then read (combined transaction)
    pub fn write_read(
        &mut self,
        addr: I2cAddress,
        write: &[u8],
        read: &mut [u8],
    ) -> I2cResult<()> {
        self.i2c.blocking_write_read(addr.addr(), write, read)
    }

    /// Write a single register
    pub fn write_reg(&mut self, addr: I2cAddress, reg: u8, value: u8) -> I2cResult<()> {
        self.i2c.blocking_write(addr.addr(), &[reg, value])
    }

    /// Read a single register
    pub fn read_reg(&mut self, addr: I2cAddress, reg: u8) -> I2cResult<u8> {
        let mut buf = [0u8];
        self.i2c
            .blocking_write_read(addr.addr(), &[reg], &mut buf)?;
        Ok(buf[0])
    }

    /// Write multiple registers starting at a base address
    pub fn write_regs(&mut self, addr: I2cAddress, base_reg: u8, values: &[u8]) -> I2cResult<()> {
        if values.len() <= 16 {
            let mut buf = [0u8; 17];
            buf[0] = base_reg;
            buf[1..=values.len()].copy_from_slice(values);
            self.i2c.blocking_write(addr.addr(), &buf[..=values.len()])
        } else {
            for (i, &value) in values.iter().enumerate() {
                self.write_reg(addr, base_reg + i as u8, value)?;
            }
            Ok(())
        }
    }

    /// Read multiple registers starting at a base address
    pub fn read_regs(
        &mut self,
        addr: I2cAddress,
        base_reg: u8,
        buffer: &mut [u8],
    ) -> I2cResult<()> {
        self.i2c
            .blocking_write_read(addr.addr(), &[base_reg], buffer)
    }
}
