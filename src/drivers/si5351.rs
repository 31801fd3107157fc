//! `Si5351A` Clock Synthesizer Driver
//!
//! Frequency synthesis for the transceiver local oscillators. CLK0
//! carries the tunable VFO, CLK2 the fixed BFO; each runs from its own
//! PLL so retuning the VFO never disturbs the BFO.
//!
//! Frequencies are commanded in centihertz. Fractional PLL synthesis
//! with the maximal 20-bit denominator keeps the output within a
//! fraction of a hertz of the requested value across the band.

use crate::hal::i2c::{I2cAddress, I2cBus, I2cResult};
use crate::radio::tuner::{SynthChannel, Synthesizer};
use embassy_stm32::i2c::{Error as I2cError, I2c};
use embassy_stm32::mode::Blocking;

/// `Si5351A` register addresses
mod reg {
    pub const DEVICE_STATUS: u8 = 0;
    pub const OUTPUT_ENABLE: u8 = 3;
    pub const CLK0_CONTROL: u8 = 16;
    pub const CLK2_CONTROL: u8 = 18;
    pub const PLLA_PARAMS: u8 = 26;
    pub const PLLB_PARAMS: u8 = 34;
    pub const MS0_PARAMS: u8 = 42;
    pub const MS2_PARAMS: u8 = 58;
    pub const PLL_RESET: u8 = 177;
    pub const CRYSTAL_LOAD: u8 = 183;
}

/// Maximum fractional denominator (20 bits)
const FRAC_DENOM: u32 = 1_048_575;

/// VCO upper limit in centihertz (900 MHz)
const VCO_MAX_CHZ: u64 = 900_000_000 * 100;

/// Physical clock output used by a logical channel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ClockOutput {
    /// CLK0: tunable VFO, PLL A
    Clk0,
    /// CLK2: fixed BFO, PLL B
    Clk2,
}

impl ClockOutput {
    const fn control_reg(self) -> u8 {
        match self {
            Self::Clk0 => reg::CLK0_CONTROL,
            Self::Clk2 => reg::CLK2_CONTROL,
        }
    }

    const fn ms_reg(self) -> u8 {
        match self {
            Self::Clk0 => reg::MS0_PARAMS,
            Self::Clk2 => reg::MS2_PARAMS,
        }
    }

    const fn pll_reg(self) -> u8 {
        match self {
            Self::Clk0 => reg::PLLA_PARAMS,
            Self::Clk2 => reg::PLLB_PARAMS,
        }
    }

    /// PLL source bit for the clock control register
    const fn pll_select_bit(self) -> u8 {
        match self {
            Self::Clk0 => 0x00,
            Self::Clk2 => 0x20,
        }
    }

    /// Reset bit for the owning PLL
    const fn pll_reset_bit(self) -> u8 {
        match self {
            Self::Clk0 => 0x20,
            Self::Clk2 => 0x80,
        }
    }

    const fn enable_bit(self) -> u8 {
        match self {
            Self::Clk0 => 0,
            Self::Clk2 => 2,
        }
    }

    const fn from_channel(channel: SynthChannel) -> Self {
        match channel {
            SynthChannel::Vfo => Self::Clk0,
            SynthChannel::Bfo => Self::Clk2,
        }
    }
}

/// Drive strength setting
#[derive(Clone, Copy, Debug, Default)]
pub enum DriveStrength {
    /// 2mA drive
    Drive2mA,
    /// 4mA drive
    Drive4mA,
    /// 6mA drive
    Drive6mA,
    /// 8mA drive (maximum)
    #[default]
    Drive8mA,
}

impl DriveStrength {
    const fn as_reg(self) -> u8 {
        match self {
            Self::Drive2mA => 0,
            Self::Drive4mA => 1,
            Self::Drive6mA => 2,
            Self::Drive8mA => 3,
        }
    }
}

/// Crystal load capacitance
#[derive(Clone, Copy, Debug, Default)]
pub enum CrystalLoad {
    /// 6 pF load
    Load6pF,
    /// 8 pF load
    Load8pF,
    /// 10 pF load
    #[default]
    Load10pF,
}

impl CrystalLoad {
    const fn as_reg(self) -> u8 {
        match self {
            Self::Load6pF => 0b0100_0000,
            Self::Load8pF => 0b1000_0000,
            Self::Load10pF => 0b1100_0000,
        }
    }
}

/// Fractional divider parameters, `a + b/c`
#[derive(Clone, Copy, Debug)]
struct FracParams {
    a: u32,
    b: u32,
    c: u32,
}

impl FracParams {
    /// Pack into the eight P1/P2/P3 register bytes
    fn as_regs(&self) -> [u8; 8] {
        let scaled = (128 * self.b) / self.c;
        let p1 = 128 * self.a + scaled - 512;
        let p2 = 128 * self.b - self.c * scaled;
        let p3 = self.c;

        [
            ((p3 >> 8) & 0xFF) as u8,
            (p3 & 0xFF) as u8,
            ((p1 >> 16) & 0x03) as u8,
            ((p1 >> 8) & 0xFF) as u8,
            (p1 & 0xFF) as u8,
            (((p3 >> 12) & 0xF0) | ((p2 >> 16) & 0x0F)) as u8,
            ((p2 >> 8) & 0xFF) as u8,
            (p2 & 0xFF) as u8,
        ]
    }
}

/// `Si5351A` driver
pub struct Si5351<'d> {
    bus: I2cBus<'d>,
    xtal_freq: u32,
    output_enable: u8,
}

impl<'d> Si5351<'d> {
    /// Default crystal frequency (25 MHz)
    pub const DEFAULT_XTAL: u32 = 25_000_000;

    /// Create a new `Si5351A` driver
    #[must_use]
    pub fn new(i2c: I2c<'d, Blocking>) -> Self {
        Self {
            bus: I2cBus::new(i2c),
            xtal_freq: Self::DEFAULT_XTAL,
            output_enable: 0xFF, // All outputs disabled
        }
    }

    /// Initialize the `Si5351A`
    pub fn init(&mut self, load: CrystalLoad) -> I2cResult<()> {
        self.wait_ready()?;

        // Disable all outputs during configuration
        self.bus
            .write_reg(I2cAddress::SI5351, reg::OUTPUT_ENABLE, 0xFF)?;

        self.bus
            .write_reg(I2cAddress::SI5351, reg::CRYSTAL_LOAD, load.as_reg())?;

        // Power down both clock outputs until first use
        for clk in [ClockOutput::Clk0, ClockOutput::Clk2] {
            self.bus
                .write_reg(I2cAddress::SI5351, clk.control_reg(), 0x80)?;
        }

        Ok(())
    }

    /// Wait for device to be ready (`SYS_INIT` cleared)
    fn wait_ready(&mut self) -> I2cResult<()> {
        for _ in 0..100 {
            let status = self.bus.read_reg(I2cAddress::SI5351, reg::DEVICE_STATUS)?;
            if status & 0x80 == 0 {
                return Ok(());
            }
            embassy_time::block_for(embassy_time::Duration::from_millis(1));
        }
        // Timeout, but continue anyway
        Ok(())
    }

    /// Program one output for a target frequency in centihertz
    fn program(&mut self, output: ClockOutput, centihertz: u64) -> I2cResult<()> {
        let (pll, ms) = self.calculate_params(centihertz);

        self.bus
            .write_regs(I2cAddress::SI5351, output.pll_reg(), &pll.as_regs())?;
        self.bus
            .write_regs(I2cAddress::SI5351, output.ms_reg(), &ms.as_regs())?;

        // Powered up, integer-mode multisynth, fractional PLL source
        let control = 0x0C | output.pll_select_bit() | DriveStrength::Drive8mA.as_reg();
        self.bus
            .write_reg(I2cAddress::SI5351, output.control_reg(), control)?;

        self.bus
            .write_reg(I2cAddress::SI5351, reg::PLL_RESET, output.pll_reset_bit())?;

        self.enable(output)
    }

    /// Enable a clock output
    fn enable(&mut self, output: ClockOutput) -> I2cResult<()> {
        let mask = self.output_enable & !(1 << output.enable_bit());
        if mask != self.output_enable {
            self.output_enable = mask;
            self.bus
                .write_reg(I2cAddress::SI5351, reg::OUTPUT_ENABLE, mask)?;
        }
        Ok(())
    }

    /// Derive PLL and multisynth parameters for a target frequency
    ///
    /// The multisynth runs as an even integer divider; all fractional
    /// resolution lives in the PLL feedback divider.
    fn calculate_params(&self, target_chz: u64) -> (FracParams, FracParams) {
        // Even integer output divider keeping the VCO near its ceiling
        let mut ms_div = (VCO_MAX_CHZ / target_chz).clamp(6, 1800) as u32;
        ms_div &= !1;

        let vco_chz = target_chz * u64::from(ms_div);
        let xtal_chz = u64::from(self.xtal_freq) * 100;

        let a = (vco_chz / xtal_chz).clamp(15, 90) as u32;
        let rem = vco_chz % xtal_chz;
        let b = ((rem * u64::from(FRAC_DENOM)) / xtal_chz) as u32;

        let pll = FracParams {
            a,
            b,
            c: FRAC_DENOM,
        };
        let ms = FracParams {
            a: ms_div,
            b: 0,
            c: 1,
        };

        (pll, ms)
    }
}

impl Synthesizer for Si5351<'_> {
    type Error = I2cError;

    fn set_centihertz(
        &mut self,
        channel: SynthChannel,
        centihertz: u64,
    ) -> Result<(), Self::Error> {
        self.program(ClockOutput::from_channel(channel), centihertz)
    }
}
