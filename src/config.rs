//! System configuration and hardware constants
//!
//! Compile-time constants for the transceiver control hardware.
//! Pin mappings, bus parameters, tuning limits, and the persisted
//! settings layout are centralized here.

/// System clock frequency (STM32G474 @ 170MHz)
pub const SYSTEM_CLOCK_HZ: u32 = 170_000_000;

/// I2C bus frequency for the `Si5351A`, display, and EEPROM
pub const I2C_FREQUENCY_HZ: u32 = 400_000;

/// `Si5351A` I2C address
pub const SI5351_I2C_ADDR: u8 = 0x60;

/// SSD1306 OLED I2C address
pub const DISPLAY_I2C_ADDR: u8 = 0x3C;

/// 24C-series settings EEPROM I2C address
pub const EEPROM_I2C_ADDR: u8 = 0x50;

/// Display width in pixels
pub const DISPLAY_WIDTH: u32 = 128;

/// Display height in pixels
pub const DISPLAY_HEIGHT: u32 = 64;

/// `Si5351A` crystal frequency (25 MHz standard)
pub const SI5351_XTAL_FREQ: u32 = 25_000_000;

/// Default startup frequency (40m band, SSB segment)
pub const DEFAULT_FREQUENCY_HZ: u32 = 7_100_000;

/// Intermediate-frequency offset added to the dial frequency when
/// commanding the tunable synthesizer channel
pub const IF_OFFSET_HZ: u32 = 9_000_000;

/// Fixed BFO frequency, programmed once at startup
pub const BFO_FREQUENCY_HZ: u32 = 9_000_000;

/// Debounce window for mechanical inputs (encoder switch, PTT)
pub const DEBOUNCE_WINDOW_MS: u32 = 50;

/// Reactive control loop period in milliseconds
pub const LOOP_PERIOD_MS: u32 = 1;

/// Heartbeat LED toggle interval, in loop iterations
pub const HEARTBEAT_LOOP_TICKS: u32 = 500;

/// Sentinel marking a valid settings record in EEPROM
pub const SETTINGS_MAGIC: u16 = 0xA55A;

/// EEPROM offset of the settings record
pub const SETTINGS_OFFSET: u16 = 0;

/// EEPROM page size (24C02-class parts)
pub const EEPROM_PAGE_SIZE: usize = 8;

/// Pin assignments for GPIO
pub mod pins {
    //! GPIO pin assignments matching the schematic

    /// Status LED (directly on MCU)
    pub const LED_STATUS: &str = "PA5";

    /// I2C1 SCL (Si5351)
    pub const I2C1_SCL: &str = "PB8";

    /// I2C1 SDA (Si5351)
    pub const I2C1_SDA: &str = "PB9";

    /// I2C2 SCL (display)
    pub const I2C2_SCL: &str = "PA9";

    /// I2C2 SDA (display)
    pub const I2C2_SDA: &str = "PA8";

    /// I2C3 SCL (settings EEPROM)
    pub const I2C3_SCL: &str = "PC8";

    /// I2C3 SDA (settings EEPROM)
    pub const I2C3_SDA: &str = "PC9";

    /// Encoder A input
    pub const ENCODER_A: &str = "PA0";

    /// Encoder B input
    pub const ENCODER_B: &str = "PA1";

    /// Encoder push button (active low)
    pub const ENCODER_SW: &str = "PA2";

    /// PTT input (active low)
    pub const PTT_IN: &str = "PA3";

    /// Transmit-enable relay output
    pub const TX_RELAY: &str = "PB0";
}
