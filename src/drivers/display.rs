//! Status Display
//!
//! Renders the tuning snapshot on an SSD1306 OLED. Implements the
//! [`FrameSink`] capability; the scheduler decides when a frame is
//! drawn, this driver only knows how.

use crate::radio::state::TuningState;
use crate::render::FrameSink;
use crate::types::TxRx;
use display_interface::DisplayError;
use embedded_graphics::mono_font::ascii::{FONT_6X10, FONT_9X18_BOLD};
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};
use embedded_hal::i2c::I2c;
use heapless::String;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::{I2CDisplayInterface, Ssd1306};

/// SSD1306 status display implementing the frame-sink capability
pub struct StatusDisplay<I>
where
    I: I2c,
{
    display: Ssd1306<I2CInterface<I>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>,
}

impl<I> StatusDisplay<I>
where
    I: I2c,
{
    /// Create a display driver over a blocking I2C bus
    #[must_use]
    pub fn new(i2c: I) -> Self {
        let interface = I2CDisplayInterface::new(i2c);
        let display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        Self { display }
    }

    /// Initialize the panel and draw a blank frame
    pub fn init(&mut self) -> Result<(), DisplayError> {
        self.display.init()?;
        self.display.clear_buffer();
        self.display.flush()
    }

    /// Compose one status frame into the buffer
    fn draw_frame(&mut self, state: &TuningState) {
        self.display.clear_buffer();

        let small = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
        let large = MonoTextStyle::new(&FONT_9X18_BOLD, BinaryColor::On);

        // Frequency, MHz.kHz.Hz grouping
        let hz = state.frequency().as_hz();
        let mut s: String<16> = String::new();
        core::fmt::write(
            &mut s,
            format_args!(
                "{}.{:03}.{:03}",
                hz / 1_000_000,
                (hz % 1_000_000) / 1000,
                hz % 1000
            ),
        )
        .ok();
        let _ = Text::with_baseline(&s, Point::new(16, 22), large, Baseline::Top)
            .draw(&mut self.display);

        // Step size
        let step_hz = state.step_size_hz();
        let mut s: String<12> = String::new();
        if step_hz >= 1000 {
            core::fmt::write(&mut s, format_args!("{} kHz", step_hz / 1000)).ok();
        } else {
            core::fmt::write(&mut s, format_args!("{step_hz} Hz")).ok();
        }
        let _ = Text::with_baseline(&s, Point::new(0, 52), small, Baseline::Top)
            .draw(&mut self.display);

        // TX/RX indicator, inverted box while transmitting
        match state.txrx() {
            TxRx::Tx => {
                let rect = Rectangle::new(Point::new(104, 0), Size::new(22, 12));
                let _ = rect
                    .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
                    .draw(&mut self.display);
                let inverted = MonoTextStyle::new(&FONT_6X10, BinaryColor::Off);
                let _ = Text::with_baseline("TX", Point::new(108, 1), inverted, Baseline::Top)
                    .draw(&mut self.display);
            }
            TxRx::Rx => {
                let _ = Text::with_baseline("RX", Point::new(108, 0), small, Baseline::Top)
                    .draw(&mut self.display);
            }
        }
    }
}

impl<I> FrameSink for StatusDisplay<I>
where
    I: I2c,
{
    type Error = DisplayError;

    fn render(&mut self, state: &TuningState) -> Result<(), Self::Error> {
        self.draw_frame(state);
        self.display.flush()
    }
}
