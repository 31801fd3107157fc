//! Transceiver Control Main Application
//!
//! Entry point for the STM32G474-based control head. Initializes the
//! peripherals, restores the persisted settings, then runs the single
//! reactive control loop: sample inputs, debounce, dispatch events,
//! render when the state changed.

#![no_std]
#![no_main]

use defmt::{error, info, warn, Debug2Format};
use embassy_executor::Spawner;
use embassy_stm32::gpio::{Input, Level, Output, Pull, Speed};
use embassy_stm32::i2c::I2c;
use embassy_stm32::time::Hertz;
use embassy_time::{block_for, Duration, Instant, Timer};
use {defmt_rtt as _, panic_probe as _};

use trx_firmware::config::{HEARTBEAT_LOOP_TICKS, I2C_FREQUENCY_HZ, LOOP_PERIOD_MS};
use trx_firmware::drivers::display::StatusDisplay;
use trx_firmware::drivers::eeprom::SettingsEeprom;
use trx_firmware::drivers::si5351::{CrystalLoad, Si5351};
use trx_firmware::hal::gpio::{EncoderSwitch, PttInput, StatusLed, TxRelay};
use trx_firmware::input::debounce::{InputDebouncer, RawSample};
use trx_firmware::input::encoder::{Direction, QuadratureDecoder};
use trx_firmware::radio::state::TuningState;
use trx_firmware::radio::tuner::{FrequencyController, PersistAction};
use trx_firmware::render::RenderScheduler;
use trx_firmware::settings::SettingsStore;

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("TRX control firmware v{}", env!("CARGO_PKG_VERSION"));

    let config = embassy_stm32::Config::default();
    let p = embassy_stm32::init(config);

    let mut led = StatusLed::new(Output::new(p.PA5, Level::Low, Speed::Low));

    // Operator inputs, all idle-high with pull-ups
    let encoder_a = Input::new(p.PA0, Pull::Up);
    let encoder_b = Input::new(p.PA1, Pull::Up);
    let switch = EncoderSwitch::new(Input::new(p.PA2, Pull::Up));
    let ptt = PttInput::new(Input::new(p.PA3, Pull::Up));
    let tx_relay = TxRelay::new(Output::new(p.PB0, Level::Low, Speed::Low));

    // One blocking bus per peripheral keeps ownership simple
    let synth_i2c = I2c::new_blocking(p.I2C1, p.PB8, p.PB9, Hertz(I2C_FREQUENCY_HZ), Default::default());
    let display_i2c = I2c::new_blocking(p.I2C2, p.PA9, p.PA8, Hertz(I2C_FREQUENCY_HZ), Default::default());
    let eeprom_i2c = I2c::new_blocking(p.I2C3, p.PC8, p.PC9, Hertz(I2C_FREQUENCY_HZ), Default::default());

    let mut display = StatusDisplay::new(display_i2c);
    if let Err(e) = display.init() {
        error!("display init failed: {}", Debug2Format(&e));
        halt(led);
    }

    let mut synth = Si5351::new(synth_i2c);
    if let Err(e) = synth.init(CrystalLoad::default()) {
        error!("synthesizer init failed: {}", Debug2Format(&e));
        halt(led);
    }

    // Restore settings; anything invalid falls back to defaults
    let mut settings = SettingsStore::new(SettingsEeprom::new(eeprom_i2c));
    let state = match settings.load() {
        Ok(state) => state,
        Err(e) => {
            info!("no valid settings record ({}), using defaults", Debug2Format(&e));
            TuningState::default()
        }
    };
    info!("starting at {}", state);

    let mut controller = FrequencyController::new(state, synth, tx_relay);
    if let Err(e) = controller.initialize() {
        error!("synthesizer programming failed: {}", Debug2Format(&e));
        halt(led);
    }

    let mut render = RenderScheduler::new();
    let mut decoder = QuadratureDecoder::new();
    let mut debouncer = InputDebouncer::new();
    let mut heartbeat: u32 = 0;

    info!("entering control loop");

    loop {
        let now_ms = Instant::now().as_millis() as u32;

        let encoder_ticks = match decoder.update(encoder_a.is_high(), encoder_b.is_high()) {
            Some(Direction::Clockwise) => 1,
            Some(Direction::CounterClockwise) => -1,
            None => 0,
        };
        let sample = RawSample {
            encoder_ticks,
            switch_level: switch.level(),
            ptt_level: ptt.level(),
        };

        for event in debouncer.poll(sample, now_ms) {
            match controller.dispatch(event, &mut render) {
                Ok(PersistAction::SaveSettings) => {
                    // Fire-and-forget: report the failure, do not retry
                    if let Err(e) = settings.save(controller.state()) {
                        warn!("settings save failed: {}", Debug2Format(&e));
                    }
                }
                Ok(PersistAction::None) => {}
                Err(e) => {
                    warn!("control output failed: {}", Debug2Format(&e));
                }
            }
        }

        if let Err(e) = render.flush(controller.state(), &mut display) {
            warn!("display render failed: {}", Debug2Format(&e));
        }

        heartbeat += 1;
        if heartbeat >= HEARTBEAT_LOOP_TICKS {
            heartbeat = 0;
            led.toggle();
        }

        Timer::after_millis(u64::from(LOOP_PERIOD_MS)).await;
    }
}

/// Fatal-fault halt: signal on the status LED forever
///
/// Used when a peripheral the radio cannot operate without fails to
/// initialize.
fn halt(mut led: StatusLed<'static>) -> ! {
    loop {
        for _ in 0..3 {
            led.on();
            block_for(Duration::from_millis(100));
            led.off();
            block_for(Duration::from_millis(100));
        }
        block_for(Duration::from_millis(700));
    }
}
