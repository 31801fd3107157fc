//! Input Debouncing Tests
//!
//! Tests for the per-line debounce contexts and the event debouncer.
//! Run with: cargo test --target x86_64-unknown-linux-gnu --no-default-features --features std --test debounce_tests

use trx_firmware::config::DEBOUNCE_WINDOW_MS;
use trx_firmware::input::debounce::{DebouncedLine, Edge, InputDebouncer, RawSample};
use trx_firmware::input::InputEvent;

/// A quiet sample with both lines released (idle high)
fn idle() -> RawSample {
    RawSample {
        encoder_ticks: 0,
        switch_level: true,
        ptt_level: true,
    }
}

// ============================================================================
// DebouncedLine Tests
// ============================================================================

#[test]
fn line_accepts_first_transition() {
    let mut line = DebouncedLine::new(true, DEBOUNCE_WINDOW_MS);
    assert_eq!(line.update(false, 1_000), Some(Edge::Falling));
    assert!(!line.level());
}

#[test]
fn line_ignores_unchanged_level() {
    let mut line = DebouncedLine::new(true, DEBOUNCE_WINDOW_MS);
    assert_eq!(line.update(true, 1_000), None);
    assert_eq!(line.update(true, 2_000), None);
}

#[test]
fn line_ignores_bounce_inside_window() {
    let mut line = DebouncedLine::new(true, DEBOUNCE_WINDOW_MS);
    assert_eq!(line.update(false, 1_000), Some(Edge::Falling));

    // Contact bounce a few ms after the accepted press
    assert_eq!(line.update(true, 1_005), None);
    assert_eq!(line.update(true, 1_030), None);
    assert_eq!(line.update(false, 1_040), None);
    assert!(!line.level());
}

#[test]
fn line_accepts_transition_after_window() {
    let mut line = DebouncedLine::new(true, DEBOUNCE_WINDOW_MS);
    assert_eq!(line.update(false, 1_000), Some(Edge::Falling));
    assert_eq!(
        line.update(true, 1_000 + DEBOUNCE_WINDOW_MS),
        Some(Edge::Rising)
    );
}

#[test]
fn line_elapsed_math_survives_timestamp_wrap() {
    let mut line = DebouncedLine::new(true, DEBOUNCE_WINDOW_MS);
    assert_eq!(line.update(false, u32::MAX - 10), Some(Edge::Falling));
    // 60 ms later the counter has wrapped past zero
    assert_eq!(line.update(true, 49), Some(Edge::Rising));
}

// ============================================================================
// InputDebouncer: Encoder Switch
// ============================================================================

#[test]
fn switch_press_produces_step_cycle() {
    let mut deb = InputDebouncer::new();
    let sample = RawSample {
        switch_level: false,
        ..idle()
    };
    let events = deb.poll(sample, 1_000);
    assert_eq!(events.as_slice(), &[InputEvent::StepCycle]);
}

#[test]
fn switch_release_produces_nothing() {
    let mut deb = InputDebouncer::new();
    let pressed = RawSample {
        switch_level: false,
        ..idle()
    };
    deb.poll(pressed, 1_000);

    let events = deb.poll(idle(), 1_000 + DEBOUNCE_WINDOW_MS);
    assert!(events.is_empty());
}

#[test]
fn switch_bounce_inside_window_produces_one_event() {
    // Two mechanical transitions inside one window: only the first counts
    let mut deb = InputDebouncer::new();
    let pressed = RawSample {
        switch_level: false,
        ..idle()
    };

    let first = deb.poll(pressed, 1_000);
    assert_eq!(first.as_slice(), &[InputEvent::StepCycle]);

    // Bounce: release and press again 20 ms later
    assert!(deb.poll(idle(), 1_010).is_empty());
    assert!(deb.poll(pressed, 1_020).is_empty());
}

#[test]
fn switch_second_press_after_window_accepted() {
    let mut deb = InputDebouncer::new();
    let pressed = RawSample {
        switch_level: false,
        ..idle()
    };

    deb.poll(pressed, 1_000);
    deb.poll(idle(), 1_100);

    let events = deb.poll(pressed, 1_200);
    assert_eq!(events.as_slice(), &[InputEvent::StepCycle]);
}

// ============================================================================
// InputDebouncer: PTT
// ============================================================================

#[test]
fn ptt_assert_and_release() {
    let mut deb = InputDebouncer::new();
    let keyed = RawSample {
        ptt_level: false,
        ..idle()
    };

    let events = deb.poll(keyed, 1_000);
    assert_eq!(events.as_slice(), &[InputEvent::PttAsserted]);

    let events = deb.poll(idle(), 2_000);
    assert_eq!(events.as_slice(), &[InputEvent::PttReleased]);
}

#[test]
fn ptt_bounce_inside_window_ignored() {
    let mut deb = InputDebouncer::new();
    let keyed = RawSample {
        ptt_level: false,
        ..idle()
    };

    deb.poll(keyed, 1_000);
    assert!(deb.poll(idle(), 1_020).is_empty());
    assert!(deb.poll(keyed, 1_040).is_empty());
}

#[test]
fn ptt_and_switch_windows_are_independent() {
    let mut deb = InputDebouncer::new();

    // Switch pressed; its window is now running
    let pressed = RawSample {
        switch_level: false,
        ..idle()
    };
    deb.poll(pressed, 1_000);

    // PTT keyed 10 ms later must still be accepted
    let both = RawSample {
        switch_level: false,
        ptt_level: false,
        ..idle()
    };
    let events = deb.poll(both, 1_010);
    assert_eq!(events.as_slice(), &[InputEvent::PttAsserted]);
}

// ============================================================================
// InputDebouncer: Encoder Ticks
// ============================================================================

#[test]
fn encoder_ticks_forwarded_as_tune_events() {
    let mut deb = InputDebouncer::new();

    let cw = RawSample {
        encoder_ticks: 3,
        ..idle()
    };
    let events = deb.poll(cw, 1_000);
    assert_eq!(
        events.as_slice(),
        &[InputEvent::TuneUp, InputEvent::TuneUp, InputEvent::TuneUp]
    );

    let ccw = RawSample {
        encoder_ticks: -2,
        ..idle()
    };
    let events = deb.poll(ccw, 1_001);
    assert_eq!(events.as_slice(), &[InputEvent::TuneDown, InputEvent::TuneDown]);
}

#[test]
fn encoder_ticks_not_subject_to_debounce_window() {
    let mut deb = InputDebouncer::new();
    let cw = RawSample {
        encoder_ticks: 1,
        ..idle()
    };

    // Back-to-back polls well inside one window all forward their tick
    for now in [1_000, 1_001, 1_002, 1_003] {
        let events = deb.poll(cw, now);
        assert_eq!(events.as_slice(), &[InputEvent::TuneUp]);
    }
}

#[test]
fn quiet_sample_produces_no_events() {
    let mut deb = InputDebouncer::new();
    assert!(deb.poll(idle(), 1_000).is_empty());
}
