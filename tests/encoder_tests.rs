//! Quadrature Decoder Tests
//!
//! Tests detent detection and bounce rejection in the transition-table
//! decoder.
//! Run with: cargo test --target x86_64-unknown-linux-gnu --no-default-features --features std --test encoder_tests

use trx_firmware::input::encoder::{Direction, QuadratureDecoder};

/// Clockwise phase sequence for one detent, starting from rest (both low)
const CW_DETENT: [(bool, bool); 4] = [(false, true), (true, true), (true, false), (false, false)];

/// Counter-clockwise phase sequence for one detent
const CCW_DETENT: [(bool, bool); 4] = [(true, false), (true, true), (false, true), (false, false)];

fn feed(decoder: &mut QuadratureDecoder, seq: &[(bool, bool)]) -> Vec<Direction> {
    seq.iter()
        .filter_map(|&(a, b)| decoder.update(a, b))
        .collect()
}

// ============================================================================
// Detent Detection
// ============================================================================

#[test]
fn clockwise_detent_produces_one_tick() {
    let mut decoder = QuadratureDecoder::new();
    let ticks = feed(&mut decoder, &CW_DETENT);
    assert_eq!(ticks, [Direction::Clockwise]);
}

#[test]
fn counter_clockwise_detent_produces_one_tick() {
    let mut decoder = QuadratureDecoder::new();
    let ticks = feed(&mut decoder, &CCW_DETENT);
    assert_eq!(ticks, [Direction::CounterClockwise]);
}

#[test]
fn tick_emitted_only_at_detent_completion() {
    let mut decoder = QuadratureDecoder::new();
    // First three quarter steps: no tick yet
    assert_eq!(decoder.update(false, true), None);
    assert_eq!(decoder.update(true, true), None);
    assert_eq!(decoder.update(true, false), None);
    // Fourth completes the detent
    assert_eq!(decoder.update(false, false), Some(Direction::Clockwise));
}

#[test]
fn continuous_rotation_produces_one_tick_per_detent() {
    let mut decoder = QuadratureDecoder::new();
    let mut ticks = Vec::new();
    for _ in 0..5 {
        ticks.extend(feed(&mut decoder, &CW_DETENT));
    }
    assert_eq!(ticks.len(), 5);
    assert!(ticks.iter().all(|&t| t == Direction::Clockwise));
}

// ============================================================================
// Bounce and Direction Reversal
// ============================================================================

#[test]
fn unchanged_sample_produces_nothing() {
    let mut decoder = QuadratureDecoder::new();
    assert_eq!(decoder.update(false, false), None);
    assert_eq!(decoder.update(false, false), None);
}

#[test]
fn jitter_between_adjacent_states_produces_no_tick() {
    let mut decoder = QuadratureDecoder::new();
    // Oscillate on the first quarter step: net progress is zero
    for _ in 0..10 {
        assert_eq!(decoder.update(false, true), None);
        assert_eq!(decoder.update(false, false), None);
    }
}

#[test]
fn double_phase_change_discards_partial_detent() {
    let mut decoder = QuadratureDecoder::new();
    decoder.update(false, true);
    decoder.update(true, true);
    // Both phases flip at once: illegal transition, detent discarded
    assert_eq!(decoder.update(false, false), None);
    // A full clean detent afterwards still decodes
    let ticks = feed(&mut decoder, &CW_DETENT);
    assert_eq!(ticks, [Direction::Clockwise]);
}

#[test]
fn direction_reversal_mid_detent_produces_no_false_tick() {
    let mut decoder = QuadratureDecoder::new();
    decoder.update(false, true);
    decoder.update(true, true);
    // Back out the way we came
    assert_eq!(decoder.update(false, true), None);
    assert_eq!(decoder.update(false, false), None);
}

#[test]
fn reset_clears_partial_progress() {
    let mut decoder = QuadratureDecoder::new();
    decoder.update(false, true);
    decoder.update(true, true);
    decoder.reset();
    // The remaining half detent alone must not tick
    assert_eq!(decoder.update(true, false), None);
    assert_eq!(decoder.update(false, false), None);
}
