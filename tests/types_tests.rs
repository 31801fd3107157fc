//! Types Module Tests
//!
//! Tests for the validated frequency, step table index, and TX/RX types.
//! Run with: cargo test --target x86_64-unknown-linux-gnu --no-default-features --features std --test types_tests

use trx_firmware::config::{
    BFO_FREQUENCY_HZ, DEFAULT_FREQUENCY_HZ, IF_OFFSET_HZ, SETTINGS_MAGIC,
};
use trx_firmware::types::{Frequency, StepIndex, TxRx};

// ============================================================================
// Frequency Tests
// ============================================================================

#[test]
fn frequency_from_hz_in_range() {
    let freq = Frequency::from_hz(7_100_000).unwrap();
    assert_eq!(freq.as_hz(), 7_100_000);
}

#[test]
fn frequency_band_edges_valid() {
    assert!(Frequency::from_hz(Frequency::MIN_HZ).is_some());
    assert!(Frequency::from_hz(Frequency::MAX_HZ).is_some());
}

#[test]
fn frequency_outside_band_rejected() {
    assert!(Frequency::from_hz(Frequency::MIN_HZ - 1).is_none());
    assert!(Frequency::from_hz(Frequency::MAX_HZ + 1).is_none());
    assert!(Frequency::from_hz(0).is_none());
}

#[test]
fn frequency_as_khz_truncates() {
    let freq = Frequency::from_hz(7_123_456).unwrap();
    assert_eq!(freq.as_khz(), 7_123);
}

#[test]
fn frequency_stepped_up_in_band() {
    let freq = Frequency::from_hz(7_100_000).unwrap();
    let up = freq.stepped_up(1_000).unwrap();
    assert_eq!(up.as_hz(), 7_101_000);
}

#[test]
fn frequency_stepped_up_past_band_is_none() {
    let freq = Frequency::from_hz(Frequency::MAX_HZ).unwrap();
    assert!(freq.stepped_up(10).is_none());

    let near = Frequency::from_hz(7_195_000).unwrap();
    assert!(near.stepped_up(10_000).is_none());
}

#[test]
fn frequency_stepped_up_to_exact_edge() {
    let freq = Frequency::from_hz(7_190_000).unwrap();
    let up = freq.stepped_up(10_000).unwrap();
    assert_eq!(up.as_hz(), Frequency::MAX_HZ);
}

#[test]
fn frequency_stepped_down_in_band() {
    let freq = Frequency::from_hz(7_100_000).unwrap();
    let down = freq.stepped_down(1_000).unwrap();
    assert_eq!(down.as_hz(), 7_099_000);
}

#[test]
fn frequency_stepped_down_past_band_is_none() {
    let freq = Frequency::from_hz(Frequency::MIN_HZ).unwrap();
    assert!(freq.stepped_down(10).is_none());
}

#[test]
fn frequency_stepped_down_underflow_is_none() {
    // Step larger than the absolute frequency must not wrap
    let freq = Frequency::from_hz(7_000_010).unwrap();
    assert!(freq.stepped_down(100_000).is_none());
}

// ============================================================================
// StepIndex Tests
// ============================================================================

#[test]
fn step_index_new_in_table() {
    for i in 0..StepIndex::COUNT as u8 {
        let step = StepIndex::new(i).unwrap();
        assert_eq!(step.index(), i);
    }
}

#[test]
fn step_index_new_beyond_table_rejected() {
    assert!(StepIndex::new(StepIndex::COUNT as u8).is_none());
    assert!(StepIndex::new(255).is_none());
}

#[test]
fn step_index_size_matches_table() {
    for (i, &hz) in StepIndex::TABLE_HZ.iter().enumerate() {
        let step = StepIndex::new(i as u8).unwrap();
        assert_eq!(step.size_hz(), hz);
    }
}

#[test]
fn step_table_is_ordered() {
    for pair in StepIndex::TABLE_HZ.windows(2) {
        assert!(pair[0] < pair[1]);
    }
}

#[test]
fn step_index_default_is_mid_table() {
    assert_eq!(StepIndex::DEFAULT.index() as usize, StepIndex::COUNT / 2);
    assert_eq!(StepIndex::DEFAULT.size_hz(), 1_000);
}

#[test]
fn step_index_cycled_advances() {
    let step = StepIndex::new(0).unwrap();
    assert_eq!(step.cycled().index(), 1);
}

#[test]
fn step_index_cycled_wraps() {
    let last = StepIndex::new(StepIndex::COUNT as u8 - 1).unwrap();
    assert_eq!(last.cycled().index(), 0);
}

#[test]
fn step_index_full_cycle_returns_to_start() {
    let start = StepIndex::DEFAULT;
    let mut step = start;
    for _ in 0..StepIndex::COUNT {
        step = step.cycled();
    }
    assert_eq!(step, start);
}

// ============================================================================
// TxRx Tests
// ============================================================================

#[test]
fn txrx_default_is_rx() {
    assert_eq!(TxRx::default(), TxRx::Rx);
    assert!(!TxRx::default().is_tx());
}

#[test]
fn txrx_is_tx() {
    assert!(TxRx::Tx.is_tx());
    assert!(!TxRx::Rx.is_tx());
}

// ============================================================================
// Configuration Sanity Tests
// ============================================================================

#[test]
fn default_frequency_is_in_band() {
    assert!(Frequency::from_hz(DEFAULT_FREQUENCY_HZ).is_some());
}

#[test]
fn if_offset_matches_bfo() {
    assert_eq!(IF_OFFSET_HZ, BFO_FREQUENCY_HZ);
}

#[test]
fn settings_magic_distinguishable_from_blank_storage() {
    // Fresh EEPROM reads all-ones; erased reads zeros
    assert_ne!(SETTINGS_MAGIC, 0x0000);
    assert_ne!(SETTINGS_MAGIC, 0xFFFF);
}

#[test]
fn synthesizer_command_fits_u64() {
    // Worst case: band top plus IF offset, in centihertz
    let worst = (u64::from(Frequency::MAX_HZ) + u64::from(IF_OFFSET_HZ)) * 100;
    assert_eq!(worst, 1_620_000_000);
}
