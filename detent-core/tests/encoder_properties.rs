//! Property tests for encoder decoding

use detent_core::encoder::{EncoderState, QuadratureSample, MAX_BUTTON_PRESSES};
use proptest::prelude::*;

/// Clockwise cycle starting from rest
const CW: [u8; 4] = [0b01, 0b00, 0b10, 0b11];
/// Counter-clockwise cycle starting from rest
const CCW: [u8; 4] = [0b10, 0b00, 0b01, 0b11];

fn edge(state: &EncoderState, bits: u8) -> bool {
    state.on_quadrature_edge(QuadratureSample::from_bits(bits))
}

/// Apply a whole cycle, returning the number of drain requests
fn cycle(state: &EncoderState, samples: &[u8; 4]) -> usize {
    samples.iter().filter(|&&bits| edge(state, bits)).count()
}

#[test]
fn clockwise_cycle_adds_four_with_one_request() {
    let state = EncoderState::new();
    let before = state.position();
    assert_eq!(cycle(&state, &CW), 1);
    assert_eq!(state.position(), before.wrapping_add(4));
}

#[test]
fn reversed_half_cycle_requests_nothing() {
    let state = EncoderState::new();
    let before = state.position();
    let requests = [0b01, 0b00, 0b01, 0b11]
        .iter()
        .filter(|&&bits| edge(&state, bits))
        .count();
    assert_eq!(requests, 0);
    assert_eq!(state.position(), before);
}

#[test]
fn button_saturates_within_one_window() {
    let state = EncoderState::new();
    for _ in 0..130 {
        state.on_button_edge();
    }
    assert_eq!(state.drain().presses, 127);
    assert_eq!(state.drain().presses, 0);
}

proptest! {
    /// Any mix of whole cycles nets out to the signed cycle count
    #[test]
    fn whole_cycles_net_out(turns in prop::collection::vec(any::<bool>(), 0..30)) {
        let state = EncoderState::new();
        let mut expected: i32 = 0;
        for clockwise in &turns {
            if *clockwise {
                cycle(&state, &CW);
                expected += 1;
            } else {
                cycle(&state, &CCW);
                expected -= 1;
            }
        }
        prop_assert_eq!(i32::from(state.drain().detents), expected);
        prop_assert_eq!(state.drain().detents, 0);
    }

    /// Draining after every cycle loses nothing compared to draining once
    #[test]
    fn frequent_drains_lose_nothing(turns in prop::collection::vec(any::<bool>(), 0..30)) {
        let state = EncoderState::new();
        let mut total: i32 = 0;
        let mut expected: i32 = 0;
        for clockwise in &turns {
            let samples = if *clockwise { &CW } else { &CCW };
            cycle(&state, samples);
            expected += if *clockwise { 1 } else { -1 };
            total += i32::from(state.drain().detents);
        }
        prop_assert_eq!(total, expected);
    }

    /// Single-line chatter at rest never produces a detent
    #[test]
    fn chatter_at_rest_is_ignored(flips in prop::collection::vec(any::<bool>(), 0..40)) {
        let state = EncoderState::new();
        let mut requests = 0;
        for line_a in &flips {
            // Leave rest on one line and come straight back
            let away = if *line_a { 0b01 } else { 0b10 };
            requests += usize::from(edge(&state, away));
            requests += usize::from(edge(&state, 0b11));
        }
        prop_assert_eq!(requests, 0);
        prop_assert_eq!(state.drain().detents, 0);
    }

    /// Arbitrary noise keeps the position aligned to detents whenever the
    /// lines are back at rest
    #[test]
    fn noise_keeps_alignment(samples in prop::collection::vec(0u8..4, 0..64)) {
        let state = EncoderState::new();
        for bits in &samples {
            edge(&state, *bits);
        }
        edge(&state, 0b11);
        prop_assert_eq!(state.position() % 4, 0);
    }

    /// Press counts are exact below the cap and clamp above it
    #[test]
    fn presses_clamp(count in 0usize..400) {
        let state = EncoderState::new();
        for _ in 0..count {
            state.on_button_edge();
        }
        let expected = count.min(usize::from(MAX_BUTTON_PRESSES)) as u8;
        prop_assert_eq!(state.drain().presses, expected);
        prop_assert_eq!(state.drain().presses, 0);
    }
}
