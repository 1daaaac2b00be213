//! Shared fixtures and proptest strategies.
//!
//! Strategies only produce pin sequences that satisfy the frame and game
//! invariants, so every generated value must construct successfully.

use proptest::prelude::*;

pub(crate) const PERFECT: [&[u8]; 10] = [
    &[10],
    &[10],
    &[10],
    &[10],
    &[10],
    &[10],
    &[10],
    &[10],
    &[10],
    &[10, 10, 10],
];

/// Running totals: 20, 39, 48, 66, 74, 84, 90, 120, 148, 167.
pub(crate) const MIXED: [&[u8]; 10] = [
    &[10],
    &[7, 3],
    &[9, 0],
    &[10],
    &[0, 8],
    &[8, 2],
    &[0, 6],
    &[10],
    &[10],
    &[10, 8, 1],
];

/// Remaining pins after `first` was knocked down, or a fresh rack after a strike.
fn standing_after(first: u8) -> u8 {
    if first == 10 { 10 } else { 10 - first }
}

pub(crate) fn normal_pins() -> impl Strategy<Value = Vec<u8>> {
    (0u8..=10).prop_flat_map(|first| {
        if first == 10 {
            Just(vec![10, 0]).boxed()
        } else {
            (0..=10 - first)
                .prop_map(move |second| vec![first, second])
                .boxed()
        }
    })
}

pub(crate) fn final_pins() -> impl Strategy<Value = Vec<u8>> {
    (0u8..=10)
        .prop_flat_map(|first| (Just(first), 0..=standing_after(first)))
        .prop_flat_map(|(first, second)| {
            if first == 10 {
                (0..=standing_after(second))
                    .prop_map(move |third| vec![first, second, third])
                    .boxed()
            } else if first + second == 10 {
                (0u8..=10)
                    .prop_map(move |third| vec![first, second, third])
                    .boxed()
            } else {
                Just(vec![first, second]).boxed()
            }
        })
}

pub(crate) fn game_pins() -> impl Strategy<Value = Vec<Vec<u8>>> {
    (prop::collection::vec(normal_pins(), 9), final_pins()).prop_map(|(mut frames, last)| {
        frames.push(last);
        frames
    })
}
