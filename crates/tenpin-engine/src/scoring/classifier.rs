use serde::{Deserialize, Serialize};

use crate::{Frame, Roll};

/// Outcome class of a frame's first two rolls.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    derive_more::Display,
    derive_more::IsVariant,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum FrameClass {
    #[display("strike")]
    Strike,
    #[display("spare")]
    Spare,
    #[display("open")]
    Open,
}

/// Returns `true` if the frame's first roll knocked down all ten pins.
#[must_use]
pub fn is_strike(frame: &Frame) -> bool {
    frame.first().is_strike()
}

/// Returns `true` if the frame's first two rolls clear the rack without the
/// first being a strike.
#[must_use]
pub fn is_spare(frame: &Frame) -> bool {
    match *frame.rolls() {
        [first, second, ..] => !first.is_strike() && first.pins() + second.pins() == Roll::MAX_PINS,
        _ => false,
    }
}

#[must_use]
pub fn classify(frame: &Frame) -> FrameClass {
    if is_strike(frame) {
        FrameClass::Strike
    } else if is_spare(frame) {
        FrameClass::Spare
    } else {
        FrameClass::Open
    }
}
