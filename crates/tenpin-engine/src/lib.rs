//! Ten-pin bowling scoring engine.
//!
//! - [`core`] - Validated value types: [`Roll`], [`Frame`], [`Game`]
//! - [`scoring`] - Frame classification, per-frame scoring and whole-game scoring
//!
//! # Example
//!
//! ```
//! use tenpin_engine::{Game, score_game};
//!
//! let game = Game::from_pins(&[
//!     &[10u8][..], &[7, 3], &[9, 0], &[10], &[0, 8],
//!     &[8, 2], &[0, 6], &[10], &[10], &[10, 8, 1],
//! ])?;
//!
//! assert_eq!(score_game(&game), 167);
//! # Ok::<(), tenpin_engine::InvalidGameError>(())
//! ```

pub use self::{core::*, scoring::*};

pub mod core;
pub mod scoring;

#[cfg(test)]
mod test_util;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid roll: {pins} pins (expected 0..=10)")]
pub struct InvalidRollError {
    pub pins: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvalidFrameError {
    #[display("frame has no rolls")]
    Empty,
    #[display("{_0}")]
    Roll(InvalidRollError),
    #[display("{kind} frame cannot have {count} rolls")]
    RollCount { kind: FrameKind, count: usize },
    #[display("rolls {first} and {second} knock down more than 10 pins")]
    PinsExceeded { first: u8, second: u8 },
    #[display("strike placeholder must be 0, got {second}")]
    StrikePlaceholder { second: u8 },
    #[display("final frame strike or spare is missing its bonus roll")]
    MissingBonusRoll,
    #[display("final frame open after two rolls cannot have a third roll")]
    UnearnedBonusRoll,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvalidGameError {
    #[display("game must have 10 frames, got {count}")]
    FrameCount { count: usize },
    #[display("frame {index} must be a {expected} frame")]
    FrameKind { index: usize, expected: FrameKind },
    #[display("frame {index}: {source}")]
    Frame {
        index: usize,
        source: InvalidFrameError,
    },
    #[display("final frame has {count} rolls, expected {expected}")]
    FinalFrameRollCount { count: usize, expected: usize },
}
