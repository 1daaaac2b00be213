use serde::Serialize;

use super::game_scorer::frame_score_at;
use crate::{FrameClass, Game, Lookahead, classify};

/// Per-frame breakdown of a scored game.
///
/// Holds each frame's class, its individual score and the running total after
/// it, as a paper scoresheet shows them.
///
/// # Example
///
/// ```
/// use tenpin_engine::{Game, Lookahead, Scorecard};
///
/// let game = Game::from_pins(&[
///     &[10u8][..], &[7, 3], &[9, 0], &[10], &[0, 8],
///     &[8, 2], &[0, 6], &[10], &[10], &[10, 8, 1],
/// ])?;
/// let card = Scorecard::new(&game, Lookahead::RollStream);
///
/// assert_eq!(card.frame_scores()[0], 20);
/// assert_eq!(card.running_totals()[1], 39);
/// assert_eq!(card.total(), 167);
/// # Ok::<(), tenpin_engine::InvalidGameError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scorecard {
    lookahead: Lookahead,
    classes: [FrameClass; Game::FRAME_COUNT],
    frame_scores: [u16; Game::FRAME_COUNT],
    running_totals: [u16; Game::FRAME_COUNT],
}

impl Scorecard {
    #[must_use]
    pub fn new(game: &Game, lookahead: Lookahead) -> Self {
        let mut classes = [FrameClass::Open; Game::FRAME_COUNT];
        let mut frame_scores = [0; Game::FRAME_COUNT];
        let mut running_totals = [0; Game::FRAME_COUNT];
        let mut total = 0;
        for (index, frame) in game.frames().iter().enumerate() {
            let score = frame_score_at(game, index, lookahead);
            total += score;
            classes[index] = classify(frame);
            frame_scores[index] = score;
            running_totals[index] = total;
        }
        Self {
            lookahead,
            classes,
            frame_scores,
            running_totals,
        }
    }

    #[must_use]
    pub const fn lookahead(&self) -> Lookahead {
        self.lookahead
    }

    #[must_use]
    pub const fn classes(&self) -> &[FrameClass; Game::FRAME_COUNT] {
        &self.classes
    }

    #[must_use]
    pub const fn frame_scores(&self) -> &[u16; Game::FRAME_COUNT] {
        &self.frame_scores
    }

    #[must_use]
    pub const fn running_totals(&self) -> &[u16; Game::FRAME_COUNT] {
        &self.running_totals
    }

    /// Final score, equal to the last running total.
    #[must_use]
    pub const fn total(&self) -> u16 {
        self.running_totals[Game::FRAME_COUNT - 1]
    }
}
