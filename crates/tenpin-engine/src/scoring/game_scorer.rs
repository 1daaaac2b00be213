use serde::{Deserialize, Serialize};

use crate::{Frame, Game, score_frame, score_frame_with_bonus_rolls};

/// Where strike and spare bonuses are read from.
#[derive(
    Debug,
    Default,
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
#[serde(rename_all = "kebab-case")]
pub enum Lookahead {
    /// Next delivered rolls, across as many frames as needed.
    #[default]
    #[display("roll-stream")]
    RollStream,
    /// The two roll slots of the immediately following frame.
    #[display("next-frame")]
    NextFrame,
}

/// Computes the total score of a game.
///
/// Equivalent to [`score_game_with`] using [`Lookahead::RollStream`].
///
/// # Example
///
/// ```
/// use tenpin_engine::{Game, score_game};
///
/// let perfect = Game::from_pins(&[
///     &[10u8][..], &[10], &[10], &[10], &[10],
///     &[10], &[10], &[10], &[10], &[10, 10, 10],
/// ])?;
/// assert_eq!(score_game(&perfect), 300);
/// # Ok::<(), tenpin_engine::InvalidGameError>(())
/// ```
#[must_use]
pub fn score_game(game: &Game) -> u16 {
    score_game_with(game, Lookahead::default())
}

/// Computes the total score of a game with an explicit bonus lookahead.
///
/// Frames are visited strictly in order; each frame sees only what comes
/// after it, so a single left-to-right pass suffices.
#[must_use]
pub fn score_game_with(game: &Game, lookahead: Lookahead) -> u16 {
    (0..Game::FRAME_COUNT).fold(0, |total, index| {
        let score = frame_score_at(game, index, lookahead);
        tracing::trace!(frame = index + 1, score, total = total + score, "scored frame");
        total + score
    })
}

/// Score of the frame at `index`, given everything after it in `game`.
pub(crate) fn frame_score_at(game: &Game, index: usize, lookahead: Lookahead) -> u16 {
    let frames = game.frames();
    let frame = &frames[index];
    let following = &frames[index + 1..];
    let Some(next) = following.first() else {
        return score_frame(frame, None);
    };
    match lookahead {
        Lookahead::NextFrame => score_frame(frame, Some(next)),
        Lookahead::RollStream => score_frame_with_bonus_rolls(
            frame,
            following.iter().flat_map(Frame::delivered).copied(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::{is_strike, test_util};

    fn game(pins: &[&[u8]]) -> Game {
        Game::from_pins(pins).unwrap()
    }

    #[test]
    fn test_perfect_game() {
        let perfect = game(&test_util::PERFECT);
        assert_eq!(score_game(&perfect), 300);
    }

    #[test]
    fn test_gutter_game() {
        let pins: [&[u8]; 10] = [&[0, 0]; 10];
        assert_eq!(score_game(&game(&pins)), 0);
    }

    #[test]
    fn test_all_spares() {
        let mut pins: [&[u8]; 10] = [&[5, 5]; 10];
        pins[9] = &[5, 5, 5];
        assert_eq!(score_game(&game(&pins)), 150);
    }

    #[test]
    fn test_mixed_game() {
        let mixed = game(&test_util::MIXED);
        assert_eq!(score_game(&mixed), 167);
    }

    #[test]
    fn test_strike_into_final_triple_strike() {
        let mut pins: [&[u8]; 10] = [&[0, 0]; 10];
        pins[8] = &[10];
        pins[9] = &[10, 10, 10];
        let game = game(&pins);
        assert_eq!(frame_score_at(&game, 8, Lookahead::RollStream), 30);
        assert_eq!(frame_score_at(&game, 8, Lookahead::NextFrame), 30);
        assert_eq!(score_game(&game), 60);
    }

    #[test]
    fn test_next_frame_lookahead_undercounts_strike_chains() {
        let perfect = game(&test_util::PERFECT);
        // Frames 1-8 read a placeholder instead of the second bonus roll.
        assert_eq!(score_game_with(&perfect, Lookahead::NextFrame), 220);

        let mixed = game(&test_util::MIXED);
        assert_eq!(score_game_with(&mixed, Lookahead::NextFrame), 157);
    }

    #[test]
    fn test_is_deterministic() {
        let mixed = game(&test_util::MIXED);
        assert_eq!(score_game(&mixed), score_game(&mixed));
    }

    #[test]
    fn test_lookahead_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&Lookahead::RollStream).unwrap(),
            "\"roll-stream\""
        );
        assert_eq!(Lookahead::NextFrame.to_string(), "next-frame");
    }

    proptest! {
        #[test]
        fn score_stays_within_bounds(pins in test_util::game_pins()) {
            let game = game_from(&pins);
            for lookahead in [Lookahead::RollStream, Lookahead::NextFrame] {
                let score = score_game_with(&game, lookahead);
                prop_assert!(score <= 300, "{lookahead} score {score} above 300");
            }
        }

        #[test]
        fn score_counts_every_pin(pins in test_util::game_pins()) {
            let game = game_from(&pins);
            let pins_down = game.rolls().map(u16::from).sum::<u16>();
            prop_assert!(score_game(&game) >= pins_down);
        }

        #[test]
        fn lookaheads_agree_without_consecutive_strikes(pins in test_util::game_pins()) {
            let game = game_from(&pins);
            let frames = game.frames();
            prop_assume!(
                frames[..Game::FRAME_COUNT - 1]
                    .windows(2)
                    .all(|pair| !(is_strike(&pair[0]) && is_strike(&pair[1])))
            );
            prop_assert_eq!(
                score_game_with(&game, Lookahead::RollStream),
                score_game_with(&game, Lookahead::NextFrame)
            );
        }
    }

    fn game_from(pins: &[Vec<u8>]) -> Game {
        Game::from_pins(pins).unwrap()
    }
}
