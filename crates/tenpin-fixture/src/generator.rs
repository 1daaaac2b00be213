use rand::{Rng, SeedableRng as _};
use rand_pcg::Pcg32;
use tenpin_engine::{Frame, FrameKind, Game, Roll};

use crate::GameSeed;

/// Produces random, always-valid games.
///
/// Each roll is drawn uniformly from the pins still standing, so a frame never
/// knocks down more than its rack holds. Normal strike frames carry the `0`
/// placeholder; the final frame earns its third roll only after a strike or
/// spare.
///
/// The generator is an endless [`Iterator`] of games:
///
/// ```
/// use tenpin_fixture::GameGenerator;
///
/// let games: Vec<_> = GameGenerator::new().take(3).collect();
/// assert_eq!(games.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct GameGenerator {
    rng: Pcg32,
}

impl Default for GameGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl GameGenerator {
    /// Creates a generator with a random seed.
    ///
    /// For reproducible output, use [`Self::with_seed`] instead.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    /// Like [`Self::new`], but with a specific seed for deterministic generation.
    #[must_use]
    pub fn with_seed(seed: GameSeed) -> Self {
        Self {
            rng: Pcg32::from_seed(seed.to_bytes()),
        }
    }

    /// Generates a full ten-frame game.
    ///
    /// # Panics
    ///
    /// Panics if a generated frame violates the game invariants (should never happen).
    pub fn next_game(&mut self) -> Game {
        let frames = (0..Game::FRAME_COUNT)
            .map(|index| self.next_frame(Game::kind_at(index)))
            .collect();
        Game::new(frames).expect("generated frames are placed by kind")
    }

    /// Generates a single frame of the given kind.
    ///
    /// # Panics
    ///
    /// Panics if the generated pins violate the frame invariants (should never happen).
    pub fn next_frame(&mut self, kind: FrameKind) -> Frame {
        let pins = match kind {
            FrameKind::Normal => self.normal_pins(),
            FrameKind::Final => self.final_pins(),
        };
        Frame::new(kind, &pins).expect("generated pins stay within the rack")
    }

    fn normal_pins(&mut self) -> Vec<u8> {
        let first = self.roll(Roll::MAX_PINS);
        if first == Roll::MAX_PINS {
            return vec![first, 0];
        }
        let second = self.roll(Roll::MAX_PINS - first);
        vec![first, second]
    }

    fn final_pins(&mut self) -> Vec<u8> {
        let first = self.roll(Roll::MAX_PINS);
        let second = self.roll(standing_after(first));
        let earned_bonus = first == Roll::MAX_PINS || first + second == Roll::MAX_PINS;
        if !earned_bonus {
            return vec![first, second];
        }
        let third = if first == Roll::MAX_PINS {
            self.roll(standing_after(second))
        } else {
            self.roll(Roll::MAX_PINS)
        };
        vec![first, second, third]
    }

    fn roll(&mut self, standing: u8) -> u8 {
        self.rng.random_range(0..=standing)
    }
}

/// Pins available for the next roll; the rack is reset after a strike.
fn standing_after(pins: u8) -> u8 {
    if pins == Roll::MAX_PINS {
        Roll::MAX_PINS
    } else {
        Roll::MAX_PINS - pins
    }
}

impl Iterator for GameGenerator {
    type Item = Game;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_game())
    }
}
