use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Frame, FrameKind, InvalidFrameError, InvalidGameError, Roll};

/// A complete game: nine normal frames followed by the final frame.
///
/// Immutable once built. Serialized as an array of frames, each an array of
/// pin counts; deserialization applies the same validation as
/// [`Game::from_pins`].
///
/// # Example
///
/// ```
/// use tenpin_engine::Game;
///
/// let game: Game = serde_json::from_str(
///     "[[10],[10],[10],[10],[10],[10],[10],[10],[10],[10,10,10]]",
/// )
/// .unwrap();
/// assert_eq!(game.rolls().count(), 12);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Game {
    frames: [Frame; FRAMES_PER_GAME],
}

const FRAMES_PER_GAME: usize = 10;

impl Game {
    pub const FRAME_COUNT: usize = FRAMES_PER_GAME;

    /// Builds a game from already-constructed frames.
    ///
    /// Frames 1 through 9 must be [`FrameKind::Normal`] and frame 10 must be
    /// [`FrameKind::Final`].
    pub fn new(frames: Vec<Frame>) -> Result<Self, InvalidGameError> {
        if frames.len() != Self::FRAME_COUNT {
            return Err(InvalidGameError::FrameCount {
                count: frames.len(),
            });
        }
        for (index, frame) in frames.iter().enumerate() {
            let expected = Self::kind_at(index);
            if frame.kind() != expected {
                return Err(InvalidGameError::FrameKind { index, expected });
            }
        }
        let frames = <[Frame; Self::FRAME_COUNT]>::try_from(frames).map_err(|frames| {
            InvalidGameError::FrameCount {
                count: frames.len(),
            }
        })?;
        Ok(Self { frames })
    }

    /// Builds a game from raw pin counts, one slice per frame.
    ///
    /// A final frame whose roll count does not match its strike/spare status
    /// is reported as [`InvalidGameError::FinalFrameRollCount`].
    pub fn from_pins<F>(frames: &[F]) -> Result<Self, InvalidGameError>
    where
        F: AsRef<[u8]>,
    {
        if frames.len() != Self::FRAME_COUNT {
            return Err(InvalidGameError::FrameCount {
                count: frames.len(),
            });
        }
        let frames = frames
            .iter()
            .enumerate()
            .map(|(index, pins)| {
                let pins = pins.as_ref();
                Frame::new(Self::kind_at(index), pins).map_err(|source| {
                    tracing::debug!(index, ?pins, %source, "rejected frame");
                    frame_error(index, source)
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(frames)
    }

    /// Kind of frame expected at a zero-based position.
    #[must_use]
    pub const fn kind_at(index: usize) -> FrameKind {
        if index + 1 == Self::FRAME_COUNT {
            FrameKind::Final
        } else {
            FrameKind::Normal
        }
    }

    #[must_use]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    #[must_use]
    pub fn frame(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    #[must_use]
    pub fn last_frame(&self) -> &Frame {
        &self.frames[Self::FRAME_COUNT - 1]
    }

    /// Returns every delivered roll in order, with strike placeholders removed.
    pub fn rolls(&self) -> impl Iterator<Item = Roll> + '_ {
        self.frames
            .iter()
            .flat_map(Frame::delivered)
            .copied()
    }
}

fn frame_error(index: usize, source: InvalidFrameError) -> InvalidGameError {
    match source {
        InvalidFrameError::MissingBonusRoll => InvalidGameError::FinalFrameRollCount {
            count: 2,
            expected: 3,
        },
        InvalidFrameError::UnearnedBonusRoll => InvalidGameError::FinalFrameRollCount {
            count: 3,
            expected: 2,
        },
        source => InvalidGameError::Frame { index, source },
    }
}

impl Serialize for Game {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(&self.frames)
    }
}

impl<'de> Deserialize<'de> for Game {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let frames = Vec::<Vec<u8>>::deserialize(deserializer)?;
        Self::from_pins(&frames).map_err(serde::de::Error::custom)
    }
}
