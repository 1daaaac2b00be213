use arrayvec::ArrayVec;
use serde::{Serialize, Serializer};

use crate::{InvalidFrameError, Roll};

/// Position class of a frame within a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant)]
pub enum FrameKind {
    /// Frames 1 through 9: two roll slots.
    #[display("normal")]
    Normal,
    /// Frame 10: two rolls, or three after a strike or spare.
    #[display("final")]
    Final,
}

/// One scoring unit of a game.
///
/// # Roll layout
///
/// - Normal open/spare frame: `[first, second]` with `first + second <= 10`
/// - Normal strike frame: `[10, 0]`; the `0` is a placeholder, not a delivery
/// - Final frame: `[first, second]` when open, `[first, second, bonus]` after a
///   strike or spare
///
/// Use [`Frame::rolls`] for the stored slots and [`Frame::delivered`] for the
/// rolls that actually happened.
///
/// # Example
///
/// ```
/// use tenpin_engine::Frame;
///
/// let strike = Frame::normal(&[10])?;
/// assert_eq!(strike.rolls().len(), 2);
/// assert_eq!(strike.delivered().len(), 1);
///
/// let last = Frame::final_frame(&[10, 10, 10])?;
/// assert_eq!(last.pins_total(), 30);
/// # Ok::<(), tenpin_engine::InvalidFrameError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Frame {
    kind: FrameKind,
    rolls: ArrayVec<Roll, 3>,
}

impl Frame {
    /// Builds a frame of the given kind from raw pin counts.
    pub fn new(kind: FrameKind, pins: &[u8]) -> Result<Self, InvalidFrameError> {
        match kind {
            FrameKind::Normal => Self::normal(pins),
            FrameKind::Final => Self::final_frame(pins),
        }
    }

    /// Builds one of frames 1 through 9.
    ///
    /// A strike may be given as `[10]` or `[10, 0]`.
    pub fn normal(pins: &[u8]) -> Result<Self, InvalidFrameError> {
        let rolls = parse_rolls(FrameKind::Normal, pins)?;
        let rolls = match *rolls.as_slice() {
            [first] if first.is_strike() => [Roll::STRIKE, Roll::GUTTER],
            [first, second] if first.is_strike() => {
                if second != Roll::GUTTER {
                    return Err(InvalidFrameError::StrikePlaceholder {
                        second: second.pins(),
                    });
                }
                [first, second]
            }
            [first, second] => {
                check_pair(first, second)?;
                [first, second]
            }
            _ => {
                return Err(InvalidFrameError::RollCount {
                    kind: FrameKind::Normal,
                    count: rolls.len(),
                });
            }
        };
        Ok(Self {
            kind: FrameKind::Normal,
            rolls: rolls.into_iter().collect(),
        })
    }

    /// Builds the tenth frame.
    pub fn final_frame(pins: &[u8]) -> Result<Self, InvalidFrameError> {
        let rolls = parse_rolls(FrameKind::Final, pins)?;
        match *rolls.as_slice() {
            [first, second] => {
                if first.is_strike() {
                    return Err(InvalidFrameError::MissingBonusRoll);
                }
                check_pair(first, second)?;
                if first.pins() + second.pins() == Roll::MAX_PINS {
                    return Err(InvalidFrameError::MissingBonusRoll);
                }
            }
            [first, second, third] => {
                if first.is_strike() {
                    // Rack is reset after a strike; the bonus pair only shares
                    // a rack when the second roll left pins standing.
                    if !second.is_strike() {
                        check_pair(second, third)?;
                    }
                } else {
                    check_pair(first, second)?;
                    if first.pins() + second.pins() < Roll::MAX_PINS {
                        return Err(InvalidFrameError::UnearnedBonusRoll);
                    }
                }
            }
            _ => {
                return Err(InvalidFrameError::RollCount {
                    kind: FrameKind::Final,
                    count: rolls.len(),
                });
            }
        }
        Ok(Self {
            kind: FrameKind::Final,
            rolls,
        })
    }

    #[must_use]
    pub const fn kind(&self) -> FrameKind {
        self.kind
    }

    /// Returns every stored roll slot, including a strike placeholder.
    #[must_use]
    pub fn rolls(&self) -> &[Roll] {
        &self.rolls
    }

    /// Returns the rolls that were actually delivered.
    ///
    /// Identical to [`Self::rolls`] except for a normal strike frame, where the
    /// placeholder is dropped.
    #[must_use]
    pub fn delivered(&self) -> &[Roll] {
        if self.kind.is_normal() && self.first().is_strike() {
            &self.rolls[..1]
        } else {
            &self.rolls
        }
    }

    #[must_use]
    pub fn first(&self) -> Roll {
        self.rolls[0]
    }

    #[must_use]
    pub fn second(&self) -> Option<Roll> {
        self.rolls.get(1).copied()
    }

    /// Sum of pins across all stored rolls.
    #[must_use]
    pub fn pins_total(&self) -> u16 {
        self.rolls.iter().copied().map(u16::from).sum()
    }
}

impl Serialize for Frame {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(&self.rolls)
    }
}

fn parse_rolls(kind: FrameKind, pins: &[u8]) -> Result<ArrayVec<Roll, 3>, InvalidFrameError> {
    if pins.is_empty() {
        return Err(InvalidFrameError::Empty);
    }
    let mut rolls = ArrayVec::new();
    for &value in pins {
        let roll = Roll::new(value).map_err(InvalidFrameError::Roll)?;
        rolls
            .try_push(roll)
            .map_err(|_| InvalidFrameError::RollCount {
                kind,
                count: pins.len(),
            })?;
    }
    Ok(rolls)
}

fn check_pair(first: Roll, second: Roll) -> Result<(), InvalidFrameError> {
    if first.pins() + second.pins() > Roll::MAX_PINS {
        return Err(InvalidFrameError::PinsExceeded {
            first: first.pins(),
            second: second.pins(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InvalidRollError;

    fn pins(frame: &Frame) -> Vec<u8> {
        frame.rolls().iter().copied().map(u8::from).collect()
    }

    #[test]
    fn test_normal_open_and_spare() {
        assert_eq!(pins(&Frame::normal(&[3, 4]).unwrap()), [3, 4]);
        assert_eq!(pins(&Frame::normal(&[5, 5]).unwrap()), [5, 5]);
        assert_eq!(pins(&Frame::normal(&[0, 10]).unwrap()), [0, 10]);
    }

    #[test]
    fn test_normal_strike_is_normalized_with_placeholder() {
        let bare = Frame::normal(&[10]).unwrap();
        let padded = Frame::normal(&[10, 0]).unwrap();
        assert_eq!(bare, padded);
        assert_eq!(pins(&bare), [10, 0]);
        assert_eq!(bare.delivered(), [Roll::STRIKE]);
    }

    #[test]
    fn test_normal_rejects_nonzero_placeholder() {
        assert_eq!(
            Frame::normal(&[10, 3]),
            Err(InvalidFrameError::StrikePlaceholder { second: 3 })
        );
    }

    #[test]
    fn test_normal_rejects_too_many_pins() {
        assert_eq!(
            Frame::normal(&[6, 5]),
            Err(InvalidFrameError::PinsExceeded {
                first: 6,
                second: 5
            })
        );
    }

    #[test]
    fn test_normal_rejects_wrong_roll_count() {
        assert_eq!(Frame::normal(&[]), Err(InvalidFrameError::Empty));
        assert_eq!(
            Frame::normal(&[4]),
            Err(InvalidFrameError::RollCount {
                kind: FrameKind::Normal,
                count: 1
            })
        );
        assert_eq!(
            Frame::normal(&[4, 5, 1]),
            Err(InvalidFrameError::RollCount {
                kind: FrameKind::Normal,
                count: 3
            })
        );
    }

    #[test]
    fn test_invalid_roll_is_reported_before_shape() {
        assert_eq!(
            Frame::normal(&[11, 0]),
            Err(InvalidFrameError::Roll(InvalidRollError { pins: 11 }))
        );
    }

    #[test]
    fn test_final_open_has_two_rolls() {
        let frame = Frame::final_frame(&[3, 6]).unwrap();
        assert!(frame.kind().is_final());
        assert_eq!(frame.delivered().len(), 2);
        assert_eq!(
            Frame::final_frame(&[3, 6, 1]),
            Err(InvalidFrameError::UnearnedBonusRoll)
        );
    }

    #[test]
    fn test_final_strike_or_spare_needs_bonus_roll() {
        assert_eq!(
            Frame::final_frame(&[10, 4]),
            Err(InvalidFrameError::MissingBonusRoll)
        );
        assert_eq!(
            Frame::final_frame(&[6, 4]),
            Err(InvalidFrameError::MissingBonusRoll)
        );
        assert!(Frame::final_frame(&[6, 4, 10]).is_ok());
        assert!(Frame::final_frame(&[10, 10, 10]).is_ok());
        assert!(Frame::final_frame(&[10, 4, 6]).is_ok());
    }

    #[test]
    fn test_final_strike_bonus_pair_shares_rack() {
        assert_eq!(
            Frame::final_frame(&[10, 4, 7]),
            Err(InvalidFrameError::PinsExceeded {
                first: 4,
                second: 7
            })
        );
    }

    #[test]
    fn test_final_placeholder_is_a_real_roll() {
        let frame = Frame::final_frame(&[10, 0, 0]).unwrap();
        assert_eq!(frame.delivered().len(), 3);
    }

    #[test]
    fn test_final_rejects_wrong_roll_count() {
        assert_eq!(
            Frame::final_frame(&[10]),
            Err(InvalidFrameError::RollCount {
                kind: FrameKind::Final,
                count: 1
            })
        );
        assert_eq!(
            Frame::final_frame(&[10, 10, 10, 10]),
            Err(InvalidFrameError::RollCount {
                kind: FrameKind::Final,
                count: 4
            })
        );
    }

    #[test]
    fn test_serializes_all_slots() {
        let frame = Frame::normal(&[10]).unwrap();
        assert_eq!(serde_json::to_string(&frame).unwrap(), "[10,0]");
    }
}
