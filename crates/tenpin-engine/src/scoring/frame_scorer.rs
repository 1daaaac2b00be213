use crate::{Frame, Roll, is_spare, is_strike};

const CLEARED_RACK: u16 = Roll::MAX_PINS as u16;

/// Scores one frame, reading any bonus from the two slots of `next`.
///
/// First match wins:
///
/// 1. Strike with a successor: `10 + next[0] + next[1]` (a missing slot counts 0)
/// 2. Spare with a successor: `10 + next[0]`
/// 3. Otherwise: the sum of the frame's own rolls
///
/// The last case covers open frames and the final frame, whose bonus rolls are
/// already part of its own rolls. When `next` is itself a normal strike its
/// second slot is the placeholder `0`; use [`score_frame_with_bonus_rolls`]
/// to reach the roll after it.
///
/// # Example
///
/// ```
/// use tenpin_engine::{Frame, score_frame};
///
/// let strike = Frame::normal(&[10])?;
/// let open = Frame::normal(&[3, 4])?;
/// assert_eq!(score_frame(&strike, Some(&open)), 17);
/// assert_eq!(score_frame(&open, None), 7);
/// # Ok::<(), tenpin_engine::InvalidFrameError>(())
/// ```
#[must_use]
pub fn score_frame(frame: &Frame, next: Option<&Frame>) -> u16 {
    match next {
        Some(next) if is_strike(frame) => {
            CLEARED_RACK + u16::from(next.first()) + next.second().map_or(0, u16::from)
        }
        Some(next) if is_spare(frame) => CLEARED_RACK + u16::from(next.first()),
        _ => frame.pins_total(),
    }
}

/// Scores one frame, reading any bonus from the rolls delivered after it.
///
/// `following` is the chronological roll sequence after `frame` (without
/// strike placeholders). A strike takes two rolls from it and a spare one.
/// An empty sequence means `frame` is the last frame, which scores its own
/// pins.
#[must_use]
pub fn score_frame_with_bonus_rolls<I>(frame: &Frame, following: I) -> u16
where
    I: IntoIterator<Item = Roll>,
{
    let mut following = following.into_iter().peekable();
    if following.peek().is_none() {
        return frame.pins_total();
    }
    let bonus_rolls = if is_strike(frame) {
        2
    } else if is_spare(frame) {
        1
    } else {
        return frame.pins_total();
    };
    CLEARED_RACK + following.take(bonus_rolls).map(u16::from).sum::<u16>()
}
