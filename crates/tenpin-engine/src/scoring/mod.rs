//! Frame classification and score computation.
//!
//! Three layers, each built on the previous one:
//!
//! - [`classify`], [`is_strike`], [`is_spare`] - what kind of frame this is
//! - [`score_frame`], [`score_frame_with_bonus_rolls`] - one frame's contribution
//! - [`score_game`], [`score_game_with`], [`Scorecard`] - the whole game
//!
//! # Bonus lookahead
//!
//! A strike earns the next two delivered rolls and a spare the next one. With
//! [`Lookahead::RollStream`] (the default) those rolls are read from the
//! game's roll sequence, skipping strike placeholders and crossing as many
//! frames as needed. [`Lookahead::NextFrame`] reads the two slots of the
//! immediately following frame only, as [`score_frame`] does, which
//! undercounts consecutive strikes.

pub use self::{classifier::*, frame_scorer::*, game_scorer::*, scorecard::*};

mod classifier;
mod frame_scorer;
mod game_scorer;
mod scorecard;
