use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tenpin_engine::{Game, Lookahead};

use self::{
    classify::ClassifyArg, generate::GenerateArg, score::ScoreArg, scorecard::ScorecardArg,
};
use crate::util;

mod classify;
mod generate;
mod score;
mod scorecard;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Print the total score of a game
    Score(#[clap(flatten)] ScoreArg),
    /// Write per-frame scores and running totals as JSON
    Scorecard(#[clap(flatten)] ScorecardArg),
    /// Classify each frame as strike, spare or open
    Classify(#[clap(flatten)] ClassifyArg),
    /// Generate random valid games
    Generate(#[clap(flatten)] GenerateArg),
}

/// Game read from a JSON array of frames.
#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct GameInputArg {
    /// Game JSON file; reads stdin when omitted
    #[arg(long)]
    input: Option<PathBuf>,
}

impl GameInputArg {
    pub(crate) fn read_game(&self) -> anyhow::Result<Game> {
        let game = util::read_json_input("game", self.input.as_deref())?;
        tracing::debug!(input = ?self.input, "loaded game");
        Ok(game)
    }
}

/// Where strike and spare bonuses are read from.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum LookaheadArg {
    /// Next delivered rolls, across frame boundaries
    #[default]
    RollStream,
    /// The two roll slots of the following frame only
    NextFrame,
}

impl From<LookaheadArg> for Lookahead {
    fn from(arg: LookaheadArg) -> Self {
        match arg {
            LookaheadArg::RollStream => Lookahead::RollStream,
            LookaheadArg::NextFrame => Lookahead::NextFrame,
        }
    }
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Score(arg) => score::run(&arg)?,
        Mode::Scorecard(arg) => scorecard::run(&arg)?,
        Mode::Classify(arg) => classify::run(&arg)?,
        Mode::Generate(arg) => generate::run(&arg)?,
    }
    Ok(())
}
