use std::path::PathBuf;

use rand::Rng as _;
use serde::Serialize;
use tenpin_engine::Game;
use tenpin_fixture::{GameGenerator, GameSeed};

use crate::util::Output;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct GenerateArg {
    /// Number of games to generate
    #[arg(long, default_value_t = 1)]
    count: usize,
    /// 32-digit hex seed; random when omitted
    #[arg(long)]
    seed: Option<GameSeed>,
    /// Output file path; writes to stdout when omitted
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct GeneratedGames {
    seed: GameSeed,
    games: Vec<Game>,
}

fn generate(seed: GameSeed, count: usize) -> GeneratedGames {
    let games = GameGenerator::with_seed(seed).take(count).collect();
    GeneratedGames { seed, games }
}

pub(crate) fn run(arg: &GenerateArg) -> anyhow::Result<()> {
    let seed = arg.seed.unwrap_or_else(|| rand::rng().random());
    tracing::info!(%seed, count = arg.count, "generating games");
    Output::save_json(&generate(seed, arg.count), arg.output.clone())
}
