use std::path::PathBuf;

use tenpin_engine::Scorecard;

use super::{GameInputArg, LookaheadArg};
use crate::util::Output;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct ScorecardArg {
    #[clap(flatten)]
    input: GameInputArg,
    /// Where strike and spare bonuses are read from
    #[arg(long, value_enum, default_value_t)]
    lookahead: LookaheadArg,
    /// Output file path; writes to stdout when omitted
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &ScorecardArg) -> anyhow::Result<()> {
    let game = arg.input.read_game()?;
    let card = Scorecard::new(&game, arg.lookahead.into());
    tracing::info!(total = card.total(), lookahead = %card.lookahead(), "built scorecard");
    Output::save_json(&card, arg.output.clone())
}
