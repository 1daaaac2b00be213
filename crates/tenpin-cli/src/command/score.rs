use tenpin_engine::{Lookahead, score_game_with};

use super::{GameInputArg, LookaheadArg};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct ScoreArg {
    #[clap(flatten)]
    input: GameInputArg,
    /// Where strike and spare bonuses are read from
    #[arg(long, value_enum, default_value_t)]
    lookahead: LookaheadArg,
}

impl ScoreArg {
    pub(crate) fn lookahead(&self) -> Lookahead {
        self.lookahead.into()
    }
}

pub(crate) fn run(arg: &ScoreArg) -> anyhow::Result<()> {
    let game = arg.input.read_game()?;
    let lookahead = arg.lookahead();
    let total = score_game_with(&game, lookahead);
    tracing::info!(total, %lookahead, "scored game");
    println!("{total}");
    Ok(())
}
