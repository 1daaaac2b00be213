use serde::Serialize;
use tenpin_engine::{Frame, FrameClass, Game, classify};

use super::GameInputArg;
use crate::util::Output;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct ClassifyArg {
    #[clap(flatten)]
    input: GameInputArg,
}

#[derive(Debug, Serialize)]
struct FrameReport<'a> {
    frame: usize,
    rolls: &'a Frame,
    class: FrameClass,
}

fn reports(game: &Game) -> Vec<FrameReport<'_>> {
    game.frames()
        .iter()
        .enumerate()
        .map(|(index, frame)| FrameReport {
            frame: index + 1,
            rolls: frame,
            class: classify(frame),
        })
        .collect()
}

pub(crate) fn run(arg: &ClassifyArg) -> anyhow::Result<()> {
    let game = arg.input.read_game()?;
    Output::save_json(&reports(&game), None)
}
