//! Self-play command - the engine plays both sides

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    cli::output::{describe_outcome, format_board, print_section},
    minimax::Minimax,
};

#[derive(Parser, Debug)]
#[command(about = "Let the engine play against itself")]
pub struct SelfPlayArgs {
    /// Write the game record as JSON
    #[arg(long)]
    pub export: Option<PathBuf>,
}

pub fn execute(args: SelfPlayArgs, engine: &Minimax) -> Result<()> {
    let game = engine.self_play()?;
    let states = game.state_sequence();

    print_section("Self-play");
    for (mv, state) in game.moves.iter().zip(states.iter().skip(1)) {
        println!("\n{} plays {}", mv.player, mv.action);
        print!("{}", format_board(state));
    }

    if let Some(outcome) = game.outcome {
        println!(
            "\nResult: {}",
            describe_outcome(&game.current_state(), outcome)
        );
    }

    if let Some(path) = args.export {
        let json = serde_json::to_string_pretty(&game)?;
        fs::write(&path, json)
            .with_context(|| format!("writing game record to {}", path.display()))?;
        println!("Game record written to: {}", path.display());
    }

    Ok(())
}
