//! Best-move command - search a single position

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::output::{describe_outcome, format_board, print_report, print_section},
    minimax::Minimax,
    tictactoe::{Board, GameOutcome},
};

#[derive(Parser, Debug)]
#[command(about = "Compute the engine's move for a position")]
pub struct BestMoveArgs {
    /// Board as 9 cells in row-major order, e.g. "X.O .X. ..O"
    #[arg(long, short = 's', default_value = ".........")]
    pub state: String,
}

pub fn execute(args: BestMoveArgs, engine: &Minimax) -> Result<()> {
    let board = Board::from_string(&args.state)?;

    print_section("Position");
    print!("{}", format_board(&board));

    match GameOutcome::of(&board) {
        Some(outcome) => println!("\nGame over: {}", describe_outcome(&board, outcome)),
        None => {
            if let Some(report) = engine.analyze(&board) {
                println!();
                print_report(&report);
            }
        }
    }

    Ok(())
}
