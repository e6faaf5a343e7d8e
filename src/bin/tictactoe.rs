//! Tic-Tac-Toe CLI - perfect play through exhaustive minimax search

use anyhow::Result;
use clap::{Parser, Subcommand};
use tictactoe_minimax::{
    cli::{
        commands::{best_move, play, self_play},
        config::CommonArgs,
        init_tracing,
    },
    minimax::Minimax,
};

#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(version, about = "Perfect-play Tic-Tac-Toe engine", long_about = None)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the engine's move for a position
    BestMove(best_move::BestMoveArgs),

    /// Let the engine play against itself
    SelfPlay(self_play::SelfPlayArgs),

    /// Play against the engine
    Play(play::PlayArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.common.verbose);

    let engine = Minimax::new(cli.common.search_config()?);
    tracing::debug!(config = ?engine.config(), "engine ready");

    match cli.command {
        Commands::BestMove(args) => best_move::execute(args, &engine),
        Commands::SelfPlay(args) => self_play::execute(args, &engine),
        Commands::Play(args) => play::execute(args, &engine),
    }
}
