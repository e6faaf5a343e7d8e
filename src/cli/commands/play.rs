//! Play command - a human against the engine on the terminal

use std::io::{self, BufRead, Write};

use anyhow::{Result, anyhow};
use clap::Parser;

use super::parse_player_token;
use crate::{
    cli::output::{describe_outcome, format_board},
    minimax::Minimax,
    tictactoe::{Action, Game, Player, legal_actions},
};

#[derive(Parser, Debug)]
#[command(about = "Play against the engine")]
pub struct PlayArgs {
    /// Which mark the human plays (`x` or `o`); X moves first
    #[arg(long, default_value = "x")]
    pub human: String,
}

pub fn execute(args: PlayArgs, engine: &Minimax) -> Result<()> {
    let human = parse_player_token(&args.human, "--human")?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(engine, human, stdin.lock(), stdout.lock())?;
    Ok(())
}

/// Parse a human move written as `row col` (a comma also separates).
pub fn parse_action(line: &str) -> Result<Action> {
    let parts: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|p| !p.is_empty())
        .collect();
    let [row, col] = parts.as_slice() else {
        return Err(anyhow!("expected two numbers: row col"));
    };
    let row: usize = row.parse().map_err(|_| anyhow!("'{row}' is not a row"))?;
    let col: usize = col.parse().map_err(|_| anyhow!("'{col}' is not a column"))?;
    Ok(Action::new(row, col)?)
}

/// Run one game, reading the human's moves from `input`.
///
/// Ends when the game is over, on `q`, or when `input` is exhausted; the
/// game record so far is returned in every case.
pub fn run_session<R: BufRead, W: Write>(
    engine: &Minimax,
    human: Player,
    mut input: R,
    mut out: W,
) -> Result<Game> {
    let mut game = Game::new();

    while !game.is_over() {
        let board = game.current_state();
        write!(out, "\n{}", format_board(&board))?;

        if board.current_player() != human {
            if let Some(action) = engine.optimal_action(&board) {
                writeln!(out, "Engine ({}) plays {action}", human.opponent())?;
                game.play(action)?;
            }
            continue;
        }

        let legal = legal_actions(&board).unwrap_or_default();
        write!(out, "Your move ({human}), as 'row col' or 'q': ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 || line.trim().eq_ignore_ascii_case("q") {
            tracing::info!(moves = game.moves.len(), "session ended before the game finished");
            return Ok(game);
        }

        match parse_action(&line) {
            Ok(action) if legal.contains(&action) => game.play(action)?,
            Ok(action) => writeln!(out, "{action} is already taken")?,
            Err(err) => writeln!(out, "{err}")?,
        }
    }

    let board = game.current_state();
    write!(out, "\n{}", format_board(&board))?;
    if let Some(outcome) = game.outcome {
        writeln!(out, "{}", describe_outcome(&board, outcome))?;
    }
    Ok(game)
}
