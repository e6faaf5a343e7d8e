//! Perfect-play Tic-Tac-Toe
//!
//! This crate provides:
//! - A 3x3 board model with copy-on-write transitions
//! - The game rules: turn order, legal actions, terminal detection, scoring
//! - An exhaustive minimax search that picks the move for the player to move
//! - A small command-line front end (`tictactoe` binary)
//!
//! ```
//! use tictactoe_minimax::{initial_state, is_terminal, optimal_action};
//!
//! let mut board = initial_state();
//! while let Some(action) = optimal_action(&board) {
//!     board = board.apply(action);
//! }
//! assert!(is_terminal(&board));
//! assert_eq!(board.winner(), None);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod minimax;
pub mod tictactoe;

pub use config::{SearchConfig, SelectionPolicy};
pub use error::{Error, Result};
pub use minimax::{Minimax, SearchReport, max_value, min_value, optimal_action};
pub use tictactoe::{
    Action, Board, Cell, Game, GameOutcome, Move, Player, Utility, apply_action, current_player,
    initial_state, is_full, is_terminal, legal_actions, utility, winner,
};
