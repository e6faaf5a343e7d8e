//! Tic-Tac-Toe board, rules and transitions

pub mod board;
pub mod game;
pub mod lines;
pub mod rules;
pub mod transition;

pub use board::{Action, Board, Cell, Player, SIZE, initial_state};
pub use game::{Game, GameOutcome, Move};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use rules::{Utility, current_player, is_full, is_terminal, legal_actions, utility, winner};
pub use transition::apply_action;
