//! Game records for playing a full game move by move

use serde::{Deserialize, Serialize};

use super::{Action, Board, Player};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub action: Action,
    pub player: Player,
}

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl GameOutcome {
    /// Outcome of a terminal board, `None` while the game is still running
    pub fn of(board: &Board) -> Option<Self> {
        if !board.is_terminal() {
            return None;
        }
        Some(match board.winner() {
            Some(player) => GameOutcome::Win(player),
            None => GameOutcome::Draw,
        })
    }
}

/// A complete game with history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub initial: Board,
    pub moves: Vec<Move>,
    pub outcome: Option<GameOutcome>,
}

impl Game {
    /// Create a new game from the empty board
    pub fn new() -> Self {
        Self::from_board(Board::new())
    }

    /// Continue a game from an arbitrary position
    pub fn from_board(initial: Board) -> Self {
        Game {
            initial,
            moves: Vec::new(),
            outcome: GameOutcome::of(&initial),
        }
    }

    /// Play a move for whoever is to move.
    ///
    /// Unlike [`apply_action`](super::apply_action), this validates the
    /// target cell, so it is the entry point for untrusted input.
    pub fn play(&mut self, action: Action) -> crate::Result<()> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        let current = self.current_state();
        if !current.is_empty_at(action) {
            return Err(crate::Error::OccupiedCell {
                row: action.row(),
                col: action.col(),
            });
        }

        let next = current.apply(action);
        self.moves.push(Move {
            action,
            player: current.current_player(),
        });
        self.outcome = GameOutcome::of(&next);

        Ok(())
    }

    /// Board after the first `end_index` moves
    fn replay_moves_until(&self, end_index: usize) -> Board {
        self.moves
            .iter()
            .take(end_index)
            .fold(self.initial, |state, m| state.apply(m.action))
    }

    /// Get current board state
    pub fn current_state(&self) -> Board {
        self.replay_moves_until(self.moves.len())
    }

    /// Get the sequence of board states, starting with the initial board
    pub fn state_sequence(&self) -> Vec<Board> {
        (0..=self.moves.len())
            .map(|i| self.replay_moves_until(i))
            .collect()
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
