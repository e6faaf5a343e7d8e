//! Winning line analysis for Tic-Tac-Toe

use super::{Action, Board, Player};

/// Winning lines as (row, col) coordinates: three rows, three columns,
/// then the two diagonals.
pub const WINNING_LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)], // rows
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)], // columns
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if a player has three in a row
    pub fn has_won(board: &Board, player: Player) -> bool {
        Self::completed_line(board, player).is_some()
    }

    /// First line (in [`WINNING_LINES`] order) held entirely by the player
    pub fn completed_line(board: &Board, player: Player) -> Option<[Action; 3]> {
        let target = player.to_cell();
        let cells = board.cells();
        WINNING_LINES
            .iter()
            .find(|line| line.iter().all(|&(row, col)| cells[row][col] == target))
            .map(|line| line.map(|(row, col)| Action::at(row, col)))
    }
}
