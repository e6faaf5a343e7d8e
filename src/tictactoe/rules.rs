//! Game rules: turn order, legal actions, terminal detection and scoring
//!
//! Every rule is a pure function of a [`Board`]. The free functions are the
//! primary interface; the `Board` methods forward to them.

use super::{Action, Board, Cell, LineAnalyzer, Player};

/// Score of a finished game from X's point of view: `1` X won, `-1` O won,
/// `0` drawn. Non-terminal boards also score `0`.
pub type Utility = i32;

/// Player whose turn it is.
///
/// A terminal board reports X; check [`is_terminal`] separately when that
/// distinction matters.
pub fn current_player(board: &Board) -> Player {
    if is_terminal(board) {
        return Player::X;
    }
    let count = board.count_pieces();
    if count.x == count.o {
        Player::X
    } else {
        Player::O
    }
}

/// Empty cells in row-major order, or `None` once the game is over.
///
/// `None` means "no moves available" and is returned for every terminal
/// board, including a won board that still has empty cells.
pub fn legal_actions(board: &Board) -> Option<Vec<Action>> {
    if is_terminal(board) {
        return None;
    }
    Some(
        Action::all()
            .filter(|&action| board.is_empty_at(action))
            .collect(),
    )
}

/// True iff no empty cell remains
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().flatten().all(|&cell| cell != Cell::Empty)
}

/// True iff some line is complete or the board is full
pub fn is_terminal(board: &Board) -> bool {
    LineAnalyzer::has_won(board, Player::X)
        || LineAnalyzer::has_won(board, Player::O)
        || is_full(board)
}

/// Score the board. X's lines are checked before O's.
pub fn utility(board: &Board) -> Utility {
    if LineAnalyzer::has_won(board, Player::X) {
        1
    } else if LineAnalyzer::has_won(board, Player::O) {
        -1
    } else {
        0
    }
}

/// Winner of a finished game; `None` both for draws and games in progress
pub fn winner(board: &Board) -> Option<Player> {
    if !is_terminal(board) {
        return None;
    }
    match utility(board) {
        1 => Some(Player::X),
        -1 => Some(Player::O),
        _ => None,
    }
}

impl Board {
    pub fn current_player(&self) -> Player {
        current_player(self)
    }

    pub fn legal_actions(&self) -> Option<Vec<Action>> {
        legal_actions(self)
    }

    pub fn is_full(&self) -> bool {
        is_full(self)
    }

    pub fn is_terminal(&self) -> bool {
        is_terminal(self)
    }

    pub fn utility(&self) -> Utility {
        utility(self)
    }

    pub fn winner(&self) -> Option<Player> {
        winner(self)
    }
}
