//! Board transitions

use super::{Action, Board, current_player};

/// Returns the board that results from the player to move marking `action`.
///
/// The input board is left untouched. The target cell is not checked: an
/// occupied cell is overwritten, so only pass actions taken from
/// [`legal_actions`](super::legal_actions).
///
/// # Errors
///
/// Returns [`Error::InvalidAction`](crate::Error::InvalidAction) when no
/// action is supplied.
pub fn apply_action(board: &Board, action: Option<Action>) -> crate::Result<Board> {
    let action = action.ok_or(crate::Error::InvalidAction)?;
    Ok(board.apply(action))
}

impl Board {
    /// Infallible form of [`apply_action`]
    pub fn apply(&self, action: Action) -> Board {
        self.with_cell(action, current_player(self).to_cell())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::{Cell, initial_state};

    #[test]
    fn test_apply_center_on_initial_board() {
        let board = initial_state();
        let center = Action::new(1, 1).unwrap();
        let next = apply_action(&board, Some(center)).unwrap();

        assert_eq!(next.get(center), Cell::X);
        assert_eq!(next.occupied_count(), 1);
        assert_eq!(board, initial_state());
    }

    #[test]
    fn test_apply_uses_current_player() {
        let board = Board::from_string("X........").unwrap();
        let next = board.apply(Action::new(2, 2).unwrap());
        assert_eq!(next.encode(), "X.......O");
    }

    #[test]
    fn test_missing_action_is_invalid() {
        let err = apply_action(&initial_state(), None).unwrap_err();
        assert!(matches!(err, crate::Error::InvalidAction));
    }

    #[test]
    fn test_occupied_cell_is_overwritten() {
        let board = Board::from_string("X........").unwrap();
        let corner = Action::new(0, 0).unwrap();
        let next = apply_action(&board, Some(corner)).unwrap();

        assert_eq!(next.get(corner), Cell::O);
        assert_eq!(board.get(corner), Cell::X);
    }
}
