//! Exhaustive checks of the game rules over every reachable board

use std::collections::HashSet;

use tictactoe_minimax::{
    Board, Cell, Player, apply_action, current_player, initial_state, is_full, is_terminal,
    legal_actions, tictactoe::WINNING_LINES, utility, winner,
};

/// Every board reachable from the empty board by legal play
fn reachable_boards() -> HashSet<Board> {
    let mut seen = HashSet::new();
    let mut stack = vec![initial_state()];
    while let Some(board) = stack.pop() {
        if !seen.insert(board) {
            continue;
        }
        for action in legal_actions(&board).unwrap_or_default() {
            stack.push(board.apply(action));
        }
    }
    seen
}

fn line_complete(board: &Board) -> bool {
    WINNING_LINES.iter().any(|line| {
        let [a, b, c] = line.map(|(row, col)| board.cells()[row][col]);
        a != Cell::Empty && a == b && b == c
    })
}

fn counts(board: &Board) -> (usize, usize) {
    let cells = board.cells().iter().flatten();
    cells.fold((0, 0), |(x, o), cell| match cell {
        Cell::X => (x + 1, o),
        Cell::O => (x, o + 1),
        Cell::Empty => (x, o),
    })
}

#[test]
fn test_reachable_board_count() {
    assert_eq!(reachable_boards().len(), 5478);
}

#[test]
fn test_terminal_iff_line_or_full() {
    for board in reachable_boards() {
        assert_eq!(
            is_terminal(&board),
            line_complete(&board) || is_full(&board),
            "board:\n{board}"
        );
    }
}

#[test]
fn test_utility_matches_winner_on_terminal_boards() {
    let terminal: Vec<Board> = reachable_boards()
        .into_iter()
        .filter(is_terminal)
        .collect();
    assert!(!terminal.is_empty());

    for board in terminal {
        let expected = match utility(&board) {
            1 => Some(Player::X),
            -1 => Some(Player::O),
            0 => None,
            other => panic!("utility {other} out of range for\n{board}"),
        };
        assert_eq!(winner(&board), expected, "board:\n{board}");
        assert_eq!(legal_actions(&board), None);
        assert_eq!(current_player(&board), Player::X);
    }
}

#[test]
fn test_turns_alternate_on_live_boards() {
    for board in reachable_boards().into_iter().filter(|b| !is_terminal(b)) {
        let (x, o) = counts(&board);
        let expected = if x == o { Player::X } else { Player::O };
        assert_eq!(current_player(&board), expected, "board:\n{board}");
        assert_eq!(winner(&board), None);
        assert_eq!(utility(&board), 0);

        let actions = legal_actions(&board).expect("live board has moves");
        assert_eq!(actions.len(), 9 - x - o);
        assert!(actions.iter().all(|&a| board.is_empty_at(a)));
    }
}

#[test]
fn test_apply_action_leaves_input_unchanged() {
    for board in reachable_boards().into_iter().filter(|b| !is_terminal(b)) {
        let before = board;
        for action in legal_actions(&board).unwrap_or_default() {
            let next = apply_action(&board, Some(action)).unwrap();
            assert_eq!(board, before);
            assert_eq!(next.get(action), current_player(&board).to_cell());
            assert_eq!(next.occupied_count(), board.occupied_count() + 1);
        }
    }
}
