//! Board representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Side length of the board
pub const SIZE: usize = 3;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' | '_' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game. X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// A zero-based (row, column) coordinate naming a cell to mark.
///
/// Both indices are checked on construction, so an `Action` always
/// points inside the board. Whether the cell is still empty depends on
/// the board it is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawAction")]
pub struct Action {
    row: usize,
    col: usize,
}

/// Wire form of an [`Action`], range-checked before it becomes one
#[derive(Deserialize)]
struct RawAction {
    row: usize,
    col: usize,
}

impl TryFrom<RawAction> for Action {
    type Error = crate::Error;

    fn try_from(raw: RawAction) -> crate::Result<Self> {
        Action::new(raw.row, raw.col)
    }
}

impl Action {
    /// Create an action, rejecting coordinates outside the 3x3 grid.
    pub fn new(row: usize, col: usize) -> crate::Result<Self> {
        if row >= SIZE || col >= SIZE {
            return Err(crate::Error::InvalidPosition { row, col });
        }
        Ok(Action { row, col })
    }

    /// Create an action from a row-major position (0-8).
    pub fn from_index(index: usize) -> crate::Result<Self> {
        if index >= SIZE * SIZE {
            return Err(crate::Error::InvalidPosition {
                row: index / SIZE,
                col: index % SIZE,
            });
        }
        Ok(Action {
            row: index / SIZE,
            col: index % SIZE,
        })
    }

    /// Unchecked constructor for coordinates known to be in range.
    pub(crate) const fn at(row: usize, col: usize) -> Self {
        Action { row, col }
    }

    pub fn row(self) -> usize {
        self.row
    }

    pub fn col(self) -> usize {
        self.col
    }

    /// Row-major position (0-8)
    pub fn index(self) -> usize {
        self.row * SIZE + self.col
    }

    /// All nine actions in row-major order
    pub(crate) fn all() -> impl Iterator<Item = Action> {
        (0..SIZE).flat_map(|row| (0..SIZE).map(move |col| Action::at(row, col)))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A 3x3 grid of cells.
///
/// `Board` is a plain `Copy` value: every copy owns its own grid, so a
/// board handed to the transition function or the search can never be
/// changed through another copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct PieceCount {
    pub x: usize,
    pub o: usize,
}

/// Returns the starting board: nine empty cells.
pub fn initial_state() -> Board {
    Board::new()
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; SIZE]; SIZE],
        }
    }

    /// Build a board from raw rows.
    ///
    /// No reachability check is made; use [`Board::from_string`] when the
    /// board comes from outside the program.
    pub fn from_cells(cells: [[Cell; SIZE]; SIZE]) -> Self {
        Board { cells }
    }

    pub fn cells(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.cells
    }

    /// Get the cell an action points at
    pub fn get(&self, action: Action) -> Cell {
        self.cells[action.row][action.col]
    }

    /// Check if the cell an action points at is empty
    pub fn is_empty_at(&self, action: Action) -> bool {
        self.get(action) == Cell::Empty
    }

    /// Copy of this board with one cell replaced.
    pub(crate) fn with_cell(&self, action: Action, cell: Cell) -> Board {
        let mut next = *self;
        next.cells[action.row][action.col] = cell;
        next
    }

    pub(crate) fn count_pieces(&self) -> PieceCount {
        let mut count = PieceCount::default();
        for cell in self.cells.iter().flatten() {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => {}
            }
        }
        count
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        let count = self.count_pieces();
        count.x + count.o
    }

    /// Create a board from a string representation.
    ///
    /// The string must contain 9 cell characters in row-major order
    /// (whitespace is ignored), e.g. `"X.O .X. ..O"`. Piece counts must be
    /// reachable with X moving first: equal, or X ahead by one.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - There are not exactly 9 non-whitespace characters
    /// - Any character is not a valid cell representation
    /// - The piece counts cannot occur in a game
    pub fn from_string(s: &str) -> crate::Result<Self> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != SIZE * SIZE {
            return Err(crate::Error::InvalidBoardLength {
                expected: SIZE * SIZE,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [[Cell::Empty; SIZE]; SIZE];
        for (i, &c) in chars.iter().enumerate() {
            cells[i / SIZE][i % SIZE] =
                Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                    character: c,
                    position: i,
                    context: s.to_string(),
                })?;
        }

        let board = Board { cells };
        let count = board.count_pieces();
        if count.x != count.o && count.x != count.o + 1 {
            return Err(crate::Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            });
        }
        Ok(board)
    }

    /// Row-major string form, one character per cell
    pub fn encode(&self) -> String {
        self.cells.iter().flatten().map(|c| c.to_char()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Board {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_string(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
            if i + 1 < SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let board = initial_state();
        for action in Action::all() {
            assert_eq!(board.get(action), Cell::Empty);
        }
        assert_eq!(board, Board::default());
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn test_action_bounds() {
        assert!(Action::new(2, 2).is_ok());
        assert!(matches!(
            Action::new(3, 0),
            Err(crate::Error::InvalidPosition { row: 3, col: 0 })
        ));
        assert!(Action::new(0, 3).is_err());
        assert!(Action::from_index(9).is_err());
    }

    #[test]
    fn test_action_index_roundtrip() {
        let action = Action::from_index(5).unwrap();
        assert_eq!((action.row(), action.col()), (1, 2));
        assert_eq!(action.index(), 5);
        assert_eq!(action.to_string(), "(1, 2)");
    }

    #[test]
    fn test_action_deserialize_checks_bounds() {
        let action: Action = serde_json::from_str(r#"{"row":1,"col":2}"#).unwrap();
        assert_eq!(action, Action::new(1, 2).unwrap());
        assert_eq!(serde_json::to_string(&action).unwrap(), r#"{"row":1,"col":2}"#);

        let err = serde_json::from_str::<Action>(r#"{"row":3,"col":0}"#).unwrap_err();
        assert!(err.to_string().contains("position (3, 0)"), "{err}");
        assert!(serde_json::from_str::<Action>(r#"{"row":0,"col":9}"#).is_err());
    }

    #[test]
    fn test_all_actions_row_major() {
        let indices: Vec<usize> = Action::all().map(Action::index).collect();
        assert_eq!(indices, (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_copy_is_independent() {
        let board = initial_state();
        let center = Action::new(1, 1).unwrap();
        let marked = board.with_cell(center, Cell::X);

        assert_eq!(board.get(center), Cell::Empty);
        assert_eq!(marked.get(center), Cell::X);
        assert_ne!(board, marked);
    }

    #[test]
    fn test_from_string() {
        let board = Board::from_string("XOX......").unwrap();
        assert_eq!(board.cells()[0], [Cell::X, Cell::O, Cell::X]);
        assert_eq!(board.occupied_count(), 3);

        let spaced: Board = "X.O .X. ..O".parse().unwrap();
        assert_eq!(spaced.encode(), "X.O.X...O");

        assert!(matches!(
            Board::from_string("XO"),
            Err(crate::Error::InvalidBoardLength { got: 2, .. })
        ));
        assert!(matches!(
            Board::from_string("XO.......X"),
            Err(crate::Error::InvalidBoardLength { expected: 9, got: 10, .. })
        ));
        assert!(matches!(
            Board::from_string("XOZ......"),
            Err(crate::Error::InvalidCellCharacter { character: 'Z', .. })
        ));
    }

    #[test]
    fn test_from_string_rejects_unreachable_counts() {
        let err = Board::from_string("XXX......").unwrap_err();
        assert!(matches!(
            err,
            crate::Error::InvalidPieceCounts {
                x_count: 3,
                o_count: 0
            }
        ));
        assert!(Board::from_string("O........").is_err());
    }

    #[test]
    fn test_display() {
        let board = Board::from_string("XO.....OX").unwrap();
        assert_eq!(board.to_string(), "XO.\n...\n.OX");
    }
}
