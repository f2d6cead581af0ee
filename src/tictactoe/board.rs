//! Board representation and its textual form

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    O,
    X,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::O => 'O',
            Cell::X => 'X',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' => Some(Cell::Empty),
            'O' | 'o' | '0' => Some(Cell::O),
            'X' | 'x' => Some(Cell::X),
            _ => None,
        }
    }

    /// Base-3 digit used by the state encoding.
    pub fn digit(self) -> u16 {
        match self {
            Cell::Empty => 0,
            Cell::O => 1,
            Cell::X => 2,
        }
    }

    /// Inverse of [`Cell::digit`]. Digits outside 0-2 decode to an empty cell.
    pub fn from_digit(digit: u16) -> Cell {
        match digit {
            1 => Cell::O,
            2 => Cell::X,
            _ => Cell::Empty,
        }
    }

    /// Swap O and X, leaving empty cells alone
    pub fn swapped(self) -> Cell {
        match self {
            Cell::O => Cell::X,
            Cell::X => Cell::O,
            Cell::Empty => Cell::Empty,
        }
    }

    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::O => Some(Player::O),
            Cell::X => Some(Player::X),
            Cell::Empty => None,
        }
    }
}

/// A side in the game.
///
/// `O` is the side the pruning agent reasons as internally; when it is asked to
/// play `X` it swaps the symbols at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Player {
    #[default]
    O,
    X,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::O => Player::X,
            Player::X => Player::O,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::O => Cell::O,
            Player::X => Cell::X,
        }
    }

    pub fn to_char(self) -> char {
        self.to_cell().to_char()
    }

    /// Parse a side token (`x`/`o`, case-insensitive).
    pub fn parse_token(token: &str) -> crate::Result<Player> {
        match token.trim().to_ascii_lowercase().as_str() {
            "o" => Ok(Player::O),
            "x" => Ok(Player::X),
            _ => Err(crate::Error::InvalidSide {
                input: token.to_string(),
            }),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl FromStr for Player {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Player::parse_token(s)
    }
}

/// Row-major 3x3 grid of cells.
///
/// The textual form is three rows of three symbols separated by line breaks,
/// e.g. `"O.X\n.O.\n..X"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    pub cells: [Cell; 9],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
        }
    }

    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Board { cells }
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    /// Return a copy with `cell` written at `pos`
    ///
    /// # Errors
    ///
    /// Returns error if `pos` is not in 0-8.
    #[must_use = "with_cell returns a new board; the original is unchanged"]
    pub fn with_cell(&self, pos: usize, cell: Cell) -> crate::Result<Board> {
        if pos >= 9 {
            return Err(crate::Error::InvalidPosition { position: pos });
        }
        let mut board = *self;
        board.cells[pos] = cell;
        Ok(board)
    }

    /// Get all empty positions
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of cells holding `cell`
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Whether any square is still free
    pub fn has_empty(&self) -> bool {
        self.cells.contains(&Cell::Empty)
    }

    /// Swap O and X pieces on the board.
    #[must_use = "swap_symbols returns a new board; the original is unchanged"]
    pub fn swap_symbols(&self) -> Board {
        let mut swapped = *self;
        for cell in &mut swapped.cells {
            *cell = cell.swapped();
        }
        swapped
    }

    /// Parse a board, clamping anything that is not a known symbol to empty.
    ///
    /// Whitespace and `/` row separators are skipped. Missing trailing cells are
    /// empty and anything past the ninth cell is ignored.
    pub fn parse_lossy(s: &str) -> Board {
        let mut cells = [Cell::Empty; 9];
        for (slot, c) in cells.iter_mut().zip(board_chars(s)) {
            *slot = Cell::from_char(c).unwrap_or(Cell::Empty);
        }
        Board { cells }
    }
}

fn board_chars(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().filter(|c| !c.is_whitespace() && *c != '/')
}

impl FromStr for Board {
    type Err = crate::Error;

    /// Strict parse of the 3-line textual form.
    ///
    /// Whitespace and `/` are ignored, so `"O.X/.O./..X"` is accepted too.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = board_chars(s).collect();
        if chars.len() != 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }
        Ok(Board { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
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
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.empty_positions(), (0..9).collect::<Vec<_>>());
        assert_eq!(board.to_string(), "...\n...\n...");
    }

    #[test]
    fn test_default_board_is_empty() {
        assert_eq!(Cell::default(), Cell::Empty);
        assert_eq!(Board::default(), Board::new());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        let board: Board = "OX.\n.O.\nX.X".parse().unwrap();
        assert_eq!(board.get(0), Cell::O);
        assert_eq!(board.get(1), Cell::X);
        assert_eq!(board.get(8), Cell::X);
        assert_eq!(board.to_string(), "OX.\n.O.\nX.X");
        assert_eq!(board.to_string().parse::<Board>().unwrap(), board);
    }

    #[test]
    fn test_from_str_accepts_slash_rows() {
        let board: Board = "O../.X./..O".parse().unwrap();
        assert_eq!(board.count(Cell::O), 2);
        assert_eq!(board.count(Cell::X), 1);
    }

    #[test]
    fn test_from_str_rejects_bad_input() {
        let err = "O..\n...".parse::<Board>().unwrap_err();
        assert!(matches!(
            err,
            crate::Error::InvalidBoardLength { got: 6, .. }
        ));

        let err = "O..\n.?.\n...".parse::<Board>().unwrap_err();
        assert!(matches!(
            err,
            crate::Error::InvalidCellCharacter {
                character: '?',
                position: 4,
                ..
            }
        ));
    }

    #[test]
    fn test_parse_lossy_clamps_unknown_symbols() {
        let board = Board::parse_lossy("O?X\n.Z.\nX");
        assert_eq!(board.get(0), Cell::O);
        assert_eq!(board.get(1), Cell::Empty);
        assert_eq!(board.get(2), Cell::X);
        assert_eq!(board.get(4), Cell::Empty);
        assert_eq!(board.get(6), Cell::X);
        assert_eq!(board.get(8), Cell::Empty);
    }

    #[test]
    fn test_swap_symbols() {
        let board: Board = "OX.\n...\n..O".parse().unwrap();
        let swapped = board.swap_symbols();
        assert_eq!(swapped.to_string(), "XO.\n...\n..X");
        assert_eq!(swapped.swap_symbols(), board);
    }

    #[test]
    fn test_with_cell_bounds() {
        let board = Board::new();
        assert!(board.with_cell(9, Cell::O).is_err());
        assert_eq!(board.with_cell(4, Cell::X).unwrap().get(4), Cell::X);
    }

    #[test]
    fn test_player_tokens() {
        assert_eq!(Player::parse_token("x").unwrap(), Player::X);
        assert_eq!(Player::parse_token(" O ").unwrap(), Player::O);
        assert!(Player::parse_token("z").is_err());
        assert_eq!(Player::X.opponent(), Player::O);
    }
}
