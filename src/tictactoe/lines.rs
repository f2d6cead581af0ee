//! Winning lines and positional pattern matching

use super::{
    board::Cell,
    encoding::{POW3, StateIndex, decode},
};

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Sparse pattern with `cell` on the three squares of `line` and wildcards elsewhere.
pub fn line_pattern(line: &[usize; 3], cell: Cell) -> StateIndex {
    let value = line.iter().map(|&pos| cell.digit() * POW3[pos]).sum();
    StateIndex::new(value).unwrap_or(StateIndex::EMPTY)
}

/// Positional subset test: every non-empty square of `pattern` must hold the
/// same symbol in `state`. Empty pattern squares match anything.
pub fn matches(state: StateIndex, pattern: StateIndex) -> bool {
    let board = decode(state);
    let pattern = decode(pattern);
    pattern
        .cells
        .iter()
        .zip(board.cells.iter())
        .all(|(&want, &have)| want == Cell::Empty || want == have)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::{Board, encode};

    #[test]
    fn test_line_patterns() {
        assert_eq!(line_pattern(&WINNING_LINES[0], Cell::O).value(), 1 + 3 + 9);
        assert_eq!(line_pattern(&WINNING_LINES[0], Cell::X).value(), 2 * (1 + 3 + 9));
        assert_eq!(line_pattern(&WINNING_LINES[6], Cell::O).value(), 1 + 81 + 6561);
        assert_eq!(line_pattern(&WINNING_LINES[7], Cell::O).value(), 9 + 81 + 729);
    }

    #[test]
    fn test_matches_ignores_wildcards() {
        let board: Board = "OOO\nX.X\n..X".parse().unwrap();
        let state = encode(&board);
        assert!(matches(state, line_pattern(&WINNING_LINES[0], Cell::O)));
        assert!(!matches(state, line_pattern(&WINNING_LINES[0], Cell::X)));
        assert!(!matches(state, line_pattern(&WINNING_LINES[1], Cell::X)));
        assert!(matches(state, line_pattern(&WINNING_LINES[5], Cell::Empty)));
    }

    #[test]
    fn test_empty_pattern_matches_everything() {
        for state in StateIndex::all().step_by(97) {
            assert!(matches(state, StateIndex::EMPTY));
        }
    }
}
