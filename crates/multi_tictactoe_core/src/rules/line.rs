//! Candidate winning lines.

use crate::{Board, Coord};
use serde::{Deserialize, Serialize};

/// A set of cells that wins when one mark fills all of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Line {
    /// Every row of one column.
    #[display("column {}", _0)]
    Column(usize),
    /// Every column of one row.
    #[display("row {}", _0)]
    Row(usize),
    /// `(0, 0)` to `(n-1, n-1)`.
    #[display("top-left diagonal")]
    TopLeftDiagonal,
    /// `(n-1, 0)` to `(0, n-1)`.
    #[display("top-right diagonal")]
    TopRightDiagonal,
}

impl Line {
    /// Coordinates along this line on `board`.
    ///
    /// Diagonals have length `cols`; they are only meaningful on square
    /// boards, which is the only place [`lines`] produces them.
    pub fn cells(self, board: &Board) -> Vec<Coord> {
        let cols = board.cols();
        let rows = board.rows();
        match self {
            Line::Column(c) => (0..rows).map(|r| Coord::new(c, r)).collect(),
            Line::Row(r) => (0..cols).map(|c| Coord::new(c, r)).collect(),
            Line::TopLeftDiagonal => (0..cols).map(|i| Coord::new(i, i)).collect(),
            Line::TopRightDiagonal => (0..cols).map(|i| Coord::new(cols - 1 - i, i)).collect(),
        }
    }
}

/// All candidate lines in evaluation order.
///
/// Columns first, then rows, then the top-left and top-right diagonals.
/// Diagonals are only included when the board is square.
pub fn lines(board: &Board) -> Vec<Line> {
    let mut all: Vec<Line> = (0..board.cols())
        .map(Line::Column)
        .chain((0..board.rows()).map(Line::Row))
        .collect();
    if board.cols() == board.rows() {
        all.push(Line::TopLeftDiagonal);
        all.push(Line::TopRightDiagonal);
    }
    all
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_board_lines() {
        let board = Board::new(3, 3).unwrap();
        let all = lines(&board);
        assert_eq!(all.len(), 8);
        assert_eq!(all[0], Line::Column(0));
        assert_eq!(all[3], Line::Row(0));
        assert_eq!(all[6], Line::TopLeftDiagonal);
        assert_eq!(all[7], Line::TopRightDiagonal);
    }

    #[test]
    fn test_rectangular_board_has_no_diagonals() {
        let board = Board::new(4, 2).unwrap();
        let all = lines(&board);
        assert_eq!(all.len(), 6);
        assert!(!all.contains(&Line::TopLeftDiagonal));
        assert!(!all.contains(&Line::TopRightDiagonal));
    }

    #[test]
    fn test_line_cells() {
        let board = Board::new(3, 3).unwrap();
        assert_eq!(
            Line::TopRightDiagonal.cells(&board),
            vec![Coord::new(2, 0), Coord::new(1, 1), Coord::new(0, 2)]
        );
        assert_eq!(
            Line::Row(1).cells(&board),
            vec![Coord::new(0, 1), Coord::new(1, 1), Coord::new(2, 1)]
        );
    }
}
