//! Text rendering of the board.

use multi_tictactoe_core::{Board, Cell};
use std::fmt;

const OUTLINE: &str = "# ";
const LEFT_OUTLINE: &str = "# ";
const RIGHT_OUTLINE: &str = " #";
const CELL_SEPARATOR: &str = " | ";

/// Bordered text view of a board.
///
/// Each printed line holds one board column, so on a 3 x 3 board the
/// labels read `1 2 3` along the first line. Open cells show their label
/// only when `show_labels` is set.
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    board: &'a Board,
    show_labels: bool,
}

impl<'a> BoardView<'a> {
    /// View without labels, for showing the result of a move.
    pub fn plain(board: &'a Board) -> Self {
        Self {
            board,
            show_labels: false,
        }
    }

    /// View with the labels of open cells, for prompting the human.
    pub fn labeled(board: &'a Board) -> Self {
        Self {
            board,
            show_labels: true,
        }
    }

    fn cell_width(&self) -> usize {
        self.board.cell_count().to_string().len()
    }

    fn cell_text(&self, cell: &Cell) -> String {
        match cell {
            Cell::Occupied(symbol) => symbol.to_string(),
            Cell::Open(label) if self.show_labels => label.to_string(),
            Cell::Open(_) => String::new(),
        }
    }

    fn outline(width: usize) -> String {
        OUTLINE.repeat(width.div_ceil(OUTLINE.len())).trim_end().to_string()
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.cell_width();
        let lines: Vec<String> = (0..self.board.cols())
            .map(|col| {
                let cells: Vec<String> = self
                    .board
                    .column(col)
                    .into_iter()
                    .flatten()
                    .map(|cell| format!("{:>width$}", self.cell_text(cell)))
                    .collect();
                format!("{}{}{}", LEFT_OUTLINE, cells.join(CELL_SEPARATOR), RIGHT_OUTLINE)
            })
            .collect();

        let outline = Self::outline(lines.first().map(String::len).unwrap_or(0));
        writeln!(f, "{}", outline)?;
        for line in &lines {
            writeln!(f, "{}", line)?;
        }
        writeln!(f, "{}", outline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use multi_tictactoe_core::{Coord, Symbol};

    #[test]
    fn test_labeled_empty_board() {
        let board = Board::new(3, 3).unwrap();
        let text = BoardView::labeled(&board).to_string();
        assert_eq!(
            text,
            "# # # # # # #\n\
             # 1 | 2 | 3 #\n\
             # 4 | 5 | 6 #\n\
             # 7 | 8 | 9 #\n\
             # # # # # # #\n"
        );
    }

    #[test]
    fn test_plain_board_hides_labels() {
        let mut board = Board::new(3, 3).unwrap();
        board.occupy(Coord::new(1, 1), Symbol::X).unwrap();
        board.occupy(Coord::new(0, 2), Symbol::O).unwrap();
        let text = BoardView::plain(&board).to_string();
        assert_eq!(
            text,
            "# # # # # # #\n\
             #   |   | O #\n\
             #   | X |   #\n\
             #   |   |   #\n\
             # # # # # # #\n"
        );
    }

    #[test]
    fn test_wide_labels_align() {
        let mut board = Board::new(2, 5).unwrap();
        board.occupy(Coord::new(1, 4), Symbol::A).unwrap();
        let text = BoardView::labeled(&board).to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "#  1 |  2 |  3 |  4 |  5 #");
        assert_eq!(lines[2], "#  6 |  7 |  8 |  9 |  A #");
        assert_eq!(lines.len(), 4);
    }
}
