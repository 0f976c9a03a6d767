//! Win detection logic.

use super::line::{Line, lines};
use crate::{Board, Cell, Symbol};
use tracing::instrument;

/// Returns the mark filling every cell of `line`, if any.
fn uniform_symbol(board: &Board, line: Line) -> Option<Symbol> {
    let mut cells = line
        .cells(board)
        .into_iter()
        .map(|coord| board.cell_at(coord).ok());

    let first = match cells.next()?? {
        Cell::Occupied(symbol) => symbol,
        Cell::Open(_) => return None,
    };
    cells
        .all(|cell| cell == Some(Cell::Occupied(first)))
        .then_some(first)
}

/// Returns the first complete line and its owner.
///
/// Lines are scanned in the order given by [`lines`], so when several
/// lines are complete at once the earliest one is reported.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Line, Symbol)> {
    lines(board)
        .into_iter()
        .find_map(|line| uniform_symbol(board, line).map(|symbol| (line, symbol)))
}

/// Checks if there is a winner on the board.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Symbol> {
    winning_line(board).map(|(_, symbol)| symbol)
}
