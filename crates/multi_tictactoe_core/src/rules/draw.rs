//! Draw detection and overall board evaluation.

use super::win::winning_line;
use crate::{Board, Outcome};
use tracing::{debug, instrument};

/// Checks if the board is full (no open cells).
///
/// A full board with no winner indicates a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// Evaluates the board: a winner, a draw, or neither.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((line, symbol)) = winning_line(board) {
        debug!(%line, %symbol, "Winning line found");
        return Outcome::Winner(symbol);
    }
    if is_full(board) {
        return Outcome::Draw;
    }
    Outcome::NoResult
}
