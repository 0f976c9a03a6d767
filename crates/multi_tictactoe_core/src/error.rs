//! Error types for game construction and moves.

use derive_more::{Display, Error};
use tracing::instrument;

/// What went wrong.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GameErrorKind {
    /// Invalid board dimensions, player count or human seat.
    #[display("Invalid configuration: {}", _0)]
    Config(String),

    /// Coordinate outside the grid.
    #[display("Cell ({}, {}) is out of bounds", col, row)]
    OutOfBounds {
        /// Requested column.
        col: usize,
        /// Requested row.
        row: usize,
    },

    /// Text that does not name any open cell.
    #[display("{:?} is not an open cell", _0)]
    InvalidMoveInput(String),

    /// Cell was claimed already.
    #[display("Cell ({}, {}) is already occupied", col, row)]
    CellAlreadyOccupied {
        /// Column of the cell.
        col: usize,
        /// Row of the cell.
        row: usize,
    },

    /// Game has already finished.
    #[display("Game is already over")]
    GameOver,
}

/// Game error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("{} at {}:{}", kind, file, line)]
pub struct GameError {
    /// Error kind.
    pub kind: GameErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl GameError {
    /// Creates a new error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: GameErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Shorthand for a configuration error.
    #[track_caller]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(GameErrorKind::Config(message.into()))
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &GameErrorKind {
        &self.kind
    }
}

impl From<GameErrorKind> for GameError {
    #[track_caller]
    fn from(kind: GameErrorKind) -> Self {
        Self::new(kind)
    }
}
