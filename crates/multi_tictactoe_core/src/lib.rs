//! Multi Tic Tac Toe core - pure game logic.
//!
//! Boards of any rectangular size, up to six players, and the rules that
//! decide a winner or a draw. Nothing in this crate performs I/O.
//!
//! # Architecture
//!
//! - **Board**: grid of cells, human-facing labels, open-cell queries
//! - **Roster**: player symbols in turn order and the seat of the human
//! - **Rules**: line enumeration, win check, full check, `evaluate`
//! - **State**: move counter, current mover, phase machine
//!
//! # Example
//!
//! ```
//! use multi_tictactoe_core::{Board, GameState, Outcome, PlayerRoster};
//!
//! # fn example() -> Result<(), multi_tictactoe_core::GameError> {
//! let board = Board::new(3, 3)?;
//! let roster = PlayerRoster::new(2, 0)?;
//! let mut state = GameState::new(board, roster);
//!
//! let coord = state.board().find_open_cell_by_label("5").unwrap();
//! assert_eq!(state.apply_move(coord)?, Outcome::NoResult);
//! assert_eq!(state.moves_count(), 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod order;
mod roster;
mod rules;
mod state;
mod types;

pub use board::{Board, OpenCells};
pub use error::{GameError, GameErrorKind};
pub use order::TurnOrder;
pub use roster::PlayerRoster;
pub use rules::{Line, check_winner, evaluate, is_full, lines, winning_line};
pub use state::{GameState, Phase};
pub use types::{Cell, Coord, Outcome, Symbol};
