//! Game rules for multi-player tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! board storage so the state machine can compose them.

mod draw;
mod line;
mod win;

pub use draw::{evaluate, is_full};
pub use line::{Line, lines};
pub use win::{check_winner, winning_line};
