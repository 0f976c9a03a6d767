//! Player trait and implementations.

mod human;
mod random_ai;

pub use human::HumanPlayer;
pub use random_ai::RandomAi;

use crate::presenter::Presenter;
use anyhow::Result;
use multi_tictactoe_core::{Board, Coord, Symbol};

/// Trait for players that can make moves.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Picks an open cell on `board` for `symbol`.
    ///
    /// The returned coordinate must be open. The board is not modified;
    /// the engine applies the move.
    async fn choose_cell(
        &mut self,
        board: &Board,
        symbol: Symbol,
        presenter: &mut dyn Presenter,
    ) -> Result<Coord>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
