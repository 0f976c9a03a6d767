//! Human player that types cell labels.

use super::Player;
use crate::input::LineSource;
use crate::presenter::{GameEvent, Presenter};
use anyhow::Result;
use multi_tictactoe_core::{Board, Coord, Symbol};
use tracing::{debug, info, instrument};

/// Human player reading labels from a [`LineSource`].
pub struct HumanPlayer<L: LineSource> {
    name: String,
    input: L,
}

impl<L: LineSource> HumanPlayer<L> {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input: L) -> Self {
        Self {
            name: name.into(),
            input,
        }
    }
}

#[async_trait::async_trait]
impl<L: LineSource> Player for HumanPlayer<L> {
    #[instrument(skip_all, fields(%symbol))]
    async fn choose_cell(
        &mut self,
        board: &Board,
        symbol: Symbol,
        presenter: &mut dyn Presenter,
    ) -> Result<Coord> {
        loop {
            presenter.present(&GameEvent::AwaitingHumanMove {
                board: board.clone(),
                symbol,
            })?;

            let Some(line) = self.input.read_line().await? else {
                anyhow::bail!("Input closed while waiting for a move");
            };

            match board.require_open_cell_by_label(&line) {
                Ok(coord) => {
                    info!(%coord, "Human chose cell");
                    return Ok(coord);
                }
                Err(e) => {
                    debug!(error = %e, "Rejected selection");
                    presenter.present(&GameEvent::InvalidSelection { input: line })?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
