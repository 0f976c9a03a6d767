//! AI that picks uniformly random open cells.

use super::Player;
use crate::presenter::Presenter;
use anyhow::Result;
use multi_tictactoe_core::{Board, Coord, Symbol};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, instrument};

/// AI that draws random coordinates until one is open.
pub struct RandomAi {
    name: String,
    rng: StdRng,
}

impl RandomAi {
    /// Creates an AI seeded from the OS.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_rng(name, StdRng::from_os_rng())
    }

    /// Creates an AI with a fixed seed.
    pub fn seeded(name: impl Into<String>, seed: u64) -> Self {
        Self::with_rng(name, StdRng::seed_from_u64(seed))
    }

    /// Creates an AI using the given generator.
    pub fn with_rng(name: impl Into<String>, rng: StdRng) -> Self {
        Self {
            name: name.into(),
            rng,
        }
    }
}

#[async_trait::async_trait]
impl Player for RandomAi {
    #[instrument(skip_all)]
    async fn choose_cell(
        &mut self,
        board: &Board,
        symbol: Symbol,
        _presenter: &mut dyn Presenter,
    ) -> Result<Coord> {
        if board.is_full() {
            anyhow::bail!("No open cells available");
        }

        let mut attempts = 0usize;
        loop {
            attempts += 1;
            let coord = Coord::new(
                self.rng.random_range(0..board.cols()),
                self.rng.random_range(0..board.rows()),
            );
            if board.is_open(coord) {
                debug!(%coord, %symbol, attempts, "AI chose cell");
                return Ok(coord);
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
