//! Player roster: who plays which mark, and which seat is human.

use super::error::GameError;
use super::types::Symbol;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Ordered list of player marks with exactly one human seat.
///
/// Seat `i` plays the `i`-th mark of the alphabet. Every seat other than
/// `human_index` is controlled by the AI.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayerRoster {
    /// Marks in turn order.
    symbols: Vec<Symbol>,
    /// Seat of the human player.
    human_index: usize,
}

impl PlayerRoster {
    /// Creates a roster of `num_players` seats.
    ///
    /// Fails when there are no players, more players than marks, or the
    /// human seat does not exist.
    #[instrument]
    pub fn new(num_players: usize, human_index: usize) -> Result<Self, GameError> {
        if num_players == 0 {
            return Err(GameError::config("at least one player is required"));
        }
        if num_players > Symbol::ALPHABET_SIZE {
            return Err(GameError::config(format!(
                "{} is greater than maximum of {} players",
                num_players,
                Symbol::ALPHABET_SIZE
            )));
        }
        if human_index >= num_players {
            return Err(GameError::config(format!(
                "human seat {} does not exist with {} players",
                human_index, num_players
            )));
        }

        Ok(Self {
            symbols: Symbol::iter().take(num_players).collect(),
            human_index,
        })
    }

    /// Number of seats.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false: a roster has at least one seat.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Mark played by `seat`, wrapping around the roster.
    pub fn symbol_for(&self, seat: usize) -> Symbol {
        self.symbols[seat % self.symbols.len()]
    }

    /// Returns true if `seat` is the human.
    pub fn is_human(&self, seat: usize) -> bool {
        seat % self.symbols.len() == self.human_index
    }

    /// Mark played by the human.
    pub fn human_symbol(&self) -> Symbol {
        self.symbols[self.human_index]
    }
}
