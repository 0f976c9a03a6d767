//! Move order: whether the human goes first or second.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// When the human takes their turns.
///
/// Defaults to [`TurnOrder::First`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TurnOrder {
    /// Human plays seat 0.
    #[default]
    First,
    /// Human plays seat 1.
    Second,
}

impl TurnOrder {
    /// Interprets the answer to "do you want to go first?".
    ///
    /// Only the exact text `1` or `"1"` means first; anything else,
    /// including padded variants, means second.
    #[instrument]
    pub fn from_choice(choice: &str) -> Self {
        match choice {
            "1" | "\"1\"" => Self::First,
            _ => Self::Second,
        }
    }

    /// Seat index of the human.
    pub fn human_index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }
}
