//! End-of-game report from the human's point of view.

use derive_getters::Getters;
use multi_tictactoe_core::{Outcome, Symbol};

/// How the game ended for the human.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum HumanResult {
    /// The human completed a line.
    #[display("YOU WON!!")]
    Won,
    /// Another player completed a line.
    #[display("YOU LOST =(")]
    Lost,
    /// Nobody completed a line.
    #[display("NO WINNER =(")]
    NoWinner,
}

/// Final outcome together with the human's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, derive_new::new)]
pub struct EndReport {
    /// Evaluated outcome.
    outcome: Outcome,
    /// Mark the human played.
    human_symbol: Symbol,
}

impl EndReport {
    /// Maps the outcome to a win, loss or no-winner result.
    pub fn result(&self) -> HumanResult {
        match self.outcome {
            Outcome::Winner(symbol) if symbol == self.human_symbol => HumanResult::Won,
            Outcome::Winner(_) => HumanResult::Lost,
            Outcome::Draw | Outcome::NoResult => HumanResult::NoWinner,
        }
    }
}
