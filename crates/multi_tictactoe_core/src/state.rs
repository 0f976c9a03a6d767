//! Game state and the turn/move phase machine.

use super::board::Board;
use super::error::{GameError, GameErrorKind};
use super::roster::PlayerRoster;
use super::rules;
use super::types::{Coord, Outcome, Symbol};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the given seat to move.
    AwaitingMove(usize),
    /// Game decided. Never holds [`Outcome::NoResult`].
    Finished(Outcome),
}

/// Complete state of one game.
///
/// The board and roster keep their shape for the whole game; only cell
/// occupancy, the move counter and the phase change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    roster: PlayerRoster,
    moves_count: usize,
    phase: Phase,
}

impl GameState {
    /// Starts a game. Seat 0 moves first.
    #[instrument(skip_all, fields(cols = board.cols(), rows = board.rows(), players = roster.len()))]
    pub fn new(board: Board, roster: PlayerRoster) -> Self {
        Self {
            board,
            roster,
            moves_count: 0,
            phase: Phase::AwaitingMove(0),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the roster.
    pub fn roster(&self) -> &PlayerRoster {
        &self.roster
    }

    /// Completed moves so far.
    pub fn moves_count(&self) -> usize {
        self.moves_count
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Seat to move: `moves_count mod players`.
    pub fn current_mover(&self) -> usize {
        self.moves_count % self.roster.len()
    }

    /// Mark of the seat to move.
    pub fn current_symbol(&self) -> Symbol {
        self.roster.symbol_for(self.current_mover())
    }

    /// Returns true if the seat to move is the human.
    pub fn is_human_turn(&self) -> bool {
        self.roster.is_human(self.current_mover())
    }

    /// Returns the outcome once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::Finished(outcome) => Some(outcome),
            Phase::AwaitingMove(_) => None,
        }
    }

    /// Returns true once the game is decided.
    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Finished(_))
    }

    /// Places the current mover's mark at `coord` and evaluates the board.
    ///
    /// On success the move counter has advanced by exactly one and the
    /// phase reflects the returned outcome. On failure nothing changes.
    #[instrument(skip(self), fields(moves_count = self.moves_count))]
    pub fn apply_move(&mut self, coord: Coord) -> Result<Outcome, GameError> {
        if self.is_over() {
            return Err(GameError::new(GameErrorKind::GameOver));
        }

        let symbol = self.current_symbol();
        self.board.occupy(coord, symbol)?;
        self.moves_count += 1;
        debug!(%symbol, %coord, "Move applied");

        let outcome = rules::evaluate(&self.board);
        self.phase = if outcome.is_terminal() {
            info!(%outcome, moves = self.moves_count, "Game finished");
            Phase::Finished(outcome)
        } else {
            Phase::AwaitingMove(self.current_mover())
        };
        Ok(outcome)
    }
}
