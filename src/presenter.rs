//! Game events and the presenters that show them.

use crate::render::BoardView;
use crate::report::EndReport;
use anyhow::Result;
use multi_tictactoe_core::{Board, Coord, Symbol, TurnOrder};
use std::io::Write;

/// Messages sent from the engine to the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Game is about to start.
    Welcome {
        /// Players including the human.
        players: usize,
        /// Board columns.
        cols: usize,
        /// Board rows.
        rows: usize,
    },
    /// Human is asked whether to go first.
    OrderPrompt,
    /// Human's seat is decided.
    OrderChosen(TurnOrder),
    /// A new turn begins.
    TurnStarted {
        /// One-based turn number.
        turn: usize,
        /// Mark about to move.
        symbol: Symbol,
    },
    /// Human is asked to pick a cell.
    AwaitingHumanMove {
        /// Board to pick from.
        board: Board,
        /// Human's mark.
        symbol: Symbol,
    },
    /// Human typed something that is not an open cell.
    InvalidSelection {
        /// What was typed.
        input: String,
    },
    /// A move was applied.
    MoveMade {
        /// Mark placed.
        symbol: Symbol,
        /// Where it went.
        coord: Coord,
        /// Board after the move.
        board: Board,
    },
    /// Game ended.
    GameOver(EndReport),
}

/// Output side of the game.
pub trait Presenter: Send {
    /// Shows one event.
    fn present(&mut self, event: &GameEvent) -> Result<()>;
}

/// Presenter writing the classic console text.
pub struct ConsolePresenter<W: Write + Send> {
    out: W,
}

impl<W: Write + Send> ConsolePresenter<W> {
    /// Creates a presenter writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the presenter, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> Presenter for ConsolePresenter<W> {
    fn present(&mut self, event: &GameEvent) -> Result<()> {
        let out = &mut self.out;
        match event {
            GameEvent::Welcome {
                players,
                cols,
                rows,
            } => writeln!(
                out,
                "Welcome to Tic Tac Toe! We are playing with {} players on a {} x {} board.",
                players, cols, rows
            )?,
            GameEvent::OrderPrompt => write!(
                out,
                "Type \"1\" if you want to go first, anything else for second. "
            )?,
            GameEvent::OrderChosen(TurnOrder::First) => writeln!(out, "You will go first!\n")?,
            GameEvent::OrderChosen(TurnOrder::Second) => {
                writeln!(out, "You will go second! Very bold =)\n")?
            }
            GameEvent::TurnStarted { turn, symbol } => {
                writeln!(out, "\nTurn #{}. {} goes next!", turn, symbol)?
            }
            GameEvent::AwaitingHumanMove { board, symbol } => {
                write!(out, "{}", BoardView::labeled(board))?;
                write!(
                    out,
                    "Input the cell number you want to mark with your {}: ",
                    symbol
                )?;
            }
            GameEvent::InvalidSelection { input } => {
                writeln!(out, "{:?} is not an open cell, try again.", input)?
            }
            GameEvent::MoveMade { board, .. } => {
                writeln!(out)?;
                write!(out, "{}", BoardView::plain(board))?;
            }
            GameEvent::GameOver(report) => {
                writeln!(out, "\n!!! GAME OVER !!!")?;
                if let Some(winner) = report.outcome().winner() {
                    writeln!(out, "{} is the winner!\n", winner)?;
                }
                writeln!(out, "{}", report.result())?;
            }
        }
        out.flush()?;
        Ok(())
    }
}

/// Presenter that keeps every event, for inspecting a game afterwards.
#[derive(Debug, Clone, Default)]
pub struct RecordingPresenter {
    events: Vec<GameEvent>,
}

impl RecordingPresenter {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Events in the order they were shown.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }
}

impl Presenter for RecordingPresenter {
    fn present(&mut self, event: &GameEvent) -> Result<()> {
        self.events.push(event.clone());
        Ok(())
    }
}
