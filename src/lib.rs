//! Multi Tic Tac Toe - terminal game on any board size
//!
//! One human plays against up to five AI players that pick uniformly
//! random open cells. Game rules live in [`multi_tictactoe_core`]; this
//! crate wires them to the terminal.
//!
//! # Architecture
//!
//! - **Engine**: setup, turn loop and end-of-game report
//! - **Players**: human (typed cell labels) and random AI
//! - **Presenter**: game events rendered as console text
//! - **Config**: defaults, TOML file and command-line overrides
//!
//! # Example
//!
//! ```no_run
//! use multi_tictactoe::{ConsolePresenter, GameConfig, GameEngine, StdinLines};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = GameConfig::new(4, 4, 3);
//! let presenter = ConsolePresenter::new(std::io::stdout());
//! let mut engine = GameEngine::setup(&config, StdinLines::new(), presenter).await?;
//! let report = engine.run().await?;
//! println!("{}", report.result());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod engine;
mod input;
mod players;
mod presenter;
mod render;
mod report;

// Crate-level exports - Command line and configuration
pub use cli::Cli;
pub use config::GameConfig;

// Crate-level exports - Engine
pub use engine::{GameEngine, determine_turn_order};
pub use report::{EndReport, HumanResult};

// Crate-level exports - Input and output
pub use input::{LineSource, ScriptedLines, StdinLines};
pub use presenter::{ConsolePresenter, GameEvent, Presenter, RecordingPresenter};
pub use render::BoardView;

// Crate-level exports - Players
pub use players::{HumanPlayer, Player, RandomAi};

// Crate-level exports - Core game types
pub use multi_tictactoe_core::{
    Board, Cell, Coord, GameError, GameErrorKind, GameState, Outcome, Phase, PlayerRoster,
    Symbol, TurnOrder,
};
