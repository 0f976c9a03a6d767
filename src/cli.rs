//! Command-line interface for multi_tictactoe.

use clap::Parser;

/// Multi Tic Tac Toe - play on any board size against random AI players
///
/// Every option is optional; with none the classic 3 x 3 game against one
/// AI is played.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "multi_tictactoe")]
#[command(about = "Terminal tic-tac-toe on any board size", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML game config (flags below override its values)
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Number of board columns
    #[arg(long)]
    pub cols: Option<usize>,

    /// Number of board rows
    #[arg(long)]
    pub rows: Option<usize>,

    /// Number of players, including you (at most 6)
    #[arg(short, long)]
    pub players: Option<usize>,

    /// Pause between moves, in milliseconds
    #[arg(long)]
    pub turn_delay_ms: Option<u64>,

    /// Seed for the AI players' random choices
    #[arg(long)]
    pub seed: Option<u64>,
}
