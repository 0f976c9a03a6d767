//! Multi Tic Tac Toe - terminal game.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use multi_tictactoe::{Cli, ConsolePresenter, GameConfig, GameEngine, StdinLines};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = GameConfig::load(&cli)?;
    info!(?config, "Starting Multi Tic Tac Toe");

    let presenter = ConsolePresenter::new(std::io::stdout());
    let mut engine = GameEngine::setup(&config, StdinLines::new(), presenter).await?;
    let report = engine.run().await?;

    info!(result = ?report.result(), "Exiting");
    Ok(())
}
