//! Game configuration: defaults, TOML file, command-line overrides.

use crate::cli::Cli;
use anyhow::{Context, Result};
use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings for one game.
///
/// Values are not validated here; building the board and roster rejects
/// bad sizes and player counts.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    /// Board columns.
    #[serde(default = "default_cols")]
    cols: usize,

    /// Board rows.
    #[serde(default = "default_rows")]
    rows: usize,

    /// Players including the human.
    #[serde(default = "default_players")]
    players: usize,

    /// Pause between moves in milliseconds.
    #[serde(default = "default_turn_delay_ms")]
    turn_delay_ms: u64,

    /// Seed for AI randomness. `None` seeds from the OS.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_cols() -> usize {
    3
}

fn default_rows() -> usize {
    3
}

fn default_players() -> usize {
    2
}

fn default_turn_delay_ms() -> u64 {
    500
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cols: default_cols(),
            rows: default_rows(),
            players: default_players(),
            turn_delay_ms: default_turn_delay_ms(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Creates a configuration for the given board and player count.
    pub fn new(cols: usize, rows: usize, players: usize) -> Self {
        Self {
            cols,
            rows,
            players,
            ..Self::default()
        }
    }

    /// Parses configuration from TOML text. Missing keys take defaults.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse game config")
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).with_context(|| {
            format!("Failed to read config file {}", path.as_ref().display())
        })?;
        let config = Self::from_toml_str(&content)?;
        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Replaces values with those given on the command line.
    #[instrument(skip(self))]
    pub fn apply_overrides(mut self, cli: &Cli) -> Self {
        if let Some(cols) = cli.cols {
            self.cols = cols;
        }
        if let Some(rows) = cli.rows {
            self.rows = rows;
        }
        if let Some(players) = cli.players {
            self.players = players;
        }
        if let Some(delay) = cli.turn_delay_ms {
            self.turn_delay_ms = delay;
        }
        if cli.seed.is_some() {
            self.seed = cli.seed;
        }
        self
    }

    /// Builds the effective configuration: defaults, then the file named by
    /// `--config` if any, then individual flags.
    #[instrument(skip(cli))]
    pub fn load(cli: &Cli) -> Result<Self> {
        let base = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(base.apply_overrides(cli))
    }

    /// Pause between moves.
    pub fn turn_delay(&self) -> Duration {
        Duration::from_millis(self.turn_delay_ms)
    }
}
