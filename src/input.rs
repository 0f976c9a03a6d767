//! Line-oriented input for the human player.

use anyhow::{Context, Result};
use std::collections::VecDeque;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::{debug, instrument};

/// Source of text lines typed by the human.
#[async_trait::async_trait]
pub trait LineSource: Send {
    /// Reads the next line without its terminator.
    ///
    /// Returns `Ok(None)` once the input is exhausted.
    async fn read_line(&mut self) -> Result<Option<String>>;
}

/// Lines read from the process's standard input.
pub struct StdinLines {
    lines: Lines<BufReader<Stdin>>,
}

impl StdinLines {
    /// Wraps standard input.
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }
}

impl Default for StdinLines {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl LineSource for StdinLines {
    #[instrument(skip(self))]
    async fn read_line(&mut self) -> Result<Option<String>> {
        let line = self
            .lines
            .next_line()
            .await
            .context("Failed to read from stdin")?;
        debug!(?line, "Read line");
        Ok(line)
    }
}

/// Pre-recorded lines, handed out in order.
#[derive(Debug, Clone, Default)]
pub struct ScriptedLines {
    lines: VecDeque<String>,
}

impl ScriptedLines {
    /// Creates a source that yields `lines` and then ends.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Lines not yet read.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

#[async_trait::async_trait]
impl LineSource for ScriptedLines {
    async fn read_line(&mut self) -> Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}
