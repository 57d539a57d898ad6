//! High score persistence
//!
//! The engine keeps the high score in memory only. A [`ScoreStore`] lets the
//! caller carry it across process restarts without the engine doing any I/O:
//! load once before the first round, save whenever a round ends with a new
//! best.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Somewhere a high score can be read from and written back to
pub trait ScoreStore {
    /// Best score recorded so far, 0 when nothing was stored yet
    fn load(&self) -> Result<u32>;

    /// Record a new best score
    fn save(&mut self, high_score: u32) -> Result<()>;
}

/// Volatile store; the score is gone when the process exits
#[derive(Debug, Default, Clone)]
pub struct MemoryScoreStore {
    high_score: u32,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&self) -> Result<u32> {
        Ok(self.high_score)
    }

    fn save(&mut self, high_score: u32) -> Result<()> {
        self.high_score = high_score;
        Ok(())
    }
}

/// On-disk record of the best score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub high_score: u32,

    /// Crate version that wrote the file
    pub version: String,
}

impl ScoreRecord {
    pub fn new(high_score: u32) -> Self {
        Self {
            high_score,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Keeps the high score in a small JSON file
#[derive(Debug, Clone)]
pub struct JsonScoreStore {
    path: PathBuf,
}

impl JsonScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for JsonScoreStore {
    fn load(&self) -> Result<u32> {
        if !self.path.exists() {
            return Ok(0);
        }

        let json = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read high score from {:?}", self.path))?;
        let record: ScoreRecord = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse high score file {:?}", self.path))?;

        Ok(record.high_score)
    }

    fn save(&mut self, high_score: u32) -> Result<()> {
        // Create parent directories if needed
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {:?}", parent))?;
            }
        }

        let json = serde_json::to_string_pretty(&ScoreRecord::new(high_score))
            .context("Failed to serialize high score")?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("Failed to write high score to {:?}", self.path))?;

        Ok(())
    }
}
