use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;

/// Smallest board the engine accepts on either axis
pub const MIN_GRID_SIZE: usize = 2;
/// Largest board the engine accepts on either axis
pub const MAX_GRID_SIZE: usize = 256;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the game grid in cells
    pub grid_width: usize,
    /// Height of the game grid in cells
    pub grid_height: usize,
    /// Level selected when the start screen first appears
    pub difficulty: Difficulty,
}

impl Default for GameConfig {
    fn default() -> Self {
        // 600x600 px board with 25 px tiles
        Self {
            grid_width: 24,
            grid_height: 24,
            difficulty: Difficulty::default(),
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Validate the grid extents
    ///
    /// Returns `Err(String)` describing the first offending field.
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [("grid_width", self.grid_width), ("grid_height", self.grid_height)] {
            if value < MIN_GRID_SIZE {
                return Err(format!(
                    "{name} must be at least {MIN_GRID_SIZE}, got {value}"
                ));
            }
            if value > MAX_GRID_SIZE {
                return Err(format!(
                    "{name} must be at most {MAX_GRID_SIZE}, got {value}"
                ));
            }
        }

        Ok(())
    }
}
