//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O, rendering or
//! timing dependencies. Callers drive it through [`Command`]s (or the
//! matching methods on [`GameEngine`]) and read it back through a
//! [`RenderSnapshot`].

pub mod action;
pub mod config;
pub mod difficulty;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use action::{Command, Direction};
pub use config::GameConfig;
pub use difficulty::Difficulty;
pub use engine::{GameEngine, StepOutcome};
pub use state::{CollisionType, Phase, Position, RenderSnapshot, Snake};
