//! Snake Levels - terminal Snake with selectable difficulty
//!
//! This library provides:
//! - Core game logic and the round state machine (game module)
//! - Keyboard and mouse mapping (input module)
//! - TUI rendering (render module)
//! - Session stats (metrics module)
//! - Optional high score persistence (storage module)
//! - The interactive event loop (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
pub mod storage;
