//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering
//! dependencies, so every rule is unit-testable without opening a window.

pub mod action;
pub mod config;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use action::Direction;
pub use config::{GameConfig, SCREENSHOT_PATH};
pub use engine::{FrameInput, FrameResult, GameEngine, TickInfo};
pub use state::{CollisionType, GameState, Position, Snake};
