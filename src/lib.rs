//! Snake - a minimal real-time arcade game
//!
//! This library provides:
//! - Core game logic (game module), independent of any windowing backend
//! - Keyboard input mapping (input module)
//! - Immediate-mode rendering of the game state (render module)
//! - The playable frame loop (modes module)

pub mod game;
pub mod input;
pub mod modes;
pub mod render;
