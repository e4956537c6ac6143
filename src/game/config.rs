use serde::{Deserialize, Serialize};

/// Fixed file path the final frame is exported to on game over.
/// Overwritten on each new game over, never versioned.
pub const SCREENSHOT_PATH: &str = "screenshot.png";

/// Configuration for the game.
///
/// All values are in screen pixels or seconds. The defaults are the only
/// values the shipped binary ever uses; there are no flags or config files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the window / playfield in pixels
    pub screen_width: i32,
    /// Height of the window / playfield in pixels
    pub screen_height: i32,
    /// Side length of one grid cell in pixels
    pub cell_size: i32,
    /// Initial length of the snake in segments
    pub initial_snake_length: usize,
    /// Seconds between simulation ticks at the start of a session
    pub initial_tick_interval: f32,
    /// Seconds shaved off the tick interval per food eaten
    pub speedup_step: f32,
    /// Floor for the tick interval; the simulation never runs faster
    pub min_tick_interval: f32,
    /// Hard cap on body segments; eating at the cap scores but does not grow
    pub max_snake_length: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 800,
            screen_height: 600,
            cell_size: 20,
            initial_snake_length: 3,
            initial_tick_interval: 0.1,
            speedup_step: 0.0015,
            min_tick_interval: 0.05,
            max_snake_length: 256,
        }
    }
}

impl GameConfig {
    /// Number of playable columns
    pub fn grid_cols(&self) -> i32 {
        self.screen_width / self.cell_size
    }

    /// Number of playable rows
    pub fn grid_rows(&self) -> i32 {
        self.screen_height / self.cell_size
    }

    /// Create a small playfield for testing
    #[cfg(test)]
    pub fn small() -> Self {
        Self {
            screen_width: 200,
            screen_height: 200,
            ..Default::default()
        }
    }
}
