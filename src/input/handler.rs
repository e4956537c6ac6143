use macroquad::input::{is_key_pressed, KeyCode};

use crate::game::{Direction, FrameInput};

/// Map a movement key to its direction (arrow keys or WASD)
pub fn direction_for_key(key: KeyCode) -> Option<Direction> {
    match key {
        KeyCode::Up | KeyCode::W => Some(Direction::Up),
        KeyCode::Down | KeyCode::S => Some(Direction::Down),
        KeyCode::Left | KeyCode::A => Some(Direction::Left),
        KeyCode::Right | KeyCode::D => Some(Direction::Right),
        _ => None,
    }
}

/// Samples edge-triggered key state once per frame. Unrecognized keys have
/// no effect; when several movement keys land on the same frame the last one
/// in scan order wins.
pub struct InputHandler;

const MOVEMENT_KEYS: [KeyCode; 8] = [
    KeyCode::Up,
    KeyCode::W,
    KeyCode::Down,
    KeyCode::S,
    KeyCode::Left,
    KeyCode::A,
    KeyCode::Right,
    KeyCode::D,
];

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Sample this frame's key presses into game input
    pub fn poll(&self) -> FrameInput {
        FrameInput {
            direction: self.poll_direction(),
            restart: is_key_pressed(KeyCode::R),
        }
    }

    fn poll_direction(&self) -> Option<Direction> {
        let mut direction = None;
        for key in MOVEMENT_KEYS {
            if is_key_pressed(key) {
                direction = direction_for_key(key);
            }
        }
        direction
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
