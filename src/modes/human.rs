use macroquad::prelude::{get_frame_time, get_screen_data, is_key_pressed, next_frame, KeyCode};

use crate::game::{GameConfig, GameEngine, GameState, SCREENSHOT_PATH};
use crate::input::InputHandler;
use crate::render::Renderer;

/// Keyboard-controlled play: owns the engine and session state and drives
/// them from the window's frame loop.
pub struct HumanMode {
    engine: GameEngine,
    state: GameState,
    renderer: Renderer,
    input_handler: InputHandler,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Self {
        let mut engine = GameEngine::new(config);
        let state = engine.reset();

        Self {
            engine,
            state,
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
        }
    }

    /// Run until the window closes. One iteration per rendered frame:
    /// sample input, update, draw, then capture the frame if the session
    /// just ended.
    pub async fn run(&mut self) {
        loop {
            if is_key_pressed(KeyCode::Escape) {
                break;
            }

            let input = self.input_handler.poll();
            let result = self
                .engine
                .frame_update(&mut self.state, get_frame_time(), input);

            self.renderer.draw(&self.state);

            if result.capture_frame {
                // Capture after drawing so the file holds the game-over screen
                get_screen_data().export_png(SCREENSHOT_PATH);
            }

            next_frame().await;
        }
    }
}
