use macroquad::prelude::{
    clear_background, draw_circle, draw_rectangle, draw_rectangle_lines, draw_text, measure_text,
    Color, BLACK, BLUE, LIGHTGRAY, RED, WHITE,
};

use crate::game::GameState;

// Accent fill for the row and column holding the food cell
const LIGHTER_RED: Color = Color::new(0.988, 0.573, 0.604, 1.0);

const SCORE_FONT_SIZE: f32 = 24.0;
const GAME_OVER_FONT_SIZE: f32 = 30.0;
const EYE_OFFSET: f32 = 5.0;
const EYE_RADIUS: f32 = 2.0;

/// Draws a `GameState` with immediate-mode primitives; never mutates it.
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn draw(&self, state: &GameState) {
        clear_background(WHITE);

        self.draw_grid(state);

        if state.is_game_over {
            self.draw_game_over(state);
        } else {
            self.draw_food(state);
            self.draw_snake(state);
            self.draw_score(state.score);
        }
    }

    /// Grid of cell outlines. Cells sharing the food's column or row are
    /// filled with the accent color instead, so the food is flagged along its
    /// entire row and column.
    fn draw_grid(&self, state: &GameState) {
        let cell = state.cell_size as f32;

        for x in (0..state.screen_width).step_by(state.cell_size as usize) {
            for y in (0..state.screen_height).step_by(state.cell_size as usize) {
                if x == state.food.x || y == state.food.y {
                    draw_rectangle(x as f32, y as f32, cell, cell, LIGHTER_RED);
                } else {
                    draw_rectangle_lines(x as f32, y as f32, cell, cell, 1.0, LIGHTGRAY);
                }
            }
        }
    }

    fn draw_food(&self, state: &GameState) {
        let cell = state.cell_size as f32;
        draw_rectangle(state.food.x as f32, state.food.y as f32, cell, cell, RED);
    }

    fn draw_snake(&self, state: &GameState) {
        let cell = state.cell_size as f32;

        for segment in &state.snake.body {
            draw_rectangle(segment.x as f32, segment.y as f32, cell, cell, BLUE);
        }

        // Two dot eyes on the head
        let head = state.snake.head();
        let center_x = head.x as f32 + cell / 2.0;
        let center_y = head.y as f32 + cell / 2.0;
        draw_circle(center_x - EYE_OFFSET, center_y - EYE_OFFSET, EYE_RADIUS, BLACK);
        draw_circle(center_x + EYE_OFFSET, center_y + EYE_OFFSET, EYE_RADIUS, BLACK);
    }

    fn draw_score(&self, score: u32) {
        let text = format!("Score: {}", score);
        // draw_text positions the baseline, not the top-left corner
        draw_text(&text, 20.0, 20.0 + SCORE_FONT_SIZE, SCORE_FONT_SIZE, RED);
    }

    /// Centered horizontally from measured width, so any score digit count
    /// stays centered
    fn draw_game_over(&self, state: &GameState) {
        let text = format!(
            "Game Over! Score: {}. Press R to Restart",
            state.last_score
        );
        let dimensions = measure_text(&text, None, GAME_OVER_FONT_SIZE as u16, 1.0);
        let x = (state.screen_width as f32 - dimensions.width) / 2.0;
        let y = state.screen_height as f32 / 2.0;
        draw_text(&text, x, y, GAME_OVER_FONT_SIZE, RED);
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
