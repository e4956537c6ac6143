use super::{
    action::Direction,
    config::GameConfig,
    state::{CollisionType, GameState, Position, Snake},
};
use rand::Rng;

/// Player input sampled once per rendered frame
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    /// Direction key pressed this frame, if any
    pub direction: Option<Direction>,
    /// Restart key pressed this frame
    pub restart: bool,
}

/// Information about one simulation tick
#[derive(Debug, Clone, PartialEq)]
pub struct TickInfo {
    /// Whether the snake ate food this tick
    pub ate_food: bool,
    /// Type of collision if one ended the session
    pub collision: Option<CollisionType>,
}

/// Result of a per-frame update
#[derive(Debug, Clone, PartialEq)]
pub struct FrameResult {
    /// The tick that ran this frame, if the accumulator crossed the interval
    pub tick: Option<TickInfo>,
    /// The caller should capture the rendered frame to the screenshot file
    pub capture_frame: bool,
    /// A restart request was honored this frame
    pub restarted: bool,
}

/// The game engine that owns the rules: movement, collisions, food, timing
pub struct GameEngine {
    config: GameConfig,
    rng: rand::rngs::ThreadRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: rand::thread_rng(),
        }
    }

    /// Reset the game to its initial state: a 3-segment snake centered on the
    /// playfield heading right, score 0, food at a random cell.
    pub fn reset(&mut self) -> GameState {
        let center = Position::new(self.config.screen_width / 2, self.config.screen_height / 2);

        let snake = Snake::new(
            center,
            Direction::Right,
            self.config.initial_snake_length,
            self.config.cell_size,
        );

        GameState {
            snake,
            food: self.place_food(),
            score: 0,
            last_score: 0,
            tick_interval: self.config.initial_tick_interval,
            tick_timer: 0.0,
            is_game_over: false,
            screenshot_taken: false,
            screen_width: self.config.screen_width,
            screen_height: self.config.screen_height,
            cell_size: self.config.cell_size,
        }
    }

    /// Advance the session by one rendered frame.
    ///
    /// While game over, the simulation is frozen: the first frame requests a
    /// one-time capture of the final screen, and only the restart key changes
    /// anything. While active, direction input is applied (180-degree turns
    /// rejected) and the frame delta feeds the tick accumulator; one discrete
    /// tick runs whenever the accumulator reaches the current interval.
    pub fn frame_update(&mut self, state: &mut GameState, dt: f32, input: FrameInput) -> FrameResult {
        if state.is_game_over {
            let capture_frame = !state.screenshot_taken;
            state.screenshot_taken = true;

            let restarted = input.restart;
            if restarted {
                *state = self.reset();
            }

            return FrameResult {
                tick: None,
                capture_frame,
                restarted,
            };
        }

        if let Some(direction) = input.direction {
            if !state.snake.direction.is_opposite(direction) {
                state.snake.direction = direction;
            }
        }

        state.tick_timer += dt;

        let mut tick = None;
        if state.tick_timer >= state.tick_interval {
            tick = Some(self.tick(state));
            state.tick_timer = 0.0;
        }

        FrameResult {
            tick,
            capture_frame: false,
            restarted: false,
        }
    }

    /// Run one discrete simulation tick: advance, collide, eat.
    pub fn tick(&mut self, state: &mut GameState) -> TickInfo {
        state.snake.advance(state.cell_size);
        let head = state.snake.head();

        // Collision is checked after the move, so the cell the tail just
        // vacated is a legal destination. The out-of-bounds head position is
        // kept on a wall hit.
        if let Some(collision) = self.check_collision(state, head) {
            state.is_game_over = true;
            state.last_score = state.score;

            return TickInfo {
                ate_food: false,
                collision: Some(collision),
            };
        }

        let ate_food = head == state.food;
        if ate_food {
            state.score += 1;

            if state.snake.len() < self.config.max_snake_length {
                state.snake.grow_tail();
            }

            state.food = self.place_food();
            state.tick_interval =
                (state.tick_interval - self.config.speedup_step).max(self.config.min_tick_interval);
        }

        TickInfo {
            ate_food,
            collision: None,
        }
    }

    /// Check if the moved head position ends the session
    fn check_collision(&self, state: &GameState, head: Position) -> Option<CollisionType> {
        if !state.is_in_bounds(head) {
            return Some(CollisionType::Wall);
        }

        if state.snake.collides_with_body(head) {
            return Some(CollisionType::SelfCollision);
        }

        None
    }

    /// Pick a uniformly random grid-aligned cell. The cell may fall on the
    /// snake body; occupancy is deliberately not checked.
    fn place_food(&mut self) -> Position {
        let x = self.rng.gen_range(0..self.config.grid_cols()) * self.config.cell_size;
        let y = self.rng.gen_range(0..self.config.grid_rows()) * self.config.cell_size;
        Position::new(x, y)
    }
}
