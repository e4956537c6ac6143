use super::action::Direction;

/// A grid-aligned position in screen pixels (top-left corner of a cell)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position one cell in a direction
    pub fn moved_in_direction(&self, direction: Direction, cell_size: i32) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx * cell_size, dy * cell_size)
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
    /// Current direction of movement
    pub direction: Direction,
}

impl Snake {
    /// Create a new snake with the given head position, extending backwards
    /// (opposite the movement direction) for `length` segments.
    pub fn new(head: Position, direction: Direction, length: usize, cell_size: i32) -> Self {
        let mut body = vec![head];

        let (dx, dy) = direction.delta();
        let (back_dx, back_dy) = (-dx * cell_size, -dy * cell_size);

        for i in 1..length {
            let prev = body[i - 1];
            body.push(prev.moved_by(back_dx, back_dy));
        }

        Self { body, direction }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    /// Get body segments (excluding head)
    pub fn body_segments(&self) -> &[Position] {
        &self.body[1..]
    }

    /// Check if position collides with snake body (excluding head)
    pub fn collides_with_body(&self, pos: Position) -> bool {
        self.body_segments().contains(&pos)
    }

    /// Advance one cell in the current direction: every segment takes its
    /// predecessor's position, the head moves one cell forward.
    pub fn advance(&mut self, cell_size: i32) {
        let new_head = self.head().moved_in_direction(self.direction, cell_size);
        self.body.insert(0, new_head);
        self.body.pop();
    }

    /// Append one segment duplicating the current tail position. The two
    /// segments overlap until the next advance separates them, so the visible
    /// length grows by one cell over the following tick.
    pub fn grow_tail(&mut self) {
        self.body.push(self.tail());
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Type of collision that ended a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// Complete game session state, exclusively owned by the frame loop
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    pub score: u32,
    /// Score frozen at the moment of the last collision
    pub last_score: u32,
    /// Seconds between simulation ticks; shrinks as score grows
    pub tick_interval: f32,
    /// Real seconds accumulated since the last tick
    pub tick_timer: f32,
    pub is_game_over: bool,
    /// Set once the final frame has been captured for the current game over
    pub screenshot_taken: bool,
    pub screen_width: i32,
    pub screen_height: i32,
    pub cell_size: i32,
}

impl GameState {
    /// Check if a position is within the playfield bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.screen_width && pos.y >= 0 && pos.y < self.screen_height
    }
}
