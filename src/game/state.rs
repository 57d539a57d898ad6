use super::action::Direction;
use super::difficulty::Difficulty;

/// A position on the game grid
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

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    pub head: Position,
    /// Body segments, index 0 is the segment right behind the head
    pub body: Vec<Position>,
    /// `None` until the first direction input; the snake stays put meanwhile
    pub velocity: Option<Direction>,
}

impl Snake {
    /// A bare head with no body that is not moving yet
    pub fn new(head: Position) -> Self {
        Self {
            head,
            body: Vec::new(),
            velocity: None,
        }
    }

    /// Check if position collides with snake body (excluding head)
    pub fn collides_with_body(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Check if position is covered by the head or any segment
    pub fn occupies(&self, pos: Position) -> bool {
        self.head == pos || self.collides_with_body(pos)
    }

    /// Move the head to `next_head`, every segment taking the place of the
    /// one ahead of it.
    ///
    /// The new layout is derived from the old one as a whole: the tail cell is
    /// vacated and the old head cell becomes segment 0.
    pub fn shift_to(&mut self, next_head: Position) {
        let previous_head = self.head;
        if !self.body.is_empty() {
            self.body.pop();
            self.body.insert(0, previous_head);
        }
        self.head = next_head;
    }

    /// Append a segment at the tail end
    pub fn grow(&mut self, at: Position) {
        self.body.push(at);
    }

    /// Number of occupied cells, head included
    pub fn len(&self) -> usize {
        self.body.len() + 1
    }

    /// A snake always has a head
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Coarse state of one round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Start screen; difficulty can still be chosen
    NotStarted,
    Playing,
    /// Round ended by a collision; waiting for a restart
    GameOver,
}

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// Read-only view of everything a renderer needs for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSnapshot<'a> {
    pub phase: Phase,
    pub head: Position,
    pub body: &'a [Position],
    pub food: Position,
    pub current_score: u32,
    pub high_score: u32,
    pub difficulty: Difficulty,
    pub grid_width: usize,
    pub grid_height: usize,
}

impl RenderSnapshot<'_> {
    /// Check if a position is occupied by the snake
    pub fn is_occupied_by_snake(&self, pos: Position) -> bool {
        self.head == pos || self.body.contains(&pos)
    }
}
