use super::difficulty::Difficulty;

/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
                | (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
        )
    }

    /// Returns the delta (dx, dy) for moving in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Commands the outside world can send to the engine.
///
/// The engine never schedules or polls anything itself; an event source
/// (terminal input, a timer, a test) drives it exclusively through these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Leave the start screen and begin the first round
    Start,
    /// Begin a fresh round after a game over
    Restart,
    /// The "space" input; restarts only when the round is over
    Confirm,
    /// Pick the tick interval, only honoured before the first round starts
    SetDifficulty(Difficulty),
    /// Steer the snake
    SetDirection(Direction),
    /// One timer tick
    Tick,
}

impl From<Direction> for Command {
    fn from(direction: Direction) -> Self {
        Command::SetDirection(direction)
    }
}
