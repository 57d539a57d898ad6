use std::time::Duration;

use log::{debug, info};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use super::{
    action::{Command, Direction},
    config::GameConfig,
    difficulty::Difficulty,
    state::{CollisionType, Phase, Position, RenderSnapshot, Snake},
};

/// Random probes tried before falling back to enumerating the free cells
const FOOD_SAMPLE_ATTEMPTS: usize = 64;

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Nothing moved: the round is not running or no direction was given yet
    Idle,
    /// The snake moved one cell
    Moved,
    /// The snake moved onto the food and grew
    AteFood,
    /// The snake hit something and the round is over
    Collided(CollisionType),
    /// The snake ate the last food there was room for; the round is over
    BoardFilled,
}

impl StepOutcome {
    /// Whether this step ended the round
    pub fn terminated(&self) -> bool {
        matches!(self, StepOutcome::Collided(_) | StepOutcome::BoardFilled)
    }
}

/// The game engine: owns one round's state plus the high score and reacts
/// to commands. It never does I/O or scheduling of its own.
pub struct GameEngine {
    config: GameConfig,
    difficulty: Difficulty,
    phase: Phase,
    snake: Snake,
    food: Position,
    current_score: u32,
    high_score: u32,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    ///
    /// # Panics
    ///
    /// Panics when `config` fails [`GameConfig::validate`].
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create an engine whose food placement is reproducible. Panics on an
    /// invalid config, like [`GameEngine::new`].
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Self {
        if let Err(err) = config.validate() {
            panic!("invalid game configuration: {err}");
        }
        let head = Self::start_position(&config);
        let mut engine = Self {
            difficulty: config.difficulty,
            config,
            phase: Phase::NotStarted,
            snake: Snake::new(head),
            food: head,
            current_score: 0,
            high_score: 0,
            rng,
        };
        engine.reset();
        engine
    }

    /// Seed the high score, e.g. from a score store. Never lowers it.
    pub fn with_high_score(mut self, high_score: u32) -> Self {
        self.high_score = self.high_score.max(high_score);
        self
    }

    fn start_position(config: &GameConfig) -> Position {
        Position::new(
            (config.grid_width / 2) as i32,
            (config.grid_height / 2) as i32,
        )
    }

    /// Put a fresh snake in the middle of the board and score back to zero
    fn reset(&mut self) {
        self.snake = Snake::new(Self::start_position(&self.config));
        self.current_score = 0;
        self.place_food();
    }

    /// Leave the start screen and begin the first round
    pub fn start(&mut self) {
        if self.phase != Phase::NotStarted {
            return;
        }
        self.phase = Phase::Playing;
        info!("Round started at {} difficulty", self.difficulty);
    }

    /// Begin a new round after a game over. The high score and difficulty
    /// carry over.
    pub fn restart(&mut self) {
        if self.phase != Phase::GameOver {
            return;
        }
        self.reset();
        self.phase = Phase::Playing;
        info!("Round restarted, high score {}", self.high_score);
    }

    /// The confirm input restarts a finished round and does nothing otherwise
    pub fn confirm(&mut self) {
        if self.phase == Phase::GameOver {
            self.restart();
        }
    }

    /// Choose the difficulty. Only possible on the start screen; returns
    /// whether the level was applied.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> bool {
        if self.phase != Phase::NotStarted {
            debug!("Ignoring difficulty change to {difficulty} outside the start screen");
            return false;
        }
        if self.difficulty != difficulty {
            self.difficulty = difficulty;
            debug!(
                "Difficulty set to {difficulty} ({} ms per tick)",
                difficulty.tick_interval_millis()
            );
        }
        true
    }

    /// Steer the snake. Ignored unless a round is running, and a request to
    /// reverse straight back into the body is rejected. Returns whether the
    /// velocity changed.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }

        match self.snake.velocity {
            Some(current) if current.is_opposite(direction) => false,
            Some(current) if current == direction => false,
            _ => {
                self.snake.velocity = Some(direction);
                true
            }
        }
    }

    /// One timer tick: advances the snake while a round is running
    pub fn tick(&mut self) -> StepOutcome {
        self.advance()
    }

    /// Execute one step of the game
    ///
    /// A stationary snake (no direction given yet) and any phase other than
    /// `Playing` leave the state untouched. Otherwise the snake moves one
    /// cell and collisions are checked in order: wall, own body, food.
    pub fn advance(&mut self) -> StepOutcome {
        if self.phase != Phase::Playing {
            return StepOutcome::Idle;
        }
        let Some(direction) = self.snake.velocity else {
            return StepOutcome::Idle;
        };

        let vacated = self.snake.body.last().copied().unwrap_or(self.snake.head);
        let new_head = self.snake.head.moved_in_direction(direction);
        self.snake.shift_to(new_head);

        if let Some(collision_type) = self.check_collision(new_head) {
            self.phase = Phase::GameOver;
            info!(
                "Game over ({:?}) with score {}, high score {}",
                collision_type, self.current_score, self.high_score
            );
            return StepOutcome::Collided(collision_type);
        }

        if new_head != self.food {
            return StepOutcome::Moved;
        }

        // The new segment fills the cell the tail just left, so the body
        // stays disjoint from the head on the very tick it grows.
        self.snake.grow(vacated);
        self.current_score += 1;
        if self.current_score > self.high_score {
            self.high_score = self.current_score;
            debug!("New high score {}", self.high_score);
        }
        if !self.place_food() {
            self.phase = Phase::GameOver;
            info!("Board filled with score {}", self.current_score);
            return StepOutcome::BoardFilled;
        }

        StepOutcome::AteFood
    }

    /// Check if the new head position causes a collision
    fn check_collision(&self, pos: Position) -> Option<CollisionType> {
        if !self.is_in_bounds(pos) {
            return Some(CollisionType::Wall);
        }

        if self.snake.collides_with_body(pos) {
            return Some(CollisionType::SelfCollision);
        }

        None
    }

    /// Check if a position is within the grid bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0
            && pos.x < self.config.grid_width as i32
            && pos.y >= 0
            && pos.y < self.config.grid_height as i32
    }

    /// Move the food to a random cell the snake does not cover
    ///
    /// Random cells are probed first; on a crowded board the free cells are
    /// listed and one is drawn from them. Returns `false` and leaves the food
    /// where it is when the snake covers the whole board.
    pub fn place_food(&mut self) -> bool {
        for _ in 0..FOOD_SAMPLE_ATTEMPTS {
            let x = self.rng.gen_range(0..self.config.grid_width) as i32;
            let y = self.rng.gen_range(0..self.config.grid_height) as i32;
            let pos = Position::new(x, y);

            if !self.snake.occupies(pos) {
                self.food = pos;
                return true;
            }
        }

        let free_cells: Vec<Position> = (0..self.config.grid_height as i32)
            .flat_map(|y| (0..self.config.grid_width as i32).map(move |x| Position::new(x, y)))
            .filter(|pos| !self.snake.occupies(*pos))
            .collect();

        match free_cells.choose(&mut self.rng) {
            Some(pos) => {
                self.food = *pos;
                true
            }
            None => {
                debug!("No free cell left for food");
                false
            }
        }
    }

    /// Dispatch a command; only `Tick` can produce something other than
    /// `Idle`.
    pub fn apply(&mut self, command: Command) -> StepOutcome {
        match command {
            Command::Start => self.start(),
            Command::Restart => self.restart(),
            Command::Confirm => self.confirm(),
            Command::SetDifficulty(difficulty) => {
                self.set_difficulty(difficulty);
            }
            Command::SetDirection(direction) => {
                self.set_direction(direction);
            }
            Command::Tick => return self.tick(),
        }
        StepOutcome::Idle
    }

    /// Everything a renderer needs, borrowed from the engine
    pub fn snapshot(&self) -> RenderSnapshot<'_> {
        RenderSnapshot {
            phase: self.phase,
            head: self.snake.head,
            body: &self.snake.body,
            food: self.food,
            current_score: self.current_score,
            high_score: self.high_score,
            difficulty: self.difficulty,
            grid_width: self.config.grid_width,
            grid_height: self.config.grid_height,
        }
    }

    /// Period the caller should fire `tick` at
    pub fn tick_interval(&self) -> Duration {
        self.difficulty.tick_interval()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn current_score(&self) -> u32 {
        self.current_score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Position {
        self.food
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing_engine(width: usize, height: usize) -> GameEngine {
        let mut engine = GameEngine::with_seed(GameConfig::new(width, height), 7);
        engine.start();
        engine
    }

    /// Put the food somewhere the test will not reach
    fn park_food(engine: &mut GameEngine, pos: Position) {
        engine.food = pos;
    }

    #[test]
    fn test_new_engine() {
        let engine = GameEngine::with_seed(GameConfig::default(), 1);

        assert_eq!(engine.phase(), Phase::NotStarted);
        assert_eq!(engine.current_score(), 0);
        assert_eq!(engine.high_score(), 0);
        assert_eq!(engine.snake().head, Position::new(12, 12));
        assert!(engine.snake().body.is_empty());
        assert_eq!(engine.snake().velocity, None);
        assert!(!engine.snake().occupies(engine.food()));
    }

    #[test]
    fn test_stationary_until_first_direction() {
        let mut engine = playing_engine(24, 24);
        let before = engine.snake().clone();

        assert_eq!(engine.advance(), StepOutcome::Idle);
        assert_eq!(engine.snake(), &before);
        assert_eq!(engine.phase(), Phase::Playing);

        park_food(&mut engine, Position::new(0, 0));
        assert!(engine.set_direction(Direction::Right));
        assert_eq!(engine.advance(), StepOutcome::Moved);
        assert_eq!(engine.snake().head, Position::new(before.head.x + 1, before.head.y));
        assert!(engine.snake().body.is_empty());
        assert_eq!(engine.phase(), Phase::Playing);
    }

    #[test]
    fn test_tick_ignored_outside_playing() {
        let mut engine = GameEngine::with_seed(GameConfig::small(), 3);
        engine.snake.velocity = Some(Direction::Right);
        let head = engine.snake().head;

        assert_eq!(engine.tick(), StepOutcome::Idle);
        assert_eq!(engine.snake().head, head);
    }

    #[test]
    fn test_food_consumption() {
        let mut engine = playing_engine(24, 24);
        engine.set_direction(Direction::Right);
        let head = engine.snake().head;
        let food_cell = head.moved_in_direction(Direction::Right);
        park_food(&mut engine, food_cell);

        let result = engine.advance();

        assert_eq!(result, StepOutcome::AteFood);
        assert_eq!(engine.snake().head, food_cell);
        assert_eq!(engine.snake().body, vec![head]);
        assert_eq!(engine.current_score(), 1);
        assert_eq!(engine.high_score(), 1);
        assert_ne!(engine.food(), food_cell);
        assert!(!engine.snake().occupies(engine.food()));
    }

    #[test]
    fn test_growth_adds_exactly_one_segment() {
        let mut engine = playing_engine(20, 20);
        engine.snake.head = Position::new(10, 10);
        engine.snake.body = vec![Position::new(9, 10), Position::new(8, 10)];
        engine.set_direction(Direction::Right);
        park_food(&mut engine, Position::new(11, 10));

        assert_eq!(engine.advance(), StepOutcome::AteFood);
        assert_eq!(engine.snake().body.len(), 3);
        assert_eq!(
            engine.snake().body,
            vec![Position::new(10, 10), Position::new(9, 10), Position::new(8, 10)]
        );

        park_food(&mut engine, Position::new(0, 0));
        assert_eq!(engine.advance(), StepOutcome::Moved);
        assert_eq!(
            engine.snake().body,
            vec![Position::new(11, 10), Position::new(10, 10), Position::new(9, 10)]
        );
    }

    #[test]
    fn test_prevent_180_degree_turn() {
        let mut engine = playing_engine(10, 10);
        assert!(engine.set_direction(Direction::Right));

        assert!(!engine.set_direction(Direction::Left));
        assert_eq!(engine.snake().velocity, Some(Direction::Right));

        assert!(engine.set_direction(Direction::Up));
        assert!(!engine.set_direction(Direction::Down));
        assert_eq!(engine.snake().velocity, Some(Direction::Up));
    }

    #[test]
    fn test_any_first_direction_accepted() {
        for direction in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
            let mut engine = playing_engine(10, 10);
            assert!(engine.set_direction(direction));
            assert_eq!(engine.snake().velocity, Some(direction));
        }
    }

    #[test]
    fn test_direction_ignored_outside_playing() {
        let mut engine = GameEngine::with_seed(GameConfig::small(), 5);
        assert!(!engine.set_direction(Direction::Up));
        assert_eq!(engine.snake().velocity, None);

        engine.phase = Phase::GameOver;
        assert!(!engine.set_direction(Direction::Up));
        assert_eq!(engine.snake().velocity, None);
    }

    #[test]
    fn test_wall_collision_left_edge() {
        let mut engine = playing_engine(10, 10);
        engine.snake.head = Position::new(1, 5);
        park_food(&mut engine, Position::new(9, 9));
        engine.set_direction(Direction::Left);

        assert_eq!(engine.advance(), StepOutcome::Moved);
        assert_eq!(engine.snake().head, Position::new(0, 5));
        assert_eq!(engine.phase(), Phase::Playing);

        let result = engine.advance();
        assert_eq!(result, StepOutcome::Collided(CollisionType::Wall));
        assert!(result.terminated());
        assert_eq!(engine.snake().head, Position::new(-1, 5));
        assert_eq!(engine.phase(), Phase::GameOver);
    }

    #[test]
    fn test_wall_boundary_every_edge() {
        let cases = [
            (Position::new(8, 4), Direction::Right),
            (Position::new(4, 8), Direction::Down),
            (Position::new(4, 1), Direction::Up),
            (Position::new(1, 4), Direction::Left),
        ];

        for (inner, direction) in cases {
            let mut engine = playing_engine(10, 10);
            engine.snake.head = inner;
            park_food(&mut engine, Position::new(4, 4));
            engine.set_direction(direction);

            // inner cell -> edge cell stays in play
            assert_eq!(engine.advance(), StepOutcome::Moved, "{direction:?}");
            assert_eq!(engine.phase(), Phase::Playing);

            // edge cell -> outside ends the round
            assert_eq!(
                engine.advance(),
                StepOutcome::Collided(CollisionType::Wall),
                "{direction:?}"
            );
            assert_eq!(engine.phase(), Phase::GameOver);
        }
    }

    #[test]
    fn test_self_collision() {
        let mut engine = playing_engine(10, 10);
        // Head at (5,5) turning up into a U-shaped body; (5,4) is still
        // covered after the body shifts
        engine.snake.head = Position::new(5, 5);
        engine.snake.body = vec![
            Position::new(6, 5),
            Position::new(6, 4),
            Position::new(5, 4),
            Position::new(4, 4),
        ];
        engine.snake.velocity = Some(Direction::Left);
        park_food(&mut engine, Position::new(0, 9));

        assert!(engine.set_direction(Direction::Up));
        let result = engine.advance();

        assert_eq!(result, StepOutcome::Collided(CollisionType::SelfCollision));
        assert_eq!(engine.phase(), Phase::GameOver);
    }

    #[test]
    fn test_moving_into_vacated_tail_is_safe() {
        let mut engine = playing_engine(10, 10);
        // A 2x2 loop: the head chases the tail around
        engine.snake.head = Position::new(4, 4);
        engine.snake.body = vec![Position::new(5, 4), Position::new(5, 5), Position::new(4, 5)];
        engine.snake.velocity = Some(Direction::Down);
        park_food(&mut engine, Position::new(0, 0));

        assert_eq!(engine.advance(), StepOutcome::Moved);
        assert_eq!(engine.snake().head, Position::new(4, 5));
    }

    #[test]
    fn test_wall_checked_before_food() {
        let mut engine = playing_engine(10, 10);
        engine.snake.head = Position::new(9, 3);
        engine.set_direction(Direction::Right);
        park_food(&mut engine, Position::new(10, 3));

        assert_eq!(engine.advance(), StepOutcome::Collided(CollisionType::Wall));
        assert_eq!(engine.current_score(), 0);
    }

    #[test]
    fn test_restart_keeps_high_score() {
        let mut engine = playing_engine(10, 10);
        engine.set_direction(Direction::Right);
        let food = engine.snake().head.moved_in_direction(Direction::Right);
        park_food(&mut engine, food);
        engine.advance();
        assert_eq!(engine.high_score(), 1);

        engine.phase = Phase::GameOver;
        engine.restart();

        assert_eq!(engine.phase(), Phase::Playing);
        assert_eq!(engine.current_score(), 0);
        assert_eq!(engine.high_score(), 1);
        assert!(engine.snake().body.is_empty());
        assert_eq!(engine.snake().velocity, None);
        assert_eq!(engine.snake().head, Position::new(5, 5));
    }

    #[test]
    fn test_restart_only_after_game_over() {
        let mut engine = GameEngine::with_seed(GameConfig::small(), 9);
        engine.restart();
        assert_eq!(engine.phase(), Phase::NotStarted);

        engine.start();
        engine.set_direction(Direction::Up);
        engine.restart();
        assert_eq!(engine.phase(), Phase::Playing);
        assert_eq!(engine.snake().velocity, Some(Direction::Up));
    }

    #[test]
    fn test_confirm_restarts_only_game_over() {
        let mut engine = GameEngine::with_seed(GameConfig::small(), 11);
        engine.confirm();
        assert_eq!(engine.phase(), Phase::NotStarted);

        engine.start();
        engine.confirm();
        assert_eq!(engine.phase(), Phase::Playing);

        engine.phase = Phase::GameOver;
        engine.confirm();
        assert_eq!(engine.phase(), Phase::Playing);
    }

    #[test]
    fn test_start_only_from_start_screen() {
        let mut engine = GameEngine::with_seed(GameConfig::small(), 13);
        engine.start();
        assert_eq!(engine.phase(), Phase::Playing);

        engine.phase = Phase::GameOver;
        engine.start();
        assert_eq!(engine.phase(), Phase::GameOver);
    }

    #[test]
    fn test_difficulty_only_before_start() {
        let mut engine = GameEngine::with_seed(GameConfig::small(), 17);
        assert!(engine.set_difficulty(Difficulty::Hard));
        assert_eq!(engine.difficulty(), Difficulty::Hard);
        assert_eq!(engine.tick_interval(), Duration::from_millis(70));

        engine.start();
        assert!(!engine.set_difficulty(Difficulty::Easy));
        assert_eq!(engine.difficulty(), Difficulty::Hard);

        engine.phase = Phase::GameOver;
        assert!(!engine.set_difficulty(Difficulty::Easy));
        assert_eq!(engine.tick_interval(), Duration::from_millis(70));
    }

    #[test]
    fn test_initial_difficulty_from_config() {
        let config = GameConfig::small().with_difficulty(Difficulty::Easy);
        let engine = GameEngine::with_seed(config, 19);
        assert_eq!(engine.tick_interval(), Duration::from_millis(190));
    }

    #[test]
    fn test_food_never_on_snake() {
        let mut engine = playing_engine(4, 4);
        // Cover everything except (3,3)
        engine.snake.head = Position::new(0, 0);
        engine.snake.body = (0..4)
            .flat_map(|y| (0..4).map(move |x| Position::new(x, y)))
            .filter(|pos| *pos != Position::new(0, 0) && *pos != Position::new(3, 3))
            .collect();

        for _ in 0..20 {
            assert!(engine.place_food());
            assert_eq!(engine.food(), Position::new(3, 3));
        }
    }

    #[test]
    fn test_place_food_on_full_board_terminates() {
        let mut engine = playing_engine(2, 2);
        engine.snake.head = Position::new(0, 0);
        engine.snake.body = vec![Position::new(1, 0), Position::new(1, 1), Position::new(0, 1)];
        let food = engine.food();

        assert!(!engine.place_food());
        assert_eq!(engine.food(), food);
    }

    #[test]
    fn test_filling_the_board_ends_the_round() {
        let mut engine = playing_engine(2, 2);
        engine.snake.head = Position::new(0, 0);
        engine.snake.body = vec![Position::new(1, 0), Position::new(1, 1)];
        engine.snake.velocity = Some(Direction::Left);
        park_food(&mut engine, Position::new(0, 1));
        assert!(engine.set_direction(Direction::Down));

        let result = engine.advance();

        assert_eq!(result, StepOutcome::BoardFilled);
        assert!(result.terminated());
        assert_eq!(engine.phase(), Phase::GameOver);
        assert_eq!(engine.current_score(), 1);
        assert_eq!(engine.snake().len(), 4);

        // Nothing left to eat; further ticks and steering change nothing
        for direction in [Direction::Right, Direction::Up, Direction::Left] {
            engine.set_direction(direction);
            assert_eq!(engine.tick(), StepOutcome::Idle);
        }
        assert_eq!(engine.current_score(), 1);
        assert_eq!(engine.snake().len(), 4);
        assert!(!engine.snake().collides_with_body(engine.snake().head));
    }

    #[test]
    #[should_panic(expected = "invalid game configuration")]
    fn test_invalid_config_rejected() {
        GameEngine::with_seed(GameConfig::new(0, 5), 1);
    }

    #[test]
    fn test_high_score_seed_never_lowers() {
        let engine = GameEngine::with_seed(GameConfig::small(), 23).with_high_score(12);
        assert_eq!(engine.high_score(), 12);
        let engine = engine.with_high_score(4);
        assert_eq!(engine.high_score(), 12);
    }

    #[test]
    fn test_scores_invariant_over_random_play() {
        let mut engine = GameEngine::with_seed(GameConfig::small(), 29).with_high_score(2);
        let mut rng = StdRng::seed_from_u64(31);
        let directions = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];
        let mut last_high = engine.high_score();
        engine.start();

        for _ in 0..2_000 {
            let command = match rng.gen_range(0..10) {
                0..=3 => Command::SetDirection(directions[rng.gen_range(0..4)]),
                4 => Command::Confirm,
                _ => Command::Tick,
            };
            engine.apply(command);

            assert!(engine.current_score() <= engine.high_score());
            assert!(engine.high_score() >= last_high);
            last_high = engine.high_score();

            if engine.phase() == Phase::Playing {
                assert!(!engine.snake().collides_with_body(engine.snake().head));
                assert!(!engine.snake().occupies(engine.food()));
            }
        }
    }

    #[test]
    fn test_apply_dispatches_commands() {
        let mut engine = GameEngine::with_seed(GameConfig::new(10, 10), 37);
        engine.apply(Command::SetDifficulty(Difficulty::Easy));
        engine.apply(Command::Start);
        engine.apply(Command::SetDirection(Direction::Down));
        park_food(&mut engine, Position::new(0, 0));

        assert_eq!(engine.apply(Command::Tick), StepOutcome::Moved);
        assert_eq!(engine.difficulty(), Difficulty::Easy);
        assert_eq!(engine.snake().head, Position::new(5, 6));
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut engine = playing_engine(12, 8);
        engine.high_score = 4;
        let snapshot = engine.snapshot();

        assert_eq!(snapshot.phase, Phase::Playing);
        assert_eq!(snapshot.head, Position::new(6, 4));
        assert!(snapshot.body.is_empty());
        assert_eq!(snapshot.food, engine.food());
        assert_eq!(snapshot.current_score, 0);
        assert_eq!(snapshot.high_score, 4);
        assert_eq!(snapshot.grid_width, 12);
        assert_eq!(snapshot.grid_height, 8);
        assert!(snapshot.is_occupied_by_snake(Position::new(6, 4)));
    }
}
