use std::time::{Duration, Instant};

/// Per-session stats shown alongside the board
pub struct GameMetrics {
    pub round_start: Instant,
    pub elapsed_time: Duration,
    pub rounds_played: u32,
    running: bool,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            round_start: Instant::now(),
            elapsed_time: Duration::ZERO,
            rounds_played: 0,
            running: false,
        }
    }

    /// Refresh the round timer; frozen outside a running round
    pub fn update(&mut self) {
        if self.running {
            self.elapsed_time = self.round_start.elapsed();
        }
    }

    pub fn on_round_start(&mut self) {
        self.round_start = Instant::now();
        self.elapsed_time = Duration::ZERO;
        self.running = true;
    }

    pub fn on_game_over(&mut self) {
        self.update();
        self.running = false;
        self.rounds_played += 1;
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
