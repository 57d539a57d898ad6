use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use log::{info, warn};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval, interval_at};

use crate::game::{Command, GameConfig, GameEngine, Phase, StepOutcome};
use crate::input::{Hitbox, InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;
use crate::storage::ScoreStore;

/// Interactive play in the terminal
pub struct HumanMode {
    engine: GameEngine,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    score_store: Box<dyn ScoreStore>,
    /// Best score the store already holds
    stored_high_score: u32,
    /// Clickable elements of the last drawn frame
    hitboxes: Vec<Hitbox>,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig, score_store: Box<dyn ScoreStore>) -> Result<Self> {
        let stored_high_score = score_store.load().context("Failed to load high score")?;
        let engine = GameEngine::new(config).with_high_score(stored_high_score);
        info!(
            "Starting on a {}x{} board, high score {}",
            engine.config().grid_width,
            engine.config().grid_height,
            stored_high_score
        );

        Ok(Self {
            engine,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            score_store,
            stored_high_score,
            hitboxes: Vec::new(),
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut tick_timer = new_tick_timer(self.engine.tick_interval());

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event, &mut tick_timer);
                    }
                }

                // Game logic tick
                // Game logic tick, drawn right away so a step never waits
                // for the render timer
                _ = tick_timer.tick() => {
                    if self.update_game() {
                        self.draw(terminal)?;
                    }
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.draw(terminal)?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn draw(&mut self, terminal: &mut Terminal<CrosstermBackend<Stderr>>) -> Result<()> {
        self.metrics.update();

        let snapshot = self.engine.snapshot();
        let renderer = &self.renderer;
        let metrics = &self.metrics;
        let mut hitboxes = Vec::new();
        terminal
            .draw(|frame| {
                hitboxes = renderer.render(frame, &snapshot, metrics);
            })
            .context("Failed to draw frame")?;

        self.hitboxes = hitboxes;
        Ok(())
    }

    fn handle_event(&mut self, event: Event, tick_timer: &mut Interval) {
        let action = match event {
            // Only process key press events, not release
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.input_handler.handle_key_event(key)
            }
            Event::Mouse(mouse) => self.input_handler.handle_mouse_event(mouse, &self.hitboxes),
            _ => KeyAction::None,
        };

        self.handle_action(action, tick_timer);
    }

    fn handle_action(&mut self, action: KeyAction, tick_timer: &mut Interval) {
        let command = match action {
            KeyAction::Steer(direction) => Command::SetDirection(direction),
            KeyAction::Confirm => Command::Confirm,
            KeyAction::Start => Command::Start,
            KeyAction::Restart => Command::Restart,
            KeyAction::SelectDifficulty(level) => Command::SetDifficulty(level),
            KeyAction::NextDifficulty => Command::SetDifficulty(self.engine.difficulty().next()),
            KeyAction::PreviousDifficulty => {
                Command::SetDifficulty(self.engine.difficulty().previous())
            }
            KeyAction::Quit => {
                self.should_quit = true;
                return;
            }
            KeyAction::None => return,
        };

        let phase_before = self.engine.phase();
        let difficulty_before = self.engine.difficulty();
        self.engine.apply(command);

        if self.engine.difficulty() != difficulty_before {
            *tick_timer = new_tick_timer(self.engine.tick_interval());
        }

        if phase_before != Phase::Playing && self.engine.phase() == Phase::Playing {
            // First step comes one full period after the round begins
            tick_timer.reset();
            self.metrics.on_round_start();
        }
    }

    /// Advance one step; returns whether anything changed on the board
    fn update_game(&mut self) -> bool {
        if self.engine.phase() != Phase::Playing {
            return false;
        }

        let outcome = self.engine.tick();
        if outcome.terminated() {
            self.on_game_over();
        }
        outcome != StepOutcome::Idle
    }

    fn on_game_over(&mut self) {
        self.metrics.on_game_over();

        let high_score = self.engine.high_score();
        if high_score <= self.stored_high_score {
            return;
        }

        match self.score_store.save(high_score) {
            Ok(()) => {
                self.stored_high_score = high_score;
                info!("Saved new high score {}", high_score);
            }
            Err(err) => warn!("Could not save high score: {:#}", err),
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

/// Timer whose first tick fires one full period from now
fn new_tick_timer(period: Duration) -> Interval {
    let mut timer = interval_at(Instant::now() + period, period);
    timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
    timer
}
