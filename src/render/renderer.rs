use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::game::{Difficulty, Phase, Position, RenderSnapshot};
use crate::input::{Hitbox, UiTarget};
use crate::metrics::GameMetrics;

const BUTTON_WIDTH: u16 = 20;
const OPTION_WIDTH: u16 = 24;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Draw one frame and return the clickable elements it contains
    pub fn render(
        &self,
        frame: &mut Frame,
        snapshot: &RenderSnapshot<'_>,
        metrics: &GameMetrics,
    ) -> Vec<Hitbox> {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(snapshot, metrics);
        frame.render_widget(stats, chunks[0]);

        let controls = self.render_controls(snapshot.phase);
        frame.render_widget(controls, chunks[2]);

        match snapshot.phase {
            Phase::NotStarted => self.render_start_screen(frame, chunks[1], snapshot.difficulty),
            Phase::Playing => {
                let grid = self.render_grid(snapshot);
                frame.render_widget(grid, chunks[1]);
                Vec::new()
            }
            Phase::GameOver => self.render_game_over(frame, chunks[1], snapshot),
        }
    }

    fn render_start_screen(
        &self,
        frame: &mut Frame,
        area: Rect,
        selected: Difficulty,
    ) -> Vec<Hitbox> {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(Color::White));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(1), // Selector label
                Constraint::Length(1), // Easy
                Constraint::Length(1), // Medium
                Constraint::Length(1), // Hard
                Constraint::Length(1),
                Constraint::Length(3), // Start button
                Constraint::Min(0),
            ])
            .split(inner);

        let title = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "Snake Game",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(title, rows[0]);

        let label = Paragraph::new(Span::styled("Difficulty", Style::default().fg(Color::Yellow)))
            .alignment(Alignment::Center);
        frame.render_widget(label, rows[1]);

        let mut hitboxes = Vec::with_capacity(Difficulty::ALL.len() + 1);
        for (level, row) in Difficulty::ALL.into_iter().zip(&rows[2..5]) {
            let area = centered(*row, OPTION_WIDTH);
            let (marker, style) = if level == selected {
                (
                    "▶",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                (" ", Style::default().fg(Color::Gray))
            };
            let text = format!(
                "{marker} {:<7}{:>4} ms",
                level.as_str(),
                level.tick_interval_millis()
            );
            frame.render_widget(
                Paragraph::new(Span::styled(text, style)).alignment(Alignment::Center),
                area,
            );
            hitboxes.push(Hitbox::new(area, UiTarget::Difficulty(level)));
        }

        let start = centered(rows[6], BUTTON_WIDTH);
        frame.render_widget(self.render_button("Start", Color::Green), start);
        hitboxes.push(Hitbox::new(start, UiTarget::StartButton));

        hitboxes
    }

    fn render_grid(&self, snapshot: &RenderSnapshot<'_>) -> Paragraph<'_> {
        let mut lines = Vec::with_capacity(snapshot.grid_height);

        for y in 0..snapshot.grid_height {
            let mut spans = Vec::with_capacity(snapshot.grid_width);

            for x in 0..snapshot.grid_width {
                let pos = Position::new(x as i32, y as i32);

                let cell = if pos == snapshot.head {
                    Span::styled(
                        "■ ",
                        Style::default()
                            .fg(Color::Blue)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if snapshot.body.contains(&pos) {
                    Span::styled("□ ", Style::default().fg(Color::LightBlue))
                } else if pos == snapshot.food {
                    Span::styled(
                        "● ",
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::styled(". ", Style::default().fg(Color::DarkGray))
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, snapshot: &RenderSnapshot<'_>, metrics: &GameMetrics) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                snapshot.current_score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("High Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                snapshot.high_score.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Level: ", Style::default().fg(Color::Yellow)),
            Span::styled(snapshot.difficulty.as_str(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(
        &self,
        frame: &mut Frame,
        area: Rect,
        snapshot: &RenderSnapshot<'_>,
    ) -> Vec<Hitbox> {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(7), // Summary
                Constraint::Length(3), // Restart button
                Constraint::Min(0),
            ])
            .split(inner);

        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "Game Over!",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    snapshot.current_score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("High Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    snapshot.high_score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
        ];
        frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), rows[0]);

        let restart = centered(rows[1], BUTTON_WIDTH);
        frame.render_widget(self.render_button("Restart", Color::Green), restart);

        vec![Hitbox::new(restart, UiTarget::RestartButton)]
    }

    fn render_button(&self, label: &'static str, color: Color) -> Paragraph<'static> {
        Paragraph::new(Span::styled(
            label,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color)),
        )
    }

    fn render_controls(&self, phase: Phase) -> Paragraph<'_> {
        let line = match phase {
            Phase::NotStarted => Line::from(vec![
                Span::styled("1-3", Style::default().fg(Color::Cyan)),
                Span::raw(" or "),
                Span::styled("Tab", Style::default().fg(Color::Cyan)),
                Span::raw(" to pick a level | "),
                Span::styled("Enter", Style::default().fg(Color::Green)),
                Span::raw(" to start | "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" to quit"),
            ]),
            Phase::Playing => Line::from(vec![
                Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
                Span::raw(" or "),
                Span::styled("WASD", Style::default().fg(Color::Cyan)),
                Span::raw(" to move | "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" to quit"),
            ]),
            Phase::GameOver => Line::from(vec![
                Span::styled("Space", Style::default().fg(Color::Green)),
                Span::raw(" or "),
                Span::styled("R", Style::default().fg(Color::Green)),
                Span::raw(" to restart | "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" to quit"),
            ]),
        };

        Paragraph::new(vec![line]).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// A horizontally centred slice of `area`, at most `width` columns wide
fn centered(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}
