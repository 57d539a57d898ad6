use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position as ScreenPosition, Rect};

use crate::game::{Difficulty, Direction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Steer(Direction),
    /// Space; restarts a finished round
    Confirm,
    /// The Start button
    Start,
    /// The Restart button
    Restart,
    SelectDifficulty(Difficulty),
    NextDifficulty,
    PreviousDifficulty,
    Quit,
    None,
}

/// Clickable element drawn on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiTarget {
    Difficulty(Difficulty),
    StartButton,
    RestartButton,
}

/// Where a clickable element ended up in the last frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hitbox {
    pub area: Rect,
    pub target: UiTarget,
}

impl Hitbox {
    pub fn new(area: Rect, target: UiTarget) -> Self {
        Self { area, target }
    }
}

impl From<UiTarget> for KeyAction {
    fn from(target: UiTarget) -> Self {
        match target {
            UiTarget::Difficulty(level) => KeyAction::SelectDifficulty(level),
            UiTarget::StartButton => KeyAction::Start,
            UiTarget::RestartButton => KeyAction::Restart,
        }
    }
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => KeyAction::Steer(Direction::Up),
            KeyCode::Down => KeyAction::Steer(Direction::Down),
            KeyCode::Left => KeyAction::Steer(Direction::Left),
            KeyCode::Right => KeyAction::Steer(Direction::Right),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => KeyAction::Steer(Direction::Up),
            KeyCode::Char('s') | KeyCode::Char('S') => KeyAction::Steer(Direction::Down),
            KeyCode::Char('a') | KeyCode::Char('A') => KeyAction::Steer(Direction::Left),
            KeyCode::Char('d') | KeyCode::Char('D') => KeyAction::Steer(Direction::Right),

            // Difficulty selector
            KeyCode::Char('1') => KeyAction::SelectDifficulty(Difficulty::Easy),
            KeyCode::Char('2') => KeyAction::SelectDifficulty(Difficulty::Medium),
            KeyCode::Char('3') => KeyAction::SelectDifficulty(Difficulty::Hard),
            KeyCode::Tab => KeyAction::NextDifficulty,
            KeyCode::BackTab => KeyAction::PreviousDifficulty,

            // Controls
            KeyCode::Char(' ') => KeyAction::Confirm,
            KeyCode::Enter => KeyAction::Start,
            KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::Restart,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,

            _ => KeyAction::None,
        }
    }

    /// Resolve a left click against the elements drawn in the last frame
    pub fn handle_mouse_event(&self, mouse: MouseEvent, hitboxes: &[Hitbox]) -> KeyAction {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return KeyAction::None;
        }

        let point = ScreenPosition::new(mouse.column, mouse.row);
        hitboxes
            .iter()
            .find(|hitbox| hitbox.area.contains(point))
            .map(|hitbox| KeyAction::from(hitbox.target))
            .unwrap_or(KeyAction::None)
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
