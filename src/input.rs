use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Returns whether a direction change is legal (no immediate 180° turns).
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    next != current.opposite()
}

/// Resolves the direction for the next tick from the current one and a request.
#[must_use]
pub fn resolve_direction(current: Direction, requested: Option<Direction>) -> Direction {
    match requested {
        Some(next) if direction_change_is_valid(current, next) => next,
        _ => current,
    }
}

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Quit,
}

/// Maps a key press to a game input.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<GameInput> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(GameInput::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w' | 'W' | 'k') => Some(GameInput::Direction(Direction::Up)),
        KeyCode::Down | KeyCode::Char('s' | 'S' | 'j') => {
            Some(GameInput::Direction(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('a' | 'A' | 'h') => {
            Some(GameInput::Direction(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('d' | 'D' | 'l') => {
            Some(GameInput::Direction(Direction::Right))
        }
        KeyCode::Esc | KeyCode::Char('q' | 'Q') => Some(GameInput::Quit),
        _ => None,
    }
}

/// Single-slot direction buffer between key polling and the tick loop.
///
/// Every request overwrites the previous one, so only the most recent
/// direction issued within a tick window reaches the engine.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct PendingDirection {
    slot: Option<Direction>,
}

impl PendingDirection {
    pub fn request(&mut self, direction: Direction) {
        self.slot = Some(direction);
    }

    /// Empties the slot, returning the latest request if any.
    pub fn take(&mut self) -> Option<Direction> {
        self.slot.take()
    }

    pub fn clear(&mut self) {
        self.slot = None;
    }
}

/// Non-blocking keyboard poller.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Drains all queued terminal events, returning the game inputs in order.
    pub fn drain(&mut self) -> io::Result<Vec<GameInput>> {
        let mut inputs = Vec::new();

        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if let Some(input) = map_key(key) {
                    inputs.push(input);
                }
            }
        }

        Ok(inputs)
    }
}
