//! Key and mouse events mapped to app actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use strictly_tictactoe::Coord;

use crate::app::Action;
use crate::ui::{Hit, ScreenLayout};

/// Cursor step direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

impl Direction {
    /// Moves `cursor` one cell, staying put at the board edge.
    pub fn step(self, cursor: Coord, size: usize) -> Coord {
        let last = size.saturating_sub(1);
        match self {
            Direction::Up => Coord::new(cursor.row.saturating_sub(1), cursor.col),
            Direction::Down => Coord::new((cursor.row + 1).min(last), cursor.col),
            Direction::Left => Coord::new(cursor.row, cursor.col.saturating_sub(1)),
            Direction::Right => Coord::new(cursor.row, (cursor.col + 1).min(last)),
        }
    }
}

/// Maps a key press to an action.
///
/// Digits `1`-`9` address cells directly on a 3×3 board, numbered left to
/// right, top to bottom.
pub fn key_action(key: KeyEvent, board_size: usize) -> Action {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('r') | KeyCode::Char('R') => Action::Restart,
        KeyCode::Up => Action::MoveCursor(Direction::Up),
        KeyCode::Down => Action::MoveCursor(Direction::Down),
        KeyCode::Left => Action::MoveCursor(Direction::Left),
        KeyCode::Right => Action::MoveCursor(Direction::Right),
        KeyCode::Enter | KeyCode::Char(' ') => Action::PlayCursor,
        KeyCode::Char(c) if board_size == 3 => match c.to_digit(10) {
            Some(digit @ 1..=9) => {
                let index = digit as usize - 1;
                Action::Play(Coord::new(index / 3, index % 3))
            }
            _ => Action::None,
        },
        _ => Action::None,
    }
}

/// Maps a left click to whatever sits under it.
pub fn mouse_action(mouse: MouseEvent, layout: &ScreenLayout) -> Action {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return Action::None;
    }
    match layout.hit(mouse.column, mouse.row) {
        Some(Hit::Cell(coord)) => Action::Play(coord),
        Some(Hit::Restart) => Action::Restart,
        Some(Hit::Exit) => Action::Quit,
        None => Action::None,
    }
}
