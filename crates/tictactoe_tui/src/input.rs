//! Translates terminal events into game actions.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use tictactoe_engine::Position;

/// Cursor movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards row 2.
    Down,
    /// Towards column 0.
    Left,
    /// Towards column 2.
    Right,
}

/// What the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the keyboard cursor.
    Cursor(Direction),
    /// Play the cell under the cursor.
    Activate,
    /// Play a specific cell (digit key or mouse click).
    Select(Position),
    /// Press "Play Again".
    Reset,
    /// Leave the program.
    Quit,
}

/// Moves the cursor one cell, stopping at the board edge.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match direction {
        Direction::Up => (row.saturating_sub(1), col),
        Direction::Down => (row + 1, col),
        Direction::Left => (row, col.saturating_sub(1)),
        Direction::Right => (row, col + 1),
    };
    Position::from_coords(row, col).unwrap_or(cursor)
}

/// Maps a key press to an action. Releases and unbound keys map to `None`.
pub fn action_for_key(key: KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Reset),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Activate),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::Cursor(Direction::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::Cursor(Direction::Down)),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::Cursor(Direction::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::Cursor(Direction::Right)),
        KeyCode::Char(c) => {
            let digit = c.to_digit(10)? as usize;
            let index = digit.checked_sub(1)?;
            Position::from_index(index).map(Action::Select)
        }
        _ => None,
    }
}

/// Screen regions of the clickable widgets, as last drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HitAreas {
    /// Cell rectangles in board order.
    pub cells: [Rect; 9],
    /// The "Play Again" control.
    pub reset: Rect,
}

impl HitAreas {
    /// Returns the action for a click at terminal column `x`, row `y`.
    pub fn target(&self, x: u16, y: u16) -> Option<Action> {
        if contains(self.reset, x, y) {
            return Some(Action::Reset);
        }
        self.cells
            .iter()
            .position(|area| contains(*area, x, y))
            .and_then(Position::from_index)
            .map(Action::Select)
    }
}

fn contains(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x && x < area.right() && y >= area.y && y < area.bottom()
}

/// Maps a left click to the widget under it.
pub fn action_for_mouse(areas: &HitAreas, mouse: MouseEvent) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => areas.target(mouse.column, mouse.row),
        _ => None,
    }
}
