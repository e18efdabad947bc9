//! Win detection logic for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Cell, Mark};
use strum::IntoEnumIterator;
use tracing::instrument;

const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks whether `mark`, just played at `played`, completed a line.
///
/// Only the lines through `played` are examined: its row, its column,
/// and each diagonal it lies on.
#[instrument(skip(board))]
pub fn completes_line(board: &Board, played: Position, mark: Mark) -> bool {
    let owned = |pos: Position| board.get(pos) == Cell::Marked(mark);

    let row = Position::iter().filter(|p| p.row() == played.row()).all(owned);
    let col = Position::iter().filter(|p| p.col() == played.col()).all(owned);
    let main = played.on_main_diagonal()
        && Position::iter().filter(|p| p.on_main_diagonal()).all(owned);
    let anti = played.on_anti_diagonal()
        && Position::iter().filter(|p| p.on_anti_diagonal()).all(owned);

    row || col || main || anti
}

/// Scans every line on the board for three of a kind.
///
/// Returns `Some(mark)` for the first complete line found.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    for [a, b, c] in LINES {
        let cell = board.get(a);
        if cell == board.get(b)
            && cell == board.get(c)
            && let Some(mark) = cell.mark()
        {
            return Some(mark);
        }
    }

    None
}
