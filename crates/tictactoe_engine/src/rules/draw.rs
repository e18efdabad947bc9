//! Full-board detection.

use crate::types::Board;
use tracing::instrument;

/// Checks if the board is full (no empty cells).
///
/// Only meaningful as a tie once a win check has failed.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| !c.is_empty())
}
