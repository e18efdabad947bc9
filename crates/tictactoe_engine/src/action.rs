//! Accepted moves and what they produced.

use crate::position::Position;
use crate::types::{Mark, Phase};
use serde::{Deserialize, Serialize};

/// A mark placed at a position.
///
/// The engine keeps one of these per accepted move, in play order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark that was placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Result of an accepted move: the move itself and the phase it left
/// the game in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// The move just applied.
    pub played: Move,
    /// Phase after the move.
    pub phase: Phase,
}
