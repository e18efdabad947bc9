//! History consistency invariant: history length matches occupied cells.

use super::Invariant;
use crate::GameEngine;

/// Invariant: History length equals number of occupied cells.
pub struct HistoryConsistentInvariant;

impl Invariant<GameEngine> for HistoryConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine.history().len() == engine.board().occupied()
    }

    fn description() -> &'static str {
        "History length matches number of occupied cells"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Mark, Position};

    #[test]
    fn test_full_game_holds() {
        let mut engine = GameEngine::new();
        for (row, col) in [
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ] {
            engine.apply_move(row, col).unwrap();
        }
        assert!(HistoryConsistentInvariant::holds(&engine));
        assert_eq!(engine.history().len(), 9);
    }

    #[test]
    fn test_unrecorded_mark_violates() {
        let mut engine = GameEngine::new();
        engine.play(Position::Center);
        engine.board.set(Position::TopLeft, Cell::Marked(Mark::O));

        assert!(!HistoryConsistentInvariant::holds(&engine));
    }
}
