//! Alternating turn invariant: X, O, X, O, ...

use super::Invariant;
use crate::{GameEngine, Mark};

/// Invariant: Marks alternate, starting with X.
///
/// While the game is in progress the next mark follows from the number
/// of moves played. Once it ends, the next mark stays with whoever made
/// the final move.
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let history = engine.history();

        let alternates = history
            .iter()
            .enumerate()
            .all(|(i, mov)| mov.mark == if i % 2 == 0 { Mark::X } else { Mark::O });
        if !alternates {
            return false;
        }

        let expected_next = match history.last() {
            None => Mark::X,
            Some(last) if engine.current_phase().is_terminal() => last.mark,
            Some(last) => last.mark.opponent(),
        };

        engine.turn_mark() == expected_next
    }

    fn description() -> &'static str {
        "Marks alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Position};

    #[test]
    fn test_empty_game_holds() {
        assert!(AlternatingTurnInvariant::holds(&GameEngine::new()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let mut engine = GameEngine::new();
        for pos in [
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
            Position::BottomLeft,
            Position::BottomRight,
        ] {
            engine.play(pos);
        }
        assert!(AlternatingTurnInvariant::holds(&engine));
        assert_eq!(engine.turn_mark(), Mark::O);
    }

    #[test]
    fn test_same_mark_twice_violates() {
        let mut engine = GameEngine::new();
        engine.play(Position::TopLeft);
        engine.history.push(Move::new(Mark::X, Position::Center));

        assert!(!AlternatingTurnInvariant::holds(&engine));
    }

    #[test]
    fn test_stale_turn_mark_violates() {
        let mut engine = GameEngine::new();
        engine.play(Position::TopLeft);
        engine.next_mark = Mark::X;

        assert!(!AlternatingTurnInvariant::holds(&engine));
    }
}
