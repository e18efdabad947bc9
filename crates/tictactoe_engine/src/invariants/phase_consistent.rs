//! Phase consistency invariant: the phase agrees with the board.

use super::Invariant;
use crate::rules::{check_winner, is_full};
use crate::{GameEngine, Phase};

/// Invariant: The phase matches a full-board evaluation.
///
/// An in-progress game has no completed line and an empty cell left. A
/// won game has a line of the winner's mark. A tied game is full with
/// no line.
pub struct PhaseConsistentInvariant;

impl Invariant<GameEngine> for PhaseConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let board = engine.board();
        match engine.current_phase() {
            Phase::InProgress => check_winner(board).is_none() && !is_full(board),
            Phase::WonBy(mark) => check_winner(board) == Some(mark),
            Phase::Tied => check_winner(board).is_none() && is_full(board),
        }
    }

    fn description() -> &'static str {
        "Phase agrees with the board (win, tie, or still open)"
    }
}
