//! Text shown for engine state.

use tictactoe_engine::{GameEngine, Phase};

/// Status line for the current game.
pub fn status_text(engine: &GameEngine) -> String {
    match engine.current_phase() {
        Phase::InProgress if engine.is_fresh() => {
            format!("Welcome! {} goes first!", engine.turn_mark())
        }
        Phase::InProgress => format!("{}'s turn", engine.turn_mark()),
        Phase::WonBy(mark) => format!("{} wins!", mark),
        Phase::Tied => "It's a tie!".to_string(),
    }
}
