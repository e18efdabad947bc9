//! Pure tic-tac-toe game logic.
//!
//! [`GameEngine`] owns the board, whose turn it is, and whether the game
//! is over. Front ends feed it moves with [`GameEngine::apply_move`] or
//! [`GameEngine::play`], read back cells and the [`Phase`], and call
//! [`GameEngine::reset`] to start over. Nothing here knows how the game
//! is drawn.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameEngine, Mark, Phase};
//!
//! let mut engine = GameEngine::new();
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
//!     engine.apply_move(row, col)?;
//! }
//! assert_eq!(engine.current_phase(), Phase::WonBy(Mark::X));
//! # Ok::<(), tictactoe_engine::EngineError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod error;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use action::{Move, Placement};
pub use engine::GameEngine;
pub use error::EngineError;
pub use position::Position;
pub use types::{Board, Cell, Mark, Phase};
