//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart
//! from the engine so the consistency checks can reuse them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{check_winner, completes_line};
