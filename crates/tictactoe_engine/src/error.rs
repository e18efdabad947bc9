//! Engine error types.

use derive_more::{Display, Error};

/// Error returned by the engine.
///
/// Occupied cells and finished games are not errors; those moves are
/// ignored. Only coordinates that name no cell are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// Row or column outside 0-2.
    #[display("Invalid coordinate ({row}, {col}): row and column must be 0-2")]
    InvalidCoordinate {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}
