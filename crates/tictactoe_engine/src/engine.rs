//! The game engine: board, turn and phase, mutated one move at a time.

use crate::action::{Move, Placement};
use crate::error::EngineError;
use crate::position::Position;
use crate::rules;
use crate::types::{Board, Cell, Mark, Phase};
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe game engine.
///
/// Owns the whole game state. Moves that target an occupied cell or
/// arrive after the game ended are ignored, so stale or repeated input
/// can never corrupt the board.
///
/// Lifecycle: `new -> play* -> reset -> play* -> ...`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    pub(crate) board: Board,
    pub(crate) next_mark: Mark,
    pub(crate) phase: Phase,
    pub(crate) history: Vec<Move>,
}

impl GameEngine {
    /// Creates an engine ready for X's first move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            next_mark: Mark::X,
            phase: Phase::InProgress,
            history: Vec::new(),
        }
    }

    /// Clears the board and hands the first move back to X.
    ///
    /// Valid from any phase; repeated calls leave the same state.
    #[instrument(skip(self), fields(phase = %self.phase, moves = self.history.len()))]
    pub fn reset(&mut self) {
        *self = Self::new();
        info!("Game reset");
    }

    /// Plays the current mark at `(row, col)`.
    ///
    /// Returns `Ok(None)` without touching state when the cell is taken
    /// or the game is over.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidCoordinate`] if `row` or `col` is
    /// outside 0-2.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<Option<Placement>, EngineError> {
        let Some(pos) = Position::from_coords(row, col) else {
            warn!(row, col, "Move outside the board");
            return Err(EngineError::InvalidCoordinate { row, col });
        };
        Ok(self.play(pos))
    }

    /// Plays the current mark at `pos`.
    ///
    /// Returns `None` without touching state when the cell is taken or
    /// the game is over.
    #[instrument(skip(self), fields(mark = %self.next_mark))]
    pub fn play(&mut self, pos: Position) -> Option<Placement> {
        if self.phase.is_terminal() {
            debug!(phase = %self.phase, "Ignoring move after game over");
            return None;
        }
        if !self.board.is_empty(pos) {
            debug!(position = %pos, "Ignoring move on occupied cell");
            return None;
        }

        let mark = self.next_mark;
        self.board.set(pos, Cell::Marked(mark));
        self.history.push(Move::new(mark, pos));

        // Win first: a last move that fills the board and completes a line is a win.
        if rules::completes_line(&self.board, pos, mark) {
            self.phase = Phase::WonBy(mark);
            info!(winner = %mark, moves = self.history.len(), "Game won");
        } else if rules::is_full(&self.board) {
            self.phase = Phase::Tied;
            info!("Game tied");
        } else {
            self.next_mark = mark.opponent();
        }

        self.check_invariants();

        debug!(position = %pos, phase = %self.phase, "Move applied");
        Some(Placement {
            played: Move::new(mark, pos),
            phase: self.phase,
        })
    }

    /// Returns the content of the cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidCoordinate`] if `row` or `col` is
    /// outside 0-2.
    pub fn cell_mark(&self, row: usize, col: usize) -> Result<Cell, EngineError> {
        Position::from_coords(row, col)
            .map(|pos| self.board.get(pos))
            .ok_or(EngineError::InvalidCoordinate { row, col })
    }

    /// Returns the content of the cell at `pos`.
    pub fn cell(&self, pos: Position) -> Cell {
        self.board.get(pos)
    }

    /// Returns the current phase.
    pub fn current_phase(&self) -> Phase {
        self.phase
    }

    /// Returns the mark that plays next.
    ///
    /// Only meaningful while the game is in progress; once it ends this
    /// is the mark that made the last move.
    pub fn turn_mark(&self) -> Mark {
        self.next_mark
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns accepted moves since the last reset, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// True when no move has been played since the last reset.
    pub fn is_fresh(&self) -> bool {
        self.history.is_empty()
    }

    /// Positions that would accept a move right now.
    #[instrument(skip(self))]
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.phase.is_terminal() {
            return Vec::new();
        }
        Position::empty_positions(&self.board)
    }

    #[cfg(debug_assertions)]
    fn check_invariants(&self) {
        use crate::invariants::{EngineInvariants, InvariantSet};

        if let Err(violations) = EngineInvariants::check_all(self) {
            for violation in &violations {
                tracing::error!(description = %violation.description, "Invariant violated");
            }
            debug_assert!(violations.is_empty(), "Engine invariants violated");
        }
    }

    #[cfg(not(debug_assertions))]
    fn check_invariants(&self) {}
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
