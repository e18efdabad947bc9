//! Application state: the engine plus everything the screen needs.

use crate::config::ResetPolicy;
use crate::input::{Action, HitAreas, move_cursor};
use crate::view;
use tictactoe_engine::{GameEngine, Position};
use tracing::{debug, info, instrument};

/// Main application state.
#[derive(Debug)]
pub struct App {
    engine: GameEngine,
    cursor: Position,
    reset_policy: ResetPolicy,
    hit_areas: HitAreas,
    should_quit: bool,
}

impl App {
    /// Creates an app with a fresh game and the cursor on the center cell.
    #[instrument]
    pub fn new(reset_policy: ResetPolicy) -> Self {
        Self {
            engine: GameEngine::new(),
            cursor: Position::Center,
            reset_policy,
            hit_areas: HitAreas::default(),
            should_quit: false,
        }
    }

    /// The game being played.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Clickable regions from the last frame.
    pub fn hit_areas(&self) -> &HitAreas {
        &self.hit_areas
    }

    /// Records where the clickable widgets were drawn.
    pub fn set_hit_areas(&mut self, hit_areas: HitAreas) {
        self.hit_areas = hit_areas;
    }

    /// Whether "Play Again" currently does anything.
    pub fn reset_enabled(&self) -> bool {
        self.reset_policy.allows(self.engine.current_phase())
    }

    /// Current status line.
    pub fn status(&self) -> String {
        view::status_text(&self.engine)
    }

    /// Applies one user action.
    #[instrument(skip(self))]
    pub fn handle(&mut self, action: Action) {
        match action {
            Action::Cursor(direction) => {
                self.cursor = move_cursor(self.cursor, direction);
            }
            Action::Activate => self.play(self.cursor),
            Action::Select(pos) => {
                self.cursor = pos;
                self.play(pos);
            }
            Action::Reset => {
                if self.reset_enabled() {
                    self.engine.reset();
                } else {
                    debug!(policy = %self.reset_policy, "Reset control disabled, ignoring");
                }
            }
            Action::Quit => {
                info!("Quit requested");
                self.should_quit = true;
            }
        }
    }

    fn play(&mut self, pos: Position) {
        match self.engine.play(pos) {
            Some(placement) if placement.phase.is_terminal() => {
                info!(result = %placement.phase, "Game over");
            }
            Some(placement) => debug!(played = %placement.played, "Move played"),
            None => debug!(position = %pos, "Move ignored"),
        }
    }
}
