//! Consistency properties of the engine state.
//!
//! Each invariant is a logical property that must hold after every
//! accepted move. The engine checks the full set in debug builds; the
//! checks are also usable on their own in tests.

pub mod alternating_turn;
pub mod history_consistent;
pub mod monotonic_board;
pub mod phase_consistent;

pub use alternating_turn::AlternatingTurnInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use monotonic_board::MonotonicBoardInvariant;
pub use phase_consistent::PhaseConsistentInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(
    failed: impl IntoIterator<Item = Option<&'static str>>,
) -> Result<(), Vec<InvariantViolation>> {
    let violations: Vec<_> = failed
        .into_iter()
        .flatten()
        .map(InvariantViolation::new)
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

fn failure<S, I: Invariant<S>>(state: &S) -> Option<&'static str> {
    (!I::holds(state)).then(I::description)
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect([failure::<S, I1>(state), failure::<S, I2>(state)])
    }
}

impl<S, I1, I2, I3, I4> InvariantSet<S> for (I1, I2, I3, I4)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
    I4: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect([
            failure::<S, I1>(state),
            failure::<S, I2>(state),
            failure::<S, I3>(state),
            failure::<S, I4>(state),
        ])
    }
}

/// Every engine invariant as one composable set.
pub type EngineInvariants = (
    MonotonicBoardInvariant,
    AlternatingTurnInvariant,
    HistoryConsistentInvariant,
    PhaseConsistentInvariant,
);
