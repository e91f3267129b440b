//! First-class invariants for gomoku transitions.
//!
//! Invariants are logical properties that must hold across every step
//! of a game. They are testable independently and serve as documentation
//! of engine guarantees. Each one inspects a [`Transition`]: the state
//! before a move and the state the engine produced from it.

use crate::GameState;

/// A logical property that must hold for a given state.
///
/// Invariants express system guarantees that should never be violated.
/// They are checked in debug builds and can be tested independently.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{description}")]
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

/// Invariants checked as a group, reporting every one that fails.
///
/// Implemented for tuples of one to four [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Returns the violation of each member that does not hold, in order.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let violations: Vec<_> = [$(($inv::holds(state), $inv::description())),+]
                    .into_iter()
                    .filter(|(holds, _)| !holds)
                    .map(|(_, description)| InvariantViolation::new(description))
                    .collect();

                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(A);
impl_invariant_set!(A, B);
impl_invariant_set!(A, B, C);
impl_invariant_set!(A, B, C, D);

/// A single engine step: the state a move was applied to and its result.
#[derive(Debug, Clone, Copy)]
pub struct Transition<'a> {
    /// State before the move.
    pub before: &'a GameState,
    /// State after the move.
    pub after: &'a GameState,
}

impl<'a> Transition<'a> {
    /// Creates a transition.
    pub fn new(before: &'a GameState, after: &'a GameState) -> Self {
        Self { before, after }
    }

    /// Row-major indices of the cells whose contents differ.
    pub fn changed_cells(&self) -> Vec<usize> {
        self.before
            .board()
            .cells()
            .iter()
            .zip(self.after.board().cells())
            .enumerate()
            .filter(|(_, (b, a))| b != a)
            .map(|(i, _)| i)
            .collect()
    }
}

pub mod alternating_turn;
pub mod empty_count;
pub mod monotonic_board;

pub use alternating_turn::AlternatingTurnInvariant;
pub use empty_count::EmptyCountInvariant;
pub use monotonic_board::MonotonicBoardInvariant;

/// All transition invariants as a composable set.
pub type TransitionInvariants = (
    MonotonicBoardInvariant,
    AlternatingTurnInvariant,
    EmptyCountInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Action, BoardSize, Cell, Engine, Player};

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut engine = Engine::new(BoardSize::square(4), 3).unwrap();
        engine.step(Action::new(0, 0)).unwrap();
        engine.step(Action::new(1, 1)).unwrap();

        let history = engine.history();
        let transition = Transition::new(&history[1], &history[2]);
        assert!(TransitionInvariants::check_all(&transition).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut engine = Engine::new(BoardSize::square(4), 3).unwrap();
        engine.step(Action::new(0, 0)).unwrap();

        // Corrupt the next state: overwrite player one's mark and skip the turn flip.
        let before = engine.state().clone();
        let mut after = before.clone();
        after.board_mut().set(0, 0, Cell::Occupied(Player::Two));

        let result = TransitionInvariants::check_all(&Transition::new(&before, &after));
        let violations = result.unwrap_err();
        assert!(violations.len() >= 2);
    }

    #[test]
    fn test_two_invariants_as_set() {
        let mut engine = Engine::new(BoardSize::square(3), 3).unwrap();
        engine.step(Action::new(1, 1)).unwrap();

        type TwoInvariants = (MonotonicBoardInvariant, AlternatingTurnInvariant);
        let history = engine.history();
        assert!(TwoInvariants::check_all(&Transition::new(&history[0], &history[1])).is_ok());
    }

    #[test]
    fn test_single_invariant_set_reports_description() {
        let engine = Engine::new(BoardSize::square(3), 3).unwrap();
        let state = engine.state();

        // No move between the two states, so the count did not drop.
        type EmptyOnly = (EmptyCountInvariant,);
        let violations = EmptyOnly::check_all(&Transition::new(state, state)).unwrap_err();
        assert_eq!(
            violations,
            vec![InvariantViolation::new(EmptyCountInvariant::description())]
        );
    }

    #[test]
    fn test_changed_cells() {
        let mut engine = Engine::new(BoardSize::new(2, 3), 2).unwrap();
        engine.step(Action::new(1, 2)).unwrap();
        let history = engine.history();
        assert_eq!(Transition::new(&history[0], &history[1]).changed_cells(), vec![5]);
    }
}
