//! Monotonic board invariant: marks never change once placed.

use super::{Invariant, Transition};

/// Invariant: Board cells are monotonic (never overwritten).
///
/// Every cell occupied before the move holds the same mark after it,
/// and exactly one empty cell became occupied.
pub struct MonotonicBoardInvariant;

impl Invariant<Transition<'_>> for MonotonicBoardInvariant {
    fn holds(transition: &Transition<'_>) -> bool {
        let before = transition.before.board();
        let after = transition.after.board();

        if before.size() != after.size() {
            return false;
        }

        let mut placed = 0;
        for (old, new) in before.cells().iter().zip(after.cells()) {
            match (old.is_empty(), new.is_empty()) {
                (false, _) if old != new => return false,
                (true, false) => placed += 1,
                _ => {}
            }
        }

        placed == 1
    }

    fn description() -> &'static str {
        "Board cells are monotonic (exactly one new mark, none overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Action, BoardSize, Cell, Engine, Player};

    #[test]
    fn test_single_move_holds() {
        let mut engine = Engine::new(BoardSize::square(3), 3).unwrap();
        engine.step(Action::new(1, 1)).unwrap();

        let history = engine.history();
        assert!(MonotonicBoardInvariant::holds(&Transition::new(
            &history[0],
            &history[1]
        )));
    }

    #[test]
    fn test_overwritten_mark_violates() {
        let mut engine = Engine::new(BoardSize::square(3), 3).unwrap();
        engine.step(Action::new(1, 1)).unwrap();
        let before = engine.state().clone();

        engine.step_unchecked(Action::new(1, 1));
        let after = engine.state();

        assert_eq!(after.board().get(1, 1), Some(Cell::Occupied(Player::Two)));
        assert!(!MonotonicBoardInvariant::holds(&Transition::new(
            &before, after
        )));
    }

    #[test]
    fn test_no_change_violates() {
        let engine = Engine::new(BoardSize::square(3), 3).unwrap();
        let state = engine.state();
        assert!(!MonotonicBoardInvariant::holds(&Transition::new(state, state)));
    }

    #[test]
    fn test_two_new_marks_violates() {
        let engine = Engine::new(BoardSize::square(3), 3).unwrap();
        let before = engine.state().clone();
        let mut after = before.clone();
        after.board_mut().set(0, 0, Cell::Occupied(Player::One));
        after.board_mut().set(0, 1, Cell::Occupied(Player::One));

        assert!(!MonotonicBoardInvariant::holds(&Transition::new(
            &before, &after
        )));
    }
}
