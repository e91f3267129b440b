//! Alternating turn invariant: players alternate One, Two, One, Two, ...

use super::{Invariant, Transition};
use crate::{Cell, Outcome};

/// Invariant: Players alternate turns.
///
/// The mark placed belongs to the player who was active before the move.
/// The active player then flips, unless the move won the game, in which
/// case the mover stays active as the winner.
pub struct AlternatingTurnInvariant;

impl Invariant<Transition<'_>> for AlternatingTurnInvariant {
    fn holds(transition: &Transition<'_>) -> bool {
        let mover = transition.before.active_player();

        let placed_by_mover = transition.changed_cells().iter().all(|&index| {
            transition.after.board().cells().get(index) == Some(&Cell::Occupied(mover))
        });
        if !placed_by_mover {
            return false;
        }

        match transition.after.winner() {
            Some(Outcome::Winner(winner)) => {
                winner == mover && transition.after.active_player() == mover
            }
            _ => transition.after.active_player() == mover.opponent(),
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (One, Two, One, Two, ...)"
    }
}
