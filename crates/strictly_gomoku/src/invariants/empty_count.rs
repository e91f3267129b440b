//! Empty count invariant: the cached counter tracks the board.

use super::{Invariant, Transition};

/// Invariant: The board's cached empty-cell count is exact.
///
/// The counter matches a full scan on both sides of the move and drops
/// by exactly one across it.
pub struct EmptyCountInvariant;

impl Invariant<Transition<'_>> for EmptyCountInvariant {
    fn holds(transition: &Transition<'_>) -> bool {
        let before = transition.before.board();
        let after = transition.after.board();

        before.empty_count() == before.scan_empty_count()
            && after.empty_count() == after.scan_empty_count()
            && before.empty_count() == after.empty_count() + 1
    }

    fn description() -> &'static str {
        "Empty cell count matches the board and drops by one per move"
    }
}
