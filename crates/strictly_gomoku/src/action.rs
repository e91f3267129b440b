//! Actions: a mark placed at a board coordinate.

use serde::{Deserialize, Serialize};

/// A move in gomoku: the cell the active player marks.
///
/// Coordinates are 0-indexed. Ordering is row-major, which is also the
/// order [`GameState::possible_actions`](crate::GameState::possible_actions)
/// yields them in.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("({row}, {col})")]
pub struct Action {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

impl Action {
    /// Creates a new action.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Action {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}
