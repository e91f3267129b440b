//! Error types for the rules engine.

use crate::{Action, BoardSize};

/// Error returned when a move violates the rules.
///
/// These are caller-contract violations: the engine rejects the move
/// before touching the state or the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IllegalMove {
    /// The game has already been decided.
    #[display("Game is already over")]
    GameOver,

    /// The action lies outside the board.
    #[display("Action {action} is outside the {size} board")]
    OutOfBounds {
        /// The rejected action.
        action: Action,
        /// Dimensions of the board.
        size: BoardSize,
    },

    /// The cell already holds a mark.
    #[display("Cell {_0} is already occupied")]
    Occupied(Action),
}

impl std::error::Error for IllegalMove {}

/// Error returned when an engine or board is built from bad parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InvalidConfiguration {
    /// The board has no rows.
    #[display("Board must have at least one row")]
    ZeroRows,

    /// The board has no columns.
    #[display("Board must have at least one column")]
    ZeroCols,

    /// The win length is zero.
    #[display("Win length must be at least 1")]
    ZeroWinLen,

    /// A row of a literal board has a different width than the first row.
    #[display("Row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },

    /// A literal board contains a value other than `0`, `1` or `-1`.
    #[display("Invalid cell value {value} at ({row}, {col})")]
    InvalidCell {
        /// Row of the bad value.
        row: usize,
        /// Column of the bad value.
        col: usize,
        /// The value found.
        value: i8,
    },
}

impl std::error::Error for InvalidConfiguration {}
