//! Draw detection for gomoku.

use super::win::has_run_anywhere;
use crate::{Board, Player};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
///
/// A full board with no winner indicates a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// Checks that the board is full and neither player holds a run of `win_len`.
#[instrument(skip(board))]
pub fn is_draw(board: &Board, win_len: usize) -> bool {
    is_full(board) && Player::iter().all(|p| !has_run_anywhere(board, p, win_len))
}
