//! Win detection for n-in-a-row.
//!
//! A move can only complete runs on the four lines through the cell it
//! marked, so detection walks outward from that cell instead of scanning
//! the board. Each walk is capped at `win_len - 1` steps per side, which
//! bounds a check at `4 × (2 × win_len − 1)` cell reads on any board.

use crate::{Board, Cell, Player};
use strum::IntoEnumIterator;
use tracing::instrument;

/// One of the four line orientations through a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum Direction {
    /// Fixed row.
    Horizontal,
    /// Fixed column.
    Vertical,
    /// `row - col` constant; row and column grow together.
    Diagonal,
    /// `row + col` constant; row grows while column shrinks.
    AntiDiagonal,
}

impl Direction {
    /// Unit step `(d_row, d_col)` along the line. The opposite walk negates both.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::Diagonal => (1, 1),
            Direction::AntiDiagonal => (1, -1),
        }
    }
}

/// Counts consecutive marks of `player` starting next to `(row, col)` and
/// stepping by `(d_row, d_col)`, stopping at the edge, a foreign cell, or `limit`.
fn walk(
    board: &Board,
    (row, col): (usize, usize),
    (d_row, d_col): (isize, isize),
    player: Player,
    limit: usize,
) -> usize {
    let mut count = 0;
    let (mut r, mut c) = (row, col);
    while count < limit {
        let (Some(next_r), Some(next_c)) =
            (r.checked_add_signed(d_row), c.checked_add_signed(d_col))
        else {
            break;
        };
        if board.get(next_r, next_c) != Some(Cell::Occupied(player)) {
            break;
        }
        (r, c) = (next_r, next_c);
        count += 1;
    }
    count
}

/// Length of the run through `(row, col)` along `direction`, counting
/// both sides plus the cell itself.
///
/// Returns `0` if the cell is empty or off the board.
#[instrument(skip(board))]
pub fn run_length(board: &Board, row: usize, col: usize, direction: Direction) -> usize {
    let Some(Cell::Occupied(player)) = board.get(row, col) else {
        return 0;
    };
    let (d_row, d_col) = direction.delta();
    1 + walk(board, (row, col), (d_row, d_col), player, usize::MAX)
        + walk(board, (row, col), (-d_row, -d_col), player, usize::MAX)
}

/// Longest run through `(row, col)` over all four directions.
#[instrument(skip(board))]
pub fn longest_run(board: &Board, row: usize, col: usize) -> usize {
    Direction::iter()
        .map(|d| run_length(board, row, col, d))
        .max()
        .unwrap_or(0)
}

/// Returns the first direction in which the mark at `(row, col)` is part
/// of a run of at least `win_len`, or `None`.
#[instrument(skip(board))]
pub fn winning_direction(
    board: &Board,
    row: usize,
    col: usize,
    win_len: usize,
) -> Option<Direction> {
    let Some(Cell::Occupied(player)) = board.get(row, col) else {
        return None;
    };
    let limit = win_len.saturating_sub(1);
    Direction::iter().find(|&direction| {
        let (d_row, d_col) = direction.delta();
        let forward = walk(board, (row, col), (d_row, d_col), player, limit);
        let backward = walk(board, (row, col), (-d_row, -d_col), player, limit - forward);
        1 + forward + backward >= win_len
    })
}

/// Checks whether the mark at `(row, col)` completes a run of at least
/// `win_len` identical marks.
///
/// Only the four lines through the cell are inspected. An empty or
/// off-board cell never wins.
pub fn is_winning_move(board: &Board, row: usize, col: usize, win_len: usize) -> bool {
    winning_direction(board, row, col, win_len).is_some()
}

/// Scans the whole board for any run of at least `win_len` by `player`.
///
/// Used where no last move is known, e.g. when auditing a finished board.
#[instrument(skip(board))]
pub fn has_run_anywhere(board: &Board, player: Player, win_len: usize) -> bool {
    let size = board.size();
    (0..size.rows()).any(|row| {
        (0..size.cols()).any(|col| {
            board.get(row, col) == Some(Cell::Occupied(player))
                && is_winning_move(board, row, col, win_len)
        })
    })
}
