//! Game rules for gomoku.
//!
//! This module contains pure functions for evaluating a board
//! according to n-in-a-row rules. Rules are separated from board
//! storage so the engine, the invariants and competitors share them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{
    Direction, has_run_anywhere, is_winning_move, longest_run, run_length, winning_direction,
};
