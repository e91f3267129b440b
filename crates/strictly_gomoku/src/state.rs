//! Game state snapshots.

use crate::{Action, Board, BoardSize, Outcome, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::instrument;

/// Complete game state.
///
/// A state is a snapshot: once the engine has published it into the
/// history it is never mutated again. Each transition builds a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Player whose mark goes down on the next move.
    active_player: Player,
    /// How the game ended, or `None` while it is still running.
    winner: Option<Outcome>,
}

impl GameState {
    /// Creates the opening state: empty board, player one to move.
    #[instrument]
    pub fn new(size: BoardSize) -> Self {
        Self {
            board: Board::new(size),
            active_player: Player::One,
            winner: None,
        }
    }

    /// Assembles a state from its parts, e.g. to replay a recorded position.
    pub fn from_parts(board: Board, active_player: Player, winner: Option<Outcome>) -> Self {
        Self {
            board,
            active_player,
            winner,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn active_player(&self) -> Player {
        self.active_player
    }

    /// Returns the outcome, or `None` while the game runs.
    pub fn winner(&self) -> Option<Outcome> {
        self.winner
    }

    /// Returns true once the game has a winner or is drawn.
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Every empty cell, in row-major order.
    ///
    /// The order is stable so callers may index into the result reproducibly.
    #[instrument(skip(self))]
    pub fn possible_actions(&self) -> Vec<Action> {
        self.board.empty_cells().collect()
    }

    /// Deep copy of this state.
    ///
    /// The board buffer is duplicated, so writes to the copy never reach
    /// the original.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Flat, serialisable view of the state for agents.
    #[instrument(skip(self))]
    pub fn observe(&self) -> Observation {
        Observation {
            board: self.board.to_values(),
            possible_actions: self.board.empty_cells().collect(),
            player: self.active_player.sign(),
            winner: self.winner.map_or(0, |o| o.value()),
            done: self.is_over(),
        }
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub(crate) fn set_active_player(&mut self, player: Player) {
        self.active_player = player;
    }

    pub(crate) fn set_winner(&mut self, outcome: Outcome) {
        self.winner = Some(outcome);
    }
}

/// Numeric snapshot of a state, as handed to learning agents.
///
/// `winner` is `0` both for a running game and for a draw; read `done`
/// to tell them apart.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Observation {
    /// Cell values by row: `0` empty, `1` player one, `-1` player two.
    board: Vec<Vec<i8>>,
    /// Empty cells.
    possible_actions: BTreeSet<Action>,
    /// Sign of the player to move.
    player: i8,
    /// Sign of the winner, `0` if none.
    winner: i8,
    /// Whether the game has ended.
    done: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    #[test]
    fn test_possible_actions() {
        let mut board = Board::new(BoardSize::square(2));
        board.set(0, 0, Cell::Occupied(Player::One));
        board.set(1, 1, Cell::Occupied(Player::Two));
        let state = GameState::from_parts(board, Player::One, None);

        let actions = state.possible_actions();
        assert_eq!(actions, vec![Action::new(0, 1), Action::new(1, 0)]);
    }

    #[test]
    fn test_copy_does_not_alias() {
        let original = GameState::new(BoardSize::square(3));
        let mut copy = original.copy();
        copy.board_mut().set(1, 1, Cell::Occupied(Player::Two));

        assert_eq!(original.board().get(1, 1), Some(Cell::Empty));
        assert_eq!(original.board().empty_count(), 9);
        assert_eq!(copy.board().empty_count(), 8);
    }

    #[test]
    fn test_is_over_follows_winner() {
        let mut state = GameState::new(BoardSize::square(3));
        assert!(!state.is_over());
        state.set_winner(Outcome::Draw);
        assert!(state.is_over());
    }

    #[test]
    fn test_observe() {
        let board = Board::from_values(&[[0i8, 1], [-1, 0]]).unwrap();
        let state = GameState::from_parts(board, Player::One, None);
        let obs = state.observe();

        assert_eq!(obs.board(), &vec![vec![0i8, 1], vec![-1, 0]]);
        assert_eq!(obs.possible_actions().len(), 2);
        assert!(obs.possible_actions().contains(&Action::new(1, 1)));
        assert_eq!(*obs.player(), 1);
        assert_eq!(*obs.winner(), 0);
        assert!(!*obs.done());
    }
}
