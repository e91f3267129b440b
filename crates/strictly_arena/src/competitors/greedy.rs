//! One-ply greedy competitor.

use crate::Competitor;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use strictly_gomoku::rules::is_winning_move;
use strictly_gomoku::{Action, Board, Cell, GameState, Player};
use tracing::debug;

/// Completes its own run when it can, blocks the opponent's when it
/// must, and otherwise plays a random legal move.
#[derive(Debug, Clone)]
pub struct GreedyCompetitor {
    name: String,
    win_len: usize,
    rng: StdRng,
}

impl GreedyCompetitor {
    /// Creates a greedy competitor for games won by `win_len` in a row.
    pub fn new(name: impl Into<String>, win_len: usize, seed: u64) -> Self {
        Self {
            name: name.into(),
            win_len,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

/// First candidate at which `player` would complete a winning run.
fn winning_cell(
    board: &mut Board,
    candidates: &[Action],
    player: Player,
    win_len: usize,
) -> Option<Action> {
    candidates.iter().copied().find(|action| {
        board.set(action.row, action.col, Cell::Occupied(player));
        let wins = is_winning_move(board, action.row, action.col, win_len);
        board.set(action.row, action.col, Cell::Empty);
        wins
    })
}

impl Competitor for GreedyCompetitor {
    fn name(&self) -> &str {
        &self.name
    }

    fn take_action(
        &mut self,
        state: &GameState,
        _history: &[GameState],
        active_player: Player,
    ) -> Option<Action> {
        let candidates = state.possible_actions();
        let mut scratch = state.board().clone();

        if let Some(action) = winning_cell(&mut scratch, &candidates, active_player, self.win_len) {
            debug!(competitor = %self.name, %action, "Completing run");
            return Some(action);
        }

        let opponent = active_player.opponent();
        if let Some(action) = winning_cell(&mut scratch, &candidates, opponent, self.win_len) {
            debug!(competitor = %self.name, %action, "Blocking opponent");
            return Some(action);
        }

        candidates.choose(&mut self.rng).copied()
    }
}
