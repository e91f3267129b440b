//! Deterministic competitor that takes the first empty cell.

use crate::Competitor;
use strictly_gomoku::{Action, GameState, Player};
use tracing::debug;

/// Plays the first empty cell in row-major order.
#[derive(Debug, Clone)]
pub struct FirstAvailable {
    name: String,
}

impl FirstAvailable {
    /// Creates a new first-available competitor.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Competitor for FirstAvailable {
    fn name(&self) -> &str {
        &self.name
    }

    fn take_action(
        &mut self,
        state: &GameState,
        _history: &[GameState],
        _active_player: Player,
    ) -> Option<Action> {
        let action = state.board().empty_cells().next();
        debug!(competitor = %self.name, ?action, "Chose first available cell");
        action
    }
}
