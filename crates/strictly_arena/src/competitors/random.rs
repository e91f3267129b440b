//! Competitor that picks uniformly among legal moves.

use crate::Competitor;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use strictly_gomoku::{Action, GameState, Player};
use tracing::debug;

/// Picks a legal move uniformly at random.
///
/// Seeded, so a given seed replays the same sequence of choices.
#[derive(Debug, Clone)]
pub struct RandomCompetitor {
    name: String,
    rng: StdRng,
}

impl RandomCompetitor {
    /// Creates a random competitor with its own seeded generator.
    pub fn new(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Competitor for RandomCompetitor {
    fn name(&self) -> &str {
        &self.name
    }

    fn take_action(
        &mut self,
        state: &GameState,
        _history: &[GameState],
        _active_player: Player,
    ) -> Option<Action> {
        let action = state.possible_actions().choose(&mut self.rng).copied();
        debug!(competitor = %self.name, ?action, "Chose random cell");
        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_gomoku::{BoardSize, Engine};

    #[test]
    fn test_same_seed_same_choices() {
        let engine = Engine::new(BoardSize::new(6, 7), 4).unwrap();
        let mut a = RandomCompetitor::new("a", 99);
        let mut b = RandomCompetitor::new("b", 99);

        for _ in 0..10 {
            let state = engine.state();
            assert_eq!(
                a.take_action(state, engine.history(), Player::One),
                b.take_action(state, engine.history(), Player::One)
            );
        }
    }

    #[test]
    fn test_only_legal_moves() {
        let mut engine = Engine::square(3, 4).unwrap();
        let mut competitor = RandomCompetitor::new("r", 1);

        while !engine.state().is_over() {
            let action = competitor
                .take_action(engine.state(), engine.history(), engine.active_player())
                .unwrap();
            assert!(engine.step(action).is_ok());
        }
        assert!(engine.state().board().is_full());
    }
}
