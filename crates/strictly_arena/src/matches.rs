//! Single-match driver.

use crate::Competitor;
use derive_more::{Display, Error};
use strictly_gomoku::{Action, Engine, IllegalMove, Outcome, Player};
use tracing::{debug, info, instrument, warn};

/// Error raised when a competitor breaks the match protocol.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum MatchError {
    /// The competitor chose a move the engine rejected.
    #[display("{competitor} played illegal move {action}: {source}")]
    IllegalMove {
        /// Name of the offending competitor.
        competitor: String,
        /// The rejected move.
        action: Action,
        /// Why the engine rejected it.
        source: IllegalMove,
    },

    /// The competitor returned no move while the game was still running.
    #[display("{competitor} returned no move on a running game")]
    NoMove {
        /// Name of the offending competitor.
        competitor: String,
    },
}

/// Plays one match on `engine`, `first` moving first.
///
/// The engine is reset before play. Every move goes through the checked
/// [`Engine::step`]. When the match ends the engine still holds its full
/// history.
#[instrument(skip_all, fields(first = %first.name(), second = %second.name()))]
pub fn play_match(
    engine: &mut Engine,
    first: &mut dyn Competitor,
    second: &mut dyn Competitor,
) -> Result<Outcome, MatchError> {
    engine.reset();

    loop {
        if let Some(outcome) = engine.state().winner() {
            info!(%outcome, moves = engine.history().len() - 1, "Match finished");
            return Ok(outcome);
        }

        let player = engine.active_player();
        let competitor: &mut dyn Competitor = match player {
            Player::One => &mut *first,
            Player::Two => &mut *second,
        };

        let Some(action) = competitor.take_action(engine.state(), engine.history(), player) else {
            warn!(competitor = %competitor.name(), "Competitor returned no move");
            return Err(MatchError::NoMove {
                competitor: competitor.name().to_string(),
            });
        };

        debug!(competitor = %competitor.name(), %player, %action, "Competitor moved");
        engine.step(action).map_err(|source| MatchError::IllegalMove {
            competitor: competitor.name().to_string(),
            action,
            source,
        })?;
    }
}
