//! The game engine: current state plus an append-only snapshot history.

use crate::invariants::{InvariantSet, InvariantViolation, Transition, TransitionInvariants};
use crate::rules::winning_direction;
use crate::{
    Action, BoardSize, Cell, EngineConfig, GameState, IllegalMove, InvalidConfiguration, Outcome,
    Player,
};
use tracing::{debug, info, instrument, warn};

/// Runs one gomoku game at a time on a fixed board size and win length.
///
/// Every accepted move produces a fresh [`GameState`] that becomes the
/// current state and is appended to the history. Published states are
/// never mutated. The history always starts with the empty opening state.
///
/// # Examples
///
/// ```
/// use strictly_gomoku::{Action, BoardSize, Engine, Player};
///
/// let mut engine = Engine::new(BoardSize::square(3), 2)?;
/// let state = engine.step(Action::new(1, 1))?;
/// assert_eq!(state.active_player(), Player::Two);
/// assert_eq!(engine.history().len(), 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Engine {
    size: BoardSize,
    win_len: usize,
    history: Vec<GameState>,
}

impl Engine {
    /// Creates an engine with an empty board.
    ///
    /// Fails if either dimension or the win length is zero.
    #[instrument]
    pub fn new(size: BoardSize, win_len: usize) -> Result<Self, InvalidConfiguration> {
        size.validate()?;
        if win_len == 0 {
            return Err(InvalidConfiguration::ZeroWinLen);
        }
        debug!(%size, win_len, "Creating engine");
        Ok(Self {
            size,
            win_len,
            history: vec![GameState::new(size)],
        })
    }

    /// Creates an engine on a `side × side` board.
    pub fn square(side: usize, win_len: usize) -> Result<Self, InvalidConfiguration> {
        Self::new(BoardSize::square(side), win_len)
    }

    /// Creates an engine from a configuration.
    pub fn from_config(config: &EngineConfig) -> Result<Self, InvalidConfiguration> {
        config.validate()?;
        Self::new(config.size(), config.win_len)
    }

    // ─────────────────────────────────────────────────────────────
    //  Transitions
    // ─────────────────────────────────────────────────────────────

    /// Restarts the game and returns the opening state.
    ///
    /// The history is cleared down to that single state.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> &GameState {
        self.history.clear();
        self.history.push(GameState::new(self.size));
        debug!("Engine reset");
        self.state()
    }

    /// Checks that `action` is legal in the current state.
    pub fn check_action(&self, action: Action) -> Result<(), IllegalMove> {
        let state = self.state();
        if state.is_over() {
            return Err(IllegalMove::GameOver);
        }
        match state.board().at(action) {
            None => Err(IllegalMove::OutOfBounds {
                action,
                size: self.size,
            }),
            Some(Cell::Occupied(_)) => Err(IllegalMove::Occupied(action)),
            Some(Cell::Empty) => Ok(()),
        }
    }

    /// Plays the active player's mark at `action`.
    ///
    /// On error nothing changes: the state and history are as before.
    #[instrument(skip(self))]
    pub fn step(&mut self, action: Action) -> Result<&GameState, IllegalMove> {
        if let Err(e) = self.check_action(action) {
            warn!(error = %e, "Rejected move");
            return Err(e);
        }

        self.advance(action);

        #[cfg(debug_assertions)]
        self.check_last_transition();

        Ok(self.state())
    }

    /// Plays `action` without checking it.
    ///
    /// The caller guarantees the game is running and the cell is empty.
    /// An occupied cell is overwritten, and a move after the game ended
    /// still produces a new state.
    ///
    /// # Panics
    ///
    /// Panics if `action` is off the board.
    #[instrument(skip(self))]
    pub fn step_unchecked(&mut self, action: Action) -> &GameState {
        self.advance(action);
        self.state()
    }

    fn advance(&mut self, action: Action) {
        let current = self.state();
        let mover = current.active_player();
        let mut next = current.copy();
        next.board_mut().place(action, mover);

        if let Some(direction) =
            winning_direction(next.board(), action.row, action.col, self.win_len)
        {
            info!(player = %mover, %action, %direction, "Winning move");
            next.set_winner(Outcome::Winner(mover));
        } else {
            next.set_active_player(mover.opponent());
            if next.board().is_full() {
                info!(%action, "Board full, game drawn");
                next.set_winner(Outcome::Draw);
            } else {
                debug!(
                    player = %mover,
                    %action,
                    remaining = next.board().empty_count(),
                    "Move applied"
                );
            }
        }

        self.history.push(next);
    }

    #[cfg(debug_assertions)]
    fn check_last_transition(&self) {
        let [.., before, after] = self.history.as_slice() else {
            return;
        };
        if let Err(violations) = TransitionInvariants::check_all(&Transition::new(before, after)) {
            for violation in violations {
                warn!(%violation, "Transition invariant violated");
            }
        }
    }

    /// Checks every recorded transition against the transition invariants.
    ///
    /// Each violation is prefixed with the move number it occurred on.
    #[instrument(skip(self))]
    pub fn verify_history(&self) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<InvariantViolation> = self
            .history
            .windows(2)
            .enumerate()
            .filter_map(|(i, pair)| {
                TransitionInvariants::check_all(&Transition::new(&pair[0], &pair[1]))
                    .err()
                    .map(|found| (i + 1, found))
            })
            .flat_map(|(number, found)| {
                found
                    .into_iter()
                    .map(move |v| InvariantViolation::new(format!("move {number}: {v}")))
            })
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Accessors
    // ─────────────────────────────────────────────────────────────

    /// The current state (the last entry of the history).
    pub fn state(&self) -> &GameState {
        // The history is never empty: construction and reset seed it.
        &self.history[self.history.len() - 1]
    }

    /// Every state since the last reset, oldest first.
    pub fn history(&self) -> &[GameState] {
        &self.history
    }

    /// The player to move in the current state.
    pub fn active_player(&self) -> Player {
        self.state().active_player()
    }

    /// Marks in a row needed to win.
    pub fn win_len(&self) -> usize {
        self.win_len
    }

    /// Board dimensions.
    pub fn size(&self) -> BoardSize {
        self.size
    }
}
