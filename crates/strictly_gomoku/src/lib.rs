//! Strictly Gomoku - a pure n-in-a-row rules engine
//!
//! This library models gomoku generalised to any rectangular board and
//! any win length as a state-transition system: a move applied to a
//! state yields a new state, and the engine keeps every state it has
//! produced.
//!
//! # Architecture
//!
//! - **Board**: row-major grid of cells with an incrementally tracked empty count
//! - **GameState**: immutable snapshot of board, active player and outcome
//! - **Rules**: win detection seeded at the last placed mark, draw detection
//! - **Engine**: `reset`/`step` driver with an append-only snapshot history
//! - **Invariants**: transition properties checked in debug builds and on demand
//!
//! # Example
//!
//! ```
//! use strictly_gomoku::{Action, Engine, Outcome, Player};
//!
//! let mut engine = Engine::square(3, 3)?;
//! for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
//!     engine.step(Action::new(row, col))?;
//! }
//! let state = engine.step(Action::new(0, 2))?;
//! assert_eq!(state.winner(), Some(Outcome::Winner(Player::One)));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod board;
mod config;
mod engine;
mod error;
mod state;
mod types;

// Public module declarations
pub mod invariants;
pub mod rules;

// Crate-level exports - Core types
pub use action::Action;
pub use board::{Board, BoardSize};
pub use state::{GameState, Observation};
pub use types::{Cell, Outcome, Player};

// Crate-level exports - Engine
pub use config::{DEFAULT_BOARD_SIDE, DEFAULT_WIN_LEN, EngineConfig};
pub use engine::Engine;

// Crate-level exports - Errors
pub use error::{IllegalMove, InvalidConfiguration};
