//! Strictly Arena - competitors and tournaments for strictly_gomoku
//!
//! This library drives matches between decision policies on top of the
//! pure rules engine. The engine never calls into competitor code; the
//! match driver alternates two competitors and feeds their moves to the
//! engine's checked `step`.
//!
//! # Architecture
//!
//! - **Competitor**: trait for decision policies plus a name-keyed registry
//! - **Matches**: single-match driver with protocol errors
//! - **Tournament**: round-robin schedule, pair statistics and points ranking
//! - **Render**: plain-text board with probability overlay and highlights
//! - **Config**: TOML arena settings with location-tracked errors
//!
//! # Example
//!
//! ```
//! use strictly_arena::{CompetitorRegistry, Tournament};
//! use strictly_gomoku::EngineConfig;
//!
//! let registry = CompetitorRegistry::with_builtins();
//! let entrants = vec!["greedy".to_string(), "random".to_string()];
//! let report = Tournament::new(&registry, entrants, EngineConfig::new(5usize, 4), 2, 7).run()?;
//! assert_eq!(report.pairs().len(), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod competitor;
mod config;
mod matches;
mod tournament;

// Public module declarations
pub mod competitors;
pub mod render;

// Crate-level exports - Competitors
pub use competitor::{
    Competitor, CompetitorContext, CompetitorFactory, CompetitorRegistry, UnknownCompetitor,
};
pub use competitors::BuiltinCompetitor;

// Crate-level exports - Matches and tournaments
pub use matches::{MatchError, play_match};
pub use tournament::{
    LOSER_POINT, PairStats, Standing, Tournament, TournamentError, TournamentReport, WINNER_POINT,
    rank,
};

// Crate-level exports - Configuration
pub use config::{ArenaConfig, ConfigError, DEFAULT_BOARD_SIZE, DEFAULT_MATCHES_PER_PAIR};

// Crate-level exports - Rendering
pub use render::{RenderOptions, render_board};
