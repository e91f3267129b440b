//! Built-in competitors.

mod first_available;
mod greedy;
mod random;

pub use first_available::FirstAvailable;
pub use greedy::GreedyCompetitor;
pub use random::RandomCompetitor;

use crate::{Competitor, CompetitorContext};
use serde::{Deserialize, Serialize};

/// The competitors shipped with the arena, by registry name.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum BuiltinCompetitor {
    /// Uniformly random legal moves.
    Random,
    /// First empty cell in row-major order.
    FirstAvailable,
    /// Wins when it can, blocks when it must, otherwise random.
    Greedy,
}

impl BuiltinCompetitor {
    /// Builds an instance named `name`.
    pub fn create(self, name: &str, ctx: &CompetitorContext) -> Box<dyn Competitor> {
        match self {
            BuiltinCompetitor::Random => Box::new(RandomCompetitor::new(name, *ctx.seed())),
            BuiltinCompetitor::FirstAvailable => Box::new(FirstAvailable::new(name)),
            BuiltinCompetitor::Greedy => {
                Box::new(GreedyCompetitor::new(name, *ctx.win_len(), *ctx.seed()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_names_round_trip_through_strum() {
        assert_eq!(BuiltinCompetitor::FirstAvailable.to_string(), "first_available");
        assert_eq!(
            BuiltinCompetitor::from_str("greedy").unwrap(),
            BuiltinCompetitor::Greedy
        );
        assert!(BuiltinCompetitor::from_str("Greedy").is_err());
    }
}
