//! Round-robin tournament with points scoring.

use crate::{CompetitorContext, CompetitorRegistry, MatchError, UnknownCompetitor, play_match};
use derive_getters::Getters;
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use strictly_gomoku::{Engine, EngineConfig, InvalidConfiguration, Outcome, Player};
use tracing::{debug, info, instrument};

/// Points awarded to the winner of a match.
pub const WINNER_POINT: i64 = 3;

/// Points awarded to the loser of a match.
pub const LOSER_POINT: i64 = -1;

/// Error raised while setting up or running a tournament.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum TournamentError {
    /// The board or win length is unusable.
    #[display("Invalid engine configuration: {_0}")]
    Configuration(InvalidConfiguration),

    /// An entrant is not in the registry.
    #[display("{_0}")]
    UnknownCompetitor(UnknownCompetitor),

    /// A competitor broke a match.
    #[display("Match failed: {_0}")]
    Match(MatchError),

    /// Fewer than two entrants.
    #[display("A tournament needs at least two competitors, got {_0}")]
    #[from(skip)]
    TooFewEntrants(#[error(not(source))] usize),

    /// The same competitor was entered twice.
    #[display("Competitor entered more than once: {_0}")]
    #[from(skip)]
    DuplicateEntrant(#[error(not(source))] String),
}

/// Results of every match between one ordered pair of competitors.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PairStats {
    /// Competitor moving first.
    first: String,
    /// Competitor moving second.
    second: String,
    /// Matches won by `first`.
    first_wins: u32,
    /// Matches won by `second`.
    second_wins: u32,
    /// Drawn matches.
    draws: u32,
}

impl PairStats {
    /// Creates empty stats for a pairing.
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
            first_wins: 0,
            second_wins: 0,
            draws: 0,
        }
    }

    /// Records one match outcome.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Winner(Player::One) => self.first_wins += 1,
            Outcome::Winner(Player::Two) => self.second_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    /// Number of matches recorded.
    pub fn total(&self) -> u32 {
        self.first_wins + self.second_wins + self.draws
    }
}

impl std::fmt::Display for PairStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{first} vs {second}. {first} won {fw} times, {second} won {sw} times, draw {d} times.",
            first = self.first,
            second = self.second,
            fw = self.first_wins,
            sw = self.second_wins,
            d = self.draws,
        )
    }
}

/// One line of the final ranking.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, Display)]
#[display("{rank}. {name}: {points}")]
pub struct Standing {
    /// 1-based position.
    rank: usize,
    /// Competitor name.
    name: String,
    /// Total points.
    points: i64,
}

/// Everything a finished tournament produced.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TournamentReport {
    /// Engine settings the matches were played with.
    engine: EngineConfig,
    /// Matches per ordered pair.
    matches_per_pair: u32,
    /// Base seed the competitors were derived from.
    seed: u64,
    /// Per-pairing results in schedule order.
    pairs: Vec<PairStats>,
    /// Final ranking, best first.
    standings: Vec<Standing>,
}

impl TournamentReport {
    /// Summary lines: one per pairing, then the final ranking.
    pub fn summary(&self) -> String {
        let mut lines: Vec<String> = self.pairs.iter().map(ToString::to_string).collect();
        lines.push(String::new());
        lines.push("*** Final results ***".to_string());
        lines.extend(self.standings.iter().map(ToString::to_string));
        lines.join("\n")
    }
}

/// Derives a per-seat seed so every competitor instance gets its own stream.
fn derive_seed(base: u64, pairing: usize, seat: u64) -> u64 {
    base.wrapping_add((pairing as u64).wrapping_mul(2).wrapping_add(seat))
        .wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// Ranks competitors by points, highest first, ties broken by name.
pub fn rank(points: &BTreeMap<String, i64>) -> Vec<Standing> {
    let mut ordered: Vec<(&String, i64)> = points.iter().map(|(n, p)| (n, *p)).collect();
    ordered.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ordered
        .into_iter()
        .enumerate()
        .map(|(i, (name, points))| Standing {
            rank: i + 1,
            name: name.clone(),
            points,
        })
        .collect()
}

/// A round-robin schedule over registered competitors.
///
/// Every ordered pair of distinct entrants plays `matches_per_pair`
/// matches, the first of the pair moving first. One engine is reused for
/// all matches, reset before each.
#[derive(Debug)]
pub struct Tournament<'a> {
    registry: &'a CompetitorRegistry,
    entrants: Vec<String>,
    engine: EngineConfig,
    matches_per_pair: u32,
    seed: u64,
}

impl<'a> Tournament<'a> {
    /// Creates a tournament between `entrants`.
    pub fn new(
        registry: &'a CompetitorRegistry,
        entrants: Vec<String>,
        engine: EngineConfig,
        matches_per_pair: u32,
        seed: u64,
    ) -> Self {
        Self {
            registry,
            entrants,
            engine,
            matches_per_pair,
            seed,
        }
    }

    /// Ordered pairs of distinct entrants in play order.
    pub fn schedule(&self) -> Vec<(&str, &str)> {
        self.entrants
            .iter()
            .flat_map(|first| {
                self.entrants
                    .iter()
                    .filter(move |second| *second != first)
                    .map(move |second| (first.as_str(), second.as_str()))
            })
            .collect()
    }

    /// Plays every scheduled match.
    #[instrument(
        skip(self),
        fields(entrants = self.entrants.len(), matches_per_pair = self.matches_per_pair)
    )]
    pub fn run(&self) -> Result<TournamentReport, TournamentError> {
        if self.entrants.len() < 2 {
            return Err(TournamentError::TooFewEntrants(self.entrants.len()));
        }
        let mut seen = BTreeSet::new();
        for name in &self.entrants {
            if !seen.insert(name.as_str()) {
                return Err(TournamentError::DuplicateEntrant(name.clone()));
            }
            if !self.registry.contains(name) {
                return Err(UnknownCompetitor { name: name.clone() }.into());
            }
        }

        let mut engine = Engine::from_config(&self.engine)?;
        let mut points: BTreeMap<String, i64> =
            self.entrants.iter().map(|name| (name.clone(), 0)).collect();
        let mut pairs = Vec::new();

        info!(size = %engine.size(), win_len = engine.win_len(), "Starting tournament");

        for (pairing, (first_name, second_name)) in self.schedule().into_iter().enumerate() {
            let win_len = engine.win_len();
            let mut first = self.registry.create(
                first_name,
                &CompetitorContext::new(derive_seed(self.seed, pairing, 0), win_len),
            )?;
            let mut second = self.registry.create(
                second_name,
                &CompetitorContext::new(derive_seed(self.seed, pairing, 1), win_len),
            )?;

            let mut stats = PairStats::new(first_name, second_name);
            for _ in 0..self.matches_per_pair {
                let outcome = play_match(&mut engine, first.as_mut(), second.as_mut())?;
                stats.record(outcome);

                let (winner, loser) = match outcome {
                    Outcome::Winner(Player::One) => (first_name, second_name),
                    Outcome::Winner(Player::Two) => (second_name, first_name),
                    Outcome::Draw => continue,
                };
                *points.entry(winner.to_string()).or_default() += WINNER_POINT;
                *points.entry(loser.to_string()).or_default() += LOSER_POINT;
            }

            info!(%stats, "Pairing finished");
            pairs.push(stats);
        }

        let standings = rank(&points);
        debug!(?standings, "Tournament finished");

        Ok(TournamentReport {
            engine: self.engine,
            matches_per_pair: self.matches_per_pair,
            seed: self.seed,
            pairs,
            standings,
        })
    }
}
