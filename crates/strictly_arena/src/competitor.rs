//! Competitor trait and name-keyed registry.

use crate::competitors::BuiltinCompetitor;
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_new::new;
use std::collections::BTreeMap;
use strictly_gomoku::{Action, GameState, Player};
use strum::IntoEnumIterator;
use tracing::{debug, instrument, warn};

/// A decision policy that plays one side of a match.
///
/// The match driver calls [`take_action`](Competitor::take_action) once
/// per turn; the engine itself never calls into competitor code.
pub trait Competitor {
    /// Returns the competitor's display name.
    fn name(&self) -> &str;

    /// Chooses the next move for `active_player`.
    ///
    /// `history` holds every state since the match started, `state` last.
    /// Returns `None` only when no legal move exists.
    fn take_action(
        &mut self,
        state: &GameState,
        history: &[GameState],
        active_player: Player,
    ) -> Option<Action>;
}

/// Parameters handed to a factory when a competitor is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, new)]
pub struct CompetitorContext {
    /// Seed for any randomness the competitor uses.
    seed: u64,
    /// Win length of the games it will play.
    win_len: usize,
}

/// Builds a fresh competitor instance.
pub type CompetitorFactory = Box<dyn Fn(&str, &CompetitorContext) -> Box<dyn Competitor>>;

/// Error returned when a name has no registered factory.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unknown competitor: {name}")]
pub struct UnknownCompetitor {
    /// The name that was looked up.
    pub name: String,
}

/// Maps competitor names to factories.
///
/// Names iterate in sorted order, so schedules built from the registry
/// are stable.
#[derive(Default)]
pub struct CompetitorRegistry {
    factories: BTreeMap<String, CompetitorFactory>,
}

impl CompetitorRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every built-in competitor.
    #[instrument]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for builtin in BuiltinCompetitor::iter() {
            registry.register(builtin.to_string(), move |name, ctx| builtin.create(name, ctx));
        }
        debug!(count = registry.len(), "Registered built-in competitors");
        registry
    }

    /// Registers a factory under `name`, replacing any previous one.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn(&str, &CompetitorContext) -> Box<dyn Competitor> + 'static,
    {
        let name = name.into();
        debug!(%name, "Registering competitor");
        if self.factories.insert(name.clone(), Box::new(factory)).is_some() {
            warn!(%name, "Replaced existing competitor factory");
        }
    }

    /// Creates a competitor by name.
    #[instrument(skip(self))]
    pub fn create(
        &self,
        name: &str,
        ctx: &CompetitorContext,
    ) -> Result<Box<dyn Competitor>, UnknownCompetitor> {
        let factory = self.factories.get(name).ok_or_else(|| UnknownCompetitor {
            name: name.to_string(),
        })?;
        Ok(factory(name, ctx))
    }

    /// Checks whether `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        self.factories.keys().map(String::as_str).collect()
    }

    /// Number of registered competitors.
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Checks whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl std::fmt::Debug for CompetitorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompetitorRegistry")
            .field("names", &self.names())
            .finish()
    }
}
