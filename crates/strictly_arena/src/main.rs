//! Strictly Arena - tournament runner
//!
//! Runs gomoku matches and round-robin tournaments between registered
//! competitors.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command, SettingsArgs};
use std::collections::BTreeSet;
use strictly_arena::{
    ArenaConfig, CompetitorContext, CompetitorRegistry, RenderOptions, Tournament, play_match,
    render_board,
};
use strictly_gomoku::Engine;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let registry = CompetitorRegistry::with_builtins();

    match cli.command {
        Command::Tournament {
            settings,
            competitors,
            json,
        } => run_tournament(&registry, &settings, competitors, json),
        Command::Play {
            settings,
            first,
            second,
        } => run_play(&registry, &settings, &first, &second),
        Command::List => {
            for name in registry.names() {
                println!("{name}");
            }
            Ok(())
        }
    }
}

/// Builds the effective config: file (if any), then flags.
#[instrument(skip(settings))]
fn load_config(settings: &SettingsArgs) -> Result<ArenaConfig> {
    let base = match &settings.config {
        Some(path) => ArenaConfig::from_file(path)?,
        None => ArenaConfig::default(),
    };
    let config = settings.apply(base);
    config.validate()?;
    Ok(config)
}

/// Picks the configured seed or draws a fresh one.
fn seed_for(config: &ArenaConfig) -> u64 {
    config.seed().unwrap_or_else(rand::random)
}

/// Run a round-robin tournament
fn run_tournament(
    registry: &CompetitorRegistry,
    settings: &SettingsArgs,
    competitors: Vec<String>,
    json: bool,
) -> Result<()> {
    let mut config = load_config(settings)?;
    if !competitors.is_empty() {
        config = config.with_competitors(competitors);
        config.validate()?;
    }

    let entrants = config.entrants(registry)?;
    let seed = seed_for(&config);
    info!(?entrants, seed, "Running tournament");

    let report = Tournament::new(
        registry,
        entrants,
        config.engine_config(),
        *config.matches_per_pair(),
        seed,
    )
    .run()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.summary());
    }
    Ok(())
}

/// Play a single match and print the final board
fn run_play(
    registry: &CompetitorRegistry,
    settings: &SettingsArgs,
    first: &str,
    second: &str,
) -> Result<()> {
    let config = load_config(settings)?;
    let seed = seed_for(&config);
    let mut engine = Engine::from_config(&config.engine_config())?;

    let mut first = registry.create(first, &CompetitorContext::new(seed, engine.win_len()))?;
    let mut second = registry.create(
        second,
        &CompetitorContext::new(seed.wrapping_add(1), engine.win_len()),
    )?;

    let outcome = play_match(&mut engine, first.as_mut(), second.as_mut())?;

    let history = engine.history();
    let moves = history.len() - 1;
    let board = engine.state().board();
    let last_move: BTreeSet<_> = match history {
        [.., before, _] => before
            .board()
            .empty_cells()
            .filter(|a| !board.is_empty(a.row, a.col))
            .collect(),
        _ => BTreeSet::new(),
    };

    print!(
        "{}",
        render_board(
            board,
            &RenderOptions::default()
                .with_coordinates(true)
                .with_highlights(last_move)
        )
    );
    println!("{outcome} after {moves} moves ({} vs {})", first.name(), second.name());
    Ok(())
}
