//! Command-line interface for strictly_arena.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use strictly_arena::ArenaConfig;

/// Strictly Arena - Gomoku competitions between pluggable competitors
#[derive(Parser, Debug)]
#[command(name = "strictly_arena")]
#[command(about = "Round-robin gomoku tournaments between competitors", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a round-robin tournament
    Tournament {
        /// Board and schedule settings
        #[command(flatten)]
        settings: SettingsArgs,

        /// Comma-separated competitor names (default: all registered)
        #[arg(long, value_delimiter = ',')]
        competitors: Vec<String>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Play a single match and print the final board
    Play {
        /// Board and schedule settings
        #[command(flatten)]
        settings: SettingsArgs,

        /// Competitor moving first
        #[arg(long, default_value = "greedy")]
        first: String,

        /// Competitor moving second
        #[arg(long, default_value = "random")]
        second: String,
    },

    /// List registered competitors
    List,
}

/// Settings shared by the game-playing commands.
///
/// Flags override values from the config file, which override defaults.
#[derive(Args, Debug, Clone, Default)]
pub struct SettingsArgs {
    /// Path to an arena config TOML file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Size of the board (rows; also columns unless --board-cols) [default: 20]
    #[arg(short = 's', long)]
    pub board_size: Option<usize>,

    /// Columns for a rectangular board
    #[arg(long)]
    pub board_cols: Option<usize>,

    /// Player wins with L contiguous marks [default: 5]
    #[arg(short = 'l', long)]
    pub win_len: Option<usize>,

    /// Matches per ordered pair of competitors [default: 100]
    #[arg(long)]
    pub num_matches_per_pair: Option<u32>,

    /// Base seed for competitor randomness
    #[arg(long)]
    pub seed: Option<u64>,
}

impl SettingsArgs {
    /// Applies the flags on top of `config`.
    pub fn apply(&self, config: ArenaConfig) -> ArenaConfig {
        let mut config = config;
        if let Some(size) = self.board_size {
            config = config.with_board_size(size);
        }
        if let Some(cols) = self.board_cols {
            config = config.with_board_cols(cols);
        }
        if let Some(win_len) = self.win_len {
            config = config.with_win_len(win_len);
        }
        if let Some(matches) = self.num_matches_per_pair {
            config = config.with_matches_per_pair(matches);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config
    }
}
