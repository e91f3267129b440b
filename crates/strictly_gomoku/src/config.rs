//! Engine configuration.

use crate::{BoardSize, InvalidConfiguration};
use serde::{Deserialize, Serialize};

/// Board dimensions and win length for an [`Engine`](crate::Engine).
///
/// Deserialises with defaults for missing fields, so an empty table
/// yields the standard 15×15 five-in-a-row game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
    /// Marks in a row needed to win.
    pub win_len: usize,
}

/// Win length of standard gomoku.
pub const DEFAULT_WIN_LEN: usize = 5;

/// Side length of the standard gomoku board.
pub const DEFAULT_BOARD_SIDE: usize = 15;

impl EngineConfig {
    /// Creates a configuration.
    pub fn new(size: impl Into<BoardSize>, win_len: usize) -> Self {
        let size = size.into();
        Self {
            rows: size.rows(),
            cols: size.cols(),
            win_len,
        }
    }

    /// Board dimensions.
    pub fn size(&self) -> BoardSize {
        BoardSize::new(self.rows, self.cols)
    }

    /// Rejects zero dimensions or a zero win length.
    pub fn validate(&self) -> Result<(), InvalidConfiguration> {
        self.size().validate()?;
        if self.win_len == 0 {
            return Err(InvalidConfiguration::ZeroWinLen);
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIDE, DEFAULT_WIN_LEN)
    }
}
