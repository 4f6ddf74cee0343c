//! Game configuration.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::board::{DEFAULT_BOARD_SIZE, DEFAULT_WIN_LENGTH, MAX_BOARD_SIZE};
use crate::error::{GameError, Result};
use crate::rules::WinRule;

/// Search depth used when none is configured
pub const DEFAULT_DEPTH: u8 = 4;

/// Who answers the human's moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Opponent {
    /// Another human at the same board
    Human,
    /// Uniformly random open cell
    Random,
    /// Alpha-beta search at the configured depth
    #[default]
    Minimax,
}

/// Settings for one game.
///
/// # Examples
///
/// ```
/// use gomoku::config::{GameConfig, Opponent};
///
/// let config = GameConfig::new(9, 4)
///     .with_depth(3)
///     .with_opponent(Opponent::Random)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board dimension (both axes)
    pub size: usize,
    /// Stones in a row needed to win
    pub win_length: usize,
    /// Exact or at-least run length
    pub win_rule: WinRule,
    /// Plies searched by the minimax opponent
    pub depth: u8,
    pub opponent: Opponent,
    /// Seed for the random opponent; entropy when absent
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Create a configuration for the given board, other fields defaulted.
    pub fn new(size: usize, win_length: usize) -> Self {
        Self {
            size,
            win_length,
            ..Self::default()
        }
    }

    pub fn with_win_rule(mut self, win_rule: WinRule) -> Self {
        self.win_rule = win_rule;
        self
    }

    pub fn with_depth(mut self, depth: u8) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_opponent(mut self, opponent: Opponent) -> Self {
        self.opponent = opponent;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check that the configuration describes a playable game.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 || self.size > MAX_BOARD_SIZE {
            return Err(GameError::InvalidConfig {
                message: format!("board size must be in 1..={MAX_BOARD_SIZE}, got {}", self.size),
            });
        }
        if self.win_length == 0 || self.win_length > self.size {
            return Err(GameError::InvalidConfig {
                message: format!(
                    "win length must be in 1..={}, got {}",
                    self.size, self.win_length
                ),
            });
        }
        if self.depth == 0 {
            return Err(GameError::InvalidConfig {
                message: "search depth must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            win_length: DEFAULT_WIN_LENGTH,
            win_rule: WinRule::Exact,
            depth: DEFAULT_DEPTH,
            opponent: Opponent::default(),
            seed: None,
        }
    }
}
