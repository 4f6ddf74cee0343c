//! Error types for the Gomoku core

use thiserror::Error;

/// Errors raised by board, search and session operations.
///
/// All of these are precondition failures detected before any state is
/// mutated, so the caller can recover by choosing different input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    #[error("position ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("position ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },

    #[error("no moves available: the board is full")]
    NoMovesAvailable,

    #[error("search depth must be at least 1, got {0}")]
    InvalidDepth(u8),

    #[error("game already over")]
    GameOver,

    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GameError>;
