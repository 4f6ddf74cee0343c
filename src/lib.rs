//! N-in-a-row (Gomoku) engine
//!
//! A board model, win detection and an alpha-beta AI for games where two
//! sides take turns placing stones on a square grid:
//! - Configurable board size and win length (15x15, five in a row by default)
//! - Exact-length wins by default (an overline does not win); at-least is opt-in
//! - Wins along rows, columns and both diagonals
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation and coordinates
//! - [`rules`]: Win detection through the last move
//! - [`movegen`]: Open cells and pruned candidate cells
//! - [`eval`]: Heuristic scoring of non-terminal positions
//! - [`search`]: Depth-limited alpha-beta search
//! - [`engine`]: AI engine combining search and the random opponent
//! - [`session`]: Validated game flow for front ends
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{GameSession, Outcome, Side};
//!
//! let mut game = GameSession::new(9, 5).unwrap();
//! game.apply_move(Side::Black, 4, 4).unwrap();
//!
//! // AI answers as White; the move is committed through the same path
//! let reply = game.request_ai_move(Side::White, 2).unwrap();
//! let outcome = game
//!     .apply_move(Side::White, reply.row as usize, reply.col as usize)
//!     .unwrap();
//! assert_eq!(outcome, Outcome::InProgress);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod movegen;
pub mod rules;
pub mod search;
pub mod session;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Side, Stone};
pub use config::{GameConfig, Opponent};
pub use engine::{AIEngine, MoveResult, SearchType};
pub use error::{GameError, Result};
pub use rules::WinRule;
pub use session::{GameSession, Outcome};
