//! Evaluation module for N-in-a-row positions
//!
//! Scores non-terminal leaves of the search by the runs each side has
//! built: longer runs are worth more, blocked ends cost half, dead runs
//! count for nothing.

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate, score_side};
pub use patterns::RunScore;
