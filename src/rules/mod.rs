//! Game rules for N-in-a-row
//!
//! Win detection through the most recently placed stone, under an exact or
//! at-least run length policy.

pub mod win;

// Re-exports for convenient access
pub use win::{run_through, winning_line_at, winning_move_at, WinRule, DIRECTIONS};
