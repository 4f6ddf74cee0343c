//! Search module for the Gomoku AI
//!
//! Contains the depth-limited alpha-beta searcher that picks AI moves.

pub mod alphabeta;

pub use alphabeta::{SearchResult, SearchStats, Searcher};
