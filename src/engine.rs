//! Main AI Engine integrating move selection strategies
//!
//! The engine picks moves for a computer-controlled side. The minimax
//! path follows a short priority list:
//!
//! 1. **Immediate win**: the first candidate that completes a winning run
//! 2. **Alpha-Beta**: full depth-limited search over candidate cells
//!
//! The first step never changes the answer, since the search scores an
//! immediate win above everything else and keeps the first such move. It
//! only saves the search cost.
//!
//! The engine also provides the random opponent, which picks uniformly
//! among all open cells.
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Board, Pos, Side};
//!
//! let mut engine = AIEngine::with_config(2, Some(1));
//! let mut board = Board::new(9, 5).unwrap();
//! board.place(Pos::new(4, 4), Side::Black).unwrap();
//!
//! let result = engine.get_move_with_stats(&board, Side::White).unwrap();
//! println!("Best move: {}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::board::{Board, Pos, Side};
use crate::config::{GameConfig, DEFAULT_DEPTH};
use crate::error::{GameError, Result};
use crate::eval::RunScore;
use crate::movegen::{all_open_cells, candidate_cells};
use crate::rules::winning_move_at;
use crate::search::{SearchResult, Searcher};

/// Type of search that produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Found immediate winning move
    ImmediateWin,
    /// Regular alpha-beta search result
    AlphaBeta,
    /// Uniformly random open cell
    Random,
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Chosen move
    pub best_move: Pos,
    /// Score of the move for the side to move (0 for random moves)
    pub score: i32,
    /// Type of search that found this move
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn immediate_win(pos: Pos, depth: u8, time_ms: u64) -> Self {
        Self {
            best_move: pos,
            // Same score the full search would report for this move
            score: RunScore::WIN + i32::from(depth) - 1,
            search_type: SearchType::ImmediateWin,
            time_ms,
            nodes: 1,
        }
    }

    #[inline]
    fn from_alphabeta(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            search_type: SearchType::AlphaBeta,
            time_ms,
            nodes: result.nodes,
        }
    }

    #[inline]
    fn random(pos: Pos, time_ms: u64) -> Self {
        Self {
            best_move: pos,
            score: 0,
            search_type: SearchType::Random,
            time_ms,
            nodes: 0,
        }
    }
}

/// AI engine for N-in-a-row.
///
/// Owns the alpha-beta searcher, the default search depth and the random
/// number generator used by the random opponent. Holds no game state: the
/// board and the side to move are passed into every call.
#[derive(Debug)]
pub struct AIEngine {
    searcher: Searcher,
    max_depth: u8,
    rng: SmallRng,
}

impl AIEngine {
    /// Create an AI engine with default depth and an entropy-seeded RNG.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DEFAULT_DEPTH, None)
    }

    /// Create an AI engine with custom configuration.
    ///
    /// # Arguments
    ///
    /// * `max_depth` - Search depth for alpha-beta
    /// * `seed` - Seed for the random opponent, entropy when `None`
    #[must_use]
    pub fn with_config(max_depth: u8, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        Self {
            searcher: Searcher::new(),
            max_depth,
            rng,
        }
    }

    /// Create an engine from a game configuration.
    #[must_use]
    pub fn from_game_config(config: &GameConfig) -> Self {
        Self::with_config(config.depth, config.seed)
    }

    /// Best move for `side` at the configured depth.
    pub fn get_move(&mut self, board: &Board, side: Side) -> Result<Pos> {
        self.get_move_with_stats(board, side).map(|r| r.best_move)
    }

    /// Best move for `side` at the configured depth, with statistics.
    pub fn get_move_with_stats(&mut self, board: &Board, side: Side) -> Result<MoveResult> {
        self.search_at_depth(board, side, self.max_depth)
    }

    /// Best move for `side` searching exactly `depth` plies.
    pub fn search_at_depth(&mut self, board: &Board, side: Side, depth: u8) -> Result<MoveResult> {
        if depth == 0 {
            return Err(GameError::InvalidDepth(depth));
        }
        if board.is_full() {
            return Err(GameError::NoMovesAvailable);
        }
        let start = Instant::now();

        if let Some(win_move) = Self::find_immediate_win(board, side) {
            return Ok(MoveResult::immediate_win(
                win_move,
                depth,
                start.elapsed().as_millis() as u64,
            ));
        }

        let result = self.searcher.search(board, side, depth)?;
        Ok(MoveResult::from_alphabeta(result, start.elapsed().as_millis() as u64))
    }

    /// Uniformly random open cell.
    pub fn random_move(&mut self, board: &Board) -> Result<MoveResult> {
        let start = Instant::now();
        let open = all_open_cells(board);
        let pos = *open.choose(&mut self.rng).ok_or(GameError::NoMovesAvailable)?;
        Ok(MoveResult::random(pos, start.elapsed().as_millis() as u64))
    }

    /// First candidate (row-major) that completes a winning run for `side`.
    fn find_immediate_win(board: &Board, side: Side) -> Option<Pos> {
        let mut test_board = board.clone();
        for pos in candidate_cells(board) {
            test_board.place_stone(pos, side);
            let wins = winning_move_at(&test_board, side, pos);
            test_board.clear_stone(pos);
            if wins {
                return Some(pos);
            }
        }
        None
    }

    /// Set the search depth used by `get_move`.
    pub fn set_max_depth(&mut self, depth: u8) {
        self.max_depth = depth;
    }

    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}
