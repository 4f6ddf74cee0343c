//! Depth-limited minimax search with alpha-beta pruning
//!
//! This module implements the move selection for the AI. It is written in
//! negamax form: every node maximizes the score from the perspective of the
//! side to move, which is minimax with the sign flipped on alternate plies.
//!
//! # Features
//!
//! - Branching restricted to candidate cells (open cells next to a stone)
//! - Make/unmake on a single working board, no per-node copies
//! - Terminal detection through the last move only
//! - Faster wins (and slower losses) preferred via depth-scaled win scores
//! - Deterministic: ties go to the first candidate in row-major order
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Pos, Side};
//! use gomoku::search::Searcher;
//!
//! let mut searcher = Searcher::new();
//! let mut board = Board::new(9, 5).unwrap();
//! board.place(Pos::new(4, 4), Side::Black).unwrap();
//!
//! let result = searcher.search(&board, Side::White, 2).unwrap();
//! println!("Best move: {}", result.best_move);
//! ```

use std::time::Instant;

use tracing::debug;

use crate::board::{Board, Pos, Side};
use crate::error::{GameError, Result};
use crate::eval::{evaluate, RunScore};
use crate::movegen::candidate_cells;
use crate::rules::winning_move_at;

/// Infinity score for alpha-beta bounds (above any depth-scaled win)
const INF: i32 = RunScore::WIN + u8::MAX as i32 + 1;

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Total beta cutoffs (fail-high)
    pub beta_cutoffs: u64,
    /// Beta cutoffs on the first move tried (measures move ordering quality)
    pub first_move_cutoffs: u64,
    /// Nodes where the previous move had completed a winning run
    pub terminal_hits: u64,
    /// Heuristic evaluations at the depth horizon
    pub leaf_evals: u64,
}

impl SearchStats {
    /// First-move cutoff rate in percent
    pub fn first_move_rate(&self) -> f64 {
        if self.beta_cutoffs == 0 {
            0.0
        } else {
            self.first_move_cutoffs as f64 / self.beta_cutoffs as f64 * 100.0
        }
    }
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best root move, always one of the root's candidate cells
    pub best_move: Pos,
    /// Evaluation score of the best move for the side to move
    pub score: i32,
    /// Ply limit searched
    pub depth: u8,
    /// Total nodes searched
    pub nodes: u64,
    /// Search diagnostics
    pub stats: SearchStats,
}

impl SearchResult {
    /// True when the score proves a forced win for the side to move
    pub fn is_winning(&self) -> bool {
        self.score >= RunScore::WIN
    }

    /// True when the score proves a forced loss for the side to move
    pub fn is_losing(&self) -> bool {
        self.score <= -RunScore::WIN
    }
}

/// Alpha-beta searcher.
///
/// Holds only per-search counters; each call explores a private copy of the
/// caller's board, so the committed position is never observed mid-search.
#[derive(Debug, Default)]
pub struct Searcher {
    nodes: u64,
    stats: SearchStats,
}

impl Searcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Best move for `side` searching `depth` plies.
    ///
    /// Fails with `InvalidDepth` for a zero depth and `NoMovesAvailable`
    /// on a full board.
    pub fn best_move(&mut self, board: &Board, depth: u8, side: Side) -> Result<Pos> {
        self.search(board, side, depth).map(|r| r.best_move)
    }

    /// Run a full search and return the move with its score and statistics.
    pub fn search(&mut self, board: &Board, side: Side, depth: u8) -> Result<SearchResult> {
        if depth == 0 {
            return Err(GameError::InvalidDepth(depth));
        }
        if board.is_full() {
            return Err(GameError::NoMovesAvailable);
        }

        self.nodes = 0;
        self.stats = SearchStats::default();
        let start = Instant::now();

        let mut work_board = board.clone();
        let (best_move, score) = self.search_root(&mut work_board, side, depth)?;
        debug_assert_eq!(&work_board, board, "make/unmake left the board modified");

        debug!(
            ?side,
            depth,
            %best_move,
            score,
            nodes = self.nodes,
            beta_cutoffs = self.stats.beta_cutoffs,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "search complete"
        );

        Ok(SearchResult {
            best_move,
            score,
            depth,
            nodes: self.nodes,
            stats: self.stats.clone(),
        })
    }

    /// Root-level search with full alpha-beta window.
    fn search_root(&mut self, board: &mut Board, side: Side, depth: u8) -> Result<(Pos, i32)> {
        let moves = candidate_cells(board);
        let Some(&first) = moves.first() else {
            return Err(GameError::NoMovesAvailable);
        };

        let mut best_move = first;
        let mut best_score = -INF;
        let mut alpha = -INF;
        let beta = INF;

        self.nodes += 1;
        for &mov in &moves {
            board.place_stone(mov, side);
            let score = -self.alpha_beta(board, side.opponent(), depth - 1, -beta, -alpha, mov);
            board.clear_stone(mov);

            // Strict comparison keeps the first of equally scored moves
            if score > best_score {
                best_score = score;
                best_move = mov;
            }
            alpha = alpha.max(score);
        }

        Ok((best_move, best_score))
    }

    /// Negamax alpha-beta below the root.
    ///
    /// `side` is to move; `last_move` is the opponent's stone that produced
    /// this node. Returns the score from `side`'s perspective.
    fn alpha_beta(
        &mut self,
        board: &mut Board,
        side: Side,
        depth: u8,
        mut alpha: i32,
        beta: i32,
        last_move: Pos,
    ) -> i32 {
        self.nodes += 1;

        // Terminal: opponent just completed a run. More remaining depth
        // means the win came sooner, so it scores further from zero.
        if winning_move_at(board, side.opponent(), last_move) {
            self.stats.terminal_hits += 1;
            return -(RunScore::WIN + i32::from(depth));
        }

        if board.is_full() {
            return 0;
        }

        if depth == 0 {
            self.stats.leaf_evals += 1;
            return evaluate(board, side);
        }

        let moves = candidate_cells(board);
        let mut best_score = -INF;

        for (i, &mov) in moves.iter().enumerate() {
            board.place_stone(mov, side);
            let score = -self.alpha_beta(board, side.opponent(), depth - 1, -beta, -alpha, mov);
            board.clear_stone(mov);

            best_score = best_score.max(score);
            alpha = alpha.max(score);
            if alpha >= beta {
                self.stats.beta_cutoffs += 1;
                if i == 0 {
                    self.stats.first_move_cutoffs += 1;
                }
                break;
            }
        }

        best_score
    }
}
