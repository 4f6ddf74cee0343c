//! Game session: the boundary between a front end and the core
//!
//! A session owns the committed board of one game. Human and AI moves go
//! through the same validated commit path (`apply_move`); the AI entry
//! points only suggest a move and never commit it themselves.
//!
//! The session does not enforce turn order. Callers pass the side for every
//! call; `next_side` derives the conventional alternation from the history
//! for front ends that want it.

use tracing::{debug, info, instrument};

use crate::board::{Board, Pos, Side};
use crate::config::{GameConfig, Opponent};
use crate::engine::AIEngine;
use crate::error::{GameError, Result};
use crate::movegen::{all_open_cells, candidate_cells};
use crate::rules::{winning_line_at, winning_move_at};

/// State of the game after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won(Side),
    /// Board full with no winning run
    Drawn,
}

impl Outcome {
    #[inline]
    pub fn is_over(self) -> bool {
        self != Outcome::InProgress
    }

    #[inline]
    pub fn winner(self) -> Option<Side> {
        match self {
            Outcome::Won(side) => Some(side),
            _ => None,
        }
    }
}

/// One game in progress.
///
/// # Example
///
/// ```
/// use gomoku::{GameSession, Outcome, Side};
///
/// let mut game = GameSession::new(5, 5).unwrap();
/// for col in 0..4 {
///     assert_eq!(game.apply_move(Side::Black, 0, col).unwrap(), Outcome::InProgress);
/// }
/// assert_eq!(game.apply_move(Side::Black, 0, 4).unwrap(), Outcome::Won(Side::Black));
/// ```
#[derive(Debug)]
pub struct GameSession {
    board: Board,
    config: GameConfig,
    engine: AIEngine,
    history: Vec<(Pos, Side)>,
    outcome: Outcome,
}

impl GameSession {
    /// Start a game on an empty `size`x`size` board, other settings defaulted.
    pub fn new(size: usize, win_length: usize) -> Result<Self> {
        Self::from_config(GameConfig::new(size, win_length))
    }

    /// Start a game from a full configuration.
    pub fn from_config(config: GameConfig) -> Result<Self> {
        config.validate()?;
        let board = Board::with_rule(config.size, config.win_length, config.win_rule)?;
        let engine = AIEngine::from_game_config(&config);
        debug!(size = config.size, win_length = config.win_length, "new game");
        Ok(Self {
            board,
            config,
            engine,
            history: Vec::new(),
            outcome: Outcome::InProgress,
        })
    }

    /// Validate and commit a move, returning the resulting outcome.
    ///
    /// Bounds and occupancy are checked before anything changes; a rejected
    /// move has no effect. Moves after the game is decided are rejected with
    /// `GameOver`.
    #[instrument(skip(self), level = "debug")]
    pub fn apply_move(&mut self, side: Side, row: usize, col: usize) -> Result<Outcome> {
        if self.outcome.is_over() {
            return Err(GameError::GameOver);
        }
        let pos = self.board.pos(row, col)?;
        self.board.place(pos, side)?;
        self.history.push((pos, side));

        self.outcome = if winning_move_at(&self.board, side, pos) {
            Outcome::Won(side)
        } else if self.board.is_full() {
            Outcome::Drawn
        } else {
            Outcome::InProgress
        };

        debug!(?side, %pos, moves = self.history.len(), "move committed");
        if self.outcome.is_over() {
            info!(outcome = ?self.outcome, moves = self.history.len(), "game over");
        }
        Ok(self.outcome)
    }

    /// Search for `side`'s best move at `depth` plies. Does not commit it.
    #[instrument(skip(self), level = "debug")]
    pub fn request_ai_move(&mut self, side: Side, depth: u8) -> Result<Pos> {
        if matches!(self.outcome, Outcome::Won(_)) {
            return Err(GameError::GameOver);
        }
        let result = self.engine.search_at_depth(&self.board, side, depth)?;
        debug!(
            best_move = %result.best_move,
            score = result.score,
            search_type = ?result.search_type,
            nodes = result.nodes,
            time_ms = result.time_ms,
            "ai move"
        );
        Ok(result.best_move)
    }

    /// Uniformly random open cell. Does not commit it.
    pub fn request_random_move(&mut self) -> Result<Pos> {
        if matches!(self.outcome, Outcome::Won(_)) {
            return Err(GameError::GameOver);
        }
        Ok(self.engine.random_move(&self.board)?.best_move)
    }

    /// Move suggested by the configured opponent for `side`.
    ///
    /// `None` when the opponent is human.
    pub fn opponent_move(&mut self, side: Side) -> Result<Option<Pos>> {
        match self.config.opponent {
            Opponent::Human => Ok(None),
            Opponent::Random => self.request_random_move().map(Some),
            Opponent::Minimax => self.request_ai_move(side, self.config.depth).map(Some),
        }
    }

    /// Every open cell, for validating human input.
    pub fn available_moves(&self) -> Vec<Pos> {
        all_open_cells(&self.board)
    }

    /// Open cells next to a stone (the moves the AI considers).
    pub fn candidate_moves(&self) -> Vec<Pos> {
        candidate_cells(&self.board)
    }

    /// Side expected to move next if turns alternate from Black.
    pub fn next_side(&self) -> Side {
        if self.history.len() % 2 == 0 {
            Side::Black
        } else {
            Side::White
        }
    }

    /// Stones of the winning run, once the game is won.
    pub fn winning_line(&self) -> Option<Vec<Pos>> {
        let side = self.outcome.winner()?;
        let (pos, _) = *self.history.last()?;
        winning_line_at(&self.board, side, pos)
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Committed moves in play order
    pub fn history(&self) -> &[(Pos, Side)] {
        &self.history
    }

    pub fn last_move(&self) -> Option<(Pos, Side)> {
        self.history.last().copied()
    }

    pub fn move_count(&self) -> usize {
        self.history.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Stone;

    #[test]
    fn test_new_game() {
        let game = GameSession::new(15, 5).unwrap();
        assert_eq!(game.outcome(), Outcome::InProgress);
        assert_eq!(game.available_moves().len(), 225);
        assert_eq!(game.next_side(), Side::Black);
        assert!(game.last_move().is_none());
    }

    #[test]
    fn test_new_game_rejects_bad_config() {
        assert!(matches!(GameSession::new(5, 6), Err(GameError::InvalidConfig { .. })));
        assert!(matches!(GameSession::new(0, 0), Err(GameError::InvalidConfig { .. })));
    }

    #[test]
    fn test_apply_move_records_history() {
        let mut game = GameSession::new(9, 5).unwrap();
        game.apply_move(Side::Black, 4, 4).unwrap();
        game.apply_move(Side::White, 4, 5).unwrap();

        assert_eq!(game.move_count(), 2);
        assert_eq!(game.history()[0], (Pos::new(4, 4), Side::Black));
        assert_eq!(game.last_move(), Some((Pos::new(4, 5), Side::White)));
        assert_eq!(game.board().get(Pos::new(4, 5)), Stone::White);
        assert_eq!(game.next_side(), Side::Black);
    }

    #[test]
    fn test_rejected_moves_have_no_effect() {
        let mut game = GameSession::new(5, 4).unwrap();
        game.apply_move(Side::Black, 2, 2).unwrap();
        let before = game.board().clone();

        assert_eq!(
            game.apply_move(Side::White, 2, 2).unwrap_err(),
            GameError::CellOccupied { row: 2, col: 2 }
        );
        assert_eq!(
            game.apply_move(Side::White, 5, 0).unwrap_err(),
            GameError::OutOfBounds { row: 5, col: 0, size: 5 }
        );
        assert_eq!(
            game.apply_move(Side::White, 0, 300).unwrap_err(),
            GameError::OutOfBounds { row: 0, col: 300, size: 5 }
        );
        assert_eq!(game.board(), &before);
        assert_eq!(game.move_count(), 1);
    }

    #[test]
    fn test_moves_after_win_rejected() {
        let mut game = GameSession::new(5, 2).unwrap();
        game.apply_move(Side::Black, 0, 0).unwrap();
        assert_eq!(game.apply_move(Side::Black, 0, 1).unwrap(), Outcome::Won(Side::Black));
        assert_eq!(game.apply_move(Side::White, 3, 3).unwrap_err(), GameError::GameOver);
        assert_eq!(game.request_ai_move(Side::White, 1).unwrap_err(), GameError::GameOver);
        assert_eq!(game.winning_line(), Some(vec![Pos::new(0, 0), Pos::new(0, 1)]));
    }

    #[test]
    fn test_request_ai_move_does_not_commit() {
        let mut game = GameSession::new(9, 5).unwrap();
        game.apply_move(Side::Black, 4, 4).unwrap();

        let mov = game.request_ai_move(Side::White, 2).unwrap();
        assert_eq!(game.move_count(), 1);
        assert!(game.candidate_moves().contains(&mov));

        let outcome = game.apply_move(Side::White, mov.row as usize, mov.col as usize).unwrap();
        assert_eq!(outcome, Outcome::InProgress);
    }

    #[test]
    fn test_available_moves_idempotent() {
        let mut game = GameSession::new(7, 4).unwrap();
        game.apply_move(Side::Black, 3, 3).unwrap();
        assert_eq!(game.available_moves(), game.available_moves());
        assert_eq!(game.available_moves().len(), 48);
    }

    #[test]
    fn test_opponent_move_by_kind() {
        let human = GameConfig::new(7, 4).with_opponent(Opponent::Human);
        let mut game = GameSession::from_config(human).unwrap();
        assert_eq!(game.opponent_move(Side::White).unwrap(), None);

        let random = GameConfig::new(7, 4).with_opponent(Opponent::Random).with_seed(3);
        let mut game = GameSession::from_config(random).unwrap();
        let mov = game.opponent_move(Side::White).unwrap().unwrap();
        assert!(game.available_moves().contains(&mov));

        let minimax = GameConfig::new(7, 4).with_opponent(Opponent::Minimax).with_depth(1);
        let mut game = GameSession::from_config(minimax).unwrap();
        assert_eq!(game.opponent_move(Side::Black).unwrap(), Some(Pos::new(3, 3)));
    }
}
