//! Board structure with occupancy tracking

use crate::error::{GameError, Result};
use crate::rules::WinRule;

use super::{Pos, Side, Stone, MAX_BOARD_SIZE};

/// Game board: a square occupancy grid plus the win condition it is played
/// under.
///
/// Committed moves are permanent. `clear` exists only so the searcher can
/// undo its own speculative placements (make/unmake).
///
/// The public operations check bounds before touching a cell. The
/// `pub(crate)` ones take positions already known to be on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    win_length: usize,
    win_rule: WinRule,
    /// Row-major cells, `size * size` long
    cells: Vec<Stone>,
    /// Number of occupied cells
    stones: usize,
}

impl Board {
    /// Create an empty board using the exact-length win rule.
    pub fn new(size: usize, win_length: usize) -> Result<Self> {
        Self::with_rule(size, win_length, WinRule::default())
    }

    /// Create an empty board with an explicit win rule.
    pub fn with_rule(size: usize, win_length: usize, win_rule: WinRule) -> Result<Self> {
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(GameError::InvalidConfig {
                message: format!("board size must be in 1..={MAX_BOARD_SIZE}, got {size}"),
            });
        }
        if win_length == 0 || win_length > size {
            return Err(GameError::InvalidConfig {
                message: format!("win length must be in 1..={size}, got {win_length}"),
            });
        }
        Ok(Self {
            size,
            win_length,
            win_rule,
            cells: vec![Stone::Empty; size * size],
            stones: 0,
        })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn win_length(&self) -> usize {
        self.win_length
    }

    #[inline]
    pub fn win_rule(&self) -> WinRule {
        self.win_rule
    }

    /// Check if `(row, col)` lies on the board
    #[inline]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Convert raw coordinates to a position on this board.
    pub fn pos(&self, row: usize, col: usize) -> Result<Pos> {
        if self.contains(row, col) {
            Ok(Pos::new(row as u8, col as u8))
        } else {
            Err(GameError::OutOfBounds { row, col, size: self.size })
        }
    }

    /// Get stone at position. `pos` must lie on the board.
    #[inline]
    pub(crate) fn get(&self, pos: Pos) -> Stone {
        debug_assert!(self.contains(pos.row as usize, pos.col as usize));
        self.cells[pos.to_index(self.size)]
    }

    /// Bounds-checked occupant lookup.
    pub fn at(&self, row: usize, col: usize) -> Result<Stone> {
        let pos = self.pos(row, col)?;
        Ok(self.get(pos))
    }

    /// Check if position is empty
    #[inline]
    pub(crate) fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Stone::Empty
    }

    /// Place a stone after checking bounds and occupancy.
    ///
    /// On error the board is left untouched.
    pub fn place(&mut self, pos: Pos, side: Side) -> Result<()> {
        self.check(pos)?;
        if !self.is_empty(pos) {
            let (row, col) = (pos.row as usize, pos.col as usize);
            return Err(GameError::CellOccupied { row, col });
        }
        self.place_stone(pos, side);
        Ok(())
    }

    /// Place a stone without validation.
    /// Use `place` for moves coming from outside the search.
    #[inline]
    pub(crate) fn place_stone(&mut self, pos: Pos, side: Side) {
        debug_assert!(self.is_empty(pos), "place_stone on occupied cell {pos}");
        self.cells[pos.to_index(self.size)] = Stone::from(side);
        self.stones += 1;
    }

    /// Undo a placement, restoring the cell to empty.
    ///
    /// Clearing an empty cell is a no-op. Fails with `OutOfBounds` when
    /// `pos` is off the board, leaving every cell untouched.
    pub fn clear(&mut self, pos: Pos) -> Result<()> {
        self.check(pos)?;
        self.clear_stone(pos);
        Ok(())
    }

    /// Unchecked `clear` for make/unmake inside the search.
    #[inline]
    pub(crate) fn clear_stone(&mut self, pos: Pos) {
        debug_assert!(self.contains(pos.row as usize, pos.col as usize));
        let idx = pos.to_index(self.size);
        if self.cells[idx] != Stone::Empty {
            self.cells[idx] = Stone::Empty;
            self.stones -= 1;
        }
    }

    fn check(&self, pos: Pos) -> Result<()> {
        let (row, col) = (pos.row as usize, pos.col as usize);
        if self.contains(row, col) {
            Ok(())
        } else {
            Err(GameError::OutOfBounds { row, col, size: self.size })
        }
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.stones
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.stones == 0
    }

    /// True when no empty cell remains
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stones == self.cells.len()
    }

    /// Iterate over every cell in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Pos, Stone)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &stone)| (Pos::from_index(idx, size), stone))
    }
}
