//! Board representation for Gomoku

pub mod board;


use serde::{Deserialize, Serialize};

// Re-exports
pub use board::Board;

/// Largest supported board dimension
pub const MAX_BOARD_SIZE: usize = 32;
/// Board size used by the classic game (15x15)
pub const DEFAULT_BOARD_SIZE: usize = 15;
/// Run length needed to win in the classic game
pub const DEFAULT_WIN_LENGTH: usize = 5;

/// One of the two players. Black moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Black,
    White,
}

impl Side {
    /// Get opponent side
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }
}

/// Occupant of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Stone {
    #[default]
    Empty,
    Black,
    White,
}

impl Stone {
    /// Side owning this stone, `None` for an empty cell
    #[inline]
    pub fn side(self) -> Option<Side> {
        match self {
            Stone::Black => Some(Side::Black),
            Stone::White => Some(Side::White),
            Stone::Empty => None,
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Stone::Empty
    }
}

impl From<Side> for Stone {
    #[inline]
    fn from(side: Side) -> Self {
        match side {
            Side::Black => Stone::Black,
            Side::White => Stone::White,
        }
    }
}

/// Position on the board.
///
/// Whether a position lies on a given board is checked by the board itself,
/// since the dimension is chosen per game. Ordering is row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub fn to_index(self, size: usize) -> usize {
        self.row as usize * size + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize, size: usize) -> Self {
        Self {
            row: (idx / size) as u8,
            col: (idx % size) as u8,
        }
    }

    /// Neighbouring position offset by `(dr, dc)`, or `None` when it falls
    /// outside a `size`x`size` board.
    #[inline]
    pub fn offset(self, dr: i32, dc: i32, size: usize) -> Option<Pos> {
        let r = i32::from(self.row) + dr;
        let c = i32::from(self.col) + dc;
        if r >= 0 && c >= 0 && (r as usize) < size && (c as usize) < size {
            Some(Pos::new(r as u8, c as u8))
        } else {
            None
        }
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
