//! Win condition checking for N-in-a-row
//!
//! A move wins when the contiguous run of the mover's stones passing through
//! it, along any of the four axes, satisfies the board's [`WinRule`]. Under
//! the default `Exact` rule the run must be exactly `win_length` long, so an
//! overline (a run of `win_length + 1` or more) does not win.
//!
//! Only the stone just played needs checking: a new winning run can only
//! appear through the most recent placement, which keeps terminal detection
//! at O(win_length) per move.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Pos, Side, Stone};

/// Direction vectors for line checking (4 directions)
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Which run lengths count as a win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WinRule {
    /// Run length must equal `win_length` (overlines do not win)
    #[default]
    Exact,
    /// Any run of at least `win_length` wins
    AtLeast,
}

impl WinRule {
    #[inline]
    pub fn is_win(self, run: usize, win_length: usize) -> bool {
        match self {
            WinRule::Exact => run == win_length,
            WinRule::AtLeast => run >= win_length,
        }
    }
}

/// Count consecutive `stone` cells starting one step from `pos` in `(dr, dc)`.
#[inline]
fn count_direction(board: &Board, pos: Pos, stone: Stone, dr: i32, dc: i32) -> usize {
    let size = board.size();
    let mut count = 0;
    let mut cur = pos.offset(dr, dc, size);
    while let Some(p) = cur {
        if board.get(p) != stone {
            break;
        }
        count += 1;
        cur = p.offset(dr, dc, size);
    }
    count
}

/// Length of the run of `side` stones through `pos` along `(dr, dc)`,
/// counting `pos` itself.
#[inline]
pub fn run_through(board: &Board, pos: Pos, side: Side, dr: i32, dc: i32) -> usize {
    let stone = Stone::from(side);
    1 + count_direction(board, pos, stone, dr, dc) + count_direction(board, pos, stone, -dr, -dc)
}

/// Whether `pos` is on the board and holds a `side` stone.
#[inline]
fn holds(board: &Board, side: Side, pos: Pos) -> bool {
    board.contains(pos.row as usize, pos.col as usize) && board.get(pos).side() == Some(side)
}

/// Check whether the `side` stone at `pos` completes a winning run.
///
/// Returns false when `pos` is off the board or does not hold a `side`
/// stone.
#[must_use]
pub fn winning_move_at(board: &Board, side: Side, pos: Pos) -> bool {
    if !holds(board, side, pos) {
        return false;
    }
    let rule = board.win_rule();
    let win_length = board.win_length();
    DIRECTIONS
        .iter()
        .any(|&(dr, dc)| rule.is_win(run_through(board, pos, side, dr, dc), win_length))
}

/// Positions of the winning run through `pos`, ordered along the line.
pub fn winning_line_at(board: &Board, side: Side, pos: Pos) -> Option<Vec<Pos>> {
    if !holds(board, side, pos) {
        return None;
    }
    let size = board.size();
    let stone = Stone::from(side);
    for &(dr, dc) in &DIRECTIONS {
        if !board.win_rule().is_win(run_through(board, pos, side, dr, dc), board.win_length()) {
            continue;
        }
        // Walk back to the start of the run, then collect forward
        let mut start = pos;
        while let Some(prev) = start.offset(-dr, -dc, size) {
            if board.get(prev) != stone {
                break;
            }
            start = prev;
        }
        let mut line = vec![start];
        let mut cur = start.offset(dr, dc, size);
        while let Some(p) = cur {
            if board.get(p) != stone {
                break;
            }
            line.push(p);
            cur = p.offset(dr, dc, size);
        }
        return Some(line);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(size: usize, win_length: usize, stones: &[(u8, u8)], side: Side) -> Board {
        let mut board = Board::new(size, win_length).unwrap();
        for &(r, c) in stones {
            board.place_stone(Pos::new(r, c), side);
        }
        board
    }

    #[test]
    fn test_five_in_row_horizontal() {
        let board = board_with(15, 5, &[(7, 0), (7, 1), (7, 2), (7, 3), (7, 4)], Side::Black);
        assert!(winning_move_at(&board, Side::Black, Pos::new(7, 4)));
        assert!(winning_move_at(&board, Side::Black, Pos::new(7, 2)));
        assert!(!winning_move_at(&board, Side::White, Pos::new(7, 2)));
    }

    #[test]
    fn test_five_in_row_vertical() {
        let board = board_with(15, 5, &[(0, 9), (1, 9), (2, 9), (3, 9), (4, 9)], Side::White);
        assert!(winning_move_at(&board, Side::White, Pos::new(0, 9)));
    }

    #[test]
    fn test_five_in_row_diagonal() {
        let stones: Vec<(u8, u8)> = (0..5).map(|i| (i, i)).collect();
        let board = board_with(15, 5, &stones, Side::White);
        assert!(winning_move_at(&board, Side::White, Pos::new(2, 2)));
    }

    #[test]
    fn test_diagonal_sw_five() {
        // Diagonal from (4, 8) to (8, 4)
        let stones: Vec<(u8, u8)> = (0..5).map(|i| (4 + i, 8 - i)).collect();
        let board = board_with(15, 5, &stones, Side::Black);
        assert!(winning_move_at(&board, Side::Black, Pos::new(8, 4)));
    }

    #[test]
    fn test_four_in_row_not_win() {
        let board = board_with(15, 5, &[(7, 0), (7, 1), (7, 2), (7, 3)], Side::Black);
        assert!(!winning_move_at(&board, Side::Black, Pos::new(7, 3)));
    }

    #[test]
    fn test_six_in_row_not_win_under_exact_rule() {
        let stones: Vec<(u8, u8)> = (0..6).map(|c| (7, c)).collect();
        let board = board_with(15, 5, &stones, Side::Black);
        assert!(!winning_move_at(&board, Side::Black, Pos::new(7, 5)));
    }

    #[test]
    fn test_six_in_row_wins_under_at_least_rule() {
        let mut board = Board::with_rule(15, 5, WinRule::AtLeast).unwrap();
        for c in 0..6 {
            board.place_stone(Pos::new(7, c), Side::Black);
        }
        assert!(winning_move_at(&board, Side::Black, Pos::new(7, 5)));
    }

    #[test]
    fn test_overline_on_one_axis_exact_on_another() {
        // Six horizontally through (7, 5), exactly five vertically through it
        let mut board = Board::new(15, 5).unwrap();
        for c in 0..6 {
            board.place_stone(Pos::new(7, c), Side::Black);
        }
        for r in 3..7 {
            board.place_stone(Pos::new(r, 5), Side::Black);
        }
        assert!(winning_move_at(&board, Side::Black, Pos::new(7, 5)));
    }

    #[test]
    fn test_run_blocked_by_opponent() {
        let mut board = board_with(15, 5, &[(7, 0), (7, 1), (7, 3), (7, 4)], Side::Black);
        board.place_stone(Pos::new(7, 2), Side::White);
        assert!(!winning_move_at(&board, Side::Black, Pos::new(7, 4)));
        assert_eq!(run_through(&board, Pos::new(7, 4), Side::Black, 0, 1), 2);
    }

    #[test]
    fn test_five_at_corner() {
        let stones: Vec<(u8, u8)> = (0..5).map(|i| (10 + i, 10 + i)).collect();
        let board = board_with(15, 5, &stones, Side::White);
        assert!(winning_move_at(&board, Side::White, Pos::new(14, 14)));
    }

    #[test]
    fn test_empty_cell_never_wins() {
        let board = Board::new(5, 1).unwrap();
        assert!(!winning_move_at(&board, Side::Black, Pos::new(0, 0)));
    }

    #[test]
    fn test_off_board_position_never_wins() {
        // (0, 7) on a 5x5 grid shares its index with (1, 2)
        let board = board_with(5, 1, &[(1, 2)], Side::Black);
        assert!(winning_move_at(&board, Side::Black, Pos::new(1, 2)));
        assert!(!winning_move_at(&board, Side::Black, Pos::new(0, 7)));
        assert!(winning_line_at(&board, Side::Black, Pos::new(0, 7)).is_none());
    }

    #[test]
    fn test_win_length_one() {
        let board = board_with(3, 1, &[(1, 1)], Side::Black);
        assert!(winning_move_at(&board, Side::Black, Pos::new(1, 1)));
    }

    #[test]
    fn test_winning_line_at() {
        let board = board_with(15, 5, &[(3, 6), (4, 6), (5, 6), (6, 6), (7, 6)], Side::Black);
        let line = winning_line_at(&board, Side::Black, Pos::new(5, 6)).unwrap();
        let expected: Vec<Pos> = (3..8).map(|r| Pos::new(r, 6)).collect();
        assert_eq!(line, expected);
        assert!(winning_line_at(&board, Side::White, Pos::new(5, 6)).is_none());
    }
}
