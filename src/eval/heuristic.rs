//! Heuristic evaluation function for N-in-a-row board positions
//!
//! This module provides the leaf evaluation for the minimax search.
//! Every maximal run of 2..win_length-1 stones contributes a weight that
//! grows with its length, halved when one end is blocked by the opponent or
//! the board edge, and zero when both ends are blocked.

use crate::board::{Board, Pos, Side, Stone};
use crate::rules::DIRECTIONS;

use super::patterns::RunScore;

/// Evaluate the board from the perspective of the given side.
///
/// Returns a score where:
/// - Positive values indicate advantage for `side`
/// - Negative values indicate disadvantage for `side`
///
/// Symmetric: `evaluate(board, Black) == -evaluate(board, White)`, which the
/// negamax search relies on.
#[must_use]
pub fn evaluate(board: &Board, side: Side) -> i32 {
    score_side(board, side) - score_side(board, side.opponent())
}

/// Sum of run weights for one side, ignoring the opponent's runs.
///
/// Each run is counted once per axis, from its first stone.
#[must_use]
pub fn score_side(board: &Board, side: Side) -> i32 {
    let stone = Stone::from(side);
    let mut score = 0i32;

    for (pos, cell) in board.iter() {
        if cell != stone {
            continue;
        }
        for &(dr, dc) in &DIRECTIONS {
            score = score.saturating_add(evaluate_line(board, pos, dr, dc, stone));
        }
    }

    score
}

/// Evaluate the run starting at `pos` along `(dr, dc)`.
///
/// Returns 0 unless `pos` is the first stone of its run in that direction.
fn evaluate_line(board: &Board, pos: Pos, dr: i32, dc: i32, stone: Stone) -> i32 {
    let size = board.size();
    let before = pos.offset(-dr, -dc, size);
    if before.is_some_and(|p| board.get(p) == stone) {
        return 0; // Not the start of this run
    }

    let mut len = 1usize;
    let mut after = pos.offset(dr, dc, size);
    while let Some(p) = after {
        if board.get(p) != stone {
            break;
        }
        len += 1;
        after = p.offset(dr, dc, size);
    }

    // Runs at or past the win length are handled by terminal detection
    if len >= board.win_length() {
        return 0;
    }

    let open = |end: Option<Pos>| u8::from(end.is_some_and(|p| board.is_empty(p)));
    RunScore::score(len, open(before) + open(after))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_empty_board() {
        let board = Board::new(15, 5).unwrap();
        assert_eq!(evaluate(&board, Side::Black), 0, "Empty board should have score 0");
    }

    #[test]
    fn test_single_stones_score_nothing() {
        let mut board = Board::new(15, 5).unwrap();
        board.place_stone(Pos::new(7, 7), Side::Black);
        board.place_stone(Pos::new(0, 0), Side::White);
        assert_eq!(evaluate(&board, Side::Black), 0);
    }

    #[test]
    fn test_open_two() {
        let mut board = Board::new(15, 5).unwrap();
        board.place_stone(Pos::new(7, 7), Side::Black);
        board.place_stone(Pos::new(7, 8), Side::Black);
        assert_eq!(score_side(&board, Side::Black), RunScore::run_weight(2));
    }

    #[test]
    fn test_edge_blocks_one_end() {
        let mut board = Board::new(15, 5).unwrap();
        for c in 0..3 {
            board.place_stone(Pos::new(4, c), Side::Black);
        }
        assert_eq!(score_side(&board, Side::Black), RunScore::run_weight(3) / 2);
    }

    #[test]
    fn test_opponent_blocks_one_end() {
        let mut board = Board::new(15, 5).unwrap();
        for c in 3..6 {
            board.place_stone(Pos::new(4, c), Side::Black);
        }
        board.place_stone(Pos::new(4, 6), Side::White);
        assert_eq!(score_side(&board, Side::Black), RunScore::run_weight(3) / 2);
    }

    #[test]
    fn test_dead_run_scores_zero() {
        let mut board = Board::new(15, 5).unwrap();
        board.place_stone(Pos::new(4, 2), Side::White);
        board.place_stone(Pos::new(4, 3), Side::Black);
        board.place_stone(Pos::new(4, 4), Side::Black);
        board.place_stone(Pos::new(4, 5), Side::White);
        assert_eq!(score_side(&board, Side::Black), 0);
    }

    #[test]
    fn test_longer_run_worth_more() {
        let mut three = Board::new(15, 5).unwrap();
        let mut four = Board::new(15, 5).unwrap();
        for c in 5..8 {
            three.place_stone(Pos::new(7, c), Side::Black);
            four.place_stone(Pos::new(7, c), Side::Black);
        }
        four.place_stone(Pos::new(7, 8), Side::Black);
        assert!(evaluate(&four, Side::Black) > evaluate(&three, Side::Black));
    }

    #[test]
    fn test_evaluation_is_symmetric() {
        let mut board = Board::new(15, 5).unwrap();
        board.place_stone(Pos::new(7, 7), Side::Black);
        board.place_stone(Pos::new(8, 8), Side::Black);
        board.place_stone(Pos::new(7, 8), Side::White);
        board.place_stone(Pos::new(6, 8), Side::White);
        board.place_stone(Pos::new(5, 8), Side::White);
        assert_eq!(evaluate(&board, Side::Black), -evaluate(&board, Side::White));
        assert!(evaluate(&board, Side::White) > 0);
    }

    #[test]
    fn test_win_length_run_not_scored() {
        let mut board = Board::new(15, 5).unwrap();
        for c in 2..7 {
            board.place_stone(Pos::new(7, c), Side::Black);
        }
        assert_eq!(score_side(&board, Side::Black), 0);
    }
}
