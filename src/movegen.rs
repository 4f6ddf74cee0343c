//! Move generation
//!
//! Two pure snapshots over the same board: every open cell, and the pruned
//! candidate set of open cells touching at least one stone. Both are
//! returned in row-major order, which the search relies on for
//! deterministic tie-breaking. Neither tracks later board mutation.

use crate::board::{Board, Pos};

/// Every empty cell, row-major.
#[must_use]
pub fn all_open_cells(board: &Board) -> Vec<Pos> {
    board
        .iter()
        .filter(|(_, stone)| stone.is_empty())
        .map(|(pos, _)| pos)
        .collect()
}

/// Empty cells with at least one occupied cell among their 8 neighbours.
///
/// On an empty board there is nothing to be adjacent to, so the central
/// cell (odd sizes) or the four central cells (even sizes) are returned
/// instead.
#[must_use]
pub fn candidate_cells(board: &Board) -> Vec<Pos> {
    if board.is_board_empty() {
        return center_cells(board.size());
    }

    let size = board.size();
    let mut near = vec![false; size * size];

    for (pos, stone) in board.iter() {
        if stone.is_empty() {
            continue;
        }
        for dr in -1i32..=1 {
            for dc in -1i32..=1 {
                if let Some(n) = pos.offset(dr, dc, size) {
                    near[n.to_index(size)] = true;
                }
            }
        }
    }

    board
        .iter()
        .filter(|&(pos, stone)| stone.is_empty() && near[pos.to_index(size)])
        .map(|(pos, _)| pos)
        .collect()
}

/// Seed moves for an empty board.
fn center_cells(size: usize) -> Vec<Pos> {
    let mid = (size / 2) as u8;
    if size % 2 == 1 {
        vec![Pos::new(mid, mid)]
    } else {
        vec![
            Pos::new(mid - 1, mid - 1),
            Pos::new(mid - 1, mid),
            Pos::new(mid, mid - 1),
            Pos::new(mid, mid),
        ]
    }
}
