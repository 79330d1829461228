//! Perft: exhaustive leaf counts for validating move generation and copy-make.

use crate::board::Board;
use crate::position::{MoveMode, Position};

fn perft_inner(position: &mut Position, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = position.generate_moves();
    let mut nodes = 0;
    for &mv in &moves {
        if let Some(mut child) = position.play(mv, MoveMode::AllMoves) {
            nodes += perft_inner(&mut child, depth - 1);
        }
    }
    nodes
}

/// Count the leaf nodes of the legal move tree `depth` plies deep.
pub fn perft(board: &Board, depth: usize) -> u64 {
    perft_inner(&mut Position::new(*board), depth)
}

/// Per-move leaf counts at `depth`, sorted by UCI string.
pub fn divide(board: &Board, depth: usize) -> Vec<(String, u64)> {
    let mut position = Position::new(*board);
    let moves = position.generate_moves();
    let mut results: Vec<(String, u64)> = moves
        .iter()
        .filter_map(|&mv| {
            let mut child = position.play(mv, MoveMode::AllMoves)?;
            let count = perft_inner(&mut child, depth.saturating_sub(1));
            Some((mv.to_uci(), count))
        })
        .collect();
    results.sort();
    results
}
