//! Static evaluation: material plus piece-square tables.

pub mod material;
pub mod pst;

use skewer_core::{Board, Color, Piece};

/// Evaluate `board` in centipawns from the side to move's point of view.
pub fn evaluate(board: &Board) -> i32 {
    let mut white = 0;
    for piece in Piece::ALL {
        let sign = match piece.color() {
            Color::White => 1,
            Color::Black => -1,
        };
        for sq in board.pieces(piece) {
            white += sign * (material::value(piece.kind()) + pst::value(piece, sq));
        }
    }
    match board.side_to_move() {
        Color::White => white,
        Color::Black => -white,
    }
}
