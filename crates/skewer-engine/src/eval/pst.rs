//! Piece-square tables.
//!
//! Tables are written from White's side in LERF order (index 0 = a1,
//! index 63 = h8). Black squares are mirrored vertically before lookup.

use skewer_core::{Color, Piece, PieceKind, Square};

#[rustfmt::skip]
const PAWN: [i32; 64] = [
      0,   0,   0,   0,   0,   0,   0,   0,
      0,   0,   0, -10, -10,   0,   0,   0,
      0,   0,   0,   5,   5,   0,   0,   0,
      5,   5,  10,  20,  20,   5,   5,   5,
     10,  10,  10,  20,  20,  10,  10,  10,
     20,  20,  20,  30,  30,  30,  20,  20,
     30,  30,  30,  40,  40,  30,  30,  30,
      0,   0,   0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
const KNIGHT: [i32; 64] = [
     -5, -10,   0,   0,   0,   0, -10,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   5,  20,  10,  10,  20,   5,  -5,
     -5,  10,  20,  30,  30,  20,  10,  -5,
     -5,  10,  20,  30,  30,  20,  10,  -5,
     -5,   5,  20,  20,  20,  20,   5,  -5,
     -5,   0,   0,  10,  10,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
];

#[rustfmt::skip]
const BISHOP: [i32; 64] = [
      0,   0, -10,   0,   0, -10,   0,   0,
      0,  30,   0,   0,   0,   0,  30,   0,
      0,  10,   0,   0,   0,   0,  10,   0,
      0,   0,  10,  20,  20,  10,   0,   0,
      0,   0,  10,  20,  20,  10,   0,   0,
      0,   0,   0,  10,  10,   0,   0,   0,
      0,   0,   0,   0,   0,   0,   0,   0,
      0,   0,   0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
const ROOK: [i32; 64] = [
      0,   0,   0,  20,  20,   0,   0,   0,
      0,   0,  10,  20,  20,  10,   0,   0,
      0,   0,  10,  20,  20,  10,   0,   0,
      0,   0,  10,  20,  20,  10,   0,   0,
      0,   0,  10,  20,  20,  10,   0,   0,
      0,   0,  10,  20,  20,  10,   0,   0,
     50,  50,  50,  50,  50,  50,  50,  50,
     50,  50,  50,  50,  50,  50,  50,  50,
];

#[rustfmt::skip]
const QUEEN: [i32; 64] = [
      0,   0,   0,   5,   0,   0,   0,   0,
      0,   0,   5,   5,   5,   5,   0,   0,
      0,   5,   5,   5,   5,   5,   0,   0,
      0,   0,   5,   5,   5,   5,   0,   0,
      0,   0,   5,   5,   5,   5,   0,   0,
      0,   0,   5,   5,   5,   5,   0,   0,
      0,   0,   0,   0,   0,   0,   0,   0,
      0,   0,   0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
const KING: [i32; 64] = [
      0,   0,   5,   0, -15,   0,  10,   0,
      0,   5,   5,  -5,  -5,   0,   5,   0,
      0,   0,   5,  10,  10,   5,   0,   0,
      0,   5,  10,  20,  20,  10,   5,   0,
      0,   5,  10,  20,  20,  10,   5,   0,
      0,   5,   5,  10,  10,   5,   5,   0,
      0,   0,   5,   5,   5,   5,   0,   0,
      0,   0,   0,   0,   0,   0,   0,   0,
];

const TABLES: [&[i32; 64]; PieceKind::COUNT] = [&PAWN, &KNIGHT, &BISHOP, &ROOK, &QUEEN, &KING];

/// Positional bonus for `piece` standing on `sq`, from the piece owner's side.
#[inline]
pub fn value(piece: Piece, sq: Square) -> i32 {
    let index = match piece.color() {
        Color::White => sq.index(),
        Color::Black => sq.index() ^ 56,
    };
    TABLES[piece.kind().index()][index]
}
