//! Material values.

use skewer_core::PieceKind;

/// Centipawn value per [`PieceKind::index()`].
///
/// | Piece  | Value |
/// |--------|-------|
/// | Pawn   |   100 |
/// | Knight |   300 |
/// | Bishop |   350 |
/// | Rook   |   500 |
/// | Queen  |  1000 |
/// | King   | 10000 |
pub const MATERIAL_VALUE: [i32; PieceKind::COUNT] = [100, 300, 350, 500, 1000, 10_000];

#[inline]
pub fn value(kind: PieceKind) -> i32 {
    MATERIAL_VALUE[kind.index()]
}
