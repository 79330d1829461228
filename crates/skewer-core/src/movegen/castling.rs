use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::castle_rights::CastleRights;
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece::Piece;
use crate::square::Square;

use super::MoveList;

struct CastlingPath {
    right: CastleRights,
    king_from: Square,
    king_to: Square,
    rook_from: Square,
    /// Squares that must be empty.
    empty: Bitboard,
    /// Squares the king stands on or crosses, which must not be attacked.
    safe: [Square; 2],
}

const WHITE_PATHS: [CastlingPath; 2] = [
    CastlingPath {
        right: CastleRights::WHITE_KING,
        king_from: Square::E1,
        king_to: Square::G1,
        rook_from: Square::H1,
        empty: Square::F1.bitboard().with(Square::G1),
        safe: [Square::E1, Square::F1],
    },
    CastlingPath {
        right: CastleRights::WHITE_QUEEN,
        king_from: Square::E1,
        king_to: Square::C1,
        rook_from: Square::A1,
        empty: Square::B1.bitboard().with(Square::C1).with(Square::D1),
        safe: [Square::E1, Square::D1],
    },
];

const BLACK_PATHS: [CastlingPath; 2] = [
    CastlingPath {
        right: CastleRights::BLACK_KING,
        king_from: Square::E8,
        king_to: Square::G8,
        rook_from: Square::H8,
        empty: Square::F8.bitboard().with(Square::G8),
        safe: [Square::E8, Square::F8],
    },
    CastlingPath {
        right: CastleRights::BLACK_QUEEN,
        king_from: Square::E8,
        king_to: Square::C8,
        rook_from: Square::A8,
        empty: Square::B8.bitboard().with(Square::C8).with(Square::D8),
        safe: [Square::E8, Square::D8],
    },
];

/// Castling moves. The landing square is checked later, like any other king move.
pub(super) fn gen_castling(board: &Board, list: &mut MoveList) {
    let us = board.side_to_move();
    let (paths, king, rook) = match us {
        Color::White => (&WHITE_PATHS, Piece::WHITE_KING, Piece::WHITE_ROOK),
        Color::Black => (&BLACK_PATHS, Piece::BLACK_KING, Piece::BLACK_ROOK),
    };

    for path in paths {
        let available = board.castling().contains(path.right)
            && board.pieces(king).contains(path.king_from)
            && board.pieces(rook).contains(path.rook_from)
            && (board.occupied() & path.empty).is_empty()
            && path
                .safe
                .iter()
                .all(|&sq| !board.is_square_attacked(sq, us.flip()));
        if available {
            list.push(Move::new(path.king_from, path.king_to, king).with_castling());
        }
    }
}
