use crate::attacks::{bishop_attacks, king_attacks, knight_attacks, queen_attacks, rook_attacks};
use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::chess_move::Move;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use super::MoveList;

const NON_PAWNS: [PieceKind; 5] = [
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::King,
];

fn attacks_from(kind: PieceKind, sq: Square, occupied: Bitboard) -> Bitboard {
    match kind {
        PieceKind::Knight => knight_attacks(sq),
        PieceKind::Bishop => bishop_attacks(sq, occupied),
        PieceKind::Rook => rook_attacks(sq, occupied),
        PieceKind::Queen => queen_attacks(sq, occupied),
        PieceKind::King => king_attacks(sq),
        PieceKind::Pawn => Bitboard::EMPTY,
    }
}

/// Knight, slider and king-step moves.
pub(super) fn gen_pieces(board: &Board, list: &mut MoveList) {
    let us = board.side_to_move();
    let own = board.side(us);
    let them = board.side(us.flip());
    let occupied = board.occupied();

    for kind in NON_PAWNS {
        let piece = Piece::new(kind, us);
        for source in board.pieces(piece) {
            for target in attacks_from(kind, source, occupied) & !own {
                let mv = Move::new(source, target, piece);
                list.push(if them.contains(target) { mv.with_capture() } else { mv });
            }
        }
    }
}
