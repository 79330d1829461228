use crate::attacks::pawn_attacks;
use crate::board::Board;
use crate::chess_move::Move;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;

use super::MoveList;

/// Push `mv`, expanding it into the four promotions when it reaches the last rank.
fn push_pawn_move(list: &mut MoveList, mv: Move, promotes: bool) {
    if promotes {
        let color = mv.piece().color();
        for kind in PieceKind::PROMOTIONS {
            list.push(mv.with_promotion(Piece::new(kind, color)));
        }
    } else {
        list.push(mv);
    }
}

pub(super) fn gen_pawns(board: &Board, list: &mut MoveList) {
    let us = board.side_to_move();
    let pawn = Piece::new(PieceKind::Pawn, us);
    let them = board.side(us.flip());
    let occupied = board.occupied();

    for source in board.pieces(pawn) {
        let Some(target) = source.offset(0, us.forward()) else {
            continue;
        };
        let promotes = target.rank() == us.promotion_rank();

        if !occupied.contains(target) {
            push_pawn_move(list, Move::new(source, target, pawn), promotes);

            if source.rank() == us.pawn_rank() {
                if let Some(double) = target.offset(0, us.forward()) {
                    if !occupied.contains(double) {
                        list.push(Move::new(source, double, pawn).with_double_push());
                    }
                }
            }
        }

        let attacks = pawn_attacks(us, source);
        for target in attacks & them {
            push_pawn_move(list, Move::new(source, target, pawn).with_capture(), promotes);
        }

        if let Some(ep) = board.en_passant() {
            if attacks.contains(ep) {
                list.push(Move::new(source, ep, pawn).with_en_passant());
            }
        }
    }
}
