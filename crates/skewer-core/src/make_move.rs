//! Applying a pseudo-legal move to a board in place.

use crate::board::Board;
use crate::castle_rights::CastleRights;
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Rook hop for each castling king target.
fn castling_rook(king_target: Square) -> Option<(Square, Square, Piece)> {
    match king_target {
        Square::G1 => Some((Square::H1, Square::F1, Piece::WHITE_ROOK)),
        Square::C1 => Some((Square::A1, Square::D1, Piece::WHITE_ROOK)),
        Square::G8 => Some((Square::H8, Square::F8, Piece::BLACK_ROOK)),
        Square::C8 => Some((Square::A8, Square::D8, Piece::BLACK_ROOK)),
        _ => None,
    }
}

impl Board {
    /// Play `mv` for the side to move without any legality check.
    ///
    /// The move must have been produced by move generation for this exact
    /// board. Leaving one's own king in check is not detected here; the
    /// caller tests [`Board::is_king_attacked`] afterwards.
    pub(crate) fn apply(&mut self, mv: Move) {
        let us = self.side_to_move();
        let piece = mv.piece();
        let source = mv.source();
        let target = mv.target();
        debug_assert_eq!(piece.color(), us, "{mv:?} moves the wrong color");

        self.remove(source, piece);

        if mv.is_en_passant() {
            let victim = Square::from_coords(target.file(), source.rank());
            self.remove(victim, Piece::new(PieceKind::Pawn, us.flip()));
        } else if mv.is_capture() {
            let captured = self.piece_on(target);
            debug_assert!(
                captured.is_some_and(|p| p.color() != us),
                "{mv:?} captures nothing"
            );
            if let Some(captured) = captured {
                self.remove(target, captured);
            }
        }

        self.put(target, mv.promoted().unwrap_or(piece));

        if mv.is_castling() {
            if let Some((from, to, rook)) = castling_rook(target) {
                self.remove(from, rook);
                self.put(to, rook);
            }
        }

        let revoked = CastleRights::revoked_by(source).insert(CastleRights::revoked_by(target));
        self.set_castling(self.castling().remove(revoked));

        let en_passant = mv
            .is_double_push()
            .then(|| Square::from_coords(source.file(), (source.rank() + target.rank()) / 2));
        self.set_en_passant(en_passant);

        if piece.kind() == PieceKind::Pawn || mv.is_capture() {
            self.set_halfmove_clock(0);
        } else {
            self.set_halfmove_clock(self.halfmove_clock().saturating_add(1));
        }
        if us == Color::Black {
            self.set_fullmove_number(self.fullmove_number().saturating_add(1));
        }
        self.set_side_to_move(us.flip());
    }
}
