//! The chess board: twelve piece bitboards plus cached occupancies and game state.

use std::fmt;

use crate::attacks;
use crate::bitboard::Bitboard;
use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

const BACK_RANKS: Bitboard = Bitboard::new(0xFF00_0000_0000_00FF);
const BOTH: usize = 2;

const BACK_RANK_ORDER: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Complete position state. `Copy`, so snapshots are a plain assignment.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    /// One bitboard per piece, indexed by [`Piece::index()`].
    bitboards: [Bitboard; Piece::COUNT],
    /// White, Black, and both.
    occupancies: [Bitboard; 3],
    side_to_move: Color,
    en_passant: Option<Square>,
    castling: CastleRights,
    halfmove_clock: u16,
    fullmove_number: u16,
}

impl Board {
    /// A board with no pieces, White to move.
    pub(crate) const fn empty() -> Board {
        Board {
            bitboards: [Bitboard::EMPTY; Piece::COUNT],
            occupancies: [Bitboard::EMPTY; 3],
            side_to_move: Color::White,
            en_passant: None,
            castling: CastleRights::NONE,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// The standard starting position.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for (file, kind) in BACK_RANK_ORDER.into_iter().enumerate() {
            let file = file as u8;
            board.put(Square::from_coords(file, 0), Piece::new(kind, Color::White));
            board.put(Square::from_coords(file, 1), Piece::WHITE_PAWN);
            board.put(Square::from_coords(file, 6), Piece::BLACK_PAWN);
            board.put(Square::from_coords(file, 7), Piece::new(kind, Color::Black));
        }
        board.castling = CastleRights::ALL;
        board
    }

    /// The piece on `sq`, if any.
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        if !self.occupancies[BOTH].contains(sq) {
            return None;
        }
        let range = if self.occupancies[Color::White.index()].contains(sq) {
            0..6
        } else {
            6..12
        };
        Piece::ALL[range]
            .iter()
            .copied()
            .find(|piece| self.bitboards[piece.index()].contains(sq))
    }

    /// Squares holding `piece`.
    #[inline]
    pub fn pieces(&self, piece: Piece) -> Bitboard {
        self.bitboards[piece.index()]
    }

    /// Squares holding any piece of `color`.
    #[inline]
    pub fn side(&self, color: Color) -> Bitboard {
        self.occupancies[color.index()]
    }

    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.occupancies[BOTH]
    }

    /// The king of `color`, `None` only on a board that failed validation.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces(Piece::new(PieceKind::King, color)).lsb()
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling(&self) -> CastleRights {
        self.castling
    }

    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    /// Whether any piece of color `by` attacks `sq` on the current occupancy.
    pub fn is_square_attacked(&self, sq: Square, by: Color) -> bool {
        let occupied = self.occupied();
        let piece = |kind| self.pieces(Piece::new(kind, by));

        // A pawn of `by` attacks `sq` iff a pawn of the other color on `sq`
        // would attack the pawn's square.
        if (attacks::pawn_attacks(by.flip(), sq) & piece(PieceKind::Pawn)).is_nonempty() {
            return true;
        }
        if (attacks::knight_attacks(sq) & piece(PieceKind::Knight)).is_nonempty() {
            return true;
        }
        if (attacks::king_attacks(sq) & piece(PieceKind::King)).is_nonempty() {
            return true;
        }
        let queens = piece(PieceKind::Queen);
        if (attacks::bishop_attacks(sq, occupied) & (piece(PieceKind::Bishop) | queens))
            .is_nonempty()
        {
            return true;
        }
        (attacks::rook_attacks(sq, occupied) & (piece(PieceKind::Rook) | queens)).is_nonempty()
    }

    /// Whether the king of `color` is attacked.
    pub fn is_king_attacked(&self, color: Color) -> bool {
        self.king_square(color)
            .is_some_and(|king| self.is_square_attacked(king, color.flip()))
    }

    /// Whether the side to move is in check.
    #[inline]
    pub fn in_check(&self) -> bool {
        self.is_king_attacked(self.side_to_move)
    }

    /// Check the structural rules every searchable board satisfies.
    pub fn validate(&self) -> Result<(), BoardError> {
        for color in Color::ALL {
            let count = self.pieces(Piece::new(PieceKind::King, color)).count();
            if count != 1 {
                let color = match color {
                    Color::White => "white",
                    Color::Black => "black",
                };
                return Err(BoardError::InvalidKingCount { color, count });
            }
        }

        let pawns = self.pieces(Piece::WHITE_PAWN) | self.pieces(Piece::BLACK_PAWN);
        if (pawns & BACK_RANKS).is_nonempty() {
            return Err(BoardError::PawnsOnBackRank);
        }

        if self.is_king_attacked(self.side_to_move.flip()) {
            return Err(BoardError::OpponentInCheck);
        }

        Ok(())
    }

    /// Place `piece` on an empty `sq`.
    #[inline]
    pub(crate) fn put(&mut self, sq: Square, piece: Piece) {
        debug_assert!(!self.occupied().contains(sq), "{sq} already occupied");
        self.bitboards[piece.index()] = self.bitboards[piece.index()].with(sq);
        self.occupancies[piece.color().index()] = self.occupancies[piece.color().index()].with(sq);
        self.occupancies[BOTH] = self.occupancies[BOTH].with(sq);
    }

    /// Lift `piece` off `sq`.
    #[inline]
    pub(crate) fn remove(&mut self, sq: Square, piece: Piece) {
        debug_assert!(self.pieces(piece).contains(sq), "{piece} not on {sq}");
        self.bitboards[piece.index()] = self.bitboards[piece.index()].without(sq);
        self.occupancies[piece.color().index()] =
            self.occupancies[piece.color().index()].without(sq);
        self.occupancies[BOTH] = self.occupancies[BOTH].without(sq);
    }

    #[inline]
    pub(crate) fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    #[inline]
    pub(crate) fn set_en_passant(&mut self, sq: Option<Square>) {
        self.en_passant = sq;
    }

    #[inline]
    pub(crate) fn set_castling(&mut self, rights: CastleRights) {
        self.castling = rights;
    }

    #[inline]
    pub(crate) fn set_halfmove_clock(&mut self, clock: u16) {
        self.halfmove_clock = clock;
    }

    #[inline]
    pub(crate) fn set_fullmove_number(&mut self, number: u16) {
        self.fullmove_number = number;
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{self}\")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_position_validates() {
        assert!(Board::starting_position().validate().is_ok());
    }

    #[test]
    fn starting_position_piece_on() {
        let board = Board::starting_position();
        assert_eq!(board.piece_on(Square::E1), Some(Piece::WHITE_KING));
        assert_eq!(board.piece_on(Square::D8), Some(Piece::BLACK_QUEEN));
        assert_eq!(board.piece_on(Square::G7), Some(Piece::BLACK_PAWN));
        assert_eq!(board.piece_on(Square::E4), None);
    }

    #[test]
    fn occupancies_are_consistent() {
        let board = Board::starting_position();
        assert_eq!(board.occupied().count(), 32);
        assert_eq!(board.side(Color::White).count(), 16);
        assert_eq!(
            board.side(Color::White) | board.side(Color::Black),
            board.occupied()
        );
    }

    #[test]
    fn king_square() {
        let board = Board::starting_position();
        assert_eq!(board.king_square(Color::White), Some(Square::E1));
        assert_eq!(board.king_square(Color::Black), Some(Square::E8));
        assert_eq!(Board::empty().king_square(Color::White), None);
    }

    #[test]
    fn put_and_remove() {
        let mut board = Board::empty();
        board.put(Square::D4, Piece::BLACK_KNIGHT);
        assert_eq!(board.piece_on(Square::D4), Some(Piece::BLACK_KNIGHT));
        assert!(board.side(Color::Black).contains(Square::D4));
        board.remove(Square::D4, Piece::BLACK_KNIGHT);
        assert_eq!(board.piece_on(Square::D4), None);
        assert!(board.occupied().is_empty());
    }

    #[test]
    fn attacks_in_starting_position() {
        let board = Board::starting_position();
        assert!(board.is_square_attacked(Square::F3, Color::White));
        assert!(board.is_square_attacked(Square::E3, Color::White));
        assert!(!board.is_square_attacked(Square::E4, Color::White));
        assert!(board.is_square_attacked(Square::F6, Color::Black));
        assert!(!board.in_check());
    }

    #[test]
    fn slider_attacks_blocked() {
        let mut board = Board::empty();
        board.put(Square::A1, Piece::WHITE_ROOK);
        board.put(Square::A4, Piece::BLACK_PAWN);
        assert!(board.is_square_attacked(Square::A3, Color::White));
        assert!(board.is_square_attacked(Square::A4, Color::White));
        assert!(!board.is_square_attacked(Square::A5, Color::White));
    }

    #[test]
    fn validate_rejects_missing_king() {
        let mut board = Board::starting_position();
        board.remove(Square::E8, Piece::BLACK_KING);
        assert_eq!(
            board.validate(),
            Err(BoardError::InvalidKingCount { color: "black", count: 0 })
        );
    }

    #[test]
    fn validate_rejects_back_rank_pawn() {
        let mut board = Board::starting_position();
        board.remove(Square::A1, Piece::WHITE_ROOK);
        board.put(Square::A1, Piece::WHITE_PAWN);
        assert_eq!(board.validate(), Err(BoardError::PawnsOnBackRank));
    }
}
