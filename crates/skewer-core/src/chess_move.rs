//! Moves packed into a `u32`.

use std::fmt;

use crate::piece::Piece;
use crate::square::Square;

const SOURCE_MASK: u32 = 0x0000_003F;
const TARGET_MASK: u32 = 0x0000_0FC0;
const PIECE_MASK: u32 = 0x0000_F000;
const PROMOTED_MASK: u32 = 0x000F_0000;
const TARGET_SHIFT: u32 = 6;
const PIECE_SHIFT: u32 = 12;
const PROMOTED_SHIFT: u32 = 16;
const CAPTURE_FLAG: u32 = 1 << 20;
const DOUBLE_PUSH_FLAG: u32 = 1 << 21;
const EN_PASSANT_FLAG: u32 = 1 << 22;
const CASTLING_FLAG: u32 = 1 << 23;

/// A single ply, carrying everything the search needs to know about it.
///
/// ```text
/// bits  0-5:  source square
/// bits  6-11: target square
/// bits 12-15: moved piece index (0..12)
/// bits 16-19: promoted piece index, 0 when not a promotion
/// bit  20:    capture
/// bit  21:    double pawn push
/// bit  22:    en passant
/// bit  23:    castling
/// ```
///
/// A promotion piece is never a pawn, so index 0 (White pawn) doubles as
/// "no promotion". Equality compares the whole encoding.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Move(u32);

impl Move {
    /// The all-zero sentinel. Move generation never produces it.
    pub const NULL: Move = Move(0);

    /// A quiet move of `piece` from `source` to `target`.
    #[inline]
    pub const fn new(source: Square, target: Square, piece: Piece) -> Move {
        Move(
            source.index() as u32
                | (target.index() as u32) << TARGET_SHIFT
                | (piece.index() as u32) << PIECE_SHIFT,
        )
    }

    #[inline]
    pub const fn with_capture(self) -> Move {
        Move(self.0 | CAPTURE_FLAG)
    }

    #[inline]
    pub const fn with_promotion(self, promoted: Piece) -> Move {
        Move(self.0 & !PROMOTED_MASK | (promoted.index() as u32) << PROMOTED_SHIFT)
    }

    #[inline]
    pub const fn with_double_push(self) -> Move {
        Move(self.0 | DOUBLE_PUSH_FLAG)
    }

    /// Mark as an en passant capture (implies the capture flag).
    #[inline]
    pub const fn with_en_passant(self) -> Move {
        Move(self.0 | EN_PASSANT_FLAG | CAPTURE_FLAG)
    }

    #[inline]
    pub const fn with_castling(self) -> Move {
        Move(self.0 | CASTLING_FLAG)
    }

    #[inline]
    pub const fn source(self) -> Square {
        Square::from_index_unchecked((self.0 & SOURCE_MASK) as u8)
    }

    #[inline]
    pub const fn target(self) -> Square {
        Square::from_index_unchecked(((self.0 & TARGET_MASK) >> TARGET_SHIFT) as u8)
    }

    /// The piece that moves.
    #[inline]
    pub const fn piece(self) -> Piece {
        match Piece::from_index(((self.0 & PIECE_MASK) >> PIECE_SHIFT) as usize) {
            Some(piece) => piece,
            None => Piece::WHITE_PAWN,
        }
    }

    /// The piece a pawn turns into, if this is a promotion.
    #[inline]
    pub const fn promoted(self) -> Option<Piece> {
        match (self.0 & PROMOTED_MASK) >> PROMOTED_SHIFT {
            0 => None,
            index => Piece::from_index(index as usize),
        }
    }

    #[inline]
    pub const fn is_capture(self) -> bool {
        self.0 & CAPTURE_FLAG != 0
    }

    #[inline]
    pub const fn is_double_push(self) -> bool {
        self.0 & DOUBLE_PUSH_FLAG != 0
    }

    #[inline]
    pub const fn is_en_passant(self) -> bool {
        self.0 & EN_PASSANT_FLAG != 0
    }

    #[inline]
    pub const fn is_castling(self) -> bool {
        self.0 & CASTLING_FLAG != 0
    }

    #[inline]
    pub const fn is_null(self) -> bool {
        self.0 == 0
    }

    /// Raw encoding.
    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Long algebraic notation as used by UCI (`e2e4`, `e7e8q`).
    pub fn to_uci(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return write!(f, "0000");
        }
        write!(f, "{}{}", self.source(), self.target())?;
        if let Some(promoted) = self.promoted() {
            write!(f, "{}", promoted.kind().fen_char())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self} {}", self.piece())?;
        if self.is_capture() {
            write!(f, " capture")?;
        }
        if self.is_double_push() {
            write!(f, " double")?;
        }
        if self.is_en_passant() {
            write!(f, " en-passant")?;
        }
        if self.is_castling() {
            write!(f, " castling")?;
        }
        write!(f, ")")
    }
}
