//! Pseudo-legal move generation.
//!
//! Moves may leave the mover's own king in check; [`crate::Position::make_move`]
//! rejects those after playing them.

mod castling;
mod pawns;
mod pieces;

use crate::board::Board;
use crate::chess_move::Move;

use self::castling::gen_castling;
use self::pawns::gen_pawns;
use self::pieces::gen_pieces;

const CAPACITY: usize = 256;

/// Stack-allocated buffer for generated moves. 256 covers the known maximum of 218.
pub struct MoveList {
    moves: [Move; CAPACITY],
    len: u16,
}

impl MoveList {
    pub fn new() -> MoveList {
        MoveList {
            moves: [Move::NULL; CAPACITY],
            len: 0,
        }
    }

    #[inline]
    pub fn push(&mut self, mv: Move) {
        debug_assert!((self.len as usize) < CAPACITY);
        self.moves[self.len as usize] = mv;
        self.len += 1;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len as usize]
    }

    /// Mutable view, used to reorder moves in place.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Move] {
        &mut self.moves[..self.len as usize]
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    pub fn contains(&self, mv: Move) -> bool {
        self.as_slice().contains(&mv)
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;
    #[inline]
    fn index(&self, index: usize) -> &Move {
        &self.as_slice()[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

/// Generate every pseudo-legal move for the side to move.
///
/// Order is fixed: pawn moves, then knights, bishops, rooks, queens, king
/// steps and finally castling, each group by ascending source square.
pub fn generate_moves(board: &Board) -> MoveList {
    let mut list = MoveList::new();
    gen_pawns(board, &mut list);
    gen_pieces(board, &mut list);
    gen_castling(board, &mut list);
    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::Piece;
    use crate::square::Square;

    fn board(fen: &str) -> Board {
        fen.parse().unwrap()
    }

    fn ucis(list: &MoveList) -> Vec<String> {
        list.iter().map(|mv| mv.to_uci()).collect()
    }

    #[test]
    fn starting_position_20_moves() {
        let moves = generate_moves(&Board::starting_position());
        assert_eq!(moves.len(), 20);
        assert!(moves.iter().all(|mv| !mv.is_capture()));
        assert_eq!(
            moves.iter().filter(|mv| mv.is_double_push()).count(),
            8
        );
    }

    #[test]
    fn pawn_moves_come_first() {
        let moves = generate_moves(&Board::starting_position());
        assert_eq!(moves[0].piece(), Piece::WHITE_PAWN);
        assert_eq!(moves[moves.len() - 1].piece(), Piece::WHITE_KNIGHT);
    }

    #[test]
    fn pseudo_legal_includes_pinned_piece_moves() {
        // The e2 knight is pinned by the e8 rook; its moves are still generated.
        let moves = generate_moves(&board("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1"));
        assert_eq!(
            moves.iter().filter(|mv| mv.piece() == Piece::WHITE_KNIGHT).count(),
            6
        );
    }

    #[test]
    fn promotion_generates_4_moves() {
        let moves = generate_moves(&board("8/P6k/8/8/8/8/8/K7 w - - 0 1"));
        let promos: Vec<_> = ucis(&moves)
            .into_iter()
            .filter(|m| m.starts_with("a7a8"))
            .collect();
        assert_eq!(promos, ["a7a8q", "a7a8r", "a7a8b", "a7a8n"]);
    }

    #[test]
    fn en_passant_generated() {
        let moves = generate_moves(&board("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2"));
        let ep = moves.iter().find(|mv| mv.is_en_passant()).copied();
        assert_eq!(
            ep,
            Some(Move::new(Square::E5, Square::D6, Piece::WHITE_PAWN).with_en_passant())
        );
    }

    #[test]
    fn castling_both_sides() {
        let moves = generate_moves(&board("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1"));
        let castles: Vec<_> = moves
            .iter()
            .filter(|mv| mv.is_castling())
            .map(|mv| mv.to_uci())
            .collect();
        assert_eq!(castles, ["e1g1", "e1c1"]);
    }

    #[test]
    fn castling_not_through_attacked_square() {
        // Black rook on f8 covers f1.
        let moves = generate_moves(&board("5rk1/8/8/8/8/8/8/R3K2R w KQ - 0 1"));
        let castles: Vec<_> = moves
            .iter()
            .filter(|mv| mv.is_castling())
            .map(|mv| mv.to_uci())
            .collect();
        assert_eq!(castles, ["e1c1"]);
    }

    #[test]
    fn castling_not_out_of_check() {
        let moves = generate_moves(&board("4r1k1/8/8/8/8/8/8/R3K2R w KQ - 0 1"));
        assert!(moves.iter().all(|mv| !mv.is_castling()));
    }
}
