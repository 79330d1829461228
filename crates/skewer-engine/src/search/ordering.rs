//! Move ordering: PV move, MVV-LVA captures, killers, then history.

use std::cmp::Reverse;

use skewer_core::{Board, Move, MoveList, PieceKind};

use crate::search::SearchState;

/// MVV-LVA scores indexed by `[attacker][victim]`.
///
/// Formula: `100 * (victim + 1) + 5 - attacker`, so the most valuable
/// victim dominates and the cheapest attacker breaks ties.
#[rustfmt::skip]
const MVV_LVA: [[i32; PieceKind::COUNT]; PieceKind::COUNT] = [
    // victim: P    N    B    R    Q    K
    [105, 205, 305, 405, 505, 605], // attacker = Pawn
    [104, 204, 304, 404, 504, 604], // attacker = Knight
    [103, 203, 303, 403, 503, 603], // attacker = Bishop
    [102, 202, 302, 402, 502, 602], // attacker = Rook
    [101, 201, 301, 401, 501, 601], // attacker = Queen
    [100, 200, 300, 400, 500, 600], // attacker = King
];

pub(crate) const PV_BONUS: i32 = 20_000;
pub(crate) const CAPTURE_BONUS: i32 = 10_000;
pub(crate) const FIRST_KILLER: i32 = 9_000;
pub(crate) const SECOND_KILLER: i32 = 8_000;

impl SearchState {
    /// Ordering score for `mv` at the current ply. Higher is searched first.
    pub(crate) fn score_move(&self, board: &Board, mv: Move, pv_move: Option<Move>) -> i32 {
        if pv_move == Some(mv) {
            return PV_BONUS;
        }

        if mv.is_capture() {
            let victim = if mv.is_en_passant() {
                PieceKind::Pawn
            } else {
                board
                    .piece_on(mv.target())
                    .map_or(PieceKind::Pawn, |piece| piece.kind())
            };
            return CAPTURE_BONUS + MVV_LVA[mv.piece().kind().index()][victim.index()];
        }

        let ply = self.ply();
        if self.killer(0, ply) == mv {
            FIRST_KILLER
        } else if self.killer(1, ply) == mv {
            SECOND_KILLER
        } else {
            i32::try_from(self.history(mv.piece(), mv.target())).unwrap_or(i32::MAX)
        }
    }

    /// The seeded PV move for this ply, if the search is still walking the seeded line.
    ///
    /// Leaving the seeded line switches PV priority off for the rest of the search.
    fn pv_move(&mut self, moves: &MoveList) -> Option<Move> {
        if !self.follow_pv {
            return None;
        }
        match self.seed.get(self.ply()) {
            Some(&mv) if moves.contains(mv) => Some(mv),
            _ => {
                self.follow_pv = false;
                None
            }
        }
    }

    /// Reorder `moves` by descending score. Equal scores keep generation order.
    pub fn sort_moves(&mut self, board: &Board, moves: &mut MoveList) {
        let pv_move = self.pv_move(moves);
        moves
            .as_mut_slice()
            .sort_by_cached_key(|&mv| Reverse(self.score_move(board, mv, pv_move)));
    }
}
