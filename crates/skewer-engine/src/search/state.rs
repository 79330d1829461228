//! Per-search mutable state and the root driver.

use skewer_core::{Move, Piece, Position, Square};
use tracing::{debug, info, warn};

use crate::search::heuristics::{HistoryTable, KillerTable};
use crate::search::pv::PvTable;
use crate::search::{INFINITY, MAX_PLY, SearchResult};

/// Everything one search mutates: counters, killers, history and the PV table.
///
/// Created once and reused; [`SearchState::reset_info`] runs before every
/// root search.
pub struct SearchState {
    pub(super) nodes: u64,
    pub(super) ply: usize,
    pub(super) killers: KillerTable,
    pub(super) history: HistoryTable,
    pub(super) pv: PvTable,
    /// Line whose moves get PV priority in ordering.
    pub(super) seed: Vec<Move>,
    /// Whether the search is still on the seeded line.
    pub(super) follow_pv: bool,
}

impl SearchState {
    pub fn new() -> Self {
        Self {
            nodes: 0,
            ply: 0,
            killers: KillerTable::new(),
            history: HistoryTable::new(),
            pv: PvTable::new(),
            seed: Vec::new(),
            follow_pv: false,
        }
    }

    /// Zero the counters, killers, history and PV seed.
    pub fn reset_info(&mut self) {
        self.nodes = 0;
        self.ply = 0;
        self.killers.clear();
        self.history.clear();
        self.seed.clear();
        self.follow_pv = false;
    }

    /// Give `line` PV priority during the next [`negamax`](SearchState::negamax) call.
    pub fn seed_pv(&mut self, line: &[Move]) {
        self.seed = line.to_vec();
        self.follow_pv = !self.seed.is_empty();
    }

    /// Run one fixed-depth search from `position` and report the result.
    ///
    /// Depths beyond `MAX_PLY - 1` are clamped. The position is returned
    /// unchanged.
    pub fn position(&mut self, position: &mut Position, depth: u32) -> SearchResult {
        let max_depth = (MAX_PLY - 1) as u32;
        let depth = if depth > max_depth {
            warn!(requested = depth, max_depth, "search depth clamped");
            max_depth
        } else {
            depth
        };

        self.reset_info();
        debug!(depth, fen = %position.board(), "search started");

        let score = self.negamax(position, -INFINITY, INFINITY, depth);
        let pv = self.pv_line().to_vec();
        let result = SearchResult {
            score,
            depth,
            nodes: self.nodes,
            best_move: pv.first().copied(),
            pv,
        };

        info!(
            score = %result.score(),
            depth,
            nodes = result.nodes,
            best_move = %result.best_move.unwrap_or(Move::NULL),
            "search finished"
        );
        result
    }

    /// Nodes visited since the last reset.
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Current distance from the root. Zero between searches.
    #[inline]
    pub fn ply(&self) -> usize {
        self.ply
    }

    /// Killer `slot` (0 = newest) at `ply`.
    #[inline]
    pub fn killer(&self, slot: usize, ply: usize) -> Move {
        self.killers.get(slot, ply)
    }

    #[inline]
    pub fn history(&self, piece: Piece, target: Square) -> u32 {
        self.history.get(piece, target)
    }

    /// The root principal variation of the last search.
    pub fn pv_line(&self) -> &[Move] {
        self.pv.line(0)
    }

    /// End column of the PV line at `ply`.
    pub fn pv_length(&self, ply: usize) -> usize {
        self.pv.length(ply)
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{MATE_SCORE, MATE_VALUE, Score};
    use skewer_core::{Board, MoveMode};

    fn position(fen: &str) -> Position {
        Position::new(fen.parse().unwrap())
    }

    /// Play `line` from `board`, failing if any move is illegal.
    fn assert_legal_line(board: &Board, line: &[Move]) {
        let mut current = *board;
        for mv in line {
            let found = current.find_move(&mv.to_uci());
            assert_eq!(found, Some(*mv), "{mv} is not legal in {current}");
            current = current.with_move(*mv).unwrap();
        }
    }

    #[test]
    fn startpos_depth_1_node_count() {
        let mut state = SearchState::new();
        let mut pos = Position::default();
        let result = state.position(&mut pos, 1);
        // Root plus one quiescence node per legal reply; no captures exist.
        assert_eq!(result.nodes, 21);
        assert_eq!(result.depth, 1);
        assert_eq!(result.pv.len(), 1);
        assert_eq!(result.best_move, Some(result.pv[0]));
    }

    #[test]
    fn search_leaves_position_untouched() {
        let mut state = SearchState::new();
        let mut pos = position("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
        let before = *pos.board();
        state.position(&mut pos, 3);
        assert_eq!(*pos.board(), before);
        assert_eq!(pos.depth(), 0);
        assert_eq!(state.ply(), 0);
    }

    #[test]
    fn finds_scholars_mate() {
        let mut state = SearchState::new();
        let mut pos = position("r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4");
        let result = state.position(&mut pos, 2);
        assert_eq!(result.best_move.map(|mv| mv.to_uci()).as_deref(), Some("h5f7"));
        assert_eq!(result.score, MATE_VALUE - 1);
        assert!(result.score > MATE_SCORE);
        assert_eq!(result.score(), Score::Mate(1));
    }

    #[test]
    fn mated_root_has_no_best_move() {
        let mut state = SearchState::new();
        let mut pos = position("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3");
        let result = state.position(&mut pos, 1);
        assert_eq!(result.score, -MATE_VALUE);
        assert_eq!(result.nodes, 1);
        assert_eq!(result.best_move, None);
        assert!(result.pv.is_empty());
    }

    #[test]
    fn stalemated_root_scores_zero() {
        let mut state = SearchState::new();
        let mut pos = position("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1");
        let result = state.position(&mut pos, 3);
        assert_eq!(result.score, 0);
        assert_eq!(result.best_move, None);
    }

    #[test]
    fn unique_move_is_whole_pv() {
        let mut state = SearchState::new();
        let mut pos = position("k7/8/8/8/8/8/1r6/K7 w - - 0 1");
        let result = state.position(&mut pos, 1);
        assert_eq!(state.pv_length(0), 1);
        assert_eq!(result.best_move.map(|mv| mv.to_uci()).as_deref(), Some("a1b2"));
    }

    #[test]
    fn pv_is_legal_continuation() {
        let fen = "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3";
        let mut state = SearchState::new();
        let mut pos = position(fen);
        let result = state.position(&mut pos, 4);
        assert!(!result.pv.is_empty());
        assert_eq!(result.pv.len(), state.pv_length(0));
        assert_eq!(result.best_move, Some(result.pv[0]));
        assert_legal_line(pos.board(), &result.pv);
    }

    #[test]
    fn repeated_searches_are_deterministic() {
        let fen = "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3";
        let mut state = SearchState::new();
        let first = state.position(&mut position(fen), 3);
        let second = state.position(&mut position(fen), 3);
        assert_eq!(first, second);
    }

    #[test]
    fn depth_is_clamped() {
        // Checkmated root: the search ends at once whatever the depth.
        let mut state = SearchState::new();
        let mut pos = position("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3");
        let result = state.position(&mut pos, 1_000);
        assert_eq!(result.depth, (MAX_PLY - 1) as u32);
        assert_eq!(result.nodes, 1);
    }

    #[test]
    fn reset_info_clears_tables() {
        let mut state = SearchState::new();
        let mut pos = Position::default();
        state.position(&mut pos, 3);
        assert!(state.nodes() > 0);
        assert!(!state.killer(0, 1).is_null());

        state.reset_info();
        assert_eq!(state.nodes(), 0);
        assert_eq!(state.ply(), 0);
        for ply in 0..MAX_PLY {
            assert!(state.killer(0, ply).is_null());
            assert!(state.killer(1, ply).is_null());
        }
        for piece in Piece::ALL {
            for sq in Square::all() {
                assert_eq!(state.history(piece, sq), 0);
            }
        }
    }

    #[test]
    fn killers_are_quiet_moves() {
        let mut state = SearchState::new();
        let mut pos = position("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3");
        state.position(&mut pos, 3);
        for ply in 0..MAX_PLY {
            for slot in 0..2 {
                let killer = state.killer(slot, ply);
                assert!(killer.is_null() || !killer.is_capture());
            }
        }
    }

    #[test]
    fn history_grows_only_for_quiet_moves() {
        let mut state = SearchState::new();
        let mut pos = Position::default();
        state.position(&mut pos, 3);
        let total: u64 = Piece::ALL
            .iter()
            .flat_map(|&piece| Square::all().map(move |sq| (piece, sq)))
            .map(|(piece, sq)| u64::from(state.history(piece, sq)))
            .sum();
        assert!(total > 0);
    }

    #[test]
    fn seeded_search_matches_unseeded() {
        let fen = "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3";
        let mut state = SearchState::new();
        let mut pos = position(fen);
        let plain = state.position(&mut pos, 3);

        state.reset_info();
        state.seed_pv(&plain.pv);
        let score = state.negamax(&mut pos, -INFINITY, INFINITY, 3);
        assert_eq!(score, plain.score);
        assert_eq!(state.pv_line(), plain.pv.as_slice());
    }

    #[test]
    fn play_guard_keeps_snapshot_stack_balanced() {
        let mut state = SearchState::new();
        let mut pos = Position::default();
        let e4 = pos.board().find_move("e2e4").unwrap();
        {
            let mut child = pos.play(e4, MoveMode::AllMoves).unwrap();
            state.position(&mut child, 2);
            assert_eq!(child.depth(), 1);
        }
        assert_eq!(pos.depth(), 0);
    }
}
