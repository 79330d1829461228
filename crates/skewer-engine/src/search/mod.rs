//! Fixed-depth negamax search with quiescence, killer/history ordering and a triangular PV.

pub mod heuristics;
mod negamax;
mod ordering;
pub mod pv;
mod quiescence;
mod state;

use std::fmt;

use skewer_core::Move;

pub use state::SearchState;

/// Bound wider than any reachable score.
pub const INFINITY: i32 = 50_000;

/// Score of being checkmated at the root; a mate `n` plies away scores `MATE_VALUE - n`.
pub const MATE_VALUE: i32 = 49_000;

/// Scores beyond this magnitude encode a forced mate.
pub const MATE_SCORE: i32 = 48_000;

/// Size of every per-ply table.
pub const MAX_PLY: usize = 64;

/// A search score as reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Score {
    /// Centipawns from the side to move's point of view.
    Centipawns(i32),
    /// Full moves to mate; negative when the side to move is getting mated.
    Mate(i32),
}

impl Score {
    /// Classify a raw negamax score.
    pub fn from_raw(raw: i32) -> Score {
        if raw.abs() > MATE_SCORE {
            let plies = MATE_VALUE - raw.abs();
            let moves = (plies + 1) / 2;
            Score::Mate(if raw > 0 { moves } else { -moves })
        } else {
            Score::Centipawns(raw)
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Centipawns(cp) => write!(f, "cp {cp}"),
            Score::Mate(moves) => write!(f, "mate {moves}"),
        }
    }
}

/// Outcome of one root search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Raw negamax score for the side to move at the root.
    pub score: i32,
    /// Depth requested (after clamping).
    pub depth: u32,
    /// Nodes visited, full-width and quiescence.
    pub nodes: u64,
    /// Principal variation from the root.
    pub pv: Vec<Move>,
    /// First PV move, `None` when the root has no legal move.
    pub best_move: Option<Move>,
}

impl SearchResult {
    pub fn score(&self) -> Score {
        Score::from_raw(self.score)
    }
}

impl fmt::Display for SearchResult {
    /// The UCI `info` payload: `score <cp|mate> <n> depth <d> nodes <n> pv <moves>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "score {} depth {} nodes {} pv", self.score(), self.depth, self.nodes)?;
        for mv in &self.pv {
            write!(f, " {mv}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centipawn_scores() {
        assert_eq!(Score::from_raw(35), Score::Centipawns(35));
        assert_eq!(Score::from_raw(-MATE_SCORE), Score::Centipawns(-48_000));
        assert_eq!(Score::from_raw(0).to_string(), "cp 0");
    }

    #[test]
    fn mate_scores() {
        assert_eq!(Score::from_raw(MATE_VALUE - 1), Score::Mate(1));
        assert_eq!(Score::from_raw(MATE_VALUE - 3), Score::Mate(2));
        assert_eq!(Score::from_raw(-MATE_VALUE + 2), Score::Mate(-1));
        assert_eq!(Score::from_raw(-MATE_VALUE + 4), Score::Mate(-2));
        assert_eq!(Score::from_raw(MATE_VALUE - 1).to_string(), "mate 1");
    }

    #[test]
    fn result_display() {
        use skewer_core::Board;

        let board = Board::starting_position();
        let e4 = board.find_move("e2e4").unwrap();
        let result = SearchResult {
            score: 40,
            depth: 3,
            nodes: 1234,
            pv: vec![e4],
            best_move: Some(e4),
        };
        assert_eq!(result.to_string(), "score cp 40 depth 3 nodes 1234 pv e2e4");
    }
}
