//! Evaluation and alpha-beta search for skewer.

pub mod eval;
pub mod search;

pub use eval::evaluate;
pub use search::{INFINITY, MATE_SCORE, MATE_VALUE, MAX_PLY, Score, SearchResult, SearchState};
