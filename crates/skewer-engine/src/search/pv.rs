//! Triangular principal-variation table.

use skewer_core::Move;

use crate::search::MAX_PLY;

/// Row `p` holds the best line found from ply `p`, stored at columns
/// `p..length[p]`. Columns before `p` in that row are never read.
pub struct PvTable {
    moves: [[Move; MAX_PLY]; MAX_PLY],
    length: [usize; MAX_PLY],
}

impl PvTable {
    pub fn new() -> Self {
        Self {
            moves: [[Move::NULL; MAX_PLY]; MAX_PLY],
            length: [0; MAX_PLY],
        }
    }

    /// Empty the line at `ply`. Called on entry to every full-width node.
    #[inline]
    pub fn start(&mut self, ply: usize) {
        self.length[ply] = ply;
    }

    /// Record `mv` as best at `ply` and append the line from `ply + 1`.
    pub fn update(&mut self, ply: usize, mv: Move) {
        let child = ply + 1;
        let end = self.length[child];
        debug_assert!(end >= child, "child line at ply {child} was never started");

        let (upper, lower) = self.moves.split_at_mut(child);
        let row = &mut upper[ply];
        row[ply] = mv;
        row[child..end].copy_from_slice(&lower[0][child..end]);
        self.length[ply] = end;
    }

    /// End column of the line at `ply`.
    #[inline]
    pub fn length(&self, ply: usize) -> usize {
        self.length[ply]
    }

    /// The best line found from `ply`.
    pub fn line(&self, ply: usize) -> &[Move] {
        &self.moves[ply][ply..self.length[ply].max(ply)]
    }
}

impl Default for PvTable {
    fn default() -> Self {
        Self::new()
    }
}
