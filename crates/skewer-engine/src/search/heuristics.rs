//! Killer move table and history heuristic for quiet move ordering.

use skewer_core::{Move, Piece, Square};

use crate::search::MAX_PLY;

/// Two killer moves per ply: quiet moves that caused beta cutoffs, newest in slot 0.
pub struct KillerTable {
    slots: [[Move; MAX_PLY]; 2],
}

impl KillerTable {
    pub fn new() -> Self {
        Self {
            slots: [[Move::NULL; MAX_PLY]; 2],
        }
    }

    /// Push `mv` into slot 0, moving the old slot 0 into slot 1.
    ///
    /// The shift happens even when `mv` already sits in slot 0.
    pub fn store(&mut self, ply: usize, mv: Move) {
        debug_assert!(ply < MAX_PLY, "killer store at ply {ply}");
        self.slots[1][ply] = self.slots[0][ply];
        self.slots[0][ply] = mv;
    }

    /// The killer in `slot` at `ply`; [`Move::NULL`] past the table.
    #[inline]
    pub fn get(&self, slot: usize, ply: usize) -> Move {
        if ply < MAX_PLY {
            self.slots[slot][ply]
        } else {
            Move::NULL
        }
    }

    pub fn clear(&mut self) {
        self.slots = [[Move::NULL; MAX_PLY]; 2];
    }
}

impl Default for KillerTable {
    fn default() -> Self {
        Self::new()
    }
}

/// History counters indexed by `[piece][target]`.
///
/// Grows by the remaining depth whenever a quiet move raises alpha.
/// Never decreases within a search.
pub struct HistoryTable {
    table: [[u32; 64]; Piece::COUNT],
}

impl HistoryTable {
    pub fn new() -> Self {
        Self {
            table: [[0; 64]; Piece::COUNT],
        }
    }

    pub fn add(&mut self, piece: Piece, target: Square, depth: u32) {
        let entry = &mut self.table[piece.index()][target.index()];
        *entry = entry.saturating_add(depth);
    }

    #[inline]
    pub fn get(&self, piece: Piece, target: Square) -> u32 {
        self.table[piece.index()][target.index()]
    }

    pub fn clear(&mut self) {
        self.table = [[0; 64]; Piece::COUNT];
    }
}

impl Default for HistoryTable {
    fn default() -> Self {
        Self::new()
    }
}
