//! The mutable board driven by the search: copy-make with an explicit snapshot stack.

use std::ops::{Deref, DerefMut};

use tracing::trace;

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::movegen::{MoveList, generate_moves};

/// Which moves [`Position::make_move`] accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveMode {
    AllMoves,
    /// Non-captures are refused without touching the board.
    OnlyCaptures,
}

/// A board plus the snapshots taken on the way down the search tree.
///
/// Every [`copy_board`](Position::copy_board) must be paired with exactly
/// one [`take_back`](Position::take_back). [`play`](Position::play) does
/// both and is the form the search uses.
#[derive(Debug, Clone)]
pub struct Position {
    board: Board,
    snapshots: Vec<Board>,
}

impl Position {
    pub fn new(board: Board) -> Position {
        Position {
            board,
            snapshots: Vec::with_capacity(64),
        }
    }

    /// The current board.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    #[inline]
    pub fn in_check(&self) -> bool {
        self.board.in_check()
    }

    /// Pseudo-legal moves for the side to move.
    #[inline]
    pub fn generate_moves(&self) -> MoveList {
        generate_moves(&self.board)
    }

    /// Number of snapshots currently held.
    #[inline]
    pub fn depth(&self) -> usize {
        self.snapshots.len()
    }

    /// Push a snapshot of the current board.
    #[inline]
    pub fn copy_board(&mut self) {
        self.snapshots.push(self.board);
    }

    /// Restore the most recent snapshot.
    ///
    /// # Panics
    ///
    /// Panics when no snapshot is held, which means a `copy_board` was missed.
    #[inline]
    pub fn take_back(&mut self) {
        self.board = self
            .snapshots
            .pop()
            .expect("take_back without a matching copy_board");
    }

    /// Apply `mv` in place and report whether the mover's king is safe.
    ///
    /// On `false` after the move was applied, the board is left in the
    /// illegal state and the caller must [`take_back`](Position::take_back).
    /// In [`MoveMode::OnlyCaptures`] a quiet move returns `false` with the
    /// board untouched.
    pub fn make_move(&mut self, mv: Move, mode: MoveMode) -> bool {
        if mode == MoveMode::OnlyCaptures && !mv.is_capture() {
            return false;
        }
        let mover = self.board.side_to_move();
        self.board.apply(mv);
        let legal = !self.board.is_king_attacked(mover);
        if !legal {
            trace!(%mv, "move leaves king attacked");
        }
        legal
    }

    /// Snapshot, make `mv`, and hand back a guard that takes it back on drop.
    ///
    /// Returns `None` for a rejected move, with the board already restored.
    pub fn play(&mut self, mv: Move, mode: MoveMode) -> Option<MoveGuard<'_>> {
        self.copy_board();
        if self.make_move(mv, mode) {
            Some(MoveGuard { position: self })
        } else {
            self.take_back();
            None
        }
    }

    /// Moves that do not leave the mover's king attacked.
    pub fn legal_moves(&mut self) -> Vec<Move> {
        let moves = self.generate_moves();
        moves
            .iter()
            .copied()
            .filter(|&mv| self.play(mv, MoveMode::AllMoves).is_some())
            .collect()
    }
}

impl From<Board> for Position {
    fn from(board: Board) -> Position {
        Position::new(board)
    }
}

impl Default for Position {
    fn default() -> Position {
        Position::new(Board::starting_position())
    }
}

/// A move made by [`Position::play`], taken back when dropped.
#[must_use = "dropping the guard takes the move back immediately"]
pub struct MoveGuard<'a> {
    position: &'a mut Position,
}

impl Deref for MoveGuard<'_> {
    type Target = Position;

    fn deref(&self) -> &Position {
        self.position
    }
}

impl DerefMut for MoveGuard<'_> {
    fn deref_mut(&mut self) -> &mut Position {
        self.position
    }
}

impl Drop for MoveGuard<'_> {
    fn drop(&mut self) {
        self.position.take_back();
    }
}

impl Board {
    /// The legal move whose UCI spelling is `uci`, if there is one.
    pub fn find_move(&self, uci: &str) -> Option<Move> {
        let mut scratch = Position::new(*self);
        generate_moves(self)
            .iter()
            .copied()
            .filter(|mv| mv.to_uci() == uci)
            .find(|&mv| scratch.play(mv, MoveMode::AllMoves).is_some())
    }

    /// A copy of this board with `mv` applied, or `None` when `mv` is illegal.
    pub fn with_move(&self, mv: Move) -> Option<Board> {
        let mut position = Position::new(*self);
        position.make_move(mv, MoveMode::AllMoves).then_some(position.board)
    }
}
