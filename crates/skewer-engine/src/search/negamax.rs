//! Full-width negamax with fail-hard alpha-beta and check extension.

use skewer_core::{MoveMode, Position};

use crate::evaluate;
use crate::search::{MATE_VALUE, MAX_PLY, SearchState};

impl SearchState {
    /// Search `position` to `depth` plies inside the window `(alpha, beta)`.
    ///
    /// Returns a score from the side to move's point of view, clamped to
    /// `[alpha, beta]` unless the node is checkmate or stalemate. Updates the
    /// PV table, killers and history on the way.
    pub fn negamax(&mut self, position: &mut Position, mut alpha: i32, beta: i32, mut depth: u32) -> i32 {
        let ply = self.ply;
        debug_assert!(ply < MAX_PLY, "negamax entered at ply {ply}");
        self.pv.start(ply);

        // Leaf node: drop into quiescence search
        if depth == 0 {
            return self.quiescence(position, alpha, beta);
        }

        self.nodes += 1;

        // The tables have no room for another full-width ply.
        if ply >= MAX_PLY - 1 {
            return evaluate(position.board()).max(alpha).min(beta);
        }

        // Check extension
        let in_check = position.in_check();
        if in_check {
            depth += 1;
        }

        let mut legal_moves = 0u32;
        let mut moves = position.generate_moves();
        self.sort_moves(position.board(), &mut moves);

        for &mv in &moves {
            self.ply += 1;
            let Some(mut child) = position.play(mv, MoveMode::AllMoves) else {
                // Leaves our king attacked
                self.ply -= 1;
                continue;
            };
            legal_moves += 1;
            let score = -self.negamax(&mut child, -beta, -alpha, depth - 1);
            drop(child);
            self.ply -= 1;

            // Fail high: remember quiet refutations as killers
            if score >= beta {
                if !mv.is_capture() {
                    self.killers.store(ply, mv);
                }
                return beta;
            }

            // New best move: credit history and extend the PV
            if score > alpha {
                if !mv.is_capture() {
                    self.history.add(mv.piece(), mv.target(), depth);
                }
                alpha = score;
                self.pv.update(ply, mv);
            }
        }

        // No legal moves: checkmate or stalemate
        if legal_moves == 0 {
            return if in_check { -MATE_VALUE + ply as i32 } else { 0 };
        }

        alpha
    }
}
