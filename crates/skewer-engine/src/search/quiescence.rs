//! Capture-only search at the horizon.

use skewer_core::{MoveMode, Position};

use crate::evaluate;
use crate::search::SearchState;

impl SearchState {
    /// Resolve captures below the horizon, with stand-pat, until the position is quiet.
    ///
    /// No depth limit: each capture removes material, so every line ends.
    /// Leaves PV, killers and history alone.
    pub fn quiescence(&mut self, position: &mut Position, mut alpha: i32, beta: i32) -> i32 {
        let stand_pat = evaluate(position.board());
        self.nodes += 1;

        // Stand-pat: the side to move can choose not to capture
        if stand_pat >= beta {
            return beta;
        }
        if stand_pat > alpha {
            alpha = stand_pat;
        }

        // Quiet moves are rejected by the make step
        let mut moves = position.generate_moves();
        self.sort_moves(position.board(), &mut moves);

        for &mv in &moves {
            self.ply += 1;
            let Some(mut child) = position.play(mv, MoveMode::OnlyCaptures) else {
                self.ply -= 1;
                continue;
            };
            let score = -self.quiescence(&mut child, -beta, -alpha);
            drop(child);
            self.ply -= 1;

            if score >= beta {
                return beta;
            }
            if score > alpha {
                alpha = score;
            }
        }

        alpha
    }
}
