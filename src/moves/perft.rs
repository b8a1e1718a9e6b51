//! Perft: exhaustive legal-move node counting, the ground truth for the
//! generator.

use crate::board::Position;
use crate::moves::execute::apply_move;
use crate::moves::movegen::legal_moves;

pub fn perft(pos: &Position, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = legal_moves(pos);
    if depth == 1 {
        return moves.len() as u64;
    }
    moves
        .into_iter()
        .map(|mv| perft(&apply_move(pos, mv), depth - 1))
        .sum()
}

/// Per-root-move breakdown, the usual divide-and-diff debugging view.
pub fn perft_divide(pos: &Position, depth: u32) -> Vec<(String, u64)> {
    legal_moves(pos)
        .into_iter()
        .map(|mv| {
            let nodes = if depth <= 1 {
                1
            } else {
                perft(&apply_move(pos, mv), depth - 1)
            };
            (mv.to_alg(), nodes)
        })
        .collect()
}
