//! Plain minimax implementation.
//!
//! Same tree walk as `alpha_beta` with no pruning: every node to the depth
//! bound is visited. Kept as the reference the pruned search is measured
//! against, both for correctness (equal scores, equal move choice) and in
//! benchmarks.

use std::cmp;
use std::time::Instant;

use crate::eval::Cp;
use crate::position::Position;
use crate::search::SearchResult;

/// Base minimax call. Searches `depth` plies exhaustively and returns the
/// best move for the side to move together with its score.
pub fn minimax<P: Position>(position: &mut P, depth: u32) -> SearchResult<P::Move> {
    let instant = Instant::now();
    let mut nodes = 0;
    let (score, best_move) = minimax_root(position, depth, &mut nodes);

    SearchResult {
        best_move,
        score,
        depth,
        nodes,
        elapsed: instant.elapsed(),
    }
}

fn minimax_root<P: Position>(
    position: &mut P,
    depth: u32,
    nodes: &mut u64,
) -> (Cp, Option<P::Move>) {
    *nodes += 1;
    let maximizing = position.maximizing();
    let mut best_move = None;
    let mut best = if maximizing { Cp::MIN } else { Cp::MAX };

    for mv in position.legal_moves() {
        position.apply(mv);
        let score = minimax_impl(position, depth.saturating_sub(1), nodes, !maximizing);
        position.undo();

        // Strict comparison: ties go to the first move enumerated.
        let improved = if maximizing {
            score > best
        } else {
            score < best
        };
        if improved {
            best = score;
            best_move = Some(mv);
        }
    }

    if best_move.is_none() {
        best = position.evaluate();
    }
    (best, best_move)
}

fn minimax_impl<P: Position>(
    position: &mut P,
    depth: u32,
    nodes: &mut u64,
    maximizing: bool,
) -> Cp {
    *nodes += 1;

    if depth == 0 || position.is_game_over() {
        return position.evaluate();
    }

    if maximizing {
        let mut best = Cp::MIN;
        for mv in position.legal_moves() {
            position.apply(mv);
            let score = minimax_impl(position, depth - 1, nodes, false);
            position.undo();
            best = cmp::max(best, score);
        }
        best
    } else {
        let mut best = Cp::MAX;
        for mv in position.legal_moves() {
            position.apply(mv);
            let score = minimax_impl(position, depth - 1, nodes, true);
            position.undo();
            best = cmp::min(best, score);
        }
        best
    }
}
