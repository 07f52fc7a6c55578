//! Minimax with alpha-beta pruning implementation.

use std::cmp;
use std::time::Instant;

use crate::eval::Cp;
use crate::position::Position;
use crate::search::SearchResult;

/// Properties of alpha-beta pruning.
/// * The maxing player can only raise alpha from its children.
/// * The minning player can only lower beta from its children.
/// * Alpha is usually less than Beta. When they meet or cross, a cut off
///   occurs: no later sibling can change the decision above this node.
/// * A child searched with the full (-inf, +inf) window returns its exact
///   minimax value, so pruning never changes the root decision, only the
///   number of nodes visited.

/// Base alpha-beta call. Searches `depth` plies and returns the best move for
/// the side to move together with its score. The side to move takes the
/// maximizing role if `position.maximizing()`, the minimizing role otherwise.
pub fn alpha_beta<P: Position>(position: &mut P, depth: u32) -> SearchResult<P::Move> {
    let instant = Instant::now();
    let mut nodes = 0;
    let (score, best_move) = alpha_beta_root(position, depth, &mut nodes);

    SearchResult {
        best_move,
        score,
        depth,
        nodes,
        elapsed: instant.elapsed(),
    }
}

/// Root loop. Unlike the inner recursion, every root child is searched with a
/// fresh full window, so sibling results cannot prune each other at the root
/// and the first-encountered maximizer always survives the strict comparison.
fn alpha_beta_root<P: Position>(
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
        let score = alpha_beta_impl(
            position,
            depth.saturating_sub(1),
            nodes,
            Cp::MIN,
            Cp::MAX,
            !maximizing,
        );
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

    // No legal moves, nothing to pick. Report the static evaluation.
    if best_move.is_none() {
        best = position.evaluate();
    }
    (best, best_move)
}

fn alpha_beta_impl<P: Position>(
    position: &mut P,
    depth: u32,
    nodes: &mut u64,
    mut alpha: Cp,
    mut beta: Cp,
    maximizing: bool,
) -> Cp {
    *nodes += 1;

    // Leaf: out of search budget or the game is over. Both land on the same
    // static evaluation, so a mate here is worth only its remaining material.
    if depth == 0 || position.is_game_over() {
        return position.evaluate();
    }

    if maximizing {
        let mut best = Cp::MIN;

        for mv in position.legal_moves() {
            position.apply(mv);
            let score = alpha_beta_impl(position, depth - 1, nodes, alpha, beta, false);
            position.undo();

            best = cmp::max(best, score);
            alpha = cmp::max(alpha, score);
            if beta <= alpha {
                // Beta cutoff, remaining siblings cannot matter.
                break;
            }
        }
        best
    } else {
        let mut best = Cp::MAX;

        for mv in position.legal_moves() {
            position.apply(mv);
            let score = alpha_beta_impl(position, depth - 1, nodes, alpha, beta, true);
            position.undo();

            best = cmp::min(best, score);
            beta = cmp::min(beta, score);
            if beta <= alpha {
                // Alpha cutoff, remaining siblings cannot matter.
                break;
            }
        }
        best
    }
}
