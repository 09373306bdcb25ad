//! Root dispatch: serial or parallel fan-out of the first-ply children.
//!
//! Root moves are embarrassingly parallel: each worker owns its clones and
//! reports only `(move, score)` pairs back over a channel. Any failure of the
//! dispatch machinery itself degrades to the serial path; the caller never
//! sees it.

use std::thread;

use board_core::{legal_moves, Move, Position, Side};
use crossbeam_channel::unbounded;
use rand::Rng;
use thiserror::Error;
use tracing::{debug, warn};

use crate::order::captures_first;
use crate::search::score_root_moves;
use crate::select::pick_best;
use crate::{SearchConfig, SearchReport};

/// Root widths up to this run serially; the fan-out overhead is not worth it.
const SERIAL_ROOT_LIMIT: usize = 4;

/// Failure of the parallel machinery itself (never of the search).
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("failed to spawn a search worker: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("a search worker terminated before reporting its results")]
    WorkerLost,
    #[error("collected {got} root scores, expected {expected}")]
    Incomplete { got: usize, expected: usize },
}

/// Computes the best move for `side`, resolving ties with the thread RNG.
pub fn compute_best_move(pos: &Position, side: Side, config: &SearchConfig) -> Option<Move> {
    analyze(pos, side, config).best_move
}

pub fn compute_best_move_with_rng<R: Rng + ?Sized>(
    pos: &Position,
    side: Side,
    config: &SearchConfig,
    rng: &mut R,
) -> Option<Move> {
    analyze_with_rng(pos, side, config, rng).best_move
}

/// Like `compute_best_move`, but returns score and node statistics too.
pub fn analyze(pos: &Position, side: Side, config: &SearchConfig) -> SearchReport {
    analyze_with_rng(pos, side, config, &mut rand::thread_rng())
}

pub fn analyze_with_rng<R: Rng + ?Sized>(
    pos: &Position,
    side: Side,
    config: &SearchConfig,
    rng: &mut R,
) -> SearchReport {
    let depth = config.depth.max(1);

    // The engine can be asked for either color's move; normalize the working
    // copy so move generation agrees with the requested side.
    let mut root = pos.clone();
    root.side_to_move = side;

    let mut moves = legal_moves(&root);
    if moves.is_empty() {
        // Not an error: the game-state layer decides mate vs. stalemate.
        return SearchReport {
            best_move: None,
            score: 0,
            depth,
            nodes: 0,
        };
    }
    captures_first(&root, &mut moves);

    let mut nodes = 0u64;
    let scored = if use_parallel(moves.len(), depth, config.parallel) {
        match parallel_root_scores(&root, side, depth, config, &moves) {
            Ok((scored, parallel_nodes)) => {
                nodes = parallel_nodes;
                scored
            }
            Err(err) => {
                warn!("parallel dispatch failed ({}), falling back to serial search", err);
                score_root_moves(&root, side, depth, config.leaf, &moves, &mut nodes)
            }
        }
    } else {
        score_root_moves(&root, side, depth, config.leaf, &moves, &mut nodes)
    };

    let (best_move, score) = match pick_best(&scored, rng) {
        Some((mv, score)) => (Some(mv), score),
        None => (None, 0),
    };
    debug!(
        "searched {} root moves to depth {} ({} nodes), best {:?} at {}",
        scored.len(),
        depth,
        nodes,
        best_move.map(|mv| mv.to_string()),
        score
    );

    SearchReport {
        best_move,
        score,
        depth,
        nodes,
    }
}

pub(crate) fn use_parallel(root_moves: usize, depth: u8, allowed: bool) -> bool {
    allowed && depth > 1 && root_moves > SERIAL_ROOT_LIMIT
}

/// Fans the root moves out round-robin over a bounded scoped-thread pool.
/// Returns the collected scores or the dispatch failure that prevented a
/// complete collection.
pub(crate) fn parallel_root_scores(
    pos: &Position,
    perspective: Side,
    depth: u8,
    config: &SearchConfig,
    moves: &[Move],
) -> Result<(Vec<(Move, i32)>, u64), DispatchError> {
    let workers = thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
        .min(moves.len());
    let leaf = config.leaf;

    let (tx, rx) = unbounded::<(Move, i32)>();

    let nodes = thread::scope(|scope| -> Result<u64, DispatchError> {
        let mut handles = Vec::with_capacity(workers);
        let mut spawn_err = None;
        for w in 0..workers {
            let tx = tx.clone();
            let slice: Vec<Move> = moves.iter().copied().skip(w).step_by(workers).collect();
            let spawned = thread::Builder::new()
                .name(format!("root-search-{}", w))
                .spawn_scoped(scope, move || {
                    let mut nodes = 0u64;
                    for pair in score_root_moves(pos, perspective, depth, leaf, &slice, &mut nodes)
                    {
                        let _ = tx.send(pair);
                    }
                    nodes
                });
            match spawned {
                Ok(handle) => handles.push(handle),
                Err(err) => {
                    spawn_err = Some(err);
                    break;
                }
            }
        }

        // Join everything before deciding the outcome so a panicked worker
        // cannot take the scope down with it.
        let mut total = 0u64;
        let mut lost = false;
        for handle in handles {
            match handle.join() {
                Ok(worker_nodes) => total += worker_nodes,
                Err(_) => lost = true,
            }
        }
        if let Some(err) = spawn_err {
            return Err(DispatchError::Spawn(err));
        }
        if lost {
            return Err(DispatchError::WorkerLost);
        }
        Ok(total)
    })?;

    drop(tx);
    let scored: Vec<(Move, i32)> = rx.try_iter().collect();
    if scored.len() != moves.len() {
        return Err(DispatchError::Incomplete {
            got: scored.len(),
            expected: moves.len(),
        });
    }
    Ok((scored, nodes))
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod dispatch_tests;
