//! Fixed-depth chess move picker.
//!
//! Minimax with alpha-beta pruning over the `board_core` rules model,
//! threat-aware evaluation, an optional quiescence extension at the leaves,
//! random tie-breaking among equally good root moves, and a parallel root
//! dispatcher with a transparent serial fallback.
//!
//! The engine is stateless between calls: everything is a pure function of
//! the position, the requested side and the configuration.

mod dispatch;
mod eval;
mod order;
mod pst;
mod quiescence;
mod search;
mod select;

pub use dispatch::{
    analyze, analyze_with_rng, compute_best_move, compute_best_move_with_rng, DispatchError,
};
pub use eval::{evaluate, piece_value};
pub use order::{captures_first, is_capture};
pub use select::pick_best;

use board_core::Move;
use serde::{Deserialize, Serialize};

/// What to do when the search runs out of depth.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeafEval {
    /// Score the leaf position as it stands.
    Static,
    /// Keep searching capture sequences until the position is quiet.
    Quiescence,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Search depth in plies. Clamped to at least 1.
    pub depth: u8,
    /// Allow fanning root moves out across worker threads.
    pub parallel: bool,
    /// Leaf evaluation strategy.
    pub leaf: LeafEval,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: 3,
            parallel: true,
            leaf: LeafEval::Static,
        }
    }
}

/// Outcome of one `analyze` call.
#[derive(Clone, Debug)]
pub struct SearchReport {
    /// The chosen move; `None` when the side has no legal moves.
    pub best_move: Option<Move>,
    /// Score of the chosen move, in centipawns for the requested side.
    pub score: i32,
    /// Depth actually searched.
    pub depth: u8,
    /// Positions visited, for diagnostics.
    pub nodes: u64,
}
