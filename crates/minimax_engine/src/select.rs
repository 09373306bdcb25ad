//! Tie-break selection among the best-scoring root moves.
//!
//! Several root moves regularly share the top score; always playing the
//! first one makes the engine repeat itself game after game.

use board_core::Move;
use rand::seq::SliceRandom;
use rand::Rng;

/// Picks uniformly at random among the moves tying the maximum score.
/// Returns `None` only for an empty input. Deterministic for a seeded `rng`.
pub fn pick_best<R: Rng + ?Sized>(scored: &[(Move, i32)], rng: &mut R) -> Option<(Move, i32)> {
    let best = scored.iter().map(|&(_, score)| score).max()?;
    let tied: Vec<Move> = scored
        .iter()
        .filter(|&&(_, score)| score == best)
        .map(|&(mv, _)| mv)
        .collect();
    tied.choose(rng).map(|&mv| (mv, best))
}

#[cfg(test)]
#[path = "select_tests.rs"]
mod select_tests;
