//! Threat-aware position evaluation.

use board_core::{side_coverage, PieceKind, Position, Side};

use crate::pst;

/// Material value of a piece in centipawns. The king's value is a sentinel:
/// it only exists so king safety dominates every comparison, a king is never
/// actually captured in legal play.
#[inline]
pub fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 320,
        PieceKind::Bishop => 330,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 20_000,
    }
}

/// Scores the position from `perspective`'s point of view.
///
/// Returns centipawns: positive is good for `perspective`. The score is
/// exactly antisymmetric in the perspective:
/// `evaluate(pos, side) == -evaluate(pos, side.flip())`.
pub fn evaluate(pos: &Position, perspective: Side) -> i32 {
    let mut score = 0i32;

    for sq in 0..64u8 {
        if let Some(piece) = pos.piece_at(sq) {
            let worth = piece_value(piece.kind) + pst::bonus(piece.kind, piece.side, sq);
            score += if piece.side == perspective { worth } else { -worth };
        }
    }

    // Threat pass: coverage is pseudo-legal attack squares, kept cheap on
    // purpose (no check legality).
    let ours = side_coverage(pos, perspective);
    let theirs = side_coverage(pos, perspective.flip());

    for sq in 0..64u8 {
        let piece = match pos.piece_at(sq) {
            Some(p) => p,
            None => continue,
        };
        let bit = 1u64 << sq;
        if piece.side == perspective {
            if theirs & bit != 0 {
                // Truly hanging pieces count almost in full; defended but
                // contested ones only a little.
                score -= hanging_penalty(piece.kind, ours & bit != 0);
            }
        } else if ours & bit != 0 {
            score += hanging_penalty(piece.kind, theirs & bit != 0);
        }
    }

    score + 10 * ours.count_ones() as i32 - 10 * theirs.count_ones() as i32
}

fn hanging_penalty(kind: PieceKind, defended: bool) -> i32 {
    let value = piece_value(kind);
    if defended {
        value / 10
    } else {
        value * 9 / 10
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
