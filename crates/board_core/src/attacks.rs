//! Attack coverage masks for threat evaluation.
//!
//! Coverage deliberately differs from move generation: a square occupied by a
//! friendly piece still counts as covered (that is what "defended" means),
//! sliders stop at and include the first blocker of either side, and pawns
//! contribute their capture diagonals only, never pushes.

use crate::board::Position;
use crate::types::*;

/// Coverage mask of the piece standing on `from`, or 0 for an empty square.
pub fn attack_mask(pos: &Position, from: Square) -> u64 {
    let piece = match pos.piece_at(from) {
        Some(p) => p,
        None => return 0,
    };
    let f = file(from);
    let r = rank(from);
    match piece.kind {
        PieceKind::Pawn => {
            let mut mask = 0u64;
            for df in PAWN_CAPTURE_FILES {
                if let Some(sq) = square(f + df, r + piece.side.forward()) {
                    mask |= 1u64 << sq;
                }
            }
            mask
        }
        PieceKind::Knight => step_mask(f, r, &KNIGHT_STEPS),
        PieceKind::King => step_mask(f, r, &KING_STEPS),
        PieceKind::Bishop => ray_mask(pos, f, r, &BISHOP_RAYS),
        PieceKind::Rook => ray_mask(pos, f, r, &ROOK_RAYS),
        PieceKind::Queen => {
            ray_mask(pos, f, r, &BISHOP_RAYS) | ray_mask(pos, f, r, &ROOK_RAYS)
        }
    }
}

/// Union of the coverage of every piece belonging to `side`.
pub fn side_coverage(pos: &Position, side: Side) -> u64 {
    let mut mask = 0u64;
    for sq in 0..64u8 {
        if let Some(piece) = pos.piece_at(sq) {
            if piece.side == side {
                mask |= attack_mask(pos, sq);
            }
        }
    }
    mask
}

fn step_mask(f: i8, r: i8, steps: &[(i8, i8)]) -> u64 {
    let mut mask = 0u64;
    for &(df, dr) in steps {
        if let Some(sq) = square(f + df, r + dr) {
            mask |= 1u64 << sq;
        }
    }
    mask
}

fn ray_mask(pos: &Position, f0: i8, r0: i8, rays: &[(i8, i8)]) -> u64 {
    let mut mask = 0u64;
    for &(df, dr) in rays {
        let mut f = f0 + df;
        let mut r = r0 + dr;
        while let Some(sq) = square(f, r) {
            mask |= 1u64 << sq;
            if pos.piece_at(sq).is_some() {
                break;
            }
            f += df;
            r += dr;
        }
    }
    mask
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
