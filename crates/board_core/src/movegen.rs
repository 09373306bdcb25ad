//! Legal and pseudo-legal move generation.
//!
//! Generation is organized around `piece_moves_into`, a pure function writing
//! one piece's pseudo-legal moves into a caller-owned list; side-level
//! generators aggregate it and filter for legality by replaying each move.

use crate::board::Position;
use crate::types::*;

const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// All legal moves for the side to move, freshly allocated.
pub fn legal_moves(pos: &Position) -> Vec<Move> {
    let mut work = pos.clone();
    let mut out = Vec::with_capacity(64);
    legal_moves_into(&mut work, &mut out);
    out
}

/// All legal moves for the side to move, into a reusable buffer. The position
/// is mutated transiently while filtering and restored before returning.
pub fn legal_moves_into(pos: &mut Position, out: &mut Vec<Move>) {
    out.clear();
    let mover = pos.side_to_move;
    for sq in 0..64u8 {
        if let Some(piece) = pos.piece_at(sq) {
            if piece.side == mover {
                piece_moves_into(pos, sq, out);
            }
        }
    }
    out.retain(|&mv| {
        let undo = pos.make_move(mv);
        let legal = !pos.in_check(mover);
        pos.unmake_move(mv, undo);
        legal
    });
}

/// Legal capturing moves only (destination occupied, or en passant).
pub fn capture_moves(pos: &Position) -> Vec<Move> {
    let mut moves = legal_moves(pos);
    moves.retain(|&mv| mv.kind == MoveKind::EnPassant || pos.piece_at(mv.to).is_some());
    moves
}

/// Pseudo-legal moves of the piece standing on `from`, appended to `out`.
/// Empty squares contribute nothing.
pub fn piece_moves_into(pos: &Position, from: Square, out: &mut Vec<Move>) {
    let piece = match pos.piece_at(from) {
        Some(p) => p,
        None => return,
    };
    match piece.kind {
        PieceKind::Pawn => pawn_moves(pos, from, piece.side, out),
        PieceKind::Knight => step_moves(pos, from, piece.side, &KNIGHT_STEPS, out),
        PieceKind::Bishop => ray_moves(pos, from, piece.side, &BISHOP_RAYS, out),
        PieceKind::Rook => ray_moves(pos, from, piece.side, &ROOK_RAYS, out),
        PieceKind::Queen => {
            ray_moves(pos, from, piece.side, &BISHOP_RAYS, out);
            ray_moves(pos, from, piece.side, &ROOK_RAYS, out);
        }
        PieceKind::King => {
            step_moves(pos, from, piece.side, &KING_STEPS, out);
            castle_moves(pos, from, piece.side, out);
        }
    }
}

fn push_maybe_promoting(from: Square, to: Square, side: Side, out: &mut Vec<Move>) {
    let last_rank = match side {
        Side::White => 7,
        Side::Black => 0,
    };
    if rank(to) == last_rank {
        for kind in PROMOTION_KINDS {
            out.push(Move::promoting(from, to, kind));
        }
    } else {
        out.push(Move::new(from, to));
    }
}

fn pawn_moves(pos: &Position, from: Square, side: Side, out: &mut Vec<Move>) {
    let f = file(from);
    let r = rank(from);
    let dir = side.forward();
    let start_rank = match side {
        Side::White => 1,
        Side::Black => 6,
    };

    if let Some(one) = square(f, r + dir) {
        if pos.piece_at(one).is_none() {
            push_maybe_promoting(from, one, side, out);
            if r == start_rank {
                if let Some(two) = square(f, r + 2 * dir) {
                    if pos.piece_at(two).is_none() {
                        out.push(Move::new(from, two));
                    }
                }
            }
        }
    }

    for df in PAWN_CAPTURE_FILES {
        if let Some(to) = square(f + df, r + dir) {
            match pos.piece_at(to) {
                Some(target) if target.side != side => {
                    push_maybe_promoting(from, to, side, out);
                }
                None if pos.en_passant == Some(to) => {
                    out.push(Move::en_passant(from, to));
                }
                _ => {}
            }
        }
    }
}

fn step_moves(pos: &Position, from: Square, side: Side, steps: &[(i8, i8)], out: &mut Vec<Move>) {
    let f = file(from);
    let r = rank(from);
    for &(df, dr) in steps {
        if let Some(to) = square(f + df, r + dr) {
            match pos.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(target) if target.side != side => out.push(Move::new(from, to)),
                _ => {}
            }
        }
    }
}

fn ray_moves(pos: &Position, from: Square, side: Side, rays: &[(i8, i8)], out: &mut Vec<Move>) {
    let f0 = file(from);
    let r0 = rank(from);
    for &(df, dr) in rays {
        let mut f = f0 + df;
        let mut r = r0 + dr;
        while let Some(to) = square(f, r) {
            match pos.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(target) => {
                    if target.side != side {
                        out.push(Move::new(from, to));
                    }
                    break;
                }
            }
            f += df;
            r += dr;
        }
    }
}

fn castle_moves(pos: &Position, from: Square, side: Side, out: &mut Vec<Move>) {
    let home = match side {
        Side::White => 4u8,
        Side::Black => 60u8,
    };
    if from != home || pos.in_check(side) {
        return;
    }
    let enemy = side.flip();

    // King-side: squares between king and rook empty, transit squares safe.
    if pos.castling.short[side.index()]
        && pos.piece_at(home + 1).is_none()
        && pos.piece_at(home + 2).is_none()
        && !pos.attacked_by(home + 1, enemy)
        && !pos.attacked_by(home + 2, enemy)
    {
        out.push(Move::castle(home, home + 2));
    }

    // Queen-side: one extra empty square next to the rook, same transit rule.
    if pos.castling.long[side.index()]
        && pos.piece_at(home - 1).is_none()
        && pos.piece_at(home - 2).is_none()
        && pos.piece_at(home - 3).is_none()
        && !pos.attacked_by(home - 1, enemy)
        && !pos.attacked_by(home - 2, enemy)
    {
        out.push(Move::castle(home, home - 2));
    }
}

/// Node-count walk of the legal move tree, used by the rules test suite.
pub fn perft(pos: &mut Position, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    let mut moves = Vec::with_capacity(64);
    legal_moves_into(pos, &mut moves);
    if depth == 1 {
        return moves.len() as u64;
    }
    let mut nodes = 0;
    for mv in moves {
        let undo = pos.make_move(mv);
        nodes += perft(pos, depth - 1);
        pos.unmake_move(mv, undo);
    }
    nodes
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
