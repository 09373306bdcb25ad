//! Mailbox board state with make/unmake move simulation.

use crate::types::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CastleRights {
    /// King-side rights, indexed by `Side::index()`.
    pub short: [bool; 2],
    /// Queen-side rights, indexed by `Side::index()`.
    pub long: [bool; 2],
}

impl CastleRights {
    pub fn full() -> CastleRights {
        CastleRights {
            short: [true; 2],
            long: [true; 2],
        }
    }

    pub fn empty() -> CastleRights {
        CastleRights {
            short: [false; 2],
            long: [false; 2],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub grid: [Option<Piece>; 64],
    pub side_to_move: Side,
    pub castling: CastleRights,
    /// Square passed over by a pawn that just advanced two ranks.
    pub en_passant: Option<Square>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

/// Inverse-move record produced by `make_move` and consumed by `unmake_move`.
#[derive(Clone, Debug)]
pub struct Undo {
    moved: Piece,
    captured: Option<Piece>,
    castling: CastleRights,
    en_passant: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
    rook_slide: Option<(Square, Square)>,
    ep_victim: Option<Square>,
}

impl Position {
    pub fn empty() -> Position {
        Position {
            grid: [None; 64],
            side_to_move: Side::White,
            castling: CastleRights::empty(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    pub fn startpos() -> Position {
        let mut pos = Position::empty();
        pos.castling = CastleRights::full();

        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (f, &kind) in back.iter().enumerate() {
            pos.grid[f] = Some(Piece::new(Side::White, kind));
            pos.grid[56 + f] = Some(Piece::new(Side::Black, kind));
            pos.grid[8 + f] = Some(Piece::new(Side::White, PieceKind::Pawn));
            pos.grid[48 + f] = Some(Piece::new(Side::Black, PieceKind::Pawn));
        }
        pos
    }

    /// Forsyth-Edwards Notation parser used by tests and the CLI.
    /// Panics on malformed input; validation is a setup-time concern.
    pub fn from_fen(fen: &str) -> Position {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        assert!(parts.len() >= 4, "invalid FEN: expected at least 4 fields");

        let mut pos = Position::empty();

        let ranks: Vec<&str> = parts[0].split('/').collect();
        assert!(ranks.len() == 8, "invalid FEN board section");
        for (row, rank_str) in ranks.iter().enumerate() {
            // FEN lists rank 8 first.
            let r = 7 - row as i8;
            let mut f: i8 = 0;
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    f += d as i8;
                } else {
                    let sq = square(f, r).expect("square out of bounds while parsing FEN");
                    pos.grid[sq as usize] = Some(piece_from_fen_char(ch));
                    f += 1;
                }
                assert!(f <= 8, "too many files in FEN rank");
            }
            assert!(f == 8, "not enough files in FEN rank");
        }

        pos.side_to_move = match parts[1] {
            "w" => Side::White,
            "b" => Side::Black,
            other => panic!("invalid side to move in FEN: {}", other),
        };

        if parts[2] != "-" {
            for c in parts[2].chars() {
                match c {
                    'K' => pos.castling.short[0] = true,
                    'Q' => pos.castling.long[0] = true,
                    'k' => pos.castling.short[1] = true,
                    'q' => pos.castling.long[1] = true,
                    other => panic!("invalid castling char in FEN: {}", other),
                }
            }
        }

        if parts[3] != "-" {
            pos.en_passant = parse_square(parts[3]);
            assert!(pos.en_passant.is_some(), "invalid en-passant square in FEN");
        }

        pos.halfmove_clock = parts
            .get(4)
            .copied()
            .unwrap_or("0")
            .parse()
            .expect("invalid halfmove clock in FEN");
        pos.fullmove_number = parts
            .get(5)
            .copied()
            .unwrap_or("1")
            .parse()
            .expect("invalid fullmove number in FEN");

        pos
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.grid[sq as usize]
    }

    pub fn set_piece(&mut self, sq: Square, piece: Option<Piece>) {
        self.grid[sq as usize] = piece;
    }

    pub fn king_square(&self, side: Side) -> Option<Square> {
        for sq in 0..64u8 {
            if self.grid[sq as usize] == Some(Piece::new(side, PieceKind::King)) {
                return Some(sq);
            }
        }
        None
    }

    pub fn in_check(&self, side: Side) -> bool {
        match self.king_square(side) {
            Some(ksq) => self.attacked_by(ksq, side.flip()),
            None => false,
        }
    }

    /// Is `target` attacked by any piece of side `by`? Probes outward from
    /// the target square, so occupancy of the target itself is irrelevant.
    pub fn attacked_by(&self, target: Square, by: Side) -> bool {
        let tf = file(target);
        let tr = rank(target);

        // A pawn of `by` attacks the target from one rank behind it.
        for df in PAWN_CAPTURE_FILES {
            if let Some(sq) = square(tf + df, tr - by.forward()) {
                if self.piece_at(sq) == Some(Piece::new(by, PieceKind::Pawn)) {
                    return true;
                }
            }
        }

        for (df, dr) in KNIGHT_STEPS {
            if let Some(sq) = square(tf + df, tr + dr) {
                if self.piece_at(sq) == Some(Piece::new(by, PieceKind::Knight)) {
                    return true;
                }
            }
        }

        for (df, dr) in KING_STEPS {
            if let Some(sq) = square(tf + df, tr + dr) {
                if self.piece_at(sq) == Some(Piece::new(by, PieceKind::King)) {
                    return true;
                }
            }
        }

        self.ray_attacked(tf, tr, by, &BISHOP_RAYS, PieceKind::Bishop)
            || self.ray_attacked(tf, tr, by, &ROOK_RAYS, PieceKind::Rook)
    }

    fn ray_attacked(&self, tf: i8, tr: i8, by: Side, rays: &[(i8, i8)], slider: PieceKind) -> bool {
        for &(df, dr) in rays {
            let mut f = tf + df;
            let mut r = tr + dr;
            while let Some(sq) = square(f, r) {
                if let Some(piece) = self.piece_at(sq) {
                    if piece.side == by && (piece.kind == slider || piece.kind == PieceKind::Queen) {
                        return true;
                    }
                    break;
                }
                f += df;
                r += dr;
            }
        }
        false
    }

    /// Applies `mv` and returns the record needed to revert it. The caller
    /// must hold a piece on the origin square.
    pub fn make_move(&mut self, mv: Move) -> Undo {
        let moved = self.piece_at(mv.from).expect("make_move: empty origin square");
        let mut undo = Undo {
            moved,
            captured: self.piece_at(mv.to),
            castling: self.castling,
            en_passant: self.en_passant,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
            rook_slide: None,
            ep_victim: None,
        };

        self.en_passant = None;

        if mv.kind == MoveKind::EnPassant {
            let victim = square(file(mv.to), rank(mv.to) - moved.side.forward())
                .expect("en-passant victim off the board");
            undo.captured = self.piece_at(victim);
            undo.ep_victim = Some(victim);
            self.set_piece(victim, None);
        }

        self.set_piece(mv.from, None);
        let placed = match mv.promotion {
            Some(kind) if moved.kind == PieceKind::Pawn => Piece::new(moved.side, kind),
            _ => moved,
        };
        self.set_piece(mv.to, Some(placed));

        if mv.kind == MoveKind::Castle && moved.kind == PieceKind::King {
            if let Some((rf, rt)) = castle_rook_slide(mv.from, mv.to) {
                let rook = self.piece_at(rf).expect("castling without a rook");
                self.set_piece(rf, None);
                self.set_piece(rt, Some(rook));
                undo.rook_slide = Some((rf, rt));
            }
        }

        if moved.kind == PieceKind::King {
            self.castling.short[moved.side.index()] = false;
            self.castling.long[moved.side.index()] = false;
        }
        // A right is also lost when its corner square is vacated or occupied
        // by anything (rook moved away, or rook captured there).
        self.corner_right_lost(mv.from);
        self.corner_right_lost(mv.to);

        if moved.kind == PieceKind::Pawn && (rank(mv.to) - rank(mv.from)).abs() == 2 {
            self.en_passant = square(file(mv.from), (rank(mv.from) + rank(mv.to)) / 2);
        }

        if moved.kind == PieceKind::Pawn || undo.captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        if self.side_to_move == Side::Black {
            self.fullmove_number += 1;
        }
        self.side_to_move = self.side_to_move.flip();

        undo
    }

    pub fn unmake_move(&mut self, mv: Move, undo: Undo) {
        self.side_to_move = self.side_to_move.flip();
        self.castling = undo.castling;
        self.en_passant = undo.en_passant;
        self.halfmove_clock = undo.halfmove_clock;
        self.fullmove_number = undo.fullmove_number;

        if let Some((rf, rt)) = undo.rook_slide {
            let rook = self.piece_at(rt).expect("unmake: rook missing after castle");
            self.set_piece(rt, None);
            self.set_piece(rf, Some(rook));
        }

        // Putting `undo.moved` back also demotes a promoted pawn.
        self.set_piece(mv.from, Some(undo.moved));
        match undo.ep_victim {
            Some(victim) => {
                self.set_piece(mv.to, None);
                self.set_piece(victim, undo.captured);
            }
            None => self.set_piece(mv.to, undo.captured),
        }
    }

    fn corner_right_lost(&mut self, sq: Square) {
        match sq {
            0 => self.castling.long[0] = false,
            7 => self.castling.short[0] = false,
            56 => self.castling.long[1] = false,
            63 => self.castling.short[1] = false,
            _ => {}
        }
    }
}

fn castle_rook_slide(from: Square, to: Square) -> Option<(Square, Square)> {
    match (from, to) {
        (4, 6) => Some((7, 5)),
        (4, 2) => Some((0, 3)),
        (60, 62) => Some((63, 61)),
        (60, 58) => Some((56, 59)),
        _ => None,
    }
}

fn piece_from_fen_char(ch: char) -> Piece {
    let side = if ch.is_uppercase() {
        Side::White
    } else {
        Side::Black
    };
    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        other => panic!("invalid piece char in FEN: {}", other),
    };
    Piece::new(side, kind)
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
