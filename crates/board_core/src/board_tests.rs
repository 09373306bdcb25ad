use super::*;

const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[test]
fn startpos_layout() {
    let pos = Position::startpos();
    assert_eq!(pos.side_to_move, Side::White);
    assert_eq!(pos.castling, CastleRights::full());
    assert_eq!(pos.en_passant, None);
    assert_eq!(pos.grid.iter().filter(|sq| sq.is_some()).count(), 32);
    assert_eq!(
        pos.piece_at(parse_square("e1").unwrap()),
        Some(Piece::new(Side::White, PieceKind::King))
    );
    assert_eq!(
        pos.piece_at(parse_square("d8").unwrap()),
        Some(Piece::new(Side::Black, PieceKind::Queen))
    );
    assert_eq!(
        pos.piece_at(parse_square("e2").unwrap()),
        Some(Piece::new(Side::White, PieceKind::Pawn))
    );
}

#[test]
fn fen_matches_startpos() {
    assert_eq!(Position::from_fen(START_FEN), Position::startpos());
}

#[test]
fn fen_reads_state_fields() {
    let pos = Position::from_fen("4k3/8/8/3pP3/8/8/8/4K3 b Kq d6 12 34");
    assert_eq!(pos.side_to_move, Side::Black);
    assert!(pos.castling.short[0]);
    assert!(!pos.castling.long[0]);
    assert!(pos.castling.long[1]);
    assert_eq!(pos.en_passant, parse_square("d6"));
    assert_eq!(pos.halfmove_clock, 12);
    assert_eq!(pos.fullmove_number, 34);
}

#[test]
fn make_unmake_quiet_move_roundtrips() {
    let mut pos = Position::startpos();
    let original = pos.clone();
    let mv = Move::new(parse_square("g1").unwrap(), parse_square("f3").unwrap());
    let undo = pos.make_move(mv);
    assert_eq!(pos.side_to_move, Side::Black);
    assert_eq!(
        pos.piece_at(parse_square("f3").unwrap()),
        Some(Piece::new(Side::White, PieceKind::Knight))
    );
    assert_eq!(pos.halfmove_clock, 1);
    pos.unmake_move(mv, undo);
    assert_eq!(pos, original);
}

#[test]
fn make_unmake_capture_roundtrips() {
    let mut pos = Position::from_fen("4k3/8/8/3p4/4P3/8/8/4K3 w - - 3 5");
    let original = pos.clone();
    let mv = Move::new(parse_square("e4").unwrap(), parse_square("d5").unwrap());
    let undo = pos.make_move(mv);
    assert_eq!(
        pos.piece_at(parse_square("d5").unwrap()),
        Some(Piece::new(Side::White, PieceKind::Pawn))
    );
    assert_eq!(pos.piece_at(parse_square("e4").unwrap()), None);
    assert_eq!(pos.halfmove_clock, 0);
    pos.unmake_move(mv, undo);
    assert_eq!(pos, original);
}

#[test]
fn make_unmake_castle_roundtrips() {
    let mut pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let original = pos.clone();
    let mv = Move::castle(parse_square("e1").unwrap(), parse_square("g1").unwrap());
    let undo = pos.make_move(mv);
    assert_eq!(
        pos.piece_at(parse_square("g1").unwrap()),
        Some(Piece::new(Side::White, PieceKind::King))
    );
    assert_eq!(
        pos.piece_at(parse_square("f1").unwrap()),
        Some(Piece::new(Side::White, PieceKind::Rook))
    );
    assert_eq!(pos.piece_at(parse_square("h1").unwrap()), None);
    assert!(!pos.castling.short[0]);
    assert!(!pos.castling.long[0]);
    assert!(pos.castling.short[1]);
    pos.unmake_move(mv, undo);
    assert_eq!(pos, original);
}

#[test]
fn make_unmake_en_passant_roundtrips() {
    let mut pos = Position::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 3");
    let original = pos.clone();
    let mv = Move::en_passant(parse_square("e5").unwrap(), parse_square("d6").unwrap());
    let undo = pos.make_move(mv);
    assert_eq!(
        pos.piece_at(parse_square("d6").unwrap()),
        Some(Piece::new(Side::White, PieceKind::Pawn))
    );
    assert_eq!(pos.piece_at(parse_square("d5").unwrap()), None);
    assert_eq!(pos.piece_at(parse_square("e5").unwrap()), None);
    pos.unmake_move(mv, undo);
    assert_eq!(pos, original);
}

#[test]
fn make_unmake_promotion_roundtrips() {
    let mut pos = Position::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1");
    let original = pos.clone();
    let mv = Move::promoting(
        parse_square("a7").unwrap(),
        parse_square("a8").unwrap(),
        PieceKind::Queen,
    );
    let undo = pos.make_move(mv);
    assert_eq!(
        pos.piece_at(parse_square("a8").unwrap()),
        Some(Piece::new(Side::White, PieceKind::Queen))
    );
    pos.unmake_move(mv, undo);
    assert_eq!(pos, original);
}

#[test]
fn rook_move_drops_one_castling_right() {
    let mut pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let mv = Move::new(parse_square("a1").unwrap(), parse_square("a4").unwrap());
    pos.make_move(mv);
    assert!(!pos.castling.long[0]);
    assert!(pos.castling.short[0]);
}

#[test]
fn rook_capture_drops_opponent_right() {
    let mut pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    // Ra1xa8 takes the rook that guards Black's queen-side right.
    let mv = Move::new(parse_square("a1").unwrap(), parse_square("a8").unwrap());
    pos.make_move(mv);
    assert!(!pos.castling.long[1]);
    assert!(pos.castling.short[1]);
}

#[test]
fn double_push_sets_en_passant_square() {
    let mut pos = Position::startpos();
    pos.make_move(Move::new(
        parse_square("e2").unwrap(),
        parse_square("e4").unwrap(),
    ));
    assert_eq!(pos.en_passant, parse_square("e3"));
}

#[test]
fn attacked_by_covers_all_piece_kinds() {
    let pos = Position::startpos();
    // f3 is covered by the g2 pawn and the g1 knight.
    assert!(pos.attacked_by(parse_square("f3").unwrap(), Side::White));
    // d2 is covered by queen, king and bishop.
    assert!(pos.attacked_by(parse_square("d2").unwrap(), Side::White));
    // d4 is out of everyone's reach at the start.
    assert!(!pos.attacked_by(parse_square("d4").unwrap(), Side::White));
    assert!(pos.attacked_by(parse_square("e6").unwrap(), Side::Black));
    assert!(!pos.attacked_by(parse_square("e6").unwrap(), Side::White));
}

#[test]
fn sliders_do_not_attack_through_blockers() {
    let pos = Position::from_fen("4k3/8/8/8/3p4/8/3R4/4K3 w - - 0 1");
    assert!(pos.attacked_by(parse_square("d4").unwrap(), Side::White));
    assert!(!pos.attacked_by(parse_square("d5").unwrap(), Side::White));
}

#[test]
fn check_detection() {
    let mated = Position::from_fen("r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1");
    assert!(mated.in_check(Side::Black));
    assert!(!mated.in_check(Side::White));
    assert!(!Position::startpos().in_check(Side::White));
}
