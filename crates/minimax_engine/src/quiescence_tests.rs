use super::*;
use crate::search::INF;

#[test]
fn quiet_position_returns_the_standing_evaluation() {
    let pos = Position::startpos();
    let mut nodes = 0;
    let score = quiescence(&mut pos.clone(), -INF, INF, Side::White, &mut nodes);
    assert_eq!(score, evaluate(&pos, Side::White));
    assert_eq!(nodes, 1);
}

#[test]
fn standing_pat_cuts_at_beta() {
    let pos = Position::startpos();
    let mut nodes = 0;
    // The stand-pat score (0) already clears a negative beta bound.
    let score = quiescence(&mut pos.clone(), -2_000, -1_000, Side::White, &mut nodes);
    assert_eq!(score, -1_000);
}

#[test]
fn winning_captures_are_cashed_in() {
    // White can simply take the undefended queen.
    let pos = Position::from_fen("k7/8/8/3q4/4P3/8/8/7K w - - 0 1");
    let mut nodes = 0;
    let score = quiescence(&mut pos.clone(), -INF, INF, Side::White, &mut nodes);
    assert!(
        score > evaluate(&pos, Side::White),
        "capture sequence should beat standing pat"
    );
    assert!(score > 0);
}

#[test]
fn losing_captures_do_not_lower_the_score() {
    // Both of White's captures lose the queen for a pawn; standing pat wins.
    let pos = Position::from_fen("k7/1p6/2p5/1Q6/8/8/8/7K w - - 0 1");
    let mut nodes = 0;
    let score = quiescence(&mut pos.clone(), -INF, INF, Side::White, &mut nodes);
    assert!(score >= evaluate(&pos, Side::White));
}

#[test]
fn terminates_on_capture_dense_positions() {
    let pos =
        Position::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
    let mut nodes = 0;
    let score = quiescence(&mut pos.clone(), -INF, INF, Side::White, &mut nodes);
    assert!(score > -INF && score < INF);
    assert!(nodes > 1);
}
