use super::*;
use crate::LeafEval;

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

#[test]
fn parallel_policy() {
    // Narrow roots, shallow depth, or disabled parallelism all stay serial.
    assert!(!use_parallel(4, 4, true));
    assert!(!use_parallel(20, 1, true));
    assert!(!use_parallel(20, 4, false));
    assert!(use_parallel(5, 2, true));
    assert!(use_parallel(20, 4, true));
}

#[test]
fn parallel_and_serial_scores_are_identical() {
    let pos = Position::from_fen(KIWIPETE);
    let mut moves = legal_moves(&pos);
    captures_first(&pos, &mut moves);
    let config = SearchConfig {
        depth: 2,
        parallel: true,
        leaf: LeafEval::Static,
    };

    let mut serial_nodes = 0;
    let mut serial = score_root_moves(
        &pos,
        Side::White,
        config.depth,
        config.leaf,
        &moves,
        &mut serial_nodes,
    );
    let (mut parallel, parallel_nodes) =
        parallel_root_scores(&pos, Side::White, config.depth, &config, &moves)
            .expect("dispatch should succeed");

    serial.sort_by_key(|&(mv, _)| (mv.from, mv.to, mv.promotion.map(|k| k as u8)));
    parallel.sort_by_key(|&(mv, _)| (mv.from, mv.to, mv.promotion.map(|k| k as u8)));
    assert_eq!(serial, parallel);
    assert_eq!(serial_nodes, parallel_nodes);
}

#[test]
fn report_carries_the_best_root_score() {
    let pos = Position::from_fen(KIWIPETE);
    let config = SearchConfig {
        depth: 2,
        parallel: true,
        leaf: LeafEval::Static,
    };
    let report = analyze(&pos, Side::White, &config);

    let moves = legal_moves(&pos);
    let mut nodes = 0;
    let scored = score_root_moves(&pos, Side::White, 2, LeafEval::Static, &moves, &mut nodes);
    let best = scored.iter().map(|&(_, s)| s).max().unwrap();

    assert_eq!(report.score, best);
    assert!(moves.contains(&report.best_move.unwrap()));
}
