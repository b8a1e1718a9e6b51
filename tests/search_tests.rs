//! tests/search_tests.rs
//! Iterative deepening behavior over the publish callback.

use std::collections::HashMap;
use std::str::FromStr;
use tempo::board::Position;
use tempo::moves::execute::apply_move;
use tempo::moves::movegen::{in_check, legal_moves};
use tempo::search::search::{deepen, SearchTask, Variation, MATE_THRESHOLD};

fn task_for(fen: &str, depth: i32) -> SearchTask {
    SearchTask {
        history: vec![Position::from_str(fen).unwrap()],
        plan: None,
        killer_counts: HashMap::new(),
        max_depth: depth,
    }
}

fn search_to_depth(fen: &str, depth: i32) -> Vec<Variation> {
    let mut published = vec![];
    let completed = deepen(&task_for(fen, depth), |v| {
        published.push(v);
        true
    });
    assert!(completed);
    published
}

#[test]
fn committed_mate_in_one_really_mates() {
    let fen = "7k/5Q2/6K1/8/8/8/8/8 w - - 0 1";
    let best = search_to_depth(fen, 3).pop().expect("no variation");
    assert!(best.score > MATE_THRESHOLD, "score {}", best.score);

    let root = Position::from_str(fen).unwrap();
    let after = apply_move(&root, best.moves[0]);
    assert!(legal_moves(&after).is_empty(), "opponent still has moves");
    assert!(in_check(&after, after.to_move()), "not even check");
}

#[test]
fn mated_score_orders_above_everything() {
    let published = search_to_depth("7k/5Q2/6K1/8/8/8/8/8 w - - 0 1", 6);
    // The loop stops deepening once the mate is certain.
    let last = published.last().unwrap();
    assert!(last.score > MATE_THRESHOLD);
    assert!(last.depth < 6, "kept searching past a proven mate");
}

#[test]
fn deeper_search_sees_the_recapture() {
    // Qxd5 wins a pawn but loses the queen to Rxd5 one ply later.
    let fen = "4k3/3r4/8/3p4/4Q3/8/8/4K3 w - - 0 1";
    let published = search_to_depth(fen, 3);
    let best = published.last().unwrap();
    assert_ne!(
        best.moves[0].to_alg(),
        "e4d5",
        "took the poisoned pawn at depth {}",
        best.depth
    );
}

#[test]
fn depths_improve_monotonically() {
    let published = search_to_depth(
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        3,
    );
    let depths: Vec<i32> = published.iter().map(|v| v.depth).collect();
    assert_eq!(depths, vec![1, 2, 3]);
    for v in &published {
        assert!(!v.moves.is_empty());
        assert!(v.nodes > 0);
    }
    // Node counts are cumulative across iterations.
    assert!(published.windows(2).all(|w| w[0].nodes <= w[1].nodes));
}

#[test]
fn plan_seeds_the_root_ordering() {
    // With a plan pointing at a quiet move, depth-1 still settles on the
    // best capture, proving the plan only orders and never decides.
    let fen = "4k3/8/8/3q4/3R4/8/8/4K3 w - - 0 1";
    let root = Position::from_str(fen).unwrap();
    let quiet = legal_moves(&root)
        .into_iter()
        .find(|m| m.to_alg() == "e1f1")
        .unwrap();
    let mut task = task_for(fen, 2);
    task.plan = Some(Variation {
        moves: vec![quiet],
        score: 0,
        nodes: 0,
        depth: 1,
    });
    let mut last = None;
    assert!(deepen(&task, |v| {
        last = Some(v);
        true
    }));
    assert_eq!(last.unwrap().moves[0].to_alg(), "d4d5");
}

#[test]
fn cancelled_publisher_stops_the_worker() {
    let mut count = 0;
    let completed = deepen(&task_for("4k3/8/8/8/8/8/8/4K3 w - - 0 1", 8), |_| {
        count += 1;
        count < 2
    });
    assert!(!completed);
    assert_eq!(count, 2);
}

#[test]
fn no_legal_moves_means_nothing_to_publish() {
    // Stalemate: deepen completes without a single variation.
    let mut published = 0;
    let completed = deepen(&task_for("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1", 4), |_| {
        published += 1;
        true
    });
    assert!(completed);
    assert_eq!(published, 0);
}
