//! tests/stop_flag_tests.rs
//! The process-wide stop hint halts deep recursion promptly. Kept in its
//! own binary because the flag is global to the process.

use std::collections::HashMap;
use std::time::{Duration, Instant};
use tempo::board::Position;
use tempo::search::search::{begin_thinking, deepen, finish_thinking, SearchTask};

#[test]
fn raised_hint_aborts_a_deep_search_quickly() {
    finish_thinking();

    let task = SearchTask {
        history: vec![Position::initial()],
        plan: None,
        killer_counts: HashMap::new(),
        max_depth: 32,
    };
    let start = Instant::now();
    let completed = deepen(&task, |_| true);
    let elapsed = start.elapsed();

    // The hint is advisory, so a shallow depth may still finish, but a
    // depth-32 run must not.
    assert!(completed, "hint-aborted search still counts as its own end");
    assert!(
        elapsed < Duration::from_secs(5),
        "stop hint ignored: ran {:?}",
        elapsed
    );

    begin_thinking();
}
