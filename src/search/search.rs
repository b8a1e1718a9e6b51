//! Alpha-beta negamax with transposition caching, killer ordering, and
//! iterative deepening.
//!
//! The deepening loop is written against a publish callback rather than a
//! concrete channel: after every completed depth it hands the improving
//! [`Variation`] to the callback and keeps going only while the callback
//! answers `true`. The driver's worker thread wires that callback to the
//! input queue and the one-slot command channel, which is where the
//! cancellation rendezvous lives. A process-wide stop flag serves as an
//! additional read-only hint for deep recursion; it is toggled only at
//! epoch boundaries.

use crate::board::Position;
use crate::moves::execute::apply_move;
use crate::moves::movegen::legal_moves;
use crate::moves::types::{Move, MoveList};
use crate::search::eval::evaluate;
use crate::search::ordering::{order_moves, victim_of};
use crate::search::tt::{Bound, Transposition, TranspositionTable};
use crate::status::repetition_count;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

pub const MAX_DEPTH: i32 = 32;
const MAX_PLY: usize = 128;

/// Window bound, comfortably above any mate score and 4-aligned.
pub const INF: i32 = 1 << 24;
/// Scores beyond this are mates; they shed one step per ply toward the
/// root so nearer mates order strictly higher.
pub const MATE_THRESHOLD: i32 = 0x7000;
const MATE_STEP: i32 = 64;

static STOP_THINKING: AtomicBool = AtomicBool::new(false);

/// Clear the stop hint. Called by the driver when a worker epoch begins.
pub fn begin_thinking() {
    STOP_THINKING.store(false, Ordering::Relaxed);
}

/// Raise the stop hint. Called by the driver when it cancels or commits.
pub fn finish_thinking() {
    STOP_THINKING.store(true, Ordering::Relaxed);
}

#[inline(always)]
pub fn stop_requested() -> bool {
    STOP_THINKING.load(Ordering::Relaxed)
}

/// A principal variation: the line the searcher currently believes in.
/// Scores are from White's viewpoint; variations order by score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variation {
    pub moves: Vec<Move>,
    pub score: i32,
    pub nodes: u64,
    pub depth: i32,
}

impl Variation {
    pub fn first_move(&self) -> Option<Move> {
        self.moves.first().copied()
    }
}

/// Immutable snapshot handed to a worker at spawn.
#[derive(Debug, Clone)]
pub struct SearchTask {
    /// Game history, last element current. Never empty.
    pub history: Vec<Position>,
    /// Leftover line from the previous epoch, tried first at the root.
    pub plan: Option<Variation>,
    /// Cutoff counts learned across the game.
    pub killer_counts: HashMap<Move, u32>,
    pub max_depth: i32,
}

struct Searcher {
    tt: TranspositionTable,
    killer_slots: Vec<[Option<Move>; 2]>,
    killer_counts: HashMap<Move, u32>,
    /// Game history plus the current search line; repetition scans see both.
    line: Vec<Position>,
    nodes: u64,
    aborted: bool,
}

impl Searcher {
    fn new(task: &SearchTask) -> Self {
        Searcher {
            tt: TranspositionTable::new(),
            killer_slots: vec![[None; 2]; MAX_PLY],
            killer_counts: task.killer_counts.clone(),
            line: task.history.clone(),
            nodes: 0,
            aborted: false,
        }
    }

    #[inline]
    fn tick(&mut self) {
        self.nodes += 1;
        if self.nodes & 1023 == 0 && stop_requested() {
            self.aborted = true;
        }
    }

    /// Captures-only extension of the static evaluation at the horizon.
    fn quiescence(&mut self, pos: &Position, ply: usize, mut alpha: i32, beta: i32) -> i32 {
        self.tick();
        let mover = pos.to_move();
        let stand = evaluate(pos) * mover.factor();
        if self.aborted || ply >= MAX_PLY || stand >= beta {
            return stand;
        }
        if stand > alpha {
            alpha = stand;
        }

        let mut captures: MoveList = legal_moves(pos)
            .into_iter()
            .filter(|mv| victim_of(pos, mv).is_some())
            .collect();
        order_moves(pos, &mut captures, None, &[None, None], &self.killer_counts);

        for mv in captures {
            let next = apply_move(pos, mv);
            let score = -self.quiescence(&next, ply + 1, -beta, -alpha);
            if self.aborted {
                return alpha;
            }
            if score >= beta {
                return score;
            }
            if score > alpha {
                alpha = score;
            }
        }
        alpha
    }

    /// Negamax over legal moves; scores are relative to the side to move.
    fn negamax(
        &mut self,
        pos: &Position,
        depth: i32,
        ply: usize,
        mut alpha: i32,
        mut beta: i32,
    ) -> (i32, Vec<Move>) {
        self.tick();
        if self.aborted {
            return (0, vec![]);
        }

        // Draw by repetition along the line (game history included).
        if ply > 0 && repetition_count(&self.line) > 1 {
            return (0, vec![]);
        }

        let mut pv_move = None;
        let mut ordered_hint: Option<Vec<Move>> = None;
        if let Some(entry) = self.tt.probe(pos) {
            pv_move = entry.pv.first().copied();
            if !entry.ordered.is_empty() {
                ordered_hint = Some(entry.ordered.clone());
            }
            if entry.depth >= depth {
                let value = entry.value();
                match entry.bound() {
                    Bound::Exact => return (value, entry.pv.clone()),
                    Bound::Lower => alpha = alpha.max(value),
                    Bound::Upper => beta = beta.min(value),
                }
                if alpha >= beta {
                    let pv = entry.pv.clone();
                    return (value, pv);
                }
            }
        }

        if depth <= 0 {
            return (self.quiescence(pos, ply, alpha, beta), vec![]);
        }

        let mover = pos.to_move();
        let mut moves = legal_moves(pos);
        if moves.is_empty() {
            // Mate or stalemate; the evaluator returns the sentinels.
            return (evaluate(pos) * mover.factor(), vec![]);
        }

        match ordered_hint {
            Some(hint) => reuse_ordering(&mut moves, &hint),
            None => {
                let slot = self.killer_slots[ply.min(MAX_PLY - 1)];
                order_moves(pos, &mut moves, pv_move, &slot, &self.killer_counts);
            }
        }

        let original_alpha = alpha;
        let mut best = -INF;
        let mut best_pv: Vec<Move> = vec![];
        let mut tried: Vec<Move> = Vec::with_capacity(moves.len());

        for mv in moves {
            tried.push(mv);
            let next = apply_move(pos, mv);
            self.line.push(next);
            let (child, child_pv) = self.negamax(&next, depth - 1, ply + 1, -beta, -alpha);
            self.line.pop();
            if self.aborted {
                return (0, vec![]);
            }

            let mut score = -child;
            if score > MATE_THRESHOLD {
                score -= MATE_STEP;
            } else if score < -MATE_THRESHOLD {
                score += MATE_STEP;
            }

            if score > best {
                best = score;
                best_pv = std::iter::once(mv).chain(child_pv).collect();
            }
            if best > alpha {
                alpha = best;
            }
            if alpha >= beta {
                if victim_of(pos, &mv).is_none() {
                    let slot = &mut self.killer_slots[ply.min(MAX_PLY - 1)];
                    if slot[0] != Some(mv) {
                        slot[1] = slot[0];
                        slot[0] = Some(mv);
                    }
                    *self.killer_counts.entry(mv).or_insert(0) += 1;
                }
                break;
            }
        }

        let bound = if best <= original_alpha {
            Bound::Upper
        } else if best >= beta {
            Bound::Lower
        } else {
            Bound::Exact
        };
        // Best-first ordering for the next iteration over this position.
        if let Some(first) = best_pv.first().copied() {
            if let Some(i) = tried.iter().position(|m| *m == first) {
                tried[..=i].rotate_right(1);
            }
        }
        self.tt
            .store(*pos, Transposition::new(depth, best, bound, best_pv.clone(), tried));

        (best, best_pv)
    }
}

/// Bring every move of `hint` that is still pseudo-sensible to the front,
/// keeping the generator's order for the rest.
fn reuse_ordering(moves: &mut MoveList, hint: &[Move]) {
    let mut front = 0;
    for h in hint {
        if let Some(i) = moves[front..].iter().position(|m| m == h) {
            moves[front..front + i + 1].rotate_right(1);
            front += 1;
        }
    }
}

/// Iterative deepening. Publishes an improving [`Variation`] after every
/// completed depth; stops early when `publish` answers `false` (the caller
/// was told to stand down) and returns whether the search ran to its own
/// natural end.
pub fn deepen<F: FnMut(Variation) -> bool>(task: &SearchTask, mut publish: F) -> bool {
    let Some(&root) = task.history.last() else {
        return true;
    };
    if legal_moves(&root).is_empty() {
        return true;
    }

    let mut searcher = Searcher::new(task);
    let mover = root.to_move();

    // Seed the root ordering with the plan left over from the last epoch.
    if let Some(plan) = &task.plan {
        if !plan.moves.is_empty() {
            searcher.tt.store(
                root,
                Transposition::new(-1, 0, Bound::Upper, plan.moves.clone(), vec![]),
            );
        }
    }

    for depth in 1..=task.max_depth.min(MAX_DEPTH) {
        let (score, pv) = searcher.negamax(&root, depth, 0, -INF, INF);
        if searcher.aborted || pv.is_empty() {
            break;
        }
        let mated = score.abs() > MATE_THRESHOLD;
        let variation = Variation {
            moves: pv,
            score: score * mover.factor(),
            nodes: searcher.nodes,
            depth,
        };
        if !publish(variation) {
            return false;
        }
        if mated {
            break;
        }
    }
    true
}
