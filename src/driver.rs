//! The driver: owner of game state and stdout.
//!
//! A single event loop consumes one shared input queue fed by the stdin
//! reader and by at most one search worker. Worker messages carry the
//! epoch id (`sid`) they were spawned under; anything from an older epoch
//! is dropped on arrival, so cancelled workers can lag without being
//! observable. Cancellation itself travels the other way: each publisher
//! owns a one-slot boolean command channel, where `true` means keep going
//! and `false` means stand down; `false` may arrive without any
//! `true` ever having been sent.

use crate::board::{Player, Position};
use crate::book::OpeningBook;
use crate::moves::execute::apply_move;
use crate::moves::movegen::{find_move, legal_moves};
use crate::moves::types::Move;
use crate::protocol::{self, Command};
use crate::search::search::{
    begin_thinking, deepen, finish_thinking, SearchTask, Variation, MAX_DEPTH,
};
use crate::status::{position_status, GameStatus};
use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, Sender};
use rand::Rng;
use std::collections::HashMap;
use std::io::Write;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Everything the event loop can wake up on.
#[derive(Debug, Clone)]
pub enum Input {
    /// A command line from the reader.
    Line(String),
    /// Input closed.
    Eof,
    /// Worker reports an improved principal variation.
    Mv(u64, Variation),
    /// Worker completed its search.
    NoMore(u64),
    /// Worker abandoned all previously published variations.
    Forget(u64),
    /// Worker invalidated one specific variation.
    Remove(u64, Variation),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Best,
    First,
    Resign,
}

impl Strategy {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "best" => Some(Strategy::Best),
            "first" => Some(Strategy::First),
            "resign" => Some(Strategy::Resign),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Forced,
    Playing,
    Thinking(Instant),
    Terminated,
}

/// Per-move budget: a third of the clock lead (clamped) on top of a slice
/// of the remaining clock, all in milliseconds.
pub fn time_per_move(my_time: i64, opp_time: i64) -> i64 {
    ((my_time - opp_time) / 3).clamp(-500, 3000) + (my_time / 25).max(1000)
}

pub struct Driver<W: Write> {
    out: W,
    state: State,
    strategy: Strategy,
    history: Vec<Position>,
    plan: Option<Variation>,
    best: Option<Variation>,
    killers: HashMap<Move, u32>,
    book: OpeningBook,
    self_color: Player,
    sid: u64,
    my_time_ms: i64,
    opp_time_ms: i64,
    budget_ms: i64,
    core_limit: usize,
    queue: Sender<Input>,
    worker_cmd: Option<Sender<bool>>,
    reader_cmd: Option<Sender<bool>>,
}

impl<W: Write> Driver<W> {
    pub fn new(
        strategy: Strategy,
        book: OpeningBook,
        out: W,
        queue: Sender<Input>,
        reader_cmd: Option<Sender<bool>>,
    ) -> Self {
        Driver {
            out,
            state: State::Playing,
            strategy,
            history: vec![Position::initial()],
            plan: None,
            best: None,
            killers: HashMap::new(),
            book,
            self_color: Player::Black,
            sid: 0,
            my_time_ms: 300_000,
            opp_time_ms: 300_000,
            budget_ms: 0,
            core_limit: 1,
            queue,
            worker_cmd: None,
            reader_cmd,
        }
    }

    /// Run the event loop to termination; hands the writer back so callers
    /// can inspect what was emitted.
    pub fn run(mut self, queue: Receiver<Input>) -> W {
        while self.state != State::Terminated {
            let input = match self.state {
                State::Thinking(since) if self.best.is_some() => {
                    let elapsed = since.elapsed().as_millis() as i64;
                    let remaining = (self.budget_ms - elapsed).max(0) as u64;
                    match queue.recv_timeout(Duration::from_millis(remaining)) {
                        Ok(input) => input,
                        Err(RecvTimeoutError::Timeout) => {
                            self.commit_best();
                            continue;
                        }
                        Err(RecvTimeoutError::Disconnected) => break,
                    }
                }
                // Nothing to commit yet: wait as long as it takes.
                _ => match queue.recv() {
                    Ok(input) => input,
                    Err(_) => break,
                },
            };
            self.dispatch(input);
        }
        self.out
    }

    fn dispatch(&mut self, input: Input) {
        match input {
            Input::Line(text) => {
                let command = protocol::parse(&text);
                debug!(?command, "input line");
                if matches!(self.state, State::Thinking(_)) {
                    self.handle_while_thinking(command, &text);
                } else {
                    self.handle_command(command, &text);
                }
                let keep_reading = self.state != State::Terminated;
                if let Some(cmd) = &self.reader_cmd {
                    let _ = cmd.send(keep_reading);
                }
            }
            Input::Eof => {
                self.cancel_worker();
                if let Some(cmd) = &self.reader_cmd {
                    let _ = cmd.send(false);
                }
                self.state = State::Terminated;
            }
            Input::Mv(sid, variation) => {
                if sid == self.sid {
                    self.handle_pv(variation);
                }
            }
            Input::NoMore(sid) => {
                // End of search, regardless of how the worker got there;
                // commit_best falls back to the first legal move if the
                // search never reported.
                if sid == self.sid && matches!(self.state, State::Thinking(_)) {
                    self.worker_cmd = None;
                    self.commit_best();
                }
            }
            Input::Forget(sid) => {
                if sid == self.sid {
                    self.best = None;
                }
            }
            Input::Remove(sid, variation) => {
                if sid == self.sid && self.best.as_ref() == Some(&variation) {
                    self.best = None;
                }
            }
        }
    }

    // ---- command handling ----------------------------------------------

    /// Commands that arrive mid-search. A handful silently cancel the
    /// worker and proceed; everything else is not legal now.
    fn handle_while_thinking(&mut self, command: Command, text: &str) {
        match command {
            Command::MoveNow => self.commit_best(),
            Command::New
            | Command::Force
            | Command::SetBoard(_)
            | Command::Undo
            | Command::Quit => {
                self.cancel_worker();
                self.state = State::Playing;
                self.handle_command(command, text);
            }
            Command::Ignored => {}
            _ => self.emit(&format!("Error (command not legal now): {}", text.trim())),
        }
    }

    fn handle_command(&mut self, command: Command, text: &str) {
        match command {
            Command::Ignored => {}
            Command::Protover(_) => self.emit(&protocol::feature_line()),
            Command::New => {
                self.history = vec![Position::initial()];
                self.plan = None;
                self.best = None;
                self.self_color = Player::Black;
                self.state = State::Playing;
                self.maybe_think();
            }
            Command::Quit => {
                self.cancel_worker();
                self.state = State::Terminated;
            }
            Command::Force => self.state = State::Forced,
            Command::PlayOther => {
                self.state = State::Playing;
                self.self_color = self.current().to_move().opponent();
            }
            Command::Go => {
                self.state = State::Playing;
                self.self_color = self.current().to_move();
                self.maybe_think();
            }
            Command::SetBoard(fen) => match fen.parse::<Position>() {
                Ok(pos) => {
                    self.history = vec![pos];
                    self.plan = None;
                    self.best = None;
                    self.state = State::Forced;
                }
                Err(err) => {
                    self.emit(&format!("Error ({})", err));
                    self.state = State::Forced;
                }
            },
            Command::UserMove(alg) => self.user_move(&alg),
            Command::GameResult => self.state = State::Forced,
            Command::Undo => {
                if self.history.len() > 1 {
                    self.history.pop();
                    self.plan = None;
                } else {
                    self.emit(&format!("Error (command not legal now): {}", text.trim()));
                }
            }
            Command::Remove => {
                if self.history.len() > 2 {
                    self.history.truncate(self.history.len() - 2);
                    self.plan = None;
                } else {
                    self.emit(&format!("Error (command not legal now): {}", text.trim()));
                }
            }
            Command::Time(ms) => self.my_time_ms = ms,
            Command::Otim(ms) => self.opp_time_ms = ms,
            Command::Cores(n) => {
                // Accepted and remembered; the search itself stays on one
                // worker thread.
                self.core_limit = n.max(1);
                info!(cores = self.core_limit, "core limit set");
            }
            Command::MoveNow => {}
            Command::Unknown(line) => {
                self.emit(&format!("Error (unknown command): {}", line));
            }
        }
    }

    fn user_move(&mut self, alg: &str) {
        let current = *self.current();
        let Some(mv) = find_move(&current, alg) else {
            self.emit(&format!("Illegal move: '{}'", alg));
            return;
        };

        if let Err(err) = self.book.record(&current, mv) {
            warn!(%err, "could not record book move");
        }

        // The plan survives only while the opponent follows it.
        match self.plan.take() {
            Some(mut plan) if plan.first_move() == Some(mv) && plan.moves.len() > 1 => {
                plan.moves.remove(0);
                self.plan = Some(plan);
            }
            _ => {}
        }

        self.push_position(apply_move(&current, mv));
        if self.announce_result() {
            return;
        }
        if self.state == State::Playing {
            self.maybe_think();
        }
    }

    // ---- thinking lifecycle --------------------------------------------

    fn maybe_think(&mut self) {
        if self.state != State::Playing || self.current().to_move() != self.self_color {
            return;
        }
        // The game may already be over, e.g. `go` on a mated setboard.
        if self.announce_result() {
            return;
        }

        match self.strategy {
            Strategy::Resign => {
                self.emit("resign");
                self.state = State::Forced;
            }
            Strategy::First => {
                let moves = legal_moves(self.current());
                match moves.first() {
                    Some(&mv) => self.commit_move(mv),
                    None => {
                        // No moves means the result was announced already.
                    }
                }
            }
            Strategy::Best => {
                let book_move = self
                    .book
                    .probe(self.current())
                    .map(|known| known[rand::rng().random_range(0..known.len())]);
                match book_move {
                    Some(mv) => {
                        info!(%mv, "book move");
                        self.commit_move(mv);
                    }
                    None => self.spawn_worker(),
                }
            }
        }
    }

    fn spawn_worker(&mut self) {
        self.sid += 1;
        self.best = None;
        self.budget_ms = time_per_move(self.my_time_ms, self.opp_time_ms);
        begin_thinking();

        let task = SearchTask {
            history: self.history.clone(),
            plan: self.plan.clone(),
            killer_counts: self.killers.clone(),
            max_depth: MAX_DEPTH,
        };
        let sid = self.sid;
        let queue = self.queue.clone();
        let (cmd_tx, cmd_rx) = bounded::<bool>(1);
        self.worker_cmd = Some(cmd_tx);
        self.state = State::Thinking(Instant::now());
        info!(sid, budget_ms = self.budget_ms, "thinking");

        thread::spawn(move || {
            let publish_queue = queue.clone();
            let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                deepen(&task, |variation| {
                    if publish_queue.send(Input::Mv(sid, variation)).is_err() {
                        return false;
                    }
                    // Rendezvous: block until the driver answers, stop on
                    // `false` and on a dropped driver alike.
                    matches!(cmd_rx.recv(), Ok(true))
                })
            }));
            match outcome {
                // Natural end of search, and equally a worker that blew
                // up: either way the driver sees end-of-search.
                Ok(true) => {
                    let _ = queue.send(Input::NoMore(sid));
                }
                Err(_) => {
                    warn!("worker panicked");
                    let _ = queue.send(Input::NoMore(sid));
                }
                // Told to stand down: nothing further may be published.
                Ok(false) => {}
            }
        });
    }

    /// Cancel the worker epoch: raise the stop hint, post `false` into the
    /// command slot, and retire the sid so stragglers are dropped.
    fn cancel_worker(&mut self) {
        finish_thinking();
        if let Some(cmd) = self.worker_cmd.take() {
            let _ = cmd.try_send(false);
        }
        self.sid += 1;
    }

    fn handle_pv(&mut self, variation: Variation) {
        let State::Thinking(since) = self.state else {
            return;
        };

        // A late arrival is not accepted: the budget is up, commit what we
        // already have. An empty `best` still takes the line, since committing
        // nothing is worse than committing late.
        let elapsed = since.elapsed().as_millis() as i64;
        let in_budget = elapsed * 10 < self.budget_ms * 9;
        if !in_budget && self.best.is_some() {
            self.commit_best();
            return;
        }

        let accept = match &self.best {
            None => true,
            Some(best) => {
                if variation.first_move() == best.first_move() {
                    true
                } else if (variation.score - best.score).abs() <= 5 {
                    rand::random()
                } else {
                    match self.self_color {
                        Player::White => variation.score > best.score,
                        Player::Black => variation.score < best.score,
                    }
                }
            }
        };

        if accept {
            self.emit_post_line(&variation, since);
            self.best = Some(variation);
        }

        if in_budget {
            if let Some(cmd) = &self.worker_cmd {
                let _ = cmd.send(true);
            }
        } else {
            self.commit_best();
        }
    }

    fn emit_post_line(&mut self, variation: &Variation, since: Instant) {
        let centis = since.elapsed().as_millis() / 10;
        let pv: Vec<String> = variation.moves.iter().map(Move::to_alg).collect();
        self.emit(&format!(
            "{} {} {} {} {}",
            variation.depth,
            variation.score,
            centis,
            variation.nodes,
            pv.join(" ")
        ));
    }

    /// Commit whatever has been found so far: on `?`, on budget expiry,
    /// and on end-of-search. Falls back to the first legal move if the
    /// worker has not reported yet.
    fn commit_best(&mut self) {
        self.cancel_worker();
        self.state = State::Playing;

        let variation = self.best.take();
        let mv = variation
            .as_ref()
            .and_then(Variation::first_move)
            .or_else(|| legal_moves(self.current()).first().copied());
        let Some(mv) = mv else {
            return;
        };

        if let Some(var) = variation {
            // Cutoff credit for the tail of the line keeps future move
            // ordering warm.
            for m in var.moves.iter().skip(1) {
                *self.killers.entry(*m).or_insert(0) += 1;
            }
            self.plan = if var.moves.len() > 1 {
                Some(Variation {
                    moves: var.moves[1..].to_vec(),
                    ..var
                })
            } else {
                None
            };
        }
        self.commit_move(mv);
    }

    fn commit_move(&mut self, mv: Move) {
        self.emit(&format!("move {}", mv.to_alg()));
        let next = apply_move(self.current(), mv);
        self.push_position(next);
        self.state = State::Playing;
        self.announce_result();
    }

    // ---- shared helpers -------------------------------------------------

    fn current(&self) -> &Position {
        self.history.last().expect("history never empty")
    }

    fn push_position(&mut self, pos: Position) {
        if !pos.hash_ok() {
            self.emit("# ZOBRIST HASH FAILURE");
            self.emit(&format!("# at {}", pos.to_fen()));
        }
        self.history.push(pos);
    }

    /// Announce a terminal result if the head position is one; returns
    /// whether the game ended.
    fn announce_result(&mut self) -> bool {
        let status = position_status(&self.history);
        if status == GameStatus::InPlay {
            return false;
        }
        let mated = self.current().to_move();
        if let Some(line) = protocol::result_line(status, mated) {
            self.emit(&line);
        }
        self.state = State::Forced;
        true
    }

    fn emit(&mut self, line: &str) {
        let _ = writeln!(self.out, "{}", line);
        let _ = self.out.flush();
    }
}
