//! Append-only opening notebook.
//!
//! Every user move the engine has not seen before is recorded as one
//! `<algebraic> <FEN>` line in `data/opening-white` or `data/opening-black`
//! (the mover's color). Both files load into a position-keyed map at
//! startup, and the driver probes that map before spawning a search.

use crate::board::{Player, Position};
use crate::moves::movegen::find_move;
use crate::moves::types::Move;
use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum BookError {
    #[error("book io: {0}")]
    Io(#[from] std::io::Error),
}

pub struct OpeningBook {
    dir: PathBuf,
    moves: HashMap<Position, Vec<Move>>,
}

impl OpeningBook {
    /// Load whatever book lines exist under `dir`; missing files are an
    /// empty book, malformed lines are skipped.
    pub fn load<P: AsRef<Path>>(dir: P) -> Self {
        let mut book = OpeningBook {
            dir: dir.as_ref().to_path_buf(),
            moves: HashMap::new(),
        };
        for player in Player::ALL {
            let path = book.file_for(player);
            let Ok(text) = fs::read_to_string(&path) else {
                continue;
            };
            let mut kept = 0usize;
            for line in text.lines() {
                match parse_line(line) {
                    Some((pos, mv)) => {
                        book.moves.entry(pos).or_default().push(mv);
                        kept += 1;
                    }
                    None => warn!(?path, line, "skipping unreadable book line"),
                }
            }
            debug!(?path, kept, "opening book loaded");
        }
        book
    }

    fn file_for(&self, player: Player) -> PathBuf {
        self.dir.join(match player {
            Player::White => "opening-white",
            Player::Black => "opening-black",
        })
    }

    /// Book moves recorded for this position, if any.
    pub fn probe(&self, pos: &Position) -> Option<&[Move]> {
        self.moves.get(pos).map(Vec::as_slice)
    }

    /// Remember a user move: append it to the mover's file unless that
    /// exact move is already known for the position.
    pub fn record(&mut self, pos: &Position, mv: Move) -> Result<(), BookError> {
        let known = self.moves.entry(*pos).or_default();
        if known.contains(&mv) {
            return Ok(());
        }
        known.push(mv);

        fs::create_dir_all(&self.dir)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.file_for(mv.player))?;
        writeln!(file, "{} {}", mv.to_alg(), pos.to_fen())?;
        Ok(())
    }
}

fn parse_line(line: &str) -> Option<(Position, Move)> {
    let (alg, fen) = line.trim().split_once(' ')?;
    let pos = Position::from_str(fen).ok()?;
    let mv = find_move(&pos, alg)?;
    Some((pos, mv))
}
