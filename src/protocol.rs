//! XBoard/CECP wire format: command parsing and the fixed reply lines.
//!
//! Commands match case-sensitively on the leading-whitespace-trimmed line.
//! Clock values arrive in centiseconds and are widened to milliseconds
//! here, so the driver only ever sees milliseconds.

use crate::board::Player;
use crate::status::GameStatus;

pub const ENGINE_NAME: &str = "Tempo 0.1.0";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Acknowledged without any state change (`xboard`, `random`, …).
    Ignored,
    Protover(u32),
    New,
    Quit,
    Force,
    PlayOther,
    Go,
    SetBoard(String),
    UserMove(String),
    GameResult,
    Undo,
    Remove,
    /// Own clock, milliseconds.
    Time(i64),
    /// Opponent clock, milliseconds.
    Otim(i64),
    Cores(usize),
    /// `?`: commit the best line found so far, immediately.
    MoveNow,
    Unknown(String),
}

pub fn parse(line: &str) -> Command {
    let trimmed = line.trim_start();
    let mut words = trimmed.split_whitespace();
    let Some(keyword) = words.next() else {
        return Command::Ignored;
    };
    let rest = || trimmed[keyword.len()..].trim().to_string();

    match keyword {
        "xboard" | "random" | "hard" | "easy" | "post" | "computer" | "accepted"
        | "rejected" | "level" | "st" | "sd" | "nps" => Command::Ignored,
        "protover" => match words.next().and_then(|w| w.parse().ok()) {
            Some(v) => Command::Protover(v),
            None => Command::Unknown(trimmed.to_string()),
        },
        "new" => Command::New,
        "quit" => Command::Quit,
        "force" => Command::Force,
        "playother" => Command::PlayOther,
        "go" => Command::Go,
        "setboard" => Command::SetBoard(rest()),
        "usermove" => Command::UserMove(rest()),
        "result" => Command::GameResult,
        "undo" => Command::Undo,
        "remove" => Command::Remove,
        "time" => match words.next().and_then(|w| w.parse::<i64>().ok()) {
            Some(cs) => Command::Time(cs * 10),
            None => Command::Unknown(trimmed.to_string()),
        },
        "otim" => match words.next().and_then(|w| w.parse::<i64>().ok()) {
            Some(cs) => Command::Otim(cs * 10),
            None => Command::Unknown(trimmed.to_string()),
        },
        "cores" => match words.next().and_then(|w| w.parse().ok()) {
            Some(n) => Command::Cores(n),
            None => Command::Unknown(trimmed.to_string()),
        },
        "?" => Command::MoveNow,
        _ => Command::Unknown(trimmed.to_string()),
    }
}

/// The one-shot capability advertisement answering `protover 2`.
pub fn feature_line() -> String {
    format!(
        "feature myname=\"{}\" ping=0 setboard=1 playother=1 usermove=1 draw=0 \
         sigint=0 analyze=1 variants=\"normal\" colors=0 nps=0 debug=1 memory=0 \
         smp=1 done=1",
        ENGINE_NAME
    )
}

/// Game-end announcement for a terminal status; `mated` is the side to
/// move in the final position.
pub fn result_line(status: GameStatus, mated: Player) -> Option<String> {
    match status {
        GameStatus::Checkmate => Some(match mated {
            Player::White => "0-1 {Black mates}".to_string(),
            Player::Black => "1-0 {White mates}".to_string(),
        }),
        GameStatus::Stalemate => Some("1/2-1/2 {Stalemate}".to_string()),
        GameStatus::DrawFiftyMove => Some("1/2-1/2 {50 moves}".to_string()),
        GameStatus::DrawRepetition => Some("1/2-1/2 {repetition}".to_string()),
        GameStatus::InPlay => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_command_table() {
        assert_eq!(parse("xboard"), Command::Ignored);
        assert_eq!(parse("protover 2"), Command::Protover(2));
        assert_eq!(parse("  usermove e2e4"), Command::UserMove("e2e4".into()));
        assert_eq!(
            parse("setboard 8/8/8/8/8/3k4/8/R3K2R w KQ - 0 1"),
            Command::SetBoard("8/8/8/8/8/3k4/8/R3K2R w KQ - 0 1".into())
        );
        assert_eq!(parse("time 500"), Command::Time(5000));
        assert_eq!(parse("otim 123"), Command::Otim(1230));
        assert_eq!(parse("cores 4"), Command::Cores(4));
        assert_eq!(parse("?"), Command::MoveNow);
        assert_eq!(parse("Quit"), Command::Unknown("Quit".into()));
        assert_eq!(parse("frobnicate 7"), Command::Unknown("frobnicate 7".into()));
    }

    #[test]
    fn feature_line_is_complete() {
        let line = feature_line();
        for needle in ["myname=", "setboard=1", "usermove=1", "done=1"] {
            assert!(line.contains(needle), "missing {}", needle);
        }
    }

    #[test]
    fn result_lines() {
        assert_eq!(
            result_line(GameStatus::Checkmate, Player::Black).as_deref(),
            Some("1-0 {White mates}")
        );
        assert_eq!(
            result_line(GameStatus::Stalemate, Player::White).as_deref(),
            Some("1/2-1/2 {Stalemate}")
        );
        assert_eq!(result_line(GameStatus::InPlay, Player::White), None);
    }
}
