//! Terminal-state classification over the game history.
//!
//! The head of `history` (its last element) is the current position; the
//! first element is the root. Repetition scans walk backwards and stop at
//! the first position whose halfmove counter is zero, because a capture or
//! pawn move makes everything before it unreachable.

use crate::board::Position;
use crate::moves::movegen::{in_check, legal_moves};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InPlay,
    Checkmate,
    Stalemate,
    DrawFiftyMove,
    DrawRepetition,
}

/// How often the current position occurs in its reachable history window
/// (the current occurrence included).
pub fn repetition_count(history: &[Position]) -> usize {
    let Some(head) = history.last() else {
        return 0;
    };
    let mut count = 0;
    for pos in history.iter().rev() {
        if pos == head {
            count += 1;
        }
        if pos.halfmove == 0 {
            break;
        }
    }
    count
}

/// The current position already appeared before in the game.
pub fn is_repetition(history: &[Position]) -> bool {
    repetition_count(history) > 1
}

pub fn is_fifty_move(pos: &Position) -> bool {
    pos.halfmove >= 100
}

/// Classify the head of `history`. Move-based outcomes win over claimable
/// draws: a mating move mates even when the clocks have run long.
pub fn position_status(history: &[Position]) -> GameStatus {
    let Some(head) = history.last() else {
        return GameStatus::InPlay;
    };

    if legal_moves(head).is_empty() {
        return if in_check(head, head.to_move()) {
            GameStatus::Checkmate
        } else {
            GameStatus::Stalemate
        };
    }

    if is_fifty_move(head) {
        return GameStatus::DrawFiftyMove;
    }
    if is_repetition(history) {
        return GameStatus::DrawRepetition;
    }

    GameStatus::InPlay
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::execute::apply_move;
    use crate::moves::movegen::find_move;
    use std::str::FromStr;

    #[test]
    fn repetition_window_stops_at_irreversible_moves() {
        // Shuffle knights back and forth from the start position: the
        // start position recurs once the knights return.
        let mut history = vec![Position::initial()];
        for text in ["g1f3", "g8f6", "f3g1", "f6g8"] {
            let head = *history.last().unwrap();
            let mv = find_move(&head, text).unwrap();
            history.push(apply_move(&head, mv));
        }
        assert!(is_repetition(&history));

        // A pawn push resets the window.
        let head = *history.last().unwrap();
        let mv = find_move(&head, "e2e4").unwrap();
        history.push(apply_move(&head, mv));
        assert_eq!(repetition_count(&history), 1);
    }

    #[test]
    fn classifies_mate_and_stalemate() {
        let mate = Position::from_str("6k1/6Q1/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert_eq!(position_status(&[mate]), GameStatus::Checkmate);

        let stalemate = Position::from_str("7k/5Q2/5K2/8/8/8/8/8 b - - 0 1").unwrap();
        assert_eq!(position_status(&[stalemate]), GameStatus::Stalemate);
    }

    #[test]
    fn fifty_move_rule_trips_at_one_hundred_plies() {
        let pos = Position::from_str("4k3/8/8/8/8/8/8/4K3 w - - 100 80").unwrap();
        assert_eq!(position_status(&[pos]), GameStatus::DrawFiftyMove);
    }
}
