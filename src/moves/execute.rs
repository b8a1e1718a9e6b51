//! Applying a move to a position. Positions are values: `apply_move`
//! returns the successor and never touches its input, which is what lets
//! the driver keep a plain history vector and hand the worker a snapshot.

use crate::board::{flags, Piece, Player, Position};
use crate::moves::types::Move;
use crate::square::Square;

/// Castling-availability bit to drop when a rook leaves or is captured on
/// its original corner.
#[inline(always)]
fn rook_corner_flag(player: Player, sq: Square) -> u64 {
    match (player, sq.index()) {
        (Player::White, 0) => flags::WHITE_QUEENSIDE, // a1
        (Player::White, 7) => flags::WHITE_KINGSIDE,  // h1
        (Player::Black, 56) => flags::BLACK_QUEENSIDE, // a8
        (Player::Black, 63) => flags::BLACK_KINGSIDE, // h8
        _ => 0,
    }
}

/// Rook relocation implied by a castling king move, keyed by king target.
#[inline(always)]
fn castling_rook(king_to: Square) -> (Square, Square) {
    match king_to.index() {
        6 => (Square::from_index(7), Square::from_index(5)),    // white O-O
        2 => (Square::from_index(0), Square::from_index(3)),    // white O-O-O
        62 => (Square::from_index(63), Square::from_index(61)), // black O-O
        58 => (Square::from_index(56), Square::from_index(59)), // black O-O-O
        other => unreachable!("castling king target {}", other),
    }
}

pub fn apply_move(pos: &Position, mv: Move) -> Position {
    let mut next = *pos;
    let mover = mv.player;
    debug_assert_eq!(mover, pos.to_move(), "move out of turn: {}", mv);

    // En-passant captures land on an empty square; the victim stands one
    // rank behind the target.
    let is_ep_capture = mv.piece == Piece::Pawn
        && mv.from.file() != mv.to.file()
        && pos.en_passant() == Some(mv.to);
    let captured = if is_ep_capture {
        next.remove(Square::new(mv.to.file(), mv.from.rank()))
    } else {
        next.remove(mv.to)
    };
    debug_assert!(
        captured.map_or(true, |(owner, _)| owner == mover.opponent()),
        "captured own piece: {}",
        mv
    );

    next.remove(mv.from);
    next.place(mover, mv.promotion.unwrap_or(mv.piece), mv.to);

    let mut new_flags = next.flags;

    if mv.is_castling() {
        let (rook_from, rook_to) = castling_rook(mv.to);
        next.remove(rook_from);
        next.place(mover, Piece::Rook, rook_to);
        new_flags |= match mover {
            Player::White => flags::WHITE_HAS_CASTLED,
            Player::Black => flags::BLACK_HAS_CASTLED,
        };
    }

    // Castling availability dies with the first king move, with a rook
    // leaving its corner, and with a rook captured on its corner.
    if mv.piece == Piece::King {
        new_flags &= !match mover {
            Player::White => flags::WHITE_CASTLING,
            Player::Black => flags::BLACK_CASTLING,
        };
    }
    if mv.piece == Piece::Rook {
        new_flags &= !rook_corner_flag(mover, mv.from);
    }
    if let Some((owner, Piece::Rook)) = captured {
        new_flags &= !rook_corner_flag(owner, mv.to);
    }

    // A fresh en-passant target exists only after a double pawn push.
    new_flags &= !flags::EP_MASK;
    if mv.piece == Piece::Pawn && mv.from.rank().abs_diff(mv.to.rank()) == 2 {
        new_flags |= Square::new(mv.from.file(), (mv.from.rank() + mv.to.rank()) / 2).bit();
    }

    new_flags ^= flags::WHITE_TO_MOVE;
    next.update_flags(new_flags);

    next.halfmove = if captured.is_some() || mv.piece == Piece::Pawn {
        0
    } else {
        pos.halfmove + 1
    };

    debug_assert!(next.hash_ok(), "incremental hash diverged after {}", mv);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::movegen::find_move;
    use std::str::FromStr;

    fn play(pos: &Position, text: &str) -> Position {
        let mv = find_move(pos, text).unwrap_or_else(|| panic!("no such move {}", text));
        apply_move(pos, mv)
    }

    #[test]
    fn double_push_sets_en_passant() {
        let pos = play(&Position::initial(), "e2e4");
        assert_eq!(pos.en_passant().map(|s| s.to_string()), Some("e3".into()));
        assert_eq!(pos.to_move(), Player::Black);
        assert_eq!(pos.halfmove, 0);
        // The bit clears again on the next move.
        let pos = play(&pos, "g8f6");
        assert_eq!(pos.en_passant(), None);
        assert_eq!(pos.halfmove, 1);
    }

    #[test]
    fn en_passant_capture_removes_the_bypassing_pawn() {
        let pos = Position::from_str("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").unwrap();
        let pos = play(&pos, "e5d6");
        assert_eq!(pos.piece_at("d5".parse().unwrap()), None);
        assert_eq!(
            pos.piece_at("d6".parse().unwrap()),
            Some((Player::White, Piece::Pawn))
        );
        assert!(pos.hash_ok());
    }

    #[test]
    fn castling_moves_the_rook_and_marks_the_side() {
        let pos = Position::from_str("4k3/8/8/8/8/8/8/R3K2R w KQ - 3 1").unwrap();
        let oo = play(&pos, "e1g1");
        assert_eq!(
            oo.piece_at("f1".parse().unwrap()),
            Some((Player::White, Piece::Rook))
        );
        assert_eq!(oo.piece_at("h1".parse().unwrap()), None);
        assert!(oo.has_castled(Player::White));
        assert_eq!(oo.castling_flags(Player::White), 0);

        let ooo = play(&pos, "e1c1");
        assert_eq!(
            ooo.piece_at("d1".parse().unwrap()),
            Some((Player::White, Piece::Rook))
        );
        assert_eq!(ooo.piece_at("a1".parse().unwrap()), None);
    }

    #[test]
    fn rook_moves_drop_one_castling_right() {
        let pos = Position::from_str("4k3/8/8/8/8/8/8/R3K2R w KQ - 0 1").unwrap();
        let pos = play(&pos, "h1h2");
        assert_eq!(pos.castling_flags(Player::White), flags::WHITE_QUEENSIDE);
    }

    #[test]
    fn capturing_a_corner_rook_drops_the_right() {
        let pos = Position::from_str("r3k3/8/8/8/8/8/8/R3K2R w KQq - 0 1").unwrap();
        let pos = play(&pos, "a1a8");
        assert_eq!(pos.castling_flags(Player::Black), 0);
        assert_eq!(pos.halfmove, 0);
    }

    #[test]
    fn promotion_swaps_the_pawn_for_the_choice() {
        let pos = Position::from_str("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let pos = play(&pos, "a7a8q");
        assert_eq!(
            pos.piece_at("a8".parse().unwrap()),
            Some((Player::White, Piece::Queen))
        );
        assert_eq!(pos.pawns(), 0);
        assert!(pos.hash_ok());
    }
}
