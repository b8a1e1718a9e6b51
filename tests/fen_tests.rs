//! tests/fen_tests.rs
//! Decode/encode round trips and rejection of malformed records.

use std::str::FromStr;
use tempo::board::{Player, Position};

const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[test]
fn startpos_fen_equals_initial_board() {
    let decoded = Position::from_str(START_FEN).unwrap();
    assert_eq!(decoded, Position::initial());
    assert_eq!(decoded.zobrist, Position::initial().zobrist);
}

#[test]
fn encode_of_initial_is_canonical() {
    assert_eq!(Position::initial().to_fen(), START_FEN);
}

#[test]
fn round_trip_preserves_everything_but_fullmove() {
    let fens = [
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 23",
        "8/8/8/8/8/3k4/8/R3K2R w KQ - 7 40",
        "4k3/P7/8/8/8/8/8/4K3 b - - 3 1",
    ];
    for fen in fens {
        let pos = Position::from_str(fen).unwrap();
        let rebuilt = Position::from_str(&pos.to_fen()).unwrap();
        assert_eq!(pos, rebuilt, "round trip changed {}", fen);
        assert_eq!(pos.halfmove, rebuilt.halfmove, "halfmove lost in {}", fen);
        // Fullmove number is informational; everything else survives.
        let canonical = pos.to_fen();
        assert!(canonical.ends_with(" 1"), "fullmove pinned to 1: {}", canonical);
    }
}

#[test]
fn decoded_flags_match_the_fields() {
    let pos = Position::from_str("8/8/8/8/8/3k4/8/R3K2R w KQ - 0 1").unwrap();
    assert_eq!(pos.to_move(), Player::White);
    assert_ne!(pos.castling_flags(Player::White), 0);
    assert_eq!(pos.castling_flags(Player::Black), 0);
    assert_eq!(pos.en_passant(), None);

    let ep = Position::from_str("4k3/8/8/8/4p3/8/3P4/4K3 b - e3 0 1").unwrap();
    assert_eq!(ep.en_passant().map(|s| s.to_string()), Some("e3".into()));
}

#[test]
fn rejects_malformed_records() {
    let bad = [
        "",
        "only one field",
        // seven files in one rank
        "rnbqkbn/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        // bad glyph
        "rnbqkbnx/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        // bad color
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1",
        // bad castling letter
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQxq - 0 1",
        // en-passant square on a wrong rank
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq e4 0 1",
        // no kings
        "8/8/8/8/8/8/8/8 w - - 0 1",
        // two white kings
        "4k3/8/8/8/8/8/8/3KK3 w - - 0 1",
        // non-numeric clock
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - x 1",
    ];
    for fen in bad {
        assert!(Position::from_str(fen).is_err(), "accepted bad FEN {:?}", fen);
    }
}

#[test]
fn empty_runs_are_coalesced() {
    let pos = Position::from_str("4k3/8/8/2R2R2/8/8/8/4K3 w - - 0 1").unwrap();
    let fen = pos.to_fen();
    assert!(fen.starts_with("4k3/8/8/2R2R2/8/8/8/4K3"), "{}", fen);
}
