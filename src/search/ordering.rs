//! Move ordering: stored PV move first, captures by MVV-LVA, killers,
//! then the quiet rest.

use crate::board::{Piece, Position};
use crate::moves::types::{Move, MoveList};
use std::collections::HashMap;

const PV_SCORE: i32 = 1 << 30;
const CAPTURE_BASE: i32 = 1 << 20;
const KILLER_SLOT_BASE: i32 = 1 << 16;
const KILLER_COUNT_BASE: i32 = 1 << 12;

/// Victim of a move, counting the en-passant pawn.
pub fn victim_of(pos: &Position, mv: &Move) -> Option<Piece> {
    match pos.piece_at(mv.to) {
        Some((_, piece)) => Some(piece),
        None if mv.piece == Piece::Pawn && mv.from.file() != mv.to.file() => Some(Piece::Pawn),
        None => None,
    }
}

fn score(
    pos: &Position,
    mv: &Move,
    pv_move: Option<Move>,
    killer_slot: &[Option<Move>; 2],
    killer_counts: &HashMap<Move, u32>,
) -> i32 {
    if pv_move == Some(*mv) {
        return PV_SCORE;
    }
    if let Some(victim) = victim_of(pos, mv) {
        // Most valuable victim first, least valuable attacker breaking ties.
        return CAPTURE_BASE + victim.value() * 16 - mv.piece as i32;
    }
    if killer_slot[0] == Some(*mv) {
        return KILLER_SLOT_BASE + 256;
    }
    if killer_slot[1] == Some(*mv) {
        return KILLER_SLOT_BASE;
    }
    if let Some(&count) = killer_counts.get(mv) {
        return KILLER_COUNT_BASE + count.min(1 << 11) as i32;
    }
    0
}

pub fn order_moves(
    pos: &Position,
    moves: &mut MoveList,
    pv_move: Option<Move>,
    killer_slot: &[Option<Move>; 2],
    killer_counts: &HashMap<Move, u32>,
) {
    moves.sort_unstable_by_key(|mv| {
        std::cmp::Reverse(score(pos, mv, pv_move, killer_slot, killer_counts))
    });
}
