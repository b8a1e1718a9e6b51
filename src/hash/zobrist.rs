// src/hash/zobrist.rs

use crate::bitboard::BitIter;
use crate::board::{Piece, Player};
use crate::hash::zobrist_keys::KEYS;

/// Key for a (player, piece, square) placement. Piece codes are 1..=6, so
/// placement blocks are 1..=12 and never collide with the flag block.
#[inline(always)]
pub fn piece_key(player: Player, piece: Piece, sq: u8) -> u64 {
    let block = player.index() * 6 + piece.code();
    KEYS[(block << 6) | sq as usize]
}

/// Key for one bit of the `flags` set. Flag bits index block 0 directly.
#[inline(always)]
pub fn flag_key(bit: u8) -> u64 {
    KEYS[bit as usize]
}

/// XOR of the keys of every set bit in a `flags` word.
pub fn flags_hash(flags: u64) -> u64 {
    BitIter(flags).fold(0, |h, bit| h ^ flag_key(bit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placement_blocks_never_reach_flag_block() {
        for player in [Player::Black, Player::White] {
            for piece in Piece::ALL {
                let block = player.index() * 6 + piece.code();
                assert!((1..=12).contains(&block), "{:?} {:?}", player, piece);
            }
        }
    }

    #[test]
    fn keys_are_distinct_enough() {
        // The table is fixed, so a collision here would be permanent.
        let mut seen = std::collections::HashSet::new();
        for &k in KEYS.iter() {
            assert_ne!(k, 0);
            assert!(seen.insert(k), "duplicate zobrist key {:#018x}", k);
        }
    }

    #[test]
    fn flags_hash_is_xor_of_bits() {
        let f = (1u64 << 0) | (1 << 6) | (1 << 62);
        assert_eq!(flags_hash(f), flag_key(0) ^ flag_key(6) ^ flag_key(62));
    }
}
