// src/board/flags.rs
//
// Bit assignments inside the position's `flags` set. Only squares that can
// never be a castling target or an en-passant target are repurposed, so the
// flag bits and the placement bits live in the same 64-bit container shape.

/// a1: set ⇔ White to move.
pub const WHITE_TO_MOVE: u64 = 1 << 0;

/// Castling-target squares still available.
pub const WHITE_KINGSIDE: u64 = 1 << 6; // g1
pub const WHITE_QUEENSIDE: u64 = 1 << 2; // c1
pub const BLACK_KINGSIDE: u64 = 1 << 62; // g8
pub const BLACK_QUEENSIDE: u64 = 1 << 58; // c8

pub const WHITE_CASTLING: u64 = WHITE_KINGSIDE | WHITE_QUEENSIDE;
pub const BLACK_CASTLING: u64 = BLACK_KINGSIDE | BLACK_QUEENSIDE;
pub const ALL_CASTLING: u64 = WHITE_CASTLING | BLACK_CASTLING;

/// "Has castled" markers, one unused rank-1/8 flag square per side.
pub const WHITE_HAS_CASTLED: u64 = 1 << 3; // d1
pub const BLACK_HAS_CASTLED: u64 = 1 << 59; // d8

/// En-passant target bits live on ranks 3 and 6; at most one is ever set.
pub const EP_RANK_3: u64 = 0x0000_0000_00FF_0000;
pub const EP_RANK_6: u64 = 0x0000_FF00_0000_0000;
pub const EP_MASK: u64 = EP_RANK_3 | EP_RANK_6;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_bits_disjoint() {
        let all = [
            WHITE_TO_MOVE,
            WHITE_KINGSIDE,
            WHITE_QUEENSIDE,
            BLACK_KINGSIDE,
            BLACK_QUEENSIDE,
            WHITE_HAS_CASTLED,
            BLACK_HAS_CASTLED,
        ];
        let mut seen = 0u64;
        for bit in all {
            assert_eq!(bit.count_ones(), 1);
            assert_eq!(seen & bit, 0);
            seen |= bit;
        }
        assert_eq!(seen & EP_MASK, 0);
        assert_eq!(EP_MASK.count_ones(), 16);
    }
}
