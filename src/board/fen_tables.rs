// src/board/fen_tables.rs
// O(1) FEN glyph ↔ (player, piece) maps.

use super::{Piece, Player};

pub(super) const CHAR_TO_PC: [Option<(Player, Piece)>; 128] = {
    let mut table: [Option<(Player, Piece)>; 128] = [None; 128];

    // Uppercase = White
    table['P' as usize] = Some((Player::White, Piece::Pawn));
    table['N' as usize] = Some((Player::White, Piece::Knight));
    table['B' as usize] = Some((Player::White, Piece::Bishop));
    table['R' as usize] = Some((Player::White, Piece::Rook));
    table['Q' as usize] = Some((Player::White, Piece::Queen));
    table['K' as usize] = Some((Player::White, Piece::King));

    // Lowercase = Black
    table['p' as usize] = Some((Player::Black, Piece::Pawn));
    table['n' as usize] = Some((Player::Black, Piece::Knight));
    table['b' as usize] = Some((Player::Black, Piece::Bishop));
    table['r' as usize] = Some((Player::Black, Piece::Rook));
    table['q' as usize] = Some((Player::Black, Piece::Queen));
    table['k' as usize] = Some((Player::Black, Piece::King));

    table
};

pub(super) const fn pc_to_char(player: Player, piece: Piece) -> char {
    let glyph = match piece {
        Piece::Pawn => 'p',
        Piece::Knight => 'n',
        Piece::Bishop => 'b',
        Piece::Rook => 'r',
        Piece::Queen => 'q',
        Piece::King => 'k',
    };
    match player {
        Player::White => glyph.to_ascii_uppercase(),
        Player::Black => glyph,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs_round_trip() {
        const GLYPHS: [char; 12] = ['P', 'N', 'B', 'R', 'Q', 'K', 'p', 'n', 'b', 'r', 'q', 'k'];
        for g in GLYPHS {
            let (player, piece) = CHAR_TO_PC[g as usize].expect("glyph missing");
            assert_eq!(pc_to_char(player, piece), g);
        }
        assert!(CHAR_TO_PC['x' as usize].is_none());
    }
}
