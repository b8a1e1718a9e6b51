use crate::board::{Piece, Player};
use crate::square::Square;
use arrayvec::ArrayVec;
use std::fmt;

/// Generation buffer; 256 bounds any legal chess position comfortably.
pub type MoveList = ArrayVec<Move, 256>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub player: Player,
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Piece>,
}

impl Move {
    pub fn new(player: Player, piece: Piece, from: Square, to: Square) -> Self {
        Move {
            player,
            piece,
            from,
            to,
            promotion: None,
        }
    }

    pub fn promoting(player: Player, from: Square, to: Square, promotion: Piece) -> Self {
        Move {
            player,
            piece: Piece::Pawn,
            from,
            to,
            promotion: Some(promotion),
        }
    }

    /// King hop of two files; the rook follows in `apply_move`.
    #[inline(always)]
    pub fn is_castling(&self) -> bool {
        self.piece == Piece::King && self.from.file().abs_diff(self.to.file()) == 2
    }

    /// Wire form: `<from><to>[promotionLetter]`, e.g. `e2e4`, `e7e8q`.
    pub fn to_alg(&self) -> String {
        let mut s = format!("{}{}", self.from, self.to);
        if let Some(p) = self.promotion {
            s.push(match p {
                Piece::Queen => 'q',
                Piece::Rook => 'r',
                Piece::Bishop => 'b',
                Piece::Knight => 'n',
                _ => '?',
            });
        }
        s
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_alg())
    }
}
