//! Pseudo-legal and legal move enumeration plus the attack test.

use crate::bitboard::{BitIter, BitboardExt};
use crate::board::{flags, Piece, Player, Position};
use crate::moves::execute::apply_move;
use crate::moves::tables::tables;
use crate::moves::types::{Move, MoveList};
use crate::square::Square;

/// Is `sq` attacked by any man of `by`? Symmetric table intersection: look
/// outward from the square through each piece kind's own geometry.
pub fn is_attacked(pos: &Position, sq: Square, by: Player) -> bool {
    let t = tables();
    let attackers = pos.men(by);
    let occupied = pos.occupied();
    let i = sq.index() as usize;

    if t.knight_to[i] & pos.knights() & attackers != 0 {
        return true;
    }
    if t.king_to[i] & pos.kings() & attackers != 0 {
        return true;
    }
    if t.pawn_from(by, sq) & pos.pawns() & attackers != 0 {
        return true;
    }
    for b in BitIter(t.bishop_to[i] & pos.diagonal_sliders() & attackers) {
        if t.bishop_path(sq, Square::from_index(b)) & occupied == 0 {
            return true;
        }
    }
    for r in BitIter(t.rook_to[i] & pos.line_sliders() & attackers) {
        if t.rook_path(sq, Square::from_index(r)) & occupied == 0 {
            return true;
        }
    }
    false
}

#[inline(always)]
pub fn in_check(pos: &Position, player: Player) -> bool {
    is_attacked(pos, pos.king_square(player), player.opponent())
}

fn push_pawn_moves(mover: Player, from: Square, to: Square, list: &mut MoveList) {
    let last_rank = match mover {
        Player::White => 7,
        Player::Black => 0,
    };
    if to.rank() == last_rank {
        for promo in [Piece::Queen, Piece::Rook, Piece::Bishop, Piece::Knight] {
            list.push(Move::promoting(mover, from, to, promo));
        }
    } else {
        list.push(Move::new(mover, Piece::Pawn, from, to));
    }
}

fn push_castling_moves(pos: &Position, mover: Player, list: &mut MoveList) {
    let occupied = pos.occupied();
    let opponent = mover.opponent();
    // Square indices shift by 56 for Black's back rank.
    let base = match mover {
        Player::White => 0u8,
        Player::Black => 56,
    };
    let (kingside, queenside) = match mover {
        Player::White => (flags::WHITE_KINGSIDE, flags::WHITE_QUEENSIDE),
        Player::Black => (flags::BLACK_KINGSIDE, flags::BLACK_QUEENSIDE),
    };
    // (flag, king target file, must-be-empty files, king transit files)
    let candidates: [(u64, u8, &[u8], &[u8]); 2] = [
        (kingside, 6, &[5, 6], &[4, 5, 6]),
        (queenside, 2, &[1, 2, 3], &[4, 3, 2]),
    ];

    for (flag, to_file, empty, transit) in candidates {
        if pos.flags & flag == 0 {
            continue;
        }
        // The availability flag is cleared the moment king or rook move, so
        // only occupancy and attack transit remain to verify.
        if empty.iter().any(|&f| occupied.contains(base + f)) {
            continue;
        }
        if transit
            .iter()
            .any(|&f| is_attacked(pos, Square::from_index(base + f), opponent))
        {
            continue;
        }
        list.push(Move::new(
            mover,
            Piece::King,
            Square::from_index(base + 4),
            Square::from_index(base + to_file),
        ));
    }
}

/// All moves of the side to move ignoring discovered self-check; castling
/// transit attacks are already verified here.
pub fn pseudo_legal_into(pos: &Position, list: &mut MoveList) {
    let t = tables();
    let mover = pos.to_move();
    let own = pos.men(mover);
    let enemy = pos.men(mover.opponent());
    let occupied = pos.occupied();
    let ep = pos.en_passant();

    for from_idx in BitIter(own) {
        let from = Square::from_index(from_idx);
        let Some((_, piece)) = pos.piece_at(from) else {
            continue;
        };
        let fi = from_idx as usize;

        match piece {
            Piece::Knight => {
                for to in BitIter(t.knight_to[fi] & !own) {
                    list.push(Move::new(mover, piece, from, Square::from_index(to)));
                }
            }
            Piece::King => {
                for to in BitIter(t.king_to[fi] & !own) {
                    list.push(Move::new(mover, piece, from, Square::from_index(to)));
                }
                push_castling_moves(pos, mover, list);
            }
            Piece::Bishop | Piece::Rook | Piece::Queen => {
                let mut reach = 0u64;
                if piece != Piece::Rook {
                    for to in BitIter(t.bishop_to[fi] & !own) {
                        if t.bishop_path(from, Square::from_index(to)) & occupied == 0 {
                            reach |= 1u64 << to;
                        }
                    }
                }
                if piece != Piece::Bishop {
                    for to in BitIter(t.rook_to[fi] & !own) {
                        if t.rook_path(from, Square::from_index(to)) & occupied == 0 {
                            reach |= 1u64 << to;
                        }
                    }
                }
                for to in BitIter(reach) {
                    list.push(Move::new(mover, piece, from, Square::from_index(to)));
                }
            }
            Piece::Pawn => {
                for to_idx in BitIter(t.pawn_to(mover, from) & !own) {
                    let to = Square::from_index(to_idx);
                    if to.file() == from.file() {
                        // Forward: the emptiness mask includes the target.
                        if t.pawn_path(mover, from, to) & occupied == 0 {
                            push_pawn_moves(mover, from, to, list);
                        }
                    } else if enemy.contains(to_idx) || ep == Some(to) {
                        push_pawn_moves(mover, from, to, list);
                    }
                }
            }
        }
    }
}

/// Legal moves: pseudo-legal minus those leaving the mover's king attacked.
pub fn legal_into(pos: &Position, list: &mut MoveList) {
    let mover = pos.to_move();
    let mut pseudo = MoveList::new();
    pseudo_legal_into(pos, &mut pseudo);
    for mv in pseudo {
        if !in_check(&apply_move(pos, mv), mover) {
            list.push(mv);
        }
    }
}

pub fn legal_moves(pos: &Position) -> MoveList {
    let mut list = MoveList::new();
    legal_into(pos, &mut list);
    list
}

/// Resolve wire text (`e2e4`, `e7e8q`) against the legal move set.
/// Anything that is not exactly a legal move comes back as `None`.
pub fn find_move(pos: &Position, text: &str) -> Option<Move> {
    if text.len() < 4 || text.len() > 5 {
        return None;
    }
    let from: Square = text.get(0..2)?.parse().ok()?;
    let to: Square = text.get(2..4)?.parse().ok()?;
    let promotion = match text.as_bytes().get(4) {
        None => None,
        Some(b'q') => Some(Piece::Queen),
        Some(b'r') => Some(Piece::Rook),
        Some(b'b') => Some(Piece::Bishop),
        Some(b'n') => Some(Piece::Knight),
        Some(_) => return None,
    };
    legal_moves(pos)
        .into_iter()
        .find(|mv| mv.from == from && mv.to == to && mv.promotion == promotion)
}
