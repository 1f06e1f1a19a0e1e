use crate::board::{Board, Color, Piece};
use crate::moves::attacks::{
    FILE_A, FILE_H, KING_ATTACKS, KNIGHT_ATTACKS, bishop_attacks, rook_attacks,
};
use crate::square::Square;

/// Whether any piece of `attacker` controls `square` on the current board.
///
/// Probes in reverse: for each piece kind, compute the squares from which
/// that kind would hit `square` and intersect with the attacker's pieces.
pub fn is_square_attacked(board: &Board, square: Square, attacker: Color) -> bool {
    let index = square.index() as usize;
    let target = square.mask();

    let pawn_attackers = match attacker {
        Color::White => ((target & !FILE_H) >> 7) | ((target & !FILE_A) >> 9),
        Color::Black => ((target & !FILE_A) << 7) | ((target & !FILE_H) << 9),
    };
    if pawn_attackers & board.pieces(Piece::Pawn, attacker) != 0 {
        return true;
    }
    if KNIGHT_ATTACKS[index] & board.pieces(Piece::Knight, attacker) != 0 {
        return true;
    }
    if KING_ATTACKS[index] & board.pieces(Piece::King, attacker) != 0 {
        return true;
    }

    let occupied = board.occupied();

    let rook_rays = rook_attacks(square.index(), occupied);
    if rook_rays & board.pieces(Piece::Rook, attacker) != 0 {
        return true;
    }

    let bishop_rays = bishop_attacks(square.index(), occupied);
    if bishop_rays & board.pieces(Piece::Bishop, attacker) != 0 {
        return true;
    }

    (rook_rays | bishop_rays) & board.pieces(Piece::Queen, attacker) != 0
}

/// Whether `side`'s king is attacked. A side with no king on the board is
/// never in check (hand-built positions may omit one).
#[inline(always)]
pub fn in_check(board: &Board, side: Color) -> bool {
    match board.king_square(side) {
        Some(king_sq) => is_square_attacked(board, king_sq, side.opposite()),
        None => false,
    }
}
