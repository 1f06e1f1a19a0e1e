use crate::board::{Board, Color, Piece};
use crate::moves::attacks::{attacks_from, pawn_attacks};
use crate::square::Square;

/// Whether the piece on `from` can reach `to` under its own movement rule,
/// given current occupancy. Blocking and capture legality are included;
/// king safety is not; that is the validator's final guard. Castling is
/// not a movement in this sense and is handled by its own sub-rule.
pub fn can_reach(board: &Board, from: Square, to: Square) -> bool {
    let Some((color, piece)) = board.piece_at(from) else {
        return false;
    };
    let target = to.mask();

    // Friendly pieces are never capture targets, and neither is the enemy
    // king (a position where it could be taken is already illegal).
    if board.occupancy(color) & target != 0 {
        return false;
    }
    if board.pieces(Piece::King, color.opposite()) & target != 0 {
        return false;
    }

    if piece == Piece::Pawn {
        return pawn_can_reach(board, color, from, to);
    }
    attacks_from(piece, color, from.index(), board.occupied()) & target != 0
}

/// Pawns split into diagonal captures and straight pushes; the attack table
/// covers only the former.
fn pawn_can_reach(board: &Board, color: Color, from: Square, to: Square) -> bool {
    let target = to.mask();
    if pawn_attacks(from.index(), color) & target != 0 {
        // A diagonal step needs a victim: a piece on the target square or
        // the en passant pawn that just passed it.
        return board.opponent_occupancy(color) & target != 0 || board.en_passant_target() == Some(to);
    }

    // Pushes never capture.
    if board.occupied() & target != 0 {
        return false;
    }
    let (single, double, start_rank) = match color {
        Color::White => (from.index() as i16 + 8, from.index() as i16 + 16, 1u8),
        Color::Black => (from.index() as i16 - 8, from.index() as i16 - 16, 6u8),
    };
    if to.index() as i16 == single {
        return true;
    }
    to.index() as i16 == double
        && from.rank() == start_rank
        && board.occupied() & Square::from_index(single as u8).mask() == 0
}
