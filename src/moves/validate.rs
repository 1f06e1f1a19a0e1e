use std::str::FromStr;

use tracing::debug;

use crate::board::{Board, Color, Piece};
use crate::moves::castle::Castle;
use crate::moves::oracle;
use crate::moves::simulate;
use crate::moves::square_control::{in_check, is_square_attacked};
use crate::moves::types::Move;
use crate::square::Square;

/// Single-move legality: castle signatures first, then turn ownership,
/// movement geometry and the post-move king-safety guard, in short-circuit
/// order. Pure predicate over a read-only board; the most expensive check
/// (the hypothetical-board simulation) runs last.
pub fn is_legal(board: &Board, from: Square, to: Square) -> bool {
    // The four castle signatures bypass the general pipeline entirely.
    if let Some(castle) = Castle::recognize(from, to) {
        return is_castle_legal(board, castle);
    }

    if from == to {
        return false;
    }
    let Some((color, _)) = board.piece_at(from) else {
        debug!(%from, %to, "rejected: no piece on the source square");
        return false;
    };
    if color != board.side_to_move {
        debug!(%from, %to, "rejected: piece belongs to the side not on move");
        return false;
    }
    if !oracle::can_reach(board, from, to) {
        debug!(%from, %to, "rejected: destination unreachable under the movement rule");
        return false;
    }
    let Some(mv) = Move::classify(board, from, to) else {
        return false;
    };
    if in_check(&simulate::play(board, mv), color) {
        debug!(%from, %to, "rejected: own king would be attacked afterward");
        return false;
    }
    true
}

/// String entry point: coordinates that do not parse as squares are simply
/// illegal; the predicate contract has no error channel.
pub fn is_legal_uci(board: &Board, from: &str, to: &str) -> bool {
    match (Square::from_str(from), Square::from_str(to)) {
        (Ok(from), Ok(to)) => is_legal(board, from, to),
        _ => {
            debug!(from, to, "rejected: malformed coordinates");
            false
        }
    }
}

/// Purely syntactic castle-signature test; board state plays no part.
#[inline]
pub fn is_castling_attempt(from: Square, to: Square) -> bool {
    Castle::recognize(from, to).is_some()
}

/// True iff a pawn of `color` arriving on `to` must promote. A query for
/// callers deciding whether to prompt for a promotion piece; it never gates
/// legality.
#[inline]
pub fn is_promotion(color: Color, piece: Piece, to: Square) -> bool {
    if piece != Piece::Pawn {
        return false;
    }
    match color {
        Color::White => to.rank() == 7,
        Color::Black => to.rank() == 0,
    }
}

/// The castle sub-rule: the right bit still set (king and rook unmoved),
/// both on their home squares, an empty corridor between them, and no
/// opponent control over the king's start, transit or landing square.
pub fn is_castle_legal(board: &Board, castle: Castle) -> bool {
    let color = castle.color();
    if color != board.side_to_move {
        return false;
    }
    if !board.has_castling(castle.right()) {
        debug!(?castle, "castle rejected: right already lost");
        return false;
    }
    if board.piece_at(castle.king_from()) != Some((color, Piece::King))
        || board.piece_at(castle.rook_from()) != Some((color, Piece::Rook))
    {
        debug!(?castle, "castle rejected: king or rook missing from its home square");
        return false;
    }
    if board.occupied() & castle.between_mask() != 0 {
        debug!(?castle, "castle rejected: corridor is not empty");
        return false;
    }
    let opponent = color.opposite();
    for square in [castle.king_from(), castle.transit(), castle.king_to()] {
        if is_square_attacked(board, square, opponent) {
            debug!(?castle, %square, "castle rejected: king path under attack");
            return false;
        }
    }
    true
}
