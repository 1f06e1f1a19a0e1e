use tracing::trace;

use crate::board::{
    Board, CASTLE_BK, CASTLE_BQ, CASTLE_WK, CASTLE_WQ, CastleBits, Color, Piece,
};
use crate::moves::castle::Castle;
use crate::moves::types::Move;
use crate::square::Square;

/// Right bit that dies when a rook leaves, or is captured on, `sq`.
#[inline(always)]
fn right_for_rook_square(color: Color, sq: Square) -> CastleBits {
    match (color, sq.index()) {
        (Color::White, 0) => CASTLE_WQ,  // a1
        (Color::White, 7) => CASTLE_WK,  // h1
        (Color::Black, 56) => CASTLE_BQ, // a8
        (Color::Black, 63) => CASTLE_BK, // h8
        _ => 0,
    }
}

/// Apply `mv` to an owned copy of `board` and return the resulting
/// position. The input board is never touched: this is the substrate for
/// hypothetical check queries, and doubles as the commit primitive for
/// callers that accept a validated move.
pub fn play(board: &Board, mv: Move) -> Board {
    let mut next = board.clone();
    let color = next.side_to_move;
    debug_assert_eq!(
        next.piece_at(mv.from),
        Some((color, mv.piece)),
        "move does not match the board"
    );

    // En passant removes the pawn standing behind the target square.
    if mv.is_en_passant() {
        let victim_sq = match color {
            Color::White => Square::from_index(mv.to.index() - 8),
            Color::Black => Square::from_index(mv.to.index() + 8),
        };
        next.take(victim_sq);
    }
    let captured = next.take(mv.to);

    // Relocate the mover; a promoting pawn arrives as the promoted piece.
    next.take(mv.from);
    match mv.promotion {
        Some(promoted) => next.put(color, promoted, mv.to),
        None => next.put(color, mv.piece, mv.to),
    }

    // Castling relocates the rook as well.
    if mv.is_castling()
        && let Some(castle) = Castle::recognize(mv.from, mv.to)
    {
        next.take(castle.rook_from());
        next.put(color, Piece::Rook, castle.rook_to());
    }

    // Rights are monotonic. A king move clears both of its bits; a rook
    // leaving or dying on its home corner clears that corner's bit.
    let mut cleared: CastleBits = 0;
    if mv.piece == Piece::King {
        cleared |= match color {
            Color::White => CASTLE_WK | CASTLE_WQ,
            Color::Black => CASTLE_BK | CASTLE_BQ,
        };
    }
    if mv.piece == Piece::Rook {
        cleared |= right_for_rook_square(color, mv.from);
    }
    if let Some((victim_color, victim)) = captured
        && victim == Piece::Rook
    {
        cleared |= right_for_rook_square(victim_color, mv.to);
    }
    next.castling_rights &= !cleared;

    // An en passant target only survives the immediate reply to a double push.
    next.en_passant = if mv.is_double_pawn_push() {
        Some(match color {
            Color::White => Square::from_index(mv.from.index() + 8),
            Color::Black => Square::from_index(mv.from.index() - 8),
        })
    } else {
        None
    };

    if captured.is_some() || mv.piece == Piece::Pawn {
        next.halfmove_clock = 0;
    } else {
        next.halfmove_clock += 1;
    }
    if color == Color::Black {
        next.fullmove_number += 1;
    }
    next.side_to_move = color.opposite();

    trace!(mv = %mv, "applied move to a board copy");
    next
}
