use crate::board::{CASTLE_BK, CASTLE_BQ, CASTLE_WK, CASTLE_WQ, CastleBits, Color};
use crate::square::Square;

/// The four castle variants, each carrying its fixed square data.
///
/// Recognizing an *attempt* is purely syntactic: a coordinate pair either
/// matches one of the four signatures or it does not, regardless of what is
/// on the board. Whether the attempt is *legal* is the validator's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Castle {
    WhiteKingside,
    WhiteQueenside,
    BlackKingside,
    BlackQueenside,
}

pub const ALL_CASTLES: [Castle; 4] = [
    Castle::WhiteKingside,
    Castle::WhiteQueenside,
    Castle::BlackKingside,
    Castle::BlackQueenside,
];

impl Castle {
    /// Match a coordinate pair against the four castle signatures
    /// (e1g1, e1c1, e8g8, e8c8).
    pub fn recognize(from: Square, to: Square) -> Option<Castle> {
        match (from.index(), to.index()) {
            (4, 6) => Some(Castle::WhiteKingside),
            (4, 2) => Some(Castle::WhiteQueenside),
            (60, 62) => Some(Castle::BlackKingside),
            (60, 58) => Some(Castle::BlackQueenside),
            _ => None,
        }
    }

    pub fn color(self) -> Color {
        match self {
            Castle::WhiteKingside | Castle::WhiteQueenside => Color::White,
            Castle::BlackKingside | Castle::BlackQueenside => Color::Black,
        }
    }

    /// The right bit that must still be set for this variant.
    pub fn right(self) -> CastleBits {
        match self {
            Castle::WhiteKingside => CASTLE_WK,
            Castle::WhiteQueenside => CASTLE_WQ,
            Castle::BlackKingside => CASTLE_BK,
            Castle::BlackQueenside => CASTLE_BQ,
        }
    }

    pub fn king_from(self) -> Square {
        match self.color() {
            Color::White => Square::from_index(4),  // e1
            Color::Black => Square::from_index(60), // e8
        }
    }

    pub fn king_to(self) -> Square {
        match self {
            Castle::WhiteKingside => Square::from_index(6),   // g1
            Castle::WhiteQueenside => Square::from_index(2),  // c1
            Castle::BlackKingside => Square::from_index(62),  // g8
            Castle::BlackQueenside => Square::from_index(58), // c8
        }
    }

    pub fn rook_from(self) -> Square {
        match self {
            Castle::WhiteKingside => Square::from_index(7),   // h1
            Castle::WhiteQueenside => Square::from_index(0),  // a1
            Castle::BlackKingside => Square::from_index(63),  // h8
            Castle::BlackQueenside => Square::from_index(56), // a8
        }
    }

    pub fn rook_to(self) -> Square {
        match self {
            Castle::WhiteKingside => Square::from_index(5),   // f1
            Castle::WhiteQueenside => Square::from_index(3),  // d1
            Castle::BlackKingside => Square::from_index(61),  // f8
            Castle::BlackQueenside => Square::from_index(59), // d8
        }
    }

    /// The square the king crosses on its first step.
    pub fn transit(self) -> Square {
        match self {
            Castle::WhiteKingside => Square::from_index(5),   // f1
            Castle::WhiteQueenside => Square::from_index(3),  // d1
            Castle::BlackKingside => Square::from_index(61),  // f8
            Castle::BlackQueenside => Square::from_index(59), // d8
        }
    }

    /// Squares strictly between king and rook, all of which must be empty.
    /// Queenside includes the b-file square the king never crosses.
    pub fn between_mask(self) -> u64 {
        match self {
            Castle::WhiteKingside => 0x0000_0000_0000_0060,  // f1 g1
            Castle::WhiteQueenside => 0x0000_0000_0000_000E, // b1 c1 d1
            Castle::BlackKingside => 0x6000_0000_0000_0000,  // f8 g8
            Castle::BlackQueenside => 0x0E00_0000_0000_0000, // b8 c8 d8
        }
    }
}
