use std::str::FromStr;

use super::{
    Board, CASTLE_BK, CASTLE_BQ, CASTLE_WK, CASTLE_WQ, CastleBits, Color, Piece,
};
use crate::square::Square;

fn piece_from_glyph(glyph: char) -> Option<(Color, Piece)> {
    let color = if glyph.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };
    let piece = match glyph.to_ascii_lowercase() {
        'p' => Piece::Pawn,
        'n' => Piece::Knight,
        'b' => Piece::Bishop,
        'r' => Piece::Rook,
        'q' => Piece::Queen,
        'k' => Piece::King,
        _ => return None,
    };
    Some((color, piece))
}

fn glyph_for(color: Color, piece: Piece) -> char {
    let glyph = match piece {
        Piece::Pawn => 'p',
        Piece::Knight => 'n',
        Piece::Bishop => 'b',
        Piece::Rook => 'r',
        Piece::Queen => 'q',
        Piece::King => 'k',
    };
    match color {
        Color::White => glyph.to_ascii_uppercase(),
        Color::Black => glyph,
    }
}

fn castling_from_field(field: &str) -> Result<CastleBits, String> {
    if field == "-" {
        return Ok(0);
    }
    let mut rights: CastleBits = 0;
    for glyph in field.chars() {
        let bit = match glyph {
            'K' => CASTLE_WK,
            'Q' => CASTLE_WQ,
            'k' => CASTLE_BK,
            'q' => CASTLE_BQ,
            _ => return Err(format!("unknown castling glyph {:?}", glyph)),
        };
        if rights & bit != 0 {
            return Err(format!("duplicate castling glyph {:?}", glyph));
        }
        rights |= bit;
    }
    Ok(rights)
}

impl Board {
    /// Load a position from Forsyth–Edwards Notation, replacing the current
    /// state. The halfmove clock and fullmove number fields are optional.
    pub fn set_fen(&mut self, fen: &str) -> Result<(), String> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() < 4 {
            return Err(format!(
                "FEN needs at least 4 fields, got {}: {:?}",
                fields.len(),
                fen
            ));
        }

        let mut board = Board::new_empty();

        let ranks: Vec<&str> = fields[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(format!("FEN placement needs 8 ranks, got {}", ranks.len()));
        }
        // FEN lists rank 8 first.
        for (row, rank_field) in ranks.iter().enumerate() {
            let rank = 7 - row as u8;
            let mut file = 0u8;
            for glyph in rank_field.chars() {
                if let Some(skip) = glyph.to_digit(10) {
                    if !(1..=8).contains(&skip) {
                        return Err(format!("bad skip count {:?} in FEN rank", glyph));
                    }
                    file += skip as u8;
                } else {
                    let (color, piece) = piece_from_glyph(glyph)
                        .ok_or_else(|| format!("unknown piece glyph {:?}", glyph))?;
                    if file >= 8 {
                        return Err(format!("rank {} overflows 8 files", rank + 1));
                    }
                    board.put(color, piece, Square::new(file, rank));
                    file += 1;
                }
            }
            if file != 8 {
                return Err(format!("rank {} covers {} files, expected 8", rank + 1, file));
            }
        }

        board.side_to_move = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(format!("side to move must be w or b, got {:?}", other)),
        };
        board.castling_rights = castling_from_field(fields[2])?;
        board.en_passant = match fields[3] {
            "-" => None,
            name => Some(Square::from_str(name)?),
        };
        if let Some(clock) = fields.get(4) {
            board.halfmove_clock = clock
                .parse()
                .map_err(|_| format!("bad halfmove clock {:?}", clock))?;
        }
        if let Some(number) = fields.get(5) {
            board.fullmove_number = number
                .parse()
                .map_err(|_| format!("bad fullmove number {:?}", number))?;
        }

        *self = board;
        Ok(())
    }

    /// Serialize the position back to FEN.
    pub fn to_fen(&self) -> String {
        let mut fen = String::with_capacity(90);
        for rank in (0u8..8).rev() {
            let mut empty_run = 0;
            for file in 0u8..8 {
                match self.piece_at(Square::new(file, rank)) {
                    Some((color, piece)) => {
                        if empty_run > 0 {
                            fen.push(char::from_digit(empty_run, 10).unwrap());
                            empty_run = 0;
                        }
                        fen.push(glyph_for(color, piece));
                    }
                    None => empty_run += 1,
                }
            }
            if empty_run > 0 {
                fen.push(char::from_digit(empty_run, 10).unwrap());
            }
            if rank > 0 {
                fen.push('/');
            }
        }

        fen.push(' ');
        fen.push(match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        });

        fen.push(' ');
        if self.castling_rights == 0 {
            fen.push('-');
        } else {
            for (bit, glyph) in [
                (CASTLE_WK, 'K'),
                (CASTLE_WQ, 'Q'),
                (CASTLE_BK, 'k'),
                (CASTLE_BQ, 'q'),
            ] {
                if self.has_castling(bit) {
                    fen.push(glyph);
                }
            }
        }

        fen.push(' ');
        match self.en_passant {
            Some(sq) => fen.push_str(&sq.to_string()),
            None => fen.push('-'),
        }

        fen.push_str(&format!(" {} {}", self.halfmove_clock, self.fullmove_number));
        fen
    }
}
