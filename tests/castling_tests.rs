use std::str::FromStr;

use arbiter::board::Board;
use arbiter::moves::castle::{ALL_CASTLES, Castle};
use arbiter::moves::validate::{is_castle_legal, is_castling_attempt, is_legal};
use arbiter::square::Square;

fn board(fen: &str) -> Board {
    Board::from_str(fen).unwrap()
}

fn sq(name: &str) -> Square {
    Square::from_str(name).unwrap()
}

fn legal(fen: &str, from: &str, to: &str) -> bool {
    is_legal(&board(fen), sq(from), sq(to))
}

#[test]
fn kingside_castle_when_every_condition_holds() {
    // King e1, rook h1, right intact, f1/g1 empty and unattacked.
    assert!(legal("4k3/8/8/8/8/8/8/4K2R w K - 0 1", "e1", "g1"));
}

#[test]
fn attacked_transit_square_forbids_castling() {
    // The f8 rook controls f1, the square the king crosses.
    assert!(!legal("4kr2/8/8/8/8/8/8/4K2R w K - 0 1", "e1", "g1"));
}

#[test]
fn attacked_landing_square_forbids_castling() {
    // The g8 rook controls g1, the square the king lands on.
    assert!(!legal("4k1r1/8/8/8/8/8/8/4K2R w K - 0 1", "e1", "g1"));
}

#[test]
fn castling_out_of_check_is_forbidden() {
    assert!(!legal("4r1k1/8/8/8/8/8/8/4K2R w K - 0 1", "e1", "g1"));
}

#[test]
fn lost_right_forbids_castling() {
    assert!(!legal("4k3/8/8/8/8/8/8/4K2R w - - 0 1", "e1", "g1"));
    // A queenside-only right does not cover the kingside attempt.
    let fen = "4k3/8/8/8/8/8/8/R3K2R w Q - 0 1";
    assert!(!legal(fen, "e1", "g1"));
    assert!(legal(fen, "e1", "c1"));
}

#[test]
fn missing_rook_forbids_castling() {
    // The right bit survived in the FEN, but there is nothing on h1.
    assert!(!legal("4k3/8/8/8/8/8/8/4K3 w K - 0 1", "e1", "g1"));
}

#[test]
fn displaced_king_forbids_castling() {
    assert!(!legal("4k3/8/8/8/8/8/8/3K3R w K - 0 1", "e1", "g1"));
}

#[test]
fn occupied_corridor_forbids_castling() {
    assert!(!legal("4k3/8/8/8/8/8/8/4KB1R w K - 0 1", "e1", "g1"));
    // Queenside: b1 sits between rook and king even though the king never
    // crosses it.
    assert!(!legal("4k3/8/8/8/8/8/8/RN2K3 w Q - 0 1", "e1", "c1"));
    // The starting position fails the same way.
    let start = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
    assert!(!legal(start, "e1", "g1"));
}

#[test]
fn attacked_b_file_square_does_not_forbid_queenside() {
    // The b8 rook controls b1, but b1 is not on the king's path.
    assert!(legal("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1", "e1", "c1"));
}

#[test]
fn black_castles_both_sides() {
    assert!(legal("4k2r/8/8/8/8/8/8/4K3 b k - 0 1", "e8", "g8"));
    assert!(legal("r3k3/8/8/8/8/8/8/4K3 b q - 0 1", "e8", "c8"));
}

#[test]
fn castling_on_the_opponents_turn_is_illegal() {
    assert!(!legal("4k3/8/8/8/8/8/8/4K2R b K - 0 1", "e1", "g1"));
}

#[test]
fn attempt_recognition_is_purely_syntactic() {
    // Signatures match regardless of board state, even on an empty board.
    assert!(is_castling_attempt(sq("e1"), sq("g1")));
    assert!(is_castling_attempt(sq("e1"), sq("c1")));
    assert!(is_castling_attempt(sq("e8"), sq("g8")));
    assert!(is_castling_attempt(sq("e8"), sq("c8")));

    assert!(!is_castling_attempt(sq("e1"), sq("f1")));
    assert!(!is_castling_attempt(sq("e2"), sq("g2")));
    assert!(!is_castling_attempt(sq("g1"), sq("e1")));

    // ... while legality on that empty board is another matter entirely.
    let empty = board("8/8/8/8/8/8/8/8 w - - 0 1");
    assert!(!is_legal(&empty, sq("e1"), sq("g1")));
}

#[test]
fn sub_validator_agrees_with_the_pipeline() {
    let b = board("4k3/8/8/8/8/8/8/4K2R w K - 0 1");
    let castle = Castle::recognize(sq("e1"), sq("g1")).unwrap();
    assert_eq!(castle, Castle::WhiteKingside);
    assert!(is_castle_legal(&b, castle));

    for castle in ALL_CASTLES {
        if castle != Castle::WhiteKingside {
            assert!(!is_castle_legal(&b, castle), "{:?} has no right here", castle);
        }
    }
}
