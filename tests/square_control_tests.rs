use std::str::FromStr;

use arbiter::board::{Board, Color};
use arbiter::moves::square_control::{in_check, is_square_attacked};
use arbiter::square::Square;

fn board(fen: &str) -> Board {
    Board::from_str(fen).unwrap()
}

fn sq(name: &str) -> Square {
    Square::from_str(name).unwrap()
}

#[test]
fn in_check_detects_simple_rook_check() {
    // Black rook on e8 gives check to the white king on e1.
    let b = board("4r2k/8/8/8/8/8/8/4K3 w - - 0 1");
    assert!(in_check(&b, Color::White));
    assert!(!in_check(&b, Color::Black), "the black king on h8 is safe");
}

#[test]
fn is_square_attacked_handles_pawn_direction() {
    // White pawn on b5: a6 and c6 are attacked, a4 and c4 are not.
    let b = board("8/8/8/1P6/8/8/8/4k3 w - - 0 1");
    assert!(is_square_attacked(&b, sq("a6"), Color::White));
    assert!(is_square_attacked(&b, sq("c6"), Color::White));
    assert!(!is_square_attacked(&b, sq("a4"), Color::White));
    assert!(!is_square_attacked(&b, sq("c4"), Color::White));
}

#[test]
fn pawn_wraparound_edges_are_masked() {
    // A white pawn on a5 must not "wrap" to h6/h4.
    let b = board("8/8/8/P7/8/8/8/4k3 w - - 0 1");
    assert!(is_square_attacked(&b, sq("b6"), Color::White));
    assert!(!is_square_attacked(&b, sq("h6"), Color::White));
    assert!(!is_square_attacked(&b, sq("h4"), Color::White));
}

#[test]
fn sliders_are_blocked_by_either_color() {
    // The black pawn on e7 shields e1 from its own rook.
    let shielded = board("4r2k/4p3/8/8/8/8/8/4K3 w - - 0 1");
    assert!(!in_check(&shielded, Color::White));

    // A white knight on e7 blocks the file just the same.
    let blocked = board("4r2k/4N3/8/8/8/8/8/4K3 w - - 0 1");
    assert!(!in_check(&blocked, Color::White));
}

#[test]
fn bishop_pair_controls_the_long_diagonals() {
    let b = board("r3k2r/8/8/8/1b6/8/8/R3K2R w KQkq - 0 1");
    assert!(in_check(&b, Color::White), "the b4 bishop sees e1");
    assert!(!in_check(&b, Color::Black));
}

#[test]
fn a_kingless_side_is_never_in_check() {
    let b = board("4r3/8/8/8/8/8/8/7R w - - 0 1");
    assert!(!in_check(&b, Color::White));
    assert!(!in_check(&b, Color::Black));
}
