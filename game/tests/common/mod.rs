use game::{Bitboard, Board, Color, Piece};

/// Checks the structural board invariants: the twelve piece bitboards are
/// pairwise disjoint, the cached per-color unions match them, and each side
/// has exactly one king.
#[allow(dead_code)]
pub fn assert_board_invariants(board: &Board) {
    let mut seen = Bitboard::EMPTY;

    for color in [Color::White, Color::Black] {
        let mut union = Bitboard::EMPTY;

        for piece in Piece::ALL {
            let bb = board.of(piece, color);
            assert!((seen & bb).is_empty(), "piece bitboards overlap");
            seen |= bb;
            union |= bb;
        }

        assert_eq!(board.colors(color), union, "stale occupancy cache");
    }

    assert_eq!(board.king(Color::White).count(), 1);
    assert_eq!(board.king(Color::Black).count(), 1);
}

macro_rules! assert_perft {
    ($($name:ident: $fen:tt, $depth:tt, $expected:tt,)*) => {$(
        #[test]
        fn $name() {
            let mut board = game::Board::from_fen($fen).unwrap();
            assert_eq!(game::perft::perft(&mut board, $depth), $expected);
        }
    )*};
}

pub(crate) use assert_perft;
