//! Making and then unmaking any generated move must restore the position
//! bit for bit, counters and caches included: both the legality filter and
//! the search lean on this.

mod common;

use game::notation::parse_move;
use game::Board;

const CORPUS: [&str; 8] = [
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R b KQkq - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
    "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
    "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
    "8/4P3/8/8/8/2k5/8/4K3 w - - 0 1",
];

#[test]
fn one_ply_round_trip() {
    for fen in CORPUS {
        let mut board = Board::from_fen(fen).unwrap();
        let snapshot = board.clone();

        for mv in board.generate_moves() {
            board.make(mv);
            common::assert_board_invariants(&board);

            board.unmake(mv);
            assert_eq!(board, snapshot, "round trip diverged after {mv} in {fen}");
        }
    }
}

#[test]
fn two_ply_round_trip() {
    for fen in ["r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1"] {
        let mut board = Board::from_fen(fen).unwrap();
        let snapshot = board.clone();

        for mv in board.generate_moves() {
            board.make(mv);
            let inner_snapshot = board.clone();

            for reply in board.generate_moves() {
                board.make(reply);
                common::assert_board_invariants(&board);

                board.unmake(reply);
                assert_eq!(board, inner_snapshot, "{mv} {reply} diverged in {fen}");
            }

            board.unmake(mv);
        }

        assert_eq!(board, snapshot);
    }
}

#[test]
fn invariants_hold_along_a_played_line() {
    let lines = [
        // short castling and a capture
        vec!["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6", "e1g1", "f6e4"],
        // an en-passant capture
        vec!["e2e4", "c7c5", "e4e5", "d7d5", "e5d6", "d8d6"],
    ];

    for line in lines {
        let mut board = Board::starting_position();

        for text in line {
            let mv = parse_move(&mut board, text);
            assert!(!mv.is_null(), "{text} should be legal");

            board.make(mv);
            common::assert_board_invariants(&board);
        }
    }
}
