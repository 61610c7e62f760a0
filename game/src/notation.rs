//! Reading and writing move notations: the 4/5-character coordinate form used
//! for move input and principal-variation output, and Standard Algebraic
//! Notation used by the perft divide report.

use crate::board::Board;
use crate::core::{Bitboard, Move, MoveList, Piece, Square};

/// Parses a coordinate-notation move (`e2e4`, `e7e8q`) against the current
/// position and returns the fully populated move record.
///
/// Sanitization happens here: a malformed string, or one that matches no
/// legal move, yields the null move rather than an error.
pub fn parse_move(board: &mut Board, text: &str) -> Move {
    let Some(mv) = build_move(board, text) else {
        return Move::NULL;
    };

    match board.generate_moves().iter().any(|legal| *legal == mv) {
        true => mv,
        false => Move {
            target: Bitboard::EMPTY,
            ..mv
        },
    }
}

fn build_move(board: &Board, text: &str) -> Option<Move> {
    if !text.is_ascii() || !(4..=5).contains(&text.len()) {
        return None;
    }

    let start = Square::try_from(&text[0..2]).ok()?;
    let target = Square::try_from(&text[2..4]).ok()?;

    let promotion = match &text[4..] {
        "" => None,
        "n" => Some(Piece::Knight),
        "b" => Some(Piece::Bishop),
        "r" => Some(Piece::Rook),
        "q" => Some(Piece::Queen),
        _ => return None,
    };

    let piece = board.piece_at(start.to_bb())?;
    let target_bb = target.to_bb();

    // an en-passant capture removes the pawn one rank behind the target;
    // everything else is read off the target square among enemy pieces
    let captured = match piece == Piece::Pawn && target_bb == board.en_passant() {
        true => board.piece_at(
            target_bb.shift(-board.turn().offset()) & board.their(Piece::Pawn),
        ),
        false => board.piece_at(target_bb & board.them()),
    };

    Some(Move {
        start: start.to_bb(),
        target: target_bb,
        color: board.turn(),
        piece,
        captured,
        promotion,
        castling: board.castling(),
        en_passant: board.en_passant(),
        halfmove_clock: board.halfmove_clock(),
    })
}

/// Renders the move in Standard Algebraic Notation with minimal
/// disambiguation. Castling keeps the zero form (`0-0`, `0-0-0`) for output
/// compatibility, en-passant captures get an `e.p` suffix and checking moves
/// a trailing `+`.
pub fn san(board: &mut Board, mv: Move, all_moves: &MoveList) -> String {
    let mut out = String::new();

    let target = mv.target.lsb().expect("SAN of the null move");

    if mv.piece == Piece::Pawn {
        if mv.captured.is_some() {
            if let Some(start) = mv.start.lsb() {
                out.push(file_char(start));
            }
            out.push('x');
        }

        out.push(file_char(target));
        out.push(rank_char(target));

        if mv.is_en_passant() {
            out.push_str("e.p");
        }

        if let Some(promotion) = mv.promotion {
            out.push('=');
            out.push(promotion.letter());
        }
    } else if mv.is_castling() {
        out.push_str(match target.file() {
            6 => "0-0",
            _ => "0-0-0",
        });
    } else {
        out.push(mv.piece.letter());
        disambiguate(&mut out, board, mv, all_moves);

        if mv.captured.is_some() {
            out.push('x');
        }

        out.push(file_char(target));
        out.push(rank_char(target));
    }

    // play, test the defender's king, retract
    board.make(mv);
    if board.is_square_attacked(board.king(board.turn())) {
        out.push('+');
    }
    board.unmake(mv);

    out
}

/// Appends a file, a rank, or both when another piece of the same type could
/// reach the same target square.
fn disambiguate(out: &mut String, board: &Board, mv: Move, all_moves: &MoveList) {
    if board.of(mv.piece, mv.color).count() <= 1 {
        return;
    }

    let Some(start) = mv.start.lsb() else { return };

    let rivals: Vec<Square> = all_moves
        .iter()
        .filter(|other| {
            other.piece == mv.piece
                && other.color == mv.color
                && other.target == mv.target
                && other.start != mv.start
        })
        .filter_map(|other| other.start.lsb())
        .collect();

    if rivals.is_empty() {
        return;
    }

    let conflict_file = rivals.iter().any(|rival| rival.file() == start.file());
    let conflict_rank = rivals.iter().any(|rival| rival.rank() == start.rank());

    if !conflict_file {
        out.push(file_char(start));
    } else if !conflict_rank {
        out.push(rank_char(start));
    } else {
        out.push(file_char(start));
        out.push(rank_char(start));
    }
}

fn file_char(square: Square) -> char {
    (b'a' + square.file()) as char
}

fn rank_char(square: Square) -> char {
    (b'1' + square.rank()) as char
}

#[cfg(test)]
mod tests {
    use super::*;

    fn san_for(fen: &str, text: &str) -> String {
        let mut board = Board::from_fen(fen).unwrap();
        let mv = parse_move(&mut board, text);
        assert!(!mv.is_null(), "{text} is not legal in {fen}");

        let all_moves = board.generate_moves();
        san(&mut board, mv, &all_moves)
    }

    #[test]
    fn parses_a_double_push() {
        let mut board = Board::starting_position();
        let mv = parse_move(&mut board, "e2e4");

        assert_eq!(mv.start, Square::try_from("e2").unwrap().to_bb());
        assert_eq!(mv.target, Square::try_from("e4").unwrap().to_bb());
        assert_eq!(mv.piece, Piece::Pawn);
        assert_eq!(mv.promotion, None);
        assert_eq!(mv.captured, None);

        board.make(mv);
        assert_eq!(board.en_passant(), Square::try_from("e3").unwrap().to_bb());
    }

    #[test]
    fn parses_a_promotion_letter() {
        let mut board = Board::from_fen("8/4P3/8/8/8/2k5/8/4K3 w - - 0 1").unwrap();
        let mv = parse_move(&mut board, "e7e8q");

        assert_eq!(mv.promotion, Some(Piece::Queen));
    }

    #[test]
    fn rejects_illegal_and_malformed_input() {
        let mut board = Board::starting_position();

        // moving through a friendly pawn
        assert!(parse_move(&mut board, "d1d3").is_null());
        // empty start square
        assert!(parse_move(&mut board, "e4e5").is_null());
        // out-of-range coordinates and garbage
        assert!(parse_move(&mut board, "i9i8").is_null());
        assert!(parse_move(&mut board, "e2e").is_null());
        assert!(parse_move(&mut board, "e7e8x").is_null());
        assert!(parse_move(&mut board, "").is_null());
    }

    #[test]
    fn round_trips_through_display() {
        let mut board = Board::starting_position();
        let mv = parse_move(&mut board, "g1f3");

        assert_eq!(mv.to_string(), "g1f3");
    }

    #[test]
    fn plain_piece_moves_and_captures() {
        assert_eq!(
            san_for("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1", "g1f3"),
            "Nf3"
        );
        assert_eq!(
            san_for("rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2", "e4d5"),
            "exd5"
        );
    }

    #[test]
    fn disambiguates_by_file_when_files_differ() {
        // rooks on a1 and h1 both reach d1
        assert_eq!(san_for("4k3/8/8/8/8/8/4K3/R6R w - - 0 1", "a1d1"), "Rad1");
    }

    #[test]
    fn disambiguates_by_rank_when_files_clash() {
        // rooks on a1 and a5 both reach a3
        assert_eq!(san_for("4k3/8/8/R7/8/8/4K3/R7 w - - 0 1", "a1a3"), "R1a3");
        assert_eq!(san_for("4k3/8/8/R7/8/8/4K3/R7 w - - 0 1", "a5a3"), "R5a3");
    }

    #[test]
    fn castling_keeps_the_zero_form() {
        assert_eq!(
            san_for("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1", "e1g1"),
            "0-0"
        );
        assert_eq!(
            san_for("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R b KQkq - 0 1", "e8c8"),
            "0-0-0"
        );
    }

    #[test]
    fn en_passant_suffix() {
        assert_eq!(
            san_for("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3", "e5f6"),
            "exf6e.p"
        );
    }

    #[test]
    fn promotion_and_check() {
        assert_eq!(san_for("8/4P3/8/8/8/2k5/8/4K3 w - - 0 1", "e7e8q"), "e8=Q");
        // the rook lands on the back rank with check
        assert_eq!(san_for("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1", "a1a8"), "Ra8+");
    }
}
