//! Interaction with the Forsyth–Edwards notation, a standard way of describing
//! a particular board position of a chess game.
//!
//! See [Forsyth–Edwards notation](https://en.wikipedia.org/wiki/Forsyth%E2%80%93Edwards_Notation) for more information.

use thiserror::Error;

use crate::core::{Castling, CastlingKind, Color, Piece, Square};

use super::Board;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseFenError {
    #[error("expected 6 sections, found {length}")]
    InvalidNumberOfSections { length: usize },
    #[error("malformed piece placement")]
    InvalidBoard,
    #[error("unexpected piece '{piece}'")]
    UnexpectedPiece { piece: char },
    #[error("unexpected turn color '{color}'")]
    UnexpectedTurnColor { color: String },
    #[error("unexpected castling flag '{flag}'")]
    UnexpectedCastling { flag: char },
    #[error("invalid en passant target '{text}'")]
    InvalidEnPassant { text: String },
    #[error("invalid move counter '{text}'")]
    InvalidMoveCounter { text: String },
}

/// Returns the board corresponding to the specified Forsyth–Edwards notation.
///
/// # Errors
///
/// This function will return an error if the given notation is not valid.
pub(super) fn parse(fen: &str) -> Result<Board, ParseFenError> {
    let parts: Vec<&str> = fen.split_whitespace().collect();

    if parts.len() != 6 {
        return Err(ParseFenError::InvalidNumberOfSections {
            length: parts.len(),
        });
    }

    let mut board = Board::default();

    set_pieces(&mut board, parts[0])?;
    set_turn(&mut board, parts[1])?;
    set_castling(&mut board, parts[2])?;
    set_en_passant(&mut board, parts[3])?;

    board.halfmove_clock = parse_counter(parts[4])?;
    board.fullmove_number = parse_counter(parts[5])?;

    Ok(board)
}

fn set_pieces(board: &mut Board, text: &str) -> Result<(), ParseFenError> {
    let mut rank: u8 = 7;
    let mut file: u8 = 0;

    for c in text.chars() {
        if c == '/' {
            rank = rank.checked_sub(1).ok_or(ParseFenError::InvalidBoard)?;
            file = 0;
        } else if let Some(skip) = c.to_digit(10) {
            file += skip as u8;
        } else {
            if file > 7 {
                return Err(ParseFenError::InvalidBoard);
            }

            let piece = parse_piece(c)?;
            let color = match c.is_uppercase() {
                true => Color::White,
                false => Color::Black,
            };

            board.add_piece(piece, color, Square::at(file, rank));
            file += 1;
        }
    }

    Ok(())
}

fn parse_piece(c: char) -> Result<Piece, ParseFenError> {
    match c {
        'P' | 'p' => Ok(Piece::Pawn),
        'N' | 'n' => Ok(Piece::Knight),
        'B' | 'b' => Ok(Piece::Bishop),
        'R' | 'r' => Ok(Piece::Rook),
        'Q' | 'q' => Ok(Piece::Queen),
        'K' | 'k' => Ok(Piece::King),
        _ => Err(ParseFenError::UnexpectedPiece { piece: c }),
    }
}

fn set_turn(board: &mut Board, text: &str) -> Result<(), ParseFenError> {
    board.turn = match text {
        "w" => Color::White,
        "b" => Color::Black,
        _ => {
            return Err(ParseFenError::UnexpectedTurnColor {
                color: text.to_string(),
            })
        }
    };

    Ok(())
}

fn set_castling(board: &mut Board, text: &str) -> Result<(), ParseFenError> {
    let mut castling = Castling::default();

    for c in text.chars() {
        match c {
            'K' => castling.allow(CastlingKind::WhiteShort),
            'Q' => castling.allow(CastlingKind::WhiteLong),
            'k' => castling.allow(CastlingKind::BlackShort),
            'q' => castling.allow(CastlingKind::BlackLong),
            '-' => {}
            _ => return Err(ParseFenError::UnexpectedCastling { flag: c }),
        }
    }

    board.castling = castling;
    Ok(())
}

fn set_en_passant(board: &mut Board, text: &str) -> Result<(), ParseFenError> {
    board.en_passant = match text {
        "-" => crate::core::Bitboard::EMPTY,
        _ => Square::try_from(text)
            .map_err(|_| ParseFenError::InvalidEnPassant {
                text: text.to_string(),
            })?
            .to_bb(),
    };

    Ok(())
}

fn parse_counter(text: &str) -> Result<u32, ParseFenError> {
    text.parse().map_err(|_| ParseFenError::InvalidMoveCounter {
        text: text.to_string(),
    })
}
