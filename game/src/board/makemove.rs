use crate::core::{Bitboard, Color, Move, Piece, Square};

use super::Board;

/// Rook relocation mask for a castling king landing on `target`; the same
/// xor applies the move and takes it back.
fn castling_rook_path(target: Bitboard) -> Bitboard {
    match target {
        t if t == Square::G1.to_bb() => Square::H1.to_bb() | Square::F1.to_bb(),
        t if t == Square::C1.to_bb() => Square::A1.to_bb() | Square::D1.to_bb(),
        t if t == Square::G8.to_bb() => Square::H8.to_bb() | Square::F8.to_bb(),
        _ => Square::A8.to_bb() | Square::D8.to_bb(),
    }
}

/// The square of the pawn removed by an en-passant capture: one rank behind
/// the capture target from the mover's point of view.
fn en_passant_victim(target: Bitboard, color: Color) -> Bitboard {
    target.shift(-color.offset())
}

impl Board {
    /// Updates the board in place to reflect the move.
    ///
    /// The move must have been produced for the current position; anything
    /// else leaves the board in an unspecified state.
    pub fn make(&mut self, mv: Move) {
        let color = mv.color;

        self.pieces[color][mv.piece] &= !mv.start;

        if let Some(captured) = mv.captured {
            let capture = match mv.is_en_passant() {
                true => en_passant_victim(mv.target, color),
                false => mv.target,
            };
            self.pieces[color.opposite()][captured] &= !capture;
        }

        let placed = mv.promotion.unwrap_or(mv.piece);
        self.pieces[color][placed] |= mv.target;

        if mv.is_castling() {
            self.pieces[color][Piece::Rook] ^= castling_rook_path(mv.target);
        }

        let offset = color.offset();
        self.en_passant = match mv.piece == Piece::Pawn && mv.target == mv.start.shift(2 * offset) {
            true => mv.start.shift(offset),
            false => Bitboard::EMPTY,
        };

        for square in mv.start | mv.target {
            self.castling.update_for_square(square);
        }

        self.halfmove_clock = match mv.piece == Piece::Pawn || mv.captured.is_some() {
            true => 0,
            false => self.halfmove_clock + 1,
        };

        if color == Color::Black {
            self.fullmove_number += 1;
        }

        self.turn = color.opposite();
        self.update_occupancies();
    }

    /// Exact inverse of [`Board::make`], restoring the rights, en-passant
    /// target and halfmove clock snapshotted inside the move. Making and then
    /// unmaking any generated move yields a bitwise identical position.
    pub fn unmake(&mut self, mv: Move) {
        let color = mv.color;

        self.turn = color;
        self.castling = mv.castling;
        self.en_passant = mv.en_passant;
        self.halfmove_clock = mv.halfmove_clock;

        if color == Color::Black {
            self.fullmove_number -= 1;
        }

        let placed = mv.promotion.unwrap_or(mv.piece);
        self.pieces[color][placed] &= !mv.target;
        self.pieces[color][mv.piece] |= mv.start;

        if let Some(captured) = mv.captured {
            let capture = match mv.is_en_passant() {
                true => en_passant_victim(mv.target, color),
                false => mv.target,
            };
            self.pieces[color.opposite()][captured] |= capture;
        }

        if mv.is_castling() {
            self.pieces[color][Piece::Rook] ^= castling_rook_path(mv.target);
        }

        self.update_occupancies();
    }
}
