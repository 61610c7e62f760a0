use crate::core::{Bitboard, CastlingKind, Color, Move, MoveList, Piece, Square};
use crate::lookup::{
    bishop_attacks, king_attacks, knight_attacks, pawn_attacks, queen_attacks, rook_attacks,
};

use super::Board;

impl Board {
    /// Generates every legal move for the side to move: pseudo-legal moves per
    /// piece type, then a self-check filter playing each move, testing the
    /// mover's king and retracting. The filter goes through the same
    /// make/unmake pair the search uses.
    pub fn generate_moves(&mut self) -> MoveList {
        let pseudo = InnerGenerator::new(self).generate();
        let mut legal = MoveList::new();

        for mv in pseudo {
            self.make(mv);
            if !self.is_square_attacked_by(self.king(mv.color), self.turn) {
                legal.push(mv);
            }
            self.unmake(mv);
        }

        legal
    }
}

struct InnerGenerator<'a> {
    board: &'a Board,
    turn: Color,
    all: Bitboard,
    us: Bitboard,
    them: Bitboard,
    list: MoveList,
}

impl<'a> InnerGenerator<'a> {
    fn new(board: &'a Board) -> Self {
        Self {
            board,
            turn: board.turn,
            all: board.us() | board.them(),
            us: board.us(),
            them: board.them(),
            list: MoveList::new(),
        }
    }

    fn generate(mut self) -> MoveList {
        let all = self.all;

        self.collect_for(Piece::King, king_attacks);
        self.collect_for(Piece::Knight, knight_attacks);

        self.collect_for(Piece::Rook, |square| rook_attacks(square, all));
        self.collect_for(Piece::Bishop, |square| bishop_attacks(square, all));
        self.collect_for(Piece::Queen, |square| queen_attacks(square, all));

        self.collect_pawn_moves();
        self.collect_castling_moves();

        self.list
    }

    /// Builds a move record carrying the position snapshot needed to undo it.
    fn push(&mut self, start: Square, target: Square, piece: Piece, promotion: Option<Piece>) {
        let target_bb = target.to_bb();

        let captured = match piece == Piece::Pawn && target_bb == self.board.en_passant {
            true => Some(Piece::Pawn),
            false => self.board.piece_at(target_bb & self.them),
        };

        self.list.push(Move {
            start: start.to_bb(),
            target: target_bb,
            color: self.turn,
            piece,
            captured,
            promotion,
            castling: self.board.castling,
            en_passant: self.board.en_passant,
            halfmove_clock: self.board.halfmove_clock,
        });
    }

    fn collect_for<T: Fn(Square) -> Bitboard>(&mut self, piece: Piece, attacks: T) {
        let mut bb = self.board.our(piece);
        while let Some(start) = bb.pop() {
            let mut targets = attacks(start) & !self.us;
            while let Some(target) = targets.pop() {
                self.push(start, target, piece, None);
            }
        }
    }

    fn collect_pawn_moves(&mut self) {
        let bb = self.board.our(Piece::Pawn);

        let (starting_rank, promotion_rank) = match self.turn {
            Color::White => (Bitboard::RANK_2, Bitboard::RANK_7),
            Color::Black => (Bitboard::RANK_7, Bitboard::RANK_2),
        };

        self.collect_double_pushes(starting_rank & bb);
        self.collect_promotions(promotion_rank & bb);
        self.collect_regular_pawn_moves(!promotion_rank & bb);
        self.collect_en_passant_moves(bb);
    }

    fn collect_regular_pawn_moves(&mut self, mut bb: Bitboard) {
        let offset = self.turn.offset();
        while let Some(start) = bb.pop() {
            let mut captures = pawn_attacks(start, self.turn) & self.them;
            while let Some(target) = captures.pop() {
                self.push(start, target, Piece::Pawn, None);
            }

            let target = start.shift(offset);
            if !self.all.contains(target) {
                self.push(start, target, Piece::Pawn, None);
            }
        }
    }

    /// Pawns one step away from the back rank: every landing produces a move
    /// per promotion piece.
    fn collect_promotions(&mut self, mut bb: Bitboard) {
        const CHOICES: [Piece; 4] = [Piece::Queen, Piece::Rook, Piece::Bishop, Piece::Knight];

        let offset = self.turn.offset();
        while let Some(start) = bb.pop() {
            let mut captures = pawn_attacks(start, self.turn) & self.them;
            while let Some(target) = captures.pop() {
                for piece in CHOICES {
                    self.push(start, target, Piece::Pawn, Some(piece));
                }
            }

            let target = start.shift(offset);
            if !self.all.contains(target) {
                for piece in CHOICES {
                    self.push(start, target, Piece::Pawn, Some(piece));
                }
            }
        }
    }

    fn collect_double_pushes(&mut self, mut bb: Bitboard) {
        let offset = self.turn.offset();
        while let Some(start) = bb.pop() {
            let one_up = start.shift(offset);
            let two_up = one_up.shift(offset);

            if !self.all.contains(one_up) && !self.all.contains(two_up) {
                self.push(start, two_up, Piece::Pawn, None);
            }
        }
    }

    fn collect_en_passant_moves(&mut self, bb: Bitboard) {
        let Some(en_passant) = self.board.en_passant.lsb() else {
            return;
        };

        // pawns that could be attacked from the target square are exactly
        // the pawns attacking it
        let mut starts = pawn_attacks(en_passant, self.turn.opposite()) & bb;
        while let Some(start) = starts.pop() {
            self.push(start, en_passant, Piece::Pawn, None);
        }
    }

    /// Castling needs the right to be held, the squares between king and rook
    /// empty, and the king's start, transit and end squares unattacked.
    fn collect_castling_moves(&mut self) {
        match self.turn {
            Color::White => {
                self.collect_castling_move(
                    CastlingKind::WhiteShort,
                    Square::F1.to_bb() | Square::G1.to_bb(),
                    [Square::E1, Square::F1, Square::G1],
                );
                self.collect_castling_move(
                    CastlingKind::WhiteLong,
                    Square::B1.to_bb() | Square::C1.to_bb() | Square::D1.to_bb(),
                    [Square::E1, Square::D1, Square::C1],
                );
            }
            Color::Black => {
                self.collect_castling_move(
                    CastlingKind::BlackShort,
                    Square::F8.to_bb() | Square::G8.to_bb(),
                    [Square::E8, Square::F8, Square::G8],
                );
                self.collect_castling_move(
                    CastlingKind::BlackLong,
                    Square::B8.to_bb() | Square::C8.to_bb() | Square::D8.to_bb(),
                    [Square::E8, Square::D8, Square::C8],
                );
            }
        }
    }

    fn collect_castling_move(&mut self, kind: CastlingKind, between: Bitboard, path: [Square; 3]) {
        if !self.board.castling.is_allowed(kind) || !(self.all & between).is_empty() {
            return;
        }

        let attacker = self.turn.opposite();
        for square in path {
            if self.board.is_square_attacked_by(square.to_bb(), attacker) {
                return;
            }
        }

        let [start, _, target] = path;
        self.push(start, target, Piece::King, None);
    }
}
