use game::{Board, Color, Piece};

/// Flat piece values in centipawns, indexed by piece type.
#[rustfmt::skip]
pub const MATERIAL: [i32; Piece::NUM] = [100, 300, 300, 500, 900, 10_000];

/// Calculates the material balance in centipawns from the point of view of
/// the side to move.
pub fn evaluate(board: &Board) -> i32 {
    let mut score = 0;

    for piece in Piece::ALL {
        let white = board.of(piece, Color::White).count() as i32;
        let black = board.of(piece, Color::Black).count() as i32;

        score += MATERIAL[piece] * (white - black);
    }

    match board.turn() {
        Color::White => score,
        Color::Black => -score,
    }
}
