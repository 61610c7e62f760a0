use rand::seq::SliceRandom;

use game::notation::{parse_move, san};
use game::{Board, ParseFenError};
use search::{Search, TimeControl};

/// The driver's view of the core: one board, one search context.
pub struct Engine {
    pub board: Board,
    pub search: Search,
}

impl Engine {
    pub fn new() -> Self {
        Self {
            board: Board::starting_position(),
            search: Search::new(TimeControl::default()),
        }
    }

    /// Resets the board and the clock for a fresh game.
    pub fn new_game(&mut self) {
        self.board = Board::starting_position();
        self.search.clock = TimeControl::default();
    }

    pub fn set_position(&mut self, fen: &str) -> Result<(), ParseFenError> {
        self.board = Board::from_fen(fen)?;
        Ok(())
    }

    /// Plays the move given in coordinate notation. Returns `false` without
    /// touching the board when the text matches no legal move.
    pub fn play_move(&mut self, text: &str) -> bool {
        let mv = parse_move(&mut self.board, text);

        if mv.is_null() {
            return false;
        }

        self.board.make(mv);
        true
    }

    /// Searches for a move, plays it and returns its notation; `None` means
    /// the game is over and [`Engine::game_result`] tells how.
    pub fn think(&mut self) -> Option<String> {
        let mv = self.search.find_move(&mut self.board);

        if mv.is_null() {
            return None;
        }

        self.board.make(mv);
        Some(mv.to_string())
    }

    /// Plays a uniformly random legal move.
    pub fn random_move(&mut self) -> Option<String> {
        let moves = self.board.generate_moves();
        let mv = *moves.as_slice().choose(&mut rand::thread_rng())?;

        self.board.make(mv);
        Some(mv.to_string())
    }

    /// The finished-game verdict, or `None` while moves remain.
    pub fn game_result(&mut self) -> Option<String> {
        if !self.board.generate_moves().is_empty() {
            return None;
        }

        let result = match self.board.in_check() {
            true => match self.board.turn() {
                game::Color::White => "0-1 {Black mates}",
                game::Color::Black => "1-0 {White mates}",
            },
            false => "1/2-1/2 {Stalemate}",
        };

        Some(result.to_string())
    }

    /// Prints the leaf-node total for the position at the given depth.
    pub fn perft(&mut self, depth: u32) {
        let nodes = game::perft::perft(&mut self.board, depth);
        println!("{nodes}");
        tracing::info!(depth, nodes, "perft finished");
    }

    /// Prints one SAN line with the subtree count for every root move,
    /// followed by the totals.
    pub fn divide(&mut self, depth: u32) {
        let moves = self.board.generate_moves();
        let mut total = 0;

        for mv in moves.iter() {
            let count = match depth <= 1 {
                true => 1,
                false => {
                    self.board.make(*mv);
                    let nodes = game::perft::perft(&mut self.board, depth - 1);
                    self.board.unmake(*mv);
                    nodes
                }
            };

            total += count;
            println!("{}: {}", san(&mut self.board, *mv, &moves), count);
        }

        println!();
        println!("Moves: {}", moves.len());
        println!("Total leaf nodes: {total}");
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
