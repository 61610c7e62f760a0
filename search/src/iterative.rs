use std::time::Instant;

use game::{Board, Move};
use rand::Rng;

use crate::search::Search;

/// Worst root score, below any reachable evaluation or mate score.
const WORST: i32 = -3_000_000;

impl Search {
    /// Picks a move for the side to move by iterative deepening.
    ///
    /// Each depth scores every root move with plain negamax, perturbing
    /// scores by a uniform integer in [-10, 10] in random mode. After a
    /// completed depth the effective branching factor (the running mean of
    /// per-depth leaf-count ratios) forecasts the cost of going one deeper;
    /// the next iteration starts only when the forecast fits the budget.
    /// One report line per completed depth goes to standard output.
    ///
    /// Returns the null move when the side to move has no legal moves; the
    /// caller distinguishes mate from stalemate.
    pub fn find_move(&mut self, board: &mut Board) -> Move {
        let budget = self.clock.budget_ms(board.fullmove_number());

        self.nodes = 0;
        self.pv.clear();

        let start = Instant::now();

        let mut depth: u32 = 1;
        let mut best_move = Move::NULL;
        let mut leaves_current: u64 = 0;
        let mut branching_sum: f64 = 0.0;

        loop {
            let moves = board.generate_moves();
            if moves.is_empty() {
                return Move::NULL;
            }

            let nodes_before = self.nodes;
            let leaves_previous = leaves_current;

            let mut max = WORST;
            self.pv = vec![String::new(); depth as usize];

            for mv in moves {
                board.make(mv);
                self.nodes += 1;

                let save = self.pv.clone();
                let mut score = -self.negamax(board, depth - 1);

                board.unmake(mv);

                if self.random_mode {
                    score += self.rng.gen_range(-10..=10);
                }

                if score > max {
                    self.pv[depth as usize - 1] = mv.to_string();
                    max = score;
                    best_move = mv;
                } else {
                    self.pv = save;
                }
            }

            leaves_current = self.nodes - nodes_before;

            // the first term of the running mean is a raw leaf count, not a ratio
            let effective_branching = match leaves_previous {
                0 => {
                    branching_sum += leaves_current as f64;
                    branching_sum
                }
                _ => {
                    branching_sum += leaves_current as f64 / leaves_previous as f64;
                    branching_sum / f64::from(depth)
                }
            };

            let estimated_leaves = (leaves_current as f64 * effective_branching) as u64;

            let elapsed_ms = start.elapsed().as_millis().max(1) as i64;
            let nodes_per_ms = self.nodes as f64 / elapsed_ms as f64;
            let estimated_next_ms = ((self.nodes + estimated_leaves) as f64 / nodes_per_ms) as i64;

            tracing::info!(
                depth,
                nodes = self.nodes,
                elapsed_ms,
                nps = (nodes_per_ms * 1000.0) as u64,
                "completed iteration"
            );
            tracing::debug!(
                estimated_leaves,
                estimated_next_ms,
                budget_ms = budget,
                "next depth forecast"
            );

            println!("{}", self.report_line(depth, max, elapsed_ms));

            if elapsed_ms + estimated_next_ms >= budget {
                break;
            }

            depth += 1;
            if depth > self.max_depth {
                break;
            }
        }

        best_move
    }

    /// `depth score centiseconds nodes pv...`, the variation running from the
    /// root slot down to the deepest ply.
    fn report_line(&self, depth: u32, score: i32, elapsed_ms: i64) -> String {
        let mut line = format!("{} {} {} {}", depth, score, elapsed_ms / 10, self.nodes);

        for notation in self.pv.iter().rev().filter(|n| !n.is_empty()) {
            line.push(' ');
            line.push_str(notation);
        }

        line
    }
}
