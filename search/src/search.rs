use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::time_control::TimeControl;

/// Search depth cap applied when the clock alone would keep deepening.
pub const DEFAULT_MAX_DEPTH: u32 = 10_000;

/// Score of a mated side at an interior node. The remaining depth is
/// subtracted from it, which ranks mates found deeper in the tree *better*.
pub const CHECKMATED: i32 = -1_999_999;

/// An engine search context: the clock, limits and per-search bookkeeping
/// bundled into one explicit object, so separate games or tests never share
/// state.
pub struct Search {
    pub clock: TimeControl,
    pub max_depth: u32,
    pub random_mode: bool,
    pub(crate) rng: StdRng,
    pub(crate) nodes: u64,
    pub(crate) pv: Vec<String>,
}

impl Search {
    /// Creates a context with a clock and an entropy-seeded perturbation
    /// source.
    pub fn new(clock: TimeControl) -> Self {
        Self::with_seed(clock, rand::random())
    }

    /// Creates a context with a fixed perturbation seed, making randomized
    /// searches reproducible.
    pub fn with_seed(clock: TimeControl, seed: u64) -> Self {
        Self {
            clock,
            max_depth: DEFAULT_MAX_DEPTH,
            random_mode: false,
            rng: StdRng::seed_from_u64(seed),
            nodes: 0,
            pv: Vec::new(),
        }
    }

    /// Nodes visited by the most recent search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// The principal variation of the most recent search, indexed by plies
    /// remaining: the last slot holds the root move.
    pub fn principal_variation(&self) -> &[String] {
        &self.pv
    }
}
