/// The clock configuration for a game, taken once at the start of every
/// search to allocate a time budget for the move.
///
/// All quantities are milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeControl {
    /// A fixed number of moves per control period; `moves_per_control` of
    /// zero means the period length is unknown.
    Conventional {
        moves_per_control: u32,
        remaining_ms: i64,
    },
    /// The whole game on the clock plus an increment per move.
    Incremental { remaining_ms: i64, increment_ms: i64 },
    /// A fixed allowance for every move.
    TimePerMove { remaining_ms: i64 },
}

impl Default for TimeControl {
    fn default() -> Self {
        Self::Conventional {
            moves_per_control: 40,
            remaining_ms: 30_000,
        }
    }
}

impl TimeControl {
    /// Allocates the budget for the upcoming move.
    ///
    /// The conventional allocation spreads the remaining clock over half the
    /// moves left until the next control, estimating thirty when the period
    /// length is unknown; the incremental one banks on a thirtieth of the
    /// clock plus most of the increment. Small fixed margins absorb
    /// communication overhead. The result may be non-positive on a nearly
    /// exhausted clock, which still allows the depth-one iteration.
    pub fn budget_ms(&self, fullmove_number: u32) -> i64 {
        match *self {
            Self::Conventional {
                moves_per_control,
                remaining_ms,
            } => {
                let remaining_moves = match moves_per_control {
                    0 => 30,
                    _ => {
                        let left = moves_per_control - ((fullmove_number - 1) % moves_per_control);
                        left.max(1)
                    }
                };

                (remaining_ms - 100) / i64::from(remaining_moves / 2).max(1)
            }
            Self::Incremental {
                remaining_ms,
                increment_ms,
            } => (remaining_ms - 100) / 30 + (increment_ms - 50),
            Self::TimePerMove { remaining_ms } => remaining_ms - 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! assert_budget {
        ($($name:ident: $tc:expr, $fullmove:expr, $expected:expr,)*) => {$(
            #[test]
            fn $name() {
                assert_eq!($tc.budget_ms($fullmove), $expected);
            }
        )*};
    }

    assert_budget!(
        conventional_fresh_control: TimeControl::default(), 1, (30_000 - 100) / 20,
        conventional_mid_control: TimeControl::Conventional { moves_per_control: 40, remaining_ms: 10_000 }, 31, (10_000 - 100) / 5,
        conventional_unknown_period: TimeControl::Conventional { moves_per_control: 0, remaining_ms: 30_000 }, 1, (30_000 - 100) / 15,
        conventional_last_move_of_control: TimeControl::Conventional { moves_per_control: 2, remaining_ms: 5_000 }, 2, 5_000 - 100,
        incremental: TimeControl::Incremental { remaining_ms: 60_000, increment_ms: 1_000 }, 1, (60_000 - 100) / 30 + 950,
        time_per_move: TimeControl::TimePerMove { remaining_ms: 500 }, 1, 490,
    );
}
