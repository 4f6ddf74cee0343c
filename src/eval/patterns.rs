//! Run scores for N-in-a-row evaluation
//!
//! A run is a maximal line of one side's stones. Its value grows
//! geometrically with length and shrinks as its ends get blocked.

/// Scoring weights for runs and terminal positions
pub struct RunScore;

impl RunScore {
    /// Completed winning run. Search scores for forced wins sit just above
    /// this (the remaining depth is added so faster wins rank higher).
    pub const WIN: i32 = 1_000_000_000;

    /// Growth factor per extra stone in a run
    pub const RUN_BASE: i32 = 4;

    /// Upper bound for a single run's weight, keeps totals far below `WIN`
    pub const RUN_CAP: i32 = 1 << 20;

    /// Weight of an unblocked run of `len` stones: `RUN_BASE^(len - 1)`.
    #[inline]
    pub fn run_weight(len: usize) -> i32 {
        if len < 2 {
            return 0;
        }
        let exp = u32::try_from(len - 1).unwrap_or(u32::MAX);
        Self::RUN_BASE.saturating_pow(exp).min(Self::RUN_CAP)
    }

    /// Weight of a run given how many of its two ends are open.
    ///
    /// Two open ends: full weight. One: half. None: the run can never grow
    /// into a win, so it is worth nothing.
    #[inline]
    pub fn score(len: usize, open_ends: u8) -> i32 {
        match open_ends {
            2 => Self::run_weight(len),
            1 => Self::run_weight(len) / 2,
            _ => 0,
        }
    }
}
