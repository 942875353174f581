/// Rating assigned to every item when it is first seeded.
pub const BASELINE_RATING: f64 = 400.0;

/// Default K-factor: the maximum rating movement a single vote can cause.
pub const DEFAULT_K_FACTOR: f64 = 32.0;

/// Probability band for the underrepresented-pairing branch: r in [0, 0.25).
pub const UNDERREPRESENTED_BAND: f64 = 0.25;

/// Upper edge of the tiered-pairing band: r in [0.25, 0.75).
/// Anything at or above this falls through to whole-collection sampling.
pub const TIERED_BAND: f64 = 0.75;

/// Denominator for the underrepresented candidate pool: the bottom
/// 1/DECILE of items sorted by comparison count.
pub const DECILE: usize = 10;

/// Inclusive bounds for the tier division count drawn per tiered pairing.
///
/// More divisions means narrower rating bands and more competitive
/// matchups; fewer means broader bands and more potential upsets.
/// Varying the count per call keeps tier boundaries from ossifying.
pub const MIN_DIVISIONS: usize = 4;
pub const MAX_DIVISIONS: usize = 20;

/// Number of tiers used for leaderboard summaries (Champion through Bronze).
pub const SUMMARY_TIERS: usize = 4;
