/// PawSense version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Fewest log records that can produce a single transition.
pub const MIN_RECORDS_FOR_TRANSITIONS: usize = 2;

/// Tolerance when checking that outgoing probabilities sum to one.
pub const PROBABILITY_SUM_TOLERANCE: f64 = 1e-9;

/// Hard ceiling on chain depth regardless of configuration.
/// Chain output grows as `branching^depth`; `max_chain_nodes` bounds it.
pub const MAX_CHAIN_DEPTH: usize = 12;

/// Seconds per minute, used for elapsed-time conversion.
pub const SECONDS_PER_MINUTE: f64 = 60.0;
