//! # pawsense-transitions
//!
//! Turns a chronological activity log into an empirical first-order
//! Markov transition table.
//!
//! For every activity seen with a successor, the table lists the
//! activities that immediately followed it, each with:
//!
//! | Field | Meaning |
//! |-------|---------|
//! | `mean_minutes` | Mean start-to-start gap |
//! | `observed_count` | How often the pair occurred |
//! | `probability` | Count over all departures from the same activity |
//!
//! Tables are immutable. A new log means a new table.

pub mod builder;
pub mod table;

pub use builder::TransitionTableBuilder;
pub use table::{ActivityState, BuildSummary, TransitionTable};
