//! Structured span field names.
//!
//! Spans declare these fields as `tracing::field::Empty` and fill them in
//! with `Span::record`, so log queries see the same names everywhere.

/// CLI subcommand being run.
pub const COMMAND: &str = "command";

/// Path of the activity log being read or written.
pub const LOG_PATH: &str = "log_path";

/// Subject (pet) the log was filtered to.
pub const SUBJECT: &str = "subject";

/// Activity a query starts from.
pub const ACTIVITY: &str = "activity";

/// Resolved chain depth bound.
pub const DEPTH: &str = "depth";

/// Records in the loaded log.
pub const RECORDS: &str = "records";

/// Edges in the transition table.
pub const EDGES: &str = "edges";

/// Prediction nodes returned by a query.
pub const NODES: &str = "nodes";
