//! Query validation errors. Raised before any chain is expanded, except
//! `UnknownActivity`, which the boundary raises when the source has no
//! outgoing edges in the current table.

use super::error_code::{self, PawsenseErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid timestamp {value:?}: {reason}")]
    InvalidTimestamp { value: String, reason: String },

    #[error("invalid depth {depth}: must be between 1 and {max}")]
    InvalidDepth { depth: i64, max: usize },

    #[error("invalid top_n {top_n}: must be at least 1")]
    InvalidTopN { top_n: i64 },

    #[error("chain from {activity} at depth {depth} would hold {nodes} predictions, limit is {limit}")]
    ChainTooLarge {
        activity: String,
        depth: usize,
        nodes: u64,
        limit: usize,
    },

    #[error("activity not found: {activity}")]
    UnknownActivity { activity: String },
}

impl PawsenseErrorCode for QueryError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingField { .. } => error_code::MISSING_FIELD,
            Self::InvalidTimestamp { .. } => error_code::INVALID_TIMESTAMP,
            Self::InvalidDepth { .. } => error_code::INVALID_DEPTH,
            Self::InvalidTopN { .. } => error_code::INVALID_TOP_N,
            Self::ChainTooLarge { .. } => error_code::CHAIN_TOO_LARGE,
            Self::UnknownActivity { .. } => error_code::UNKNOWN_ACTIVITY,
        }
    }
}
