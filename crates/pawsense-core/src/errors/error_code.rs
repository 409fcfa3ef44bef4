//! Stable error codes for the boundary layer.

/// Every PawSense error maps to a code the boundary can branch on
/// without parsing messages.
pub trait PawsenseErrorCode {
    /// Returns the error code string (e.g., "UNKNOWN_ACTIVITY").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted boundary string: `[ERROR_CODE] message`.
    fn boundary_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INSUFFICIENT_DATA: &str = "INSUFFICIENT_DATA";
pub const MISSING_FIELD: &str = "MISSING_FIELD";
pub const INVALID_TIMESTAMP: &str = "INVALID_TIMESTAMP";
pub const INVALID_DEPTH: &str = "INVALID_DEPTH";
pub const INVALID_TOP_N: &str = "INVALID_TOP_N";
pub const CHAIN_TOO_LARGE: &str = "CHAIN_TOO_LARGE";
pub const UNKNOWN_ACTIVITY: &str = "UNKNOWN_ACTIVITY";
pub const INGEST_ERROR: &str = "INGEST_ERROR";
pub const MALFORMED_RECORD: &str = "MALFORMED_RECORD";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const CONCURRENCY_ERROR: &str = "CONCURRENCY_ERROR";
