//! Activity log ingestion errors.

use std::path::PathBuf;

use super::error_code::{self, PawsenseErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("unsupported log format for {path}: expected .csv or .json")]
    UnsupportedFormat { path: PathBuf },

    #[error("CSV error in {path}: {message}")]
    Csv { path: PathBuf, message: String },

    #[error("JSON error in {path}: {message}")]
    Json { path: PathBuf, message: String },

    #[error("malformed record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },
}

impl PawsenseErrorCode for IngestError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MalformedRecord { .. } => error_code::MALFORMED_RECORD,
            _ => error_code::INGEST_ERROR,
        }
    }
}
