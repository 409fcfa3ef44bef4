//! Error taxonomy.
//!
//! One enum per subsystem, folded into [`PawsenseError`]. Query-time
//! "not found" is not an error inside the core: lookups return `Option`
//! or an empty `Vec`, and only the boundary turns that into
//! [`QueryError::UnknownActivity`].

pub mod config_error;
pub mod error_code;
pub mod ingest_error;
pub mod model_error;
pub mod query_error;

pub use config_error::ConfigError;
pub use error_code::PawsenseErrorCode;
pub use ingest_error::IngestError;
pub use model_error::ModelError;
pub use query_error::QueryError;

/// Top-level error for all PawSense operations.
#[derive(Debug, thiserror::Error)]
pub enum PawsenseError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("concurrency error: {0}")]
    ConcurrencyError(String),
}

impl PawsenseErrorCode for PawsenseError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Model(e) => e.error_code(),
            Self::Query(e) => e.error_code(),
            Self::Ingest(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::ConcurrencyError(_) => error_code::CONCURRENCY_ERROR,
        }
    }
}

pub type PawsenseResult<T> = Result<T, PawsenseError>;
