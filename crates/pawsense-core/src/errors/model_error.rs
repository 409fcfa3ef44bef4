//! Transition model construction errors.

use super::error_code::{self, PawsenseErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("insufficient data: {records} record(s), at least {required} needed to observe a transition")]
    InsufficientData { records: usize, required: usize },
}

impl PawsenseErrorCode for ModelError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InsufficientData { .. } => error_code::INSUFFICIENT_DATA,
        }
    }
}
