//! # pawsense-core
//!
//! Foundation crate for PawSense activity forecasting.
//! Defines the activity log types, transition and prediction models,
//! errors, config, and constants. Every other crate in the workspace
//! depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod time;

// Re-export the most commonly used types at the crate root.
pub use config::PawsenseConfig;
pub use errors::{PawsenseError, PawsenseResult};
pub use models::{
    ActivityLabel, ActivityRecord, ForecastEntry, NextActivity, PredictionNode, TransitionEdge,
};
