//! Data model shared by the builder, the predictor, and the boundary.

pub mod activity;
pub mod edge;
pub mod prediction;
pub mod record;

pub use activity::ActivityLabel;
pub use edge::TransitionEdge;
pub use prediction::{ForecastEntry, NextActivity, PredictionNode};
pub use record::ActivityRecord;
