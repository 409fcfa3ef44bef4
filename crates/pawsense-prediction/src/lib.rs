//! # pawsense-prediction
//!
//! Answers forecasting queries against a built [`TransitionTable`].
//!
//! ## Query types
//!
//! | Query | Result |
//! |-------|--------|
//! | [`predict_next`] | Most probable successor and its mean gap, or `None` |
//! | [`predict_chain`] | Every path up to `max_depth`, depth-first, with path probability and absolute time |
//!
//! [`PredictionEngine`] owns the current table snapshot and swaps in a new
//! one on rebuild. [`ForecastService`] validates boundary requests and maps
//! empty results to `UnknownActivity`.
//!
//! [`TransitionTable`]: pawsense_transitions::TransitionTable

pub mod chain;
pub mod engine;
pub mod next;
pub mod ranking;
pub mod service;

pub use chain::{chain_size, predict_chain, predict_chain_with, ChainConfig};
pub use engine::PredictionEngine;
pub use next::predict_next;
pub use ranking::{to_forecast, top_n};
pub use service::{ForecastRequest, ForecastResponse, ForecastService};
