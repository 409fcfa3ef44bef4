//! Observability for PawSense.
//! `tracing` with `EnvFilter`, per-crate log levels via `PAWSENSE_LOG`.

pub mod fields;
pub mod setup;

pub use setup::{init_tracing, init_tracing_with, init_tracing_with_filter};
