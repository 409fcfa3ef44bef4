//! # pawsense-ingest
//!
//! Getting activity logs in and out of the process.
//!
//! - [`csv_log`]: the collar export layout `pet,activity,start_time,duration_min,end_time`
//! - [`json_log`]: a JSON array of [`ActivityRecord`](pawsense_core::ActivityRecord)
//! - [`loader`]: format dispatch by extension plus subject filtering
//! - [`simulator`]: seeded generator of a plausible daily routine

pub mod csv_log;
pub mod json_log;
pub mod loader;
pub mod simulator;

pub use loader::{load_log, save_log, LogFormat};
pub use simulator::RoutineSimulator;
