// Single source of truth for all default values.

// --- Prediction ---
pub const DEFAULT_MAX_DEPTH: usize = 2;
pub const DEFAULT_MAX_DEPTH_CAP: usize = 6;
pub const DEFAULT_MAX_CHAIN_NODES: usize = 1_000_000;
pub const DEFAULT_TOP_N: usize = 3;
pub const DEFAULT_MIN_PATH_PROBABILITY: f64 = 0.0; // 0.0 = never prune

// --- Simulation ---
pub const DEFAULT_SUBJECT_NAME: &str = "Buddy";
pub const DEFAULT_SIMULATION_START_DATE: &str = "2025-05-01";
pub const DEFAULT_SIMULATION_DAYS: u32 = 90;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_OUTPUT: bool = false;
