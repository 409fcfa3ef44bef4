use serde::{Deserialize, Serialize};

use super::defaults;

/// Synthetic activity log generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub subject_name: String,
    /// First simulated day, `YYYY-MM-DD`.
    pub start_date: String,
    pub num_days: u32,
    /// Fixed RNG seed. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            subject_name: defaults::DEFAULT_SUBJECT_NAME.to_string(),
            start_date: defaults::DEFAULT_SIMULATION_START_DATE.to_string(),
            num_days: defaults::DEFAULT_SIMULATION_DAYS,
            seed: None,
        }
    }
}
