use serde::{Deserialize, Serialize};

use super::defaults;

/// Chain and next-activity prediction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionConfig {
    /// Depth used when a chain query does not name one.
    pub default_max_depth: usize,
    /// Largest depth a caller may request.
    pub max_depth_cap: usize,
    /// Largest number of nodes a chain query may expand. Checked before
    /// expansion against the exact unpruned tree size.
    pub max_chain_nodes: usize,
    /// Entries kept by top-N views when the caller does not name a count.
    pub default_top_n: usize,
    /// Branches whose path probability drops below this are not expanded.
    pub min_path_probability: f64,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            default_max_depth: defaults::DEFAULT_MAX_DEPTH,
            max_depth_cap: defaults::DEFAULT_MAX_DEPTH_CAP,
            max_chain_nodes: defaults::DEFAULT_MAX_CHAIN_NODES,
            default_top_n: defaults::DEFAULT_TOP_N,
            min_path_probability: defaults::DEFAULT_MIN_PATH_PROBABILITY,
        }
    }
}
