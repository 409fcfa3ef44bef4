//! Configuration: one section per subsystem, all defaults in [`defaults`].

pub mod defaults;
pub mod ingest_config;
pub mod observability_config;
pub mod prediction_config;
pub mod simulation_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use ingest_config::IngestConfig;
pub use observability_config::ObservabilityConfig;
pub use prediction_config::PredictionConfig;
pub use simulation_config::SimulationConfig;

use crate::constants::MAX_CHAIN_DEPTH;
use crate::errors::ConfigError;

/// Top-level PawSense configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PawsenseConfig {
    pub prediction: PredictionConfig,
    pub ingest: IngestConfig,
    pub simulation: SimulationConfig,
    pub observability: ObservabilityConfig,
}

impl PawsenseConfig {
    /// Parse a TOML string. Missing sections and fields take their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Read, parse, and validate a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let display = path.display().to_string();
        if !path.exists() {
            return Err(ConfigError::FileNotFound { path: display });
        }
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::ParseError {
            path: display.clone(),
            message: e.to_string(),
        })?;
        let config = Self::from_toml(&raw).map_err(|e| ConfigError::ParseError {
            path: display,
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the predictor cannot honor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.prediction;
        if p.max_depth_cap == 0 || p.max_depth_cap > MAX_CHAIN_DEPTH {
            return Err(ConfigError::InvalidValue {
                field: "prediction.max_depth_cap".into(),
                message: format!("must be in 1..={MAX_CHAIN_DEPTH}, got {}", p.max_depth_cap),
            });
        }
        if p.default_max_depth == 0 || p.default_max_depth > p.max_depth_cap {
            return Err(ConfigError::InvalidValue {
                field: "prediction.default_max_depth".into(),
                message: format!(
                    "must be in 1..={}, got {}",
                    p.max_depth_cap, p.default_max_depth
                ),
            });
        }
        if p.max_chain_nodes == 0 {
            return Err(ConfigError::InvalidValue {
                field: "prediction.max_chain_nodes".into(),
                message: "must be at least 1".into(),
            });
        }
        if !(0.0..1.0).contains(&p.min_path_probability) {
            return Err(ConfigError::InvalidValue {
                field: "prediction.min_path_probability".into(),
                message: format!("must be in [0, 1), got {}", p.min_path_probability),
            });
        }
        if self.simulation.num_days == 0 {
            return Err(ConfigError::InvalidValue {
                field: "simulation.num_days".into(),
                message: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}
