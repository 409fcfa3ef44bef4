use serde::{Deserialize, Serialize};

/// Activity log ingestion configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    /// Only keep records for this subject. `None` keeps every record.
    pub subject: Option<String>,
}
