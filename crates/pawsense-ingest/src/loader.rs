//! Format dispatch and subject filtering.

use std::path::Path;

use pawsense_core::errors::IngestError;
use pawsense_core::models::ActivityRecord;
use tracing::{info, warn};

use crate::csv_log::{read_csv, save_csv};
use crate::json_log::{read_json, save_json};

/// On-disk log format, picked by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Csv,
    Json,
}

impl LogFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Load a log, keeping only `subject`'s records when given.
pub fn load_log(path: &Path, subject: Option<&str>) -> Result<Vec<ActivityRecord>, IngestError> {
    let format = LogFormat::from_path(path).ok_or_else(|| IngestError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    let records = match format {
        LogFormat::Csv => read_csv(path)?,
        LogFormat::Json => read_json(path)?,
    };
    let total = records.len();
    let records = filter_subject(records, subject);

    if let (Some(subject), true) = (subject, records.is_empty()) {
        warn!(path = %path.display(), subject, total, "no records for subject");
    }
    info!(
        path = %path.display(),
        format = ?format,
        records = records.len(),
        total,
        "activity log loaded"
    );
    Ok(records)
}

/// Write a log in the format its extension names.
pub fn save_log(path: &Path, records: &[ActivityRecord]) -> Result<(), IngestError> {
    match LogFormat::from_path(path) {
        Some(LogFormat::Csv) => save_csv(path, records)?,
        Some(LogFormat::Json) => save_json(path, records)?,
        None => {
            return Err(IngestError::UnsupportedFormat {
                path: path.to_path_buf(),
            })
        }
    }
    info!(path = %path.display(), records = records.len(), "activity log written");
    Ok(())
}

/// Keep only records of `subject`. `None` keeps everything.
pub fn filter_subject(records: Vec<ActivityRecord>, subject: Option<&str>) -> Vec<ActivityRecord> {
    match subject {
        None => records,
        Some(subject) => records
            .into_iter()
            .filter(|r| r.subject_id == subject)
            .collect(),
    }
}
