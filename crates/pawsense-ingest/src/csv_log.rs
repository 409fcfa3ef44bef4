//! CSV activity logs.
//!
//! Timestamps are written as `YYYY-MM-DD HH:MM:SS` and read in any form
//! [`parse_instant`] accepts. Naive times are UTC.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use pawsense_core::errors::IngestError;
use pawsense_core::models::ActivityRecord;
use pawsense_core::time::{duration_minutes, parse_instant, try_minutes_duration};
use serde::{Deserialize, Serialize};
use tracing::debug;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One CSV row, exactly as exported.
#[derive(Debug, Serialize, Deserialize)]
struct CsvRow {
    pet: String,
    activity: String,
    start_time: String,
    duration_min: f64,
    end_time: String,
}

impl CsvRow {
    fn from_record(record: &ActivityRecord) -> Self {
        Self {
            pet: record.subject_id.clone(),
            activity: record.activity.to_string(),
            start_time: record.start_time.format(TIMESTAMP_FORMAT).to_string(),
            duration_min: duration_minutes(record.duration),
            end_time: record.end_time.format(TIMESTAMP_FORMAT).to_string(),
        }
    }

    fn into_record(self, line: usize) -> Result<ActivityRecord, IngestError> {
        let malformed = |reason: String| IngestError::MalformedRecord { line, reason };

        let activity = self.activity.trim();
        if activity.is_empty() {
            return Err(malformed("empty activity".to_string()));
        }
        if !self.duration_min.is_finite() || self.duration_min < 0.0 {
            return Err(malformed(format!("invalid duration_min {}", self.duration_min)));
        }
        let start = parse_timestamp(&self.start_time, "start_time").map_err(malformed)?;
        let end = parse_timestamp(&self.end_time, "end_time").map_err(malformed)?;

        let record = try_minutes_duration(self.duration_min)
            .and_then(|duration| ActivityRecord::try_new(self.pet.trim(), activity, start, duration))
            .ok_or_else(|| malformed("duration out of range".to_string()))?;
        if record.end_time != end {
            return Err(malformed(format!(
                "end_time {} does not match start_time + duration_min ({})",
                self.end_time,
                record.end_time.format(TIMESTAMP_FORMAT)
            )));
        }
        Ok(record)
    }
}

fn parse_timestamp(raw: &str, field: &str) -> Result<DateTime<Utc>, String> {
    parse_instant(raw).map_err(|e| format!("{field} {raw:?}: {e}"))
}

/// Parse CSV from `reader`. `origin` only labels errors.
pub fn parse_csv<R: Read>(reader: R, origin: &Path) -> Result<Vec<ActivityRecord>, IngestError> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut records = Vec::new();

    for (idx, row) in csv_reader.deserialize::<CsvRow>().enumerate() {
        // Line 1 is the header.
        let line = idx + 2;
        let row = row.map_err(|e| {
            if e.is_io_error() {
                IngestError::Csv {
                    path: origin.to_path_buf(),
                    message: e.to_string(),
                }
            } else {
                IngestError::MalformedRecord {
                    line,
                    reason: e.to_string(),
                }
            }
        })?;
        records.push(row.into_record(line)?);
    }

    debug!(origin = %origin.display(), records = records.len(), "parsed CSV log");
    Ok(records)
}

/// Read a CSV log file.
pub fn read_csv(path: &Path) -> Result<Vec<ActivityRecord>, IngestError> {
    let file = File::open(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_csv(file, path)
}

/// Write `records` as CSV, header first.
pub fn write_csv<W: Write>(
    writer: W,
    records: &[ActivityRecord],
    origin: &Path,
) -> Result<(), IngestError> {
    let csv_err = |e: csv::Error| IngestError::Csv {
        path: origin.to_path_buf(),
        message: e.to_string(),
    };
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in records {
        csv_writer.serialize(CsvRow::from_record(record)).map_err(csv_err)?;
    }
    csv_writer.flush().map_err(|source| IngestError::Io {
        path: origin.to_path_buf(),
        source,
    })
}

/// Write `records` to a CSV file, replacing it.
pub fn save_csv(path: &Path, records: &[ActivityRecord]) -> Result<(), IngestError> {
    let file = File::create(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    write_csv(file, records, path)
}
