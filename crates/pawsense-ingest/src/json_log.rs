//! JSON activity logs: a top-level array of records.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use pawsense_core::errors::IngestError;
use pawsense_core::models::ActivityRecord;

/// Parse a JSON array from `reader`.
///
/// `MalformedRecord::line` is the 1-based position of the offending record
/// in the array.
pub fn parse_json<R: Read>(reader: R, origin: &Path) -> Result<Vec<ActivityRecord>, IngestError> {
    let records: Vec<ActivityRecord> =
        serde_json::from_reader(reader).map_err(|e| IngestError::Json {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })?;

    let overflows = |r: &ActivityRecord| r.start_time.checked_add_signed(r.duration).is_none();
    if let Some(pos) = records.iter().position(overflows) {
        return Err(IngestError::MalformedRecord {
            line: pos + 1,
            reason: "duration out of range".to_string(),
        });
    }
    if let Some(pos) = records.iter().position(|r| !r.is_consistent()) {
        return Err(IngestError::MalformedRecord {
            line: pos + 1,
            reason: "end_time does not match start_time + duration_minutes".to_string(),
        });
    }
    if let Some(pos) = records.iter().position(|r| r.activity.as_str().trim().is_empty()) {
        return Err(IngestError::MalformedRecord {
            line: pos + 1,
            reason: "empty activity".to_string(),
        });
    }
    Ok(records)
}

/// Read a JSON log file.
pub fn read_json(path: &Path) -> Result<Vec<ActivityRecord>, IngestError> {
    let file = File::open(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_json(BufReader::new(file), path)
}

/// Write `records` to a JSON file as a pretty-printed array, replacing it.
pub fn save_json(path: &Path, records: &[ActivityRecord]) -> Result<(), IngestError> {
    let io_err = |source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records).map_err(|e| IngestError::Json {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    writer.flush().map_err(io_err)
}
