use std::path::Path;

use chrono::{Duration, TimeZone, Utc};
use pawsense_core::errors::error_code::{self, PawsenseErrorCode};
use pawsense_core::errors::IngestError;
use pawsense_core::models::ActivityRecord;
use pawsense_ingest::csv_log::{parse_csv, save_csv};
use pawsense_ingest::json_log::parse_json;
use pawsense_ingest::{load_log, LogFormat};

#[test]
fn csv_and_json_fixtures_agree() {
    let from_csv = load_log(&test_fixtures::fixture_path("logs/two_days.csv"), None).unwrap();
    let from_json: Vec<ActivityRecord> = test_fixtures::load_fixture("logs/two_days.json");
    assert_eq!(from_csv.len(), 19);
    assert_eq!(from_csv, from_json);
}

#[test]
fn shuffled_csv_loads_in_file_order() {
    let ordered = load_log(&test_fixtures::fixture_path("logs/two_days.csv"), None).unwrap();
    let shuffled =
        load_log(&test_fixtures::fixture_path("logs/two_days_shuffled.csv"), None).unwrap();
    assert_eq!(shuffled.len(), ordered.len());
    assert_ne!(shuffled, ordered);
    for record in &ordered {
        assert!(shuffled.contains(record));
    }
}

#[test]
fn json_fixture_loads_through_dispatch() {
    let records = load_log(&test_fixtures::fixture_path("logs/two_days.json"), None).unwrap();
    assert_eq!(records.len(), 19);
}

#[test]
fn format_follows_extension() {
    assert_eq!(LogFormat::from_path(Path::new("a.csv")), Some(LogFormat::Csv));
    assert_eq!(LogFormat::from_path(Path::new("A.JSON")), Some(LogFormat::Json));
    assert_eq!(LogFormat::from_path(Path::new("a.parquet")), None);
    assert_eq!(LogFormat::from_path(Path::new("noext")), None);

    let err = load_log(Path::new("log.xlsx"), None).unwrap_err();
    assert!(matches!(err, IngestError::UnsupportedFormat { .. }));
    assert_eq!(err.error_code(), error_code::INGEST_ERROR);
}

#[test]
fn missing_file_is_io_error() {
    let err = load_log(Path::new("/nonexistent/pawsense/log.csv"), None).unwrap_err();
    assert!(matches!(err, IngestError::Io { .. }));
}

#[test]
fn subject_filter_keeps_only_that_subject() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("two_pets.csv");
    let t = Utc.with_ymd_and_hms(2025, 5, 1, 7, 0, 0).unwrap();
    let records = vec![
        ActivityRecord::new("Buddy", "Walk", t, Duration::minutes(30)),
        ActivityRecord::new("Rex", "Play", t, Duration::minutes(45)),
        ActivityRecord::new("Buddy", "Nap", t + Duration::hours(1), Duration::minutes(60)),
    ];
    save_csv(&path, &records).unwrap();

    let buddy = load_log(&path, Some("Buddy")).unwrap();
    assert_eq!(buddy.len(), 2);
    assert!(buddy.iter().all(|r| r.subject_id == "Buddy"));
    assert!(load_log(&path, Some("Milo")).unwrap().is_empty());
    assert_eq!(load_log(&path, None).unwrap().len(), 3);
}

#[test]
fn malformed_rows_carry_the_malformed_code() {
    let data = "pet,activity,start_time,duration_min,end_time\n\
                Buddy,Walk,2025-05-01 08:00:00,30,2025-05-01 08:30:00\n\
                Buddy,,2025-05-01 09:00:00,10,2025-05-01 09:10:00\n";
    let err = parse_csv(data.as_bytes(), Path::new("inline.csv")).unwrap_err();
    assert!(matches!(err, IngestError::MalformedRecord { line: 3, .. }));
    assert_eq!(err.error_code(), error_code::MALFORMED_RECORD);
}

#[test]
fn unparsable_timestamp_is_malformed() {
    let data = "pet,activity,start_time,duration_min,end_time\n\
                Buddy,Walk,first thing,30,2025-05-01 08:30:00\n";
    let err = parse_csv(data.as_bytes(), Path::new("inline.csv")).unwrap_err();
    match err {
        IngestError::MalformedRecord { line, reason } => {
            assert_eq!(line, 2);
            assert!(reason.contains("start_time"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn rfc3339_timestamps_are_accepted() {
    let data = "pet,activity,start_time,duration_min,end_time\n\
                Buddy,Walk,2025-05-01T10:00:00+02:00,30,2025-05-01T08:30:00Z\n";
    let records = parse_csv(data.as_bytes(), Path::new("inline.csv")).unwrap();
    assert_eq!(
        records[0].start_time,
        Utc.with_ymd_and_hms(2025, 5, 1, 8, 0, 0).unwrap()
    );
}

#[test]
fn json_inconsistent_record_is_malformed() {
    let data = r#"[
        {"subject_id": "Buddy", "activity": "Walk", "start_time": "2025-05-01T08:00:00Z",
         "duration_minutes": 30.0, "end_time": "2025-05-01T08:30:00Z"},
        {"subject_id": "Buddy", "activity": "Play", "start_time": "2025-05-01T09:00:00Z",
         "duration_minutes": 30.0, "end_time": "2025-05-01T10:00:00Z"}
    ]"#;
    let err = parse_json(data.as_bytes(), Path::new("inline.json")).unwrap_err();
    assert!(matches!(err, IngestError::MalformedRecord { line: 2, .. }));
}

#[test]
fn json_overflowing_duration_is_malformed() {
    let data = r#"[
        {"subject_id": "Buddy", "activity": "Walk", "start_time": "2025-05-01T08:00:00Z",
         "duration_minutes": 30.0, "end_time": "2025-05-01T08:30:00Z"},
        {"subject_id": "Buddy", "activity": "Play", "start_time": "2025-05-01T09:00:00Z",
         "duration_minutes": 1e12, "end_time": "2025-05-01T10:00:00Z"}
    ]"#;
    match parse_json(data.as_bytes(), Path::new("inline.json")).unwrap_err() {
        IngestError::MalformedRecord { line, reason } => {
            assert_eq!(line, 2);
            assert_eq!(reason, "duration out of range");
        }
        other => panic!("unexpected error: {other}"),
    }

    // Too large to be a duration at all: rejected while decoding.
    let data = r#"[{"subject_id": "Buddy", "activity": "Walk",
        "start_time": "2025-05-01T08:00:00Z", "duration_minutes": 1e30,
        "end_time": "2025-05-01T08:30:00Z"}]"#;
    let err = parse_json(data.as_bytes(), Path::new("inline.json")).unwrap_err();
    assert!(matches!(err, IngestError::Json { .. }));
    assert!(err.to_string().contains("duration out of range"));
}

#[test]
fn csv_overflowing_duration_is_malformed() {
    let data = "pet,activity,start_time,duration_min,end_time\n\
                Buddy,Walk,2025-05-01 08:00:00,1e12,2025-05-01 08:30:00\n";
    let err = parse_csv(data.as_bytes(), Path::new("inline.csv")).unwrap_err();
    assert!(matches!(err, IngestError::MalformedRecord { line: 2, .. }));
    assert_eq!(err.error_code(), error_code::MALFORMED_RECORD);
}

#[test]
fn json_syntax_error_names_the_file() {
    let err = parse_json("[{".as_bytes(), Path::new("broken.json")).unwrap_err();
    assert!(matches!(err, IngestError::Json { .. }));
    assert!(err.to_string().contains("broken.json"));
}

#[test]
fn save_log_picks_format_by_extension() {
    let records = load_log(&test_fixtures::fixture_path("logs/two_days.csv"), None).unwrap();
    let dir = tempfile::tempdir().unwrap();

    let json_path = dir.path().join("copy.json");
    pawsense_ingest::save_log(&json_path, &records).unwrap();
    assert_eq!(load_log(&json_path, None).unwrap(), records);

    let csv_path = dir.path().join("copy.csv");
    pawsense_ingest::save_log(&csv_path, &records).unwrap();
    assert_eq!(load_log(&csv_path, None).unwrap(), records);

    let err = pawsense_ingest::save_log(&dir.path().join("copy.txt"), &records).unwrap_err();
    assert!(matches!(err, IngestError::UnsupportedFormat { .. }));
}
