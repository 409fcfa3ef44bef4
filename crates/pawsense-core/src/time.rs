//! Timestamp parsing and minute/duration conversion.
//!
//! The activity log and the query boundary both accept ISO-8601 in the
//! forms people actually send: with an offset, with `Z`, or naive (taken
//! as UTC). A bare date means midnight UTC.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};

use crate::constants::SECONDS_PER_MINUTE;

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse an ISO-8601 instant.
pub fn parse_instant(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    let value = value.trim();
    let rfc3339_err = match DateTime::parse_from_rfc3339(value) {
        Ok(dt) => return Ok(dt.with_timezone(&Utc)),
        Err(e) => e,
    };
    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, fmt) {
            return Ok(naive.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }
    Err(rfc3339_err)
}

/// Fractional minutes in a signed duration.
pub fn duration_minutes(duration: Duration) -> f64 {
    duration.num_milliseconds() as f64 / 1000.0 / SECONDS_PER_MINUTE
}

/// Duration for a fractional minute count, rounded to the millisecond.
/// Saturates at the `Duration` bounds; see [`try_minutes_duration`].
pub fn minutes_duration(minutes: f64) -> Duration {
    try_minutes_duration(minutes).unwrap_or(if minutes < 0.0 {
        Duration::MIN
    } else {
        Duration::MAX
    })
}

/// Like [`minutes_duration`], but `None` for non-finite or out-of-range
/// minute counts.
pub fn try_minutes_duration(minutes: f64) -> Option<Duration> {
    let millis = (minutes * SECONDS_PER_MINUTE * 1000.0).round();
    // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive.
    if !millis.is_finite() || millis < i64::MIN as f64 || millis >= i64::MAX as f64 {
        return None;
    }
    Duration::try_milliseconds(millis as i64)
}

/// `start + minutes`, clamped to the representable range instead of
/// panicking.
pub fn offset_by_minutes(start: DateTime<Utc>, minutes: f64) -> DateTime<Utc> {
    let delta = minutes_duration(minutes);
    start.checked_add_signed(delta).unwrap_or(if delta < Duration::zero() {
        DateTime::<Utc>::MIN_UTC
    } else {
        DateTime::<Utc>::MAX_UTC
    })
}

/// Serde adapter storing a [`Duration`] as fractional minutes.
pub mod serde_minutes {
    use chrono::Duration;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(super::duration_minutes(*duration))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let minutes = f64::deserialize(deserializer)?;
        super::try_minutes_duration(minutes)
            .ok_or_else(|| serde::de::Error::custom("duration out of range"))
    }
}
