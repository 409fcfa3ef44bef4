use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::ActivityLabel;

/// One entry of a subject's activity log.
///
/// `end_time` is always `start_time + duration` for records built with
/// [`ActivityRecord::new`] or [`ActivityRecord::try_new`]. Records read from
/// outside are checked with [`ActivityRecord::is_consistent`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub subject_id: String,
    pub activity: ActivityLabel,
    pub start_time: DateTime<Utc>,
    #[serde(rename = "duration_minutes", with = "crate::time::serde_minutes")]
    pub duration: Duration,
    pub end_time: DateTime<Utc>,
}

impl ActivityRecord {
    /// # Panics
    /// Panics if `start_time + duration` leaves the representable range.
    /// Use [`ActivityRecord::try_new`] for untrusted input.
    pub fn new(
        subject_id: impl Into<String>,
        activity: impl Into<ActivityLabel>,
        start_time: DateTime<Utc>,
        duration: Duration,
    ) -> Self {
        Self {
            subject_id: subject_id.into(),
            activity: activity.into(),
            start_time,
            duration,
            end_time: start_time + duration,
        }
    }

    /// `None` when `start_time + duration` overflows.
    pub fn try_new(
        subject_id: impl Into<String>,
        activity: impl Into<ActivityLabel>,
        start_time: DateTime<Utc>,
        duration: Duration,
    ) -> Option<Self> {
        let end_time = start_time.checked_add_signed(duration)?;
        Some(Self {
            subject_id: subject_id.into(),
            activity: activity.into(),
            start_time,
            duration,
            end_time,
        })
    }

    /// Whether `end_time == start_time + duration`. False when the sum
    /// overflows.
    pub fn is_consistent(&self) -> bool {
        self.start_time.checked_add_signed(self.duration) == Some(self.end_time)
    }
}
