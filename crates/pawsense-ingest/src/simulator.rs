//! Seeded generator of a daily routine.
//!
//! Each simulated day holds an overnight sleep starting at midnight, three
//! meals in fixed windows, five to eight extra activities scattered between
//! 06:00 and 21:59, and an evening sleep starting between 21:00 and 23:59.
//! Output is sorted by start time.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use pawsense_core::config::SimulationConfig;
use pawsense_core::errors::ConfigError;
use pawsense_core::models::ActivityRecord;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

/// Activities the simulator knows how to schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutineActivity {
    Breakfast,
    Lunch,
    Dinner,
    Play,
    Sleep,
    Potty,
    Medicine,
    Relax,
    Walk,
}

impl RoutineActivity {
    /// Filler activities drawn uniformly during the day.
    pub const EXTRAS: [RoutineActivity; 5] = [
        Self::Play,
        Self::Potty,
        Self::Medicine,
        Self::Relax,
        Self::Walk,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
            Self::Play => "Play",
            Self::Sleep => "Sleep",
            Self::Potty => "Potty",
            Self::Medicine => "Medicine",
            Self::Relax => "Relax",
            Self::Walk => "Walk",
        }
    }

    /// Inclusive duration bounds in whole minutes.
    pub fn duration_range(self) -> (i64, i64) {
        match self {
            Self::Breakfast => (5, 15),
            Self::Lunch | Self::Dinner => (10, 20),
            Self::Play => (30, 120),
            Self::Sleep => (360, 540),
            Self::Potty => (3, 10),
            Self::Medicine => (1, 5),
            Self::Relax => (20, 60),
            Self::Walk => (15, 60),
        }
    }
}

/// Overnight sleep is shorter than the evening one.
const MORNING_SLEEP_MINUTES: (i64, i64) = (360, 480);
const EXTRAS_PER_DAY: (usize, usize) = (5, 8);
const EXTRA_HOURS: (u32, u32) = (6, 21);
const EVENING_SLEEP_HOURS: (u32, u32) = (21, 23);

/// Deterministic for a fixed seed.
pub struct RoutineSimulator {
    subject: String,
    start_date: NaiveDate,
    num_days: u32,
    rng: StdRng,
}

impl RoutineSimulator {
    pub fn new(config: &SimulationConfig) -> Result<Self, ConfigError> {
        let start_date = NaiveDate::parse_from_str(&config.start_date, "%Y-%m-%d").map_err(|e| {
            ConfigError::InvalidValue {
                field: "simulation.start_date".to_string(),
                message: format!("{:?}: {e}", config.start_date),
            }
        })?;
        if config.num_days == 0 {
            return Err(ConfigError::InvalidValue {
                field: "simulation.num_days".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self {
            subject: config.subject_name.clone(),
            start_date,
            num_days: config.num_days,
            rng,
        })
    }

    /// Generate the whole log.
    pub fn generate(&mut self) -> Vec<ActivityRecord> {
        let mut records = Vec::new();
        let mut day = self.start_date;
        for _ in 0..self.num_days {
            self.simulate_day(day, &mut records);
            match day.succ_opt() {
                Some(next) => day = next,
                None => break,
            }
        }
        records.sort_by_key(|r| r.start_time);

        info!(
            subject = %self.subject,
            days = self.num_days,
            records = records.len(),
            "simulated activity log"
        );
        records
    }

    fn simulate_day(&mut self, day: NaiveDate, out: &mut Vec<ActivityRecord>) {
        let midnight = at(day, 0, 0);
        let (lo, hi) = MORNING_SLEEP_MINUTES;
        let minutes = self.rng.random_range(lo..=hi);
        out.push(self.record(RoutineActivity::Sleep, midnight, minutes));

        for (meal, hours) in [
            (RoutineActivity::Breakfast, (6, 8)),
            (RoutineActivity::Lunch, (11, 12)),
            (RoutineActivity::Dinner, (17, 18)),
        ] {
            out.push(self.scheduled(day, meal, hours));
        }

        let extras = self.rng.random_range(EXTRAS_PER_DAY.0..=EXTRAS_PER_DAY.1);
        for _ in 0..extras {
            let pick = RoutineActivity::EXTRAS[self.rng.random_range(0..RoutineActivity::EXTRAS.len())];
            out.push(self.scheduled(day, pick, EXTRA_HOURS));
        }

        out.push(self.scheduled(day, RoutineActivity::Sleep, EVENING_SLEEP_HOURS));
    }

    /// Random start within `hours` (inclusive), random duration for `activity`.
    fn scheduled(
        &mut self,
        day: NaiveDate,
        activity: RoutineActivity,
        hours: (u32, u32),
    ) -> ActivityRecord {
        let hour = self.rng.random_range(hours.0..=hours.1);
        let minute = self.rng.random_range(0..=59);
        let (lo, hi) = activity.duration_range();
        let minutes = self.rng.random_range(lo..=hi);
        self.record(activity, at(day, hour, minute), minutes)
    }

    fn record(&self, activity: RoutineActivity, start: DateTime<Utc>, minutes: i64) -> ActivityRecord {
        ActivityRecord::new(
            self.subject.as_str(),
            activity.label(),
            start,
            Duration::minutes(minutes),
        )
    }
}

fn at(day: NaiveDate, hour: u32, minute: u32) -> DateTime<Utc> {
    let time = NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default();
    day.and_time(time).and_utc()
}
