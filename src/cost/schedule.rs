use serde::{Deserialize, Serialize};

const MINUTES_PER_DAY: u64 = 24 * 60;

/// Cron-style serverless job that fires at a fixed interval
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ScheduledJob {
    pub name: String,
    pub interval_minutes: u32,
}

impl ScheduledJob {
    pub fn new(name: impl Into<String>, interval_minutes: u32) -> Self {
        Self {
            name: name.into(),
            interval_minutes,
        }
    }

    /// Lock, live-score and resolve jobs
    pub fn default_schedule() -> Vec<Self> {
        vec![
            Self::new("lock", 1),
            Self::new("live", 2),
            Self::new("resolve", 15),
        ]
    }

    /// Invocations over a month of `days_per_month` days. Zero for a zero interval.
    pub fn invocations_per_month(&self, days_per_month: u32) -> u64 {
        (days_per_month as u64 * MINUTES_PER_DAY)
            .checked_div(self.interval_minutes as u64)
            .unwrap_or(0)
    }
}

/// Total invocations of all jobs over a month
pub fn total_invocations(jobs: &[ScheduledJob], days_per_month: u32) -> u64 {
    jobs.iter()
        .map(|job| job.invocations_per_month(days_per_month))
        .sum()
}
