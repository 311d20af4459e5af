//! Weekly rollup: Monday-anchored windows, expected hours, efficiency and
//! the performance label shown on the dashboard.

use crate::models::day_record::{DailyRecord, DayState};
use crate::utils::date::monday_of;
use chrono::{Duration, NaiveDate};
use std::collections::BTreeMap;

/// A contiguous Monday-to-Sunday range, addressed by a signed offset from
/// the current week (0 = this week, -1 = last week, 1 = next week).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeeklyWindow {
    pub start: NaiveDate,
}

impl WeeklyWindow {
    pub fn for_offset(today: NaiveDate, offset: i64) -> Self {
        Self {
            start: monday_of(today) + Duration::days(offset * 7),
        }
    }

    pub fn end(&self) -> NaiveDate {
        self.start + Duration::days(6)
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let start = self.start;
        (0..7).map(move |i| start + Duration::days(i))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Performance {
    Excellent,
    Good,
    Average,
    BelowTarget,
}

impl Performance {
    pub fn label(&self) -> &'static str {
        match self {
            Performance::Excellent => "Excellent",
            Performance::Good => "Good",
            Performance::Average => "Average",
            Performance::BelowTarget => "Below Target",
        }
    }
}

/// Thresholds are inclusive on the lower bound.
pub fn classify(efficiency_score: f64) -> Performance {
    if efficiency_score >= 90.0 {
        Performance::Excellent
    } else if efficiency_score >= 75.0 {
        Performance::Good
    } else if efficiency_score >= 50.0 {
        Performance::Average
    } else {
        Performance::BelowTarget
    }
}

#[derive(Debug, Clone)]
pub struct WeeklySummary {
    pub window: WeeklyWindow,
    pub total_worked_hours: f64,
    /// Days in the window with a complete check-in/check-out pair.
    pub working_days: u32,
    pub expected_hours: f64,
    /// Always within [0, 100].
    pub efficiency_score: f64,
    pub performance: Performance,
}

pub fn summarize_week(
    records: &BTreeMap<NaiveDate, DailyRecord>,
    window: WeeklyWindow,
) -> WeeklySummary {
    let mut total_worked_hours = 0.0;
    let mut working_days = 0u32;

    for day in window.days() {
        if let Some(record) = records.get(&day) {
            total_worked_hours += record.worked_hours;
            if record.state == DayState::Complete {
                working_days += 1;
            }
        }
    }

    let expected_hours = f64::max(working_days as f64 * 8.0, 40.0);
    let efficiency_score = (total_worked_hours / expected_hours * 100.0).clamp(0.0, 100.0);

    WeeklySummary {
        window,
        total_worked_hours,
        working_days,
        expected_hours,
        efficiency_score,
        performance: classify(efficiency_score),
    }
}
