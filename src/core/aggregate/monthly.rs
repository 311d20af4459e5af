//! Monthly rollup and the per-day intensity buckets behind the calendar
//! heatmap.

use crate::models::day_record::DailyRecord;
use crate::utils::date::{all_days_of_month, is_weekend};
use chrono::NaiveDate;
use std::collections::BTreeMap;

use super::daily::worked_hours_on;

/// A calendar month, navigable with standard rollover arithmetic and no
/// bound in either direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyWindow {
    pub year: i32,
    /// 1-based calendar month.
    pub month: u32,
}

impl MonthlyWindow {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    pub fn current(today: NaiveDate) -> Self {
        use chrono::Datelike;
        Self {
            year: today.year(),
            month: today.month(),
        }
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Every day of the month, 1..=days_in_month.
    pub fn days(&self) -> Vec<NaiveDate> {
        all_days_of_month(self.year, self.month)
    }
}

/// Coarse per-day classification used to color calendar cells. Weekend and
/// future days classify independently of any hours logged on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayBucket {
    Zero,
    Low,
    Mid,
    Max,
    Weekend,
    Future,
}

impl DayBucket {
    pub fn label(&self) -> &'static str {
        match self {
            DayBucket::Zero => "zero",
            DayBucket::Low => "low",
            DayBucket::Mid => "mid",
            DayBucket::Max => "max",
            DayBucket::Weekend => "weekend",
            DayBucket::Future => "future",
        }
    }
}

pub fn classify_day(date: NaiveDate, worked_hours: f64, today: NaiveDate) -> DayBucket {
    if date > today {
        DayBucket::Future
    } else if is_weekend(date) {
        DayBucket::Weekend
    } else if worked_hours <= 0.0 {
        DayBucket::Zero
    } else if worked_hours < 4.0 {
        DayBucket::Low
    } else if worked_hours >= 8.0 {
        DayBucket::Max
    } else {
        DayBucket::Mid
    }
}

/// Future dates are never offered for capture.
pub fn selectable_for_capture(date: NaiveDate, today: NaiveDate) -> bool {
    date <= today
}

#[derive(Debug, Clone)]
pub struct MonthlySummary {
    pub window: MonthlyWindow,
    /// Sum of worked hours over every day of the month; days without a
    /// complete pair contribute 0.
    pub total_effort_hours: f64,
    pub day_buckets: BTreeMap<NaiveDate, DayBucket>,
}

pub fn summarize_month(
    records: &BTreeMap<NaiveDate, DailyRecord>,
    window: MonthlyWindow,
    today: NaiveDate,
) -> MonthlySummary {
    let mut total_effort_hours = 0.0;
    let mut day_buckets = BTreeMap::new();

    for day in window.days() {
        let hours = worked_hours_on(records, day);
        total_effort_hours += hours;
        day_buckets.insert(day, classify_day(day, hours, today));
    }

    MonthlySummary {
        window,
        total_effort_hours,
        day_buckets,
    }
}
