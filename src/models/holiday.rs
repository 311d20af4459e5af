use chrono::NaiveDate;
use serde::Serialize;

/// A company holiday, consumed only to annotate the calendar view.
/// Holidays never enter the hour math.
#[derive(Debug, Clone, Serialize)]
pub struct Holiday {
    pub name: String,
    pub date: NaiveDate,
}
