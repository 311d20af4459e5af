use super::{event_type::EventKind, geo::GeoPoint, work_mode::WorkMode};
use chrono::{DateTime, Local, NaiveDate};
use serde::Serialize;

/// A validated attendance event as read back from the remote store.
/// Immutable once fetched: this client only appends new events through
/// the API and re-reads, it never edits or deletes a record.
#[derive(Debug, Clone, Serialize)]
pub struct AttendanceEvent {
    pub kind: EventKind,
    /// Source of truth for all date bucketing, interpreted in local
    /// calendar time.
    pub timestamp: DateTime<Local>,
    pub work_mode: WorkMode,
    pub location: Option<GeoPoint>,
    pub image_present: bool,
}

impl AttendanceEvent {
    /// Local calendar date this event buckets into.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }

    pub fn date_str(&self) -> String {
        self.date().format("%Y-%m-%d").to_string()
    }

    pub fn time_str(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}

/// An outgoing attendance event, assembled by the capture session and
/// handed to the API as a single atomic append.
#[derive(Debug, Clone)]
pub struct NewAttendanceEvent {
    pub kind: EventKind,
    pub work_mode: WorkMode,
    pub location: Option<GeoPoint>,
    /// Compressed still frame, absent when the camera was skipped.
    pub image: Option<Vec<u8>>,
}
