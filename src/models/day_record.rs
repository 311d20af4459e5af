use super::event::AttendanceEvent;
use serde::Serialize;

/// Presence state of a single calendar day. Days with no events at all do
/// not get a record: a missing map key means no activity and zero hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DayState {
    PartialCheckInOnly,
    Complete,
}

/// Derived (never stored) pairing of a day's first check-in and first
/// check-out.
#[derive(Debug, Clone)]
pub struct DailyRecord {
    pub check_in: AttendanceEvent,
    pub check_out: Option<AttendanceEvent>,
    /// Defined only when both events are present; clamped to >= 0.
    pub worked_hours: f64,
    pub state: DayState,
}
