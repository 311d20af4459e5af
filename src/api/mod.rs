//! Boundary to the remote attendance store. The engine only ever appends
//! events and reads them back; it never edits or deletes.

pub mod client;

use crate::errors::{AppError, AppResult};
use crate::models::event::{AttendanceEvent, NewAttendanceEvent};
use crate::models::event_type::EventKind;
use crate::models::geo::GeoPoint;
use crate::models::holiday::Holiday;
use crate::models::work_mode::WorkMode;
use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use serde::Deserialize;

/// Capability interface to the attendance API, so the store and the
/// capture session can be driven by an in-memory fake in tests.
pub trait AttendanceApi {
    /// Append one attendance event. Atomic at the API boundary: either the
    /// whole event (photo included) is persisted, or nothing is.
    fn append(&self, event: &NewAttendanceEvent) -> AppResult<()>;

    /// Fetch the full event history for a user. The response is treated as
    /// total (not paginated) and its ordering is not trusted.
    fn fetch_events(&self, user: &str) -> AppResult<Vec<AttendanceEvent>>;

    fn fetch_holidays(&self) -> AppResult<Vec<Holiday>>;
}

/// Permissive shape of a fetched event record. Anything may be missing;
/// validation decides what survives.
#[derive(Debug, Deserialize)]
pub struct RawEventRecord {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub timestamp: Option<String>,
    #[serde(rename = "workMode")]
    pub work_mode: Option<String>,
    pub location: Option<RawLocation>,
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawLocation {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct RawHoliday {
    pub name: Option<String>,
    pub date: Option<String>,
}

/// Parse one raw record into an event, or say precisely what is wrong
/// with it.
pub fn parse_event(raw: &RawEventRecord) -> Result<AttendanceEvent, AppError> {
    let kind = raw
        .kind
        .as_deref()
        .and_then(EventKind::from_api_str)
        .ok_or_else(|| {
            AppError::MalformedEvent(format!("missing or unknown type: {:?}", raw.kind))
        })?;

    let timestamp = raw
        .timestamp
        .as_deref()
        .and_then(parse_timestamp)
        .ok_or_else(|| {
            AppError::MalformedEvent(format!(
                "missing or unparseable timestamp: {:?}",
                raw.timestamp
            ))
        })?;

    let work_mode = raw
        .work_mode
        .as_deref()
        .and_then(WorkMode::from_api_str)
        .unwrap_or(WorkMode::Office);

    let location = raw
        .location
        .as_ref()
        .and_then(|l| Some(GeoPoint::new(l.latitude?, l.longitude?)));

    Ok(AttendanceEvent {
        kind,
        timestamp,
        work_mode,
        location,
        image_present: raw.image_url.is_some(),
    })
}

/// Validate one raw record. A malformed record is dropped with a warning
/// so a single bad row cannot poison a whole month of statistics.
pub fn validate_event(raw: &RawEventRecord) -> Option<AttendanceEvent> {
    match parse_event(raw) {
        Ok(event) => Some(event),
        Err(e) => {
            tracing::warn!("skipping fetched event: {}", e);
            None
        }
    }
}

pub fn validate_holiday(raw: &RawHoliday) -> Option<Holiday> {
    let name = raw.name.clone()?;
    let date = raw
        .date
        .as_deref()
        .and_then(crate::utils::date::parse_date)?;
    Some(Holiday { name, date })
}

/// Parse an API timestamp. RFC3339 first; naive "YYYY-MM-DDTHH:MM:SS"
/// records are interpreted in local time, matching how the dashboard
/// buckets them.
fn parse_timestamp(s: &str) -> Option<DateTime<Local>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            if let Some(dt) = Local.from_local_datetime(&naive).single() {
                return Some(dt);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(kind: Option<&str>, ts: Option<&str>) -> RawEventRecord {
        RawEventRecord {
            kind: kind.map(String::from),
            timestamp: ts.map(String::from),
            work_mode: None,
            location: None,
            image_url: None,
        }
    }

    #[test]
    fn record_missing_type_is_dropped() {
        assert!(validate_event(&raw(None, Some("2024-01-01T09:00:00"))).is_none());
    }

    #[test]
    fn record_missing_timestamp_is_dropped() {
        assert!(validate_event(&raw(Some("check-in"), None)).is_none());
    }

    #[test]
    fn record_with_unknown_type_is_dropped() {
        assert!(validate_event(&raw(Some("lunch"), Some("2024-01-01T09:00:00"))).is_none());
    }

    #[test]
    fn valid_record_defaults_to_office_mode() {
        let ev = validate_event(&raw(Some("check-in"), Some("2024-01-01T09:00:00"))).unwrap();
        assert_eq!(ev.kind, EventKind::CheckIn);
        assert_eq!(ev.work_mode, WorkMode::Office);
        assert!(ev.location.is_none());
        assert!(!ev.image_present);
        assert_eq!(ev.date_str(), "2024-01-01");
    }

    #[test]
    fn legacy_type_spellings_are_accepted() {
        let ev = validate_event(&raw(Some("checkout"), Some("2024-01-01T17:30:00"))).unwrap();
        assert_eq!(ev.kind, EventKind::CheckOut);
    }

    #[test]
    fn partial_location_is_treated_as_absent() {
        let mut r = raw(Some("check-in"), Some("2024-01-01T09:00:00"));
        r.location = Some(RawLocation {
            latitude: Some(45.07),
            longitude: None,
        });
        let ev = validate_event(&r).unwrap();
        assert!(ev.location.is_none());
    }

    #[test]
    fn parse_error_names_the_problem() {
        let err = parse_event(&raw(Some("check-in"), Some("yesterday"))).unwrap_err();
        assert!(matches!(err, AppError::MalformedEvent(_)));
    }

    #[test]
    fn holiday_needs_name_and_parseable_date() {
        let ok = RawHoliday {
            name: Some("Ferragosto".into()),
            date: Some("2024-08-15".into()),
        };
        let bad = RawHoliday {
            name: Some("Mystery".into()),
            date: Some("15/08/2024".into()),
        };
        assert!(validate_holiday(&ok).is_some());
        assert!(validate_holiday(&bad).is_none());
    }
}
