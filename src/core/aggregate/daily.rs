//! Per-day pairing of check-in and check-out events.

use crate::models::day_record::{DailyRecord, DayState};
use crate::models::event::AttendanceEvent;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Pair each local calendar day's first check-in with its first check-out.
///
/// Extra events of the same kind on one date are ignored: the first one
/// chronologically wins. A check-out earlier than its check-in clamps the
/// worked span to zero hours. Days with no events get no entry at all;
/// a missing key reads as "no activity, zero hours".
pub fn build_daily_records(events: &[AttendanceEvent]) -> BTreeMap<NaiveDate, DailyRecord> {
    let mut by_date: BTreeMap<NaiveDate, Vec<&AttendanceEvent>> = BTreeMap::new();
    for ev in events {
        by_date.entry(ev.date()).or_default().push(ev);
    }

    let mut records = BTreeMap::new();
    for (date, mut day_events) in by_date {
        // The fetched list carries no ordering guarantee.
        day_events.sort_by_key(|e| e.timestamp);

        let check_in = day_events.iter().find(|e| e.kind.is_check_in()).cloned();
        let check_out = day_events.iter().find(|e| e.kind.is_check_out()).cloned();

        let Some(check_in) = check_in else {
            // A check-out with no check-in pairs with nothing; the day
            // stays out of the map like any other inactive day.
            continue;
        };

        let record = match check_out {
            Some(out) => {
                let seconds = (out.timestamp - check_in.timestamp).num_seconds();
                DailyRecord {
                    check_in: check_in.clone(),
                    check_out: Some(out.clone()),
                    worked_hours: (seconds.max(0) as f64) / 3600.0,
                    state: DayState::Complete,
                }
            }
            None => DailyRecord {
                check_in: check_in.clone(),
                check_out: None,
                worked_hours: 0.0,
                state: DayState::PartialCheckInOnly,
            },
        };

        records.insert(date, record);
    }

    records
}

/// Hours worked on `date`; absent days count as zero.
pub fn worked_hours_on(records: &BTreeMap<NaiveDate, DailyRecord>, date: NaiveDate) -> f64 {
    records.get(&date).map_or(0.0, |r| r.worked_hours)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event_type::EventKind;
    use crate::models::work_mode::WorkMode;
    use chrono::{Local, TimeZone};

    fn ev(kind: EventKind, d: u32, h: u32, min: u32) -> AttendanceEvent {
        AttendanceEvent {
            kind,
            timestamp: Local
                .with_ymd_and_hms(2024, 1, d, h, min, 0)
                .single()
                .unwrap(),
            work_mode: WorkMode::Office,
            location: None,
            image_present: false,
        }
    }

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn complete_day_computes_exact_hours() {
        let events = [
            ev(EventKind::CheckIn, 1, 9, 0),
            ev(EventKind::CheckOut, 1, 17, 30),
        ];
        let records = build_daily_records(&events);
        let r = &records[&date(1)];
        assert_eq!(r.state, DayState::Complete);
        assert!((r.worked_hours - 8.5).abs() < 1e-9);
    }

    #[test]
    fn check_in_only_is_partial_with_zero_hours() {
        let events = [ev(EventKind::CheckIn, 2, 9, 0)];
        let records = build_daily_records(&events);
        let r = &records[&date(2)];
        assert_eq!(r.state, DayState::PartialCheckInOnly);
        assert_eq!(r.worked_hours, 0.0);
        assert!(r.check_out.is_none());
    }

    #[test]
    fn no_events_means_no_entry() {
        let records = build_daily_records(&[]);
        assert!(records.is_empty());
        assert_eq!(worked_hours_on(&records, date(1)), 0.0);
    }

    #[test]
    fn checkout_before_checkin_clamps_to_zero() {
        let events = [
            ev(EventKind::CheckIn, 3, 17, 0),
            ev(EventKind::CheckOut, 3, 9, 0),
        ];
        let records = build_daily_records(&events);
        let r = &records[&date(3)];
        assert_eq!(r.worked_hours, 0.0);
        assert_eq!(r.state, DayState::Complete);
    }

    #[test]
    fn first_events_win_over_later_duplicates() {
        let events = [
            ev(EventKind::CheckIn, 4, 10, 0),
            ev(EventKind::CheckIn, 4, 8, 0), // earlier, wins despite input order
            ev(EventKind::CheckOut, 4, 16, 0),
            ev(EventKind::CheckOut, 4, 18, 0),
        ];
        let records = build_daily_records(&events);
        let r = &records[&date(4)];
        assert_eq!(r.check_in.time_str(), "08:00");
        assert_eq!(r.check_out.as_ref().unwrap().time_str(), "16:00");
        assert!((r.worked_hours - 8.0).abs() < 1e-9);
    }

    #[test]
    fn orphan_checkout_leaves_the_day_absent() {
        let events = [ev(EventKind::CheckOut, 5, 17, 0)];
        let records = build_daily_records(&events);
        assert!(!records.contains_key(&date(5)));
    }

    #[test]
    fn days_are_bucketed_independently() {
        let events = [
            ev(EventKind::CheckIn, 8, 9, 0),
            ev(EventKind::CheckOut, 8, 18, 0),
            ev(EventKind::CheckIn, 9, 9, 30),
        ];
        let records = build_daily_records(&events);
        assert_eq!(records.len(), 2);
        assert!((records[&date(8)].worked_hours - 9.0).abs() < 1e-9);
        assert_eq!(records[&date(9)].state, DayState::PartialCheckInOnly);
    }
}
