//! Client-side view of the remote event store: a read-mostly in-memory
//! cache, replaced wholesale on every refresh. Aggregates are always
//! recomputed from the snapshot; there is no incremental merge, so
//! out-of-order or backdated events can never corrupt a running sum.

use crate::api::AttendanceApi;
use crate::errors::AppResult;
use crate::models::event::AttendanceEvent;
use crate::models::event_type::EventKind;
use chrono::NaiveDate;

#[derive(Default)]
pub struct AttendanceEventStore {
    events: Vec<AttendanceEvent>,
}

impl AttendanceEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the cached list with a fresh fetch. Returns the number of
    /// valid events now held.
    pub fn refresh(&mut self, api: &dyn AttendanceApi, user: &str) -> AppResult<usize> {
        self.events = api.fetch_events(user)?;
        Ok(self.events.len())
    }

    /// Snapshot for the aggregators. Ordering is whatever the API returned;
    /// consumers must not rely on it.
    pub fn events(&self) -> &[AttendanceEvent] {
        &self.events
    }
}

/// The action the capture flow should offer for `date`, derived from the
/// event list and never from session state: no events yet means check-in,
/// exactly one check-in and no check-out means check-out, anything else
/// means the day is already settled.
pub fn next_action(events: &[AttendanceEvent], date: NaiveDate) -> Option<EventKind> {
    let mut check_ins = 0usize;
    let mut check_outs = 0usize;

    for ev in events.iter().filter(|e| e.date() == date) {
        match ev.kind {
            EventKind::CheckIn => check_ins += 1,
            EventKind::CheckOut => check_outs += 1,
        }
    }

    if check_ins == 0 && check_outs == 0 {
        Some(EventKind::CheckIn)
    } else if check_ins == 1 && check_outs == 0 {
        Some(EventKind::CheckOut)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::models::event::NewAttendanceEvent;
    use crate::models::holiday::Holiday;
    use crate::models::work_mode::WorkMode;
    use chrono::{Local, NaiveDate, TimeZone};
    use std::cell::RefCell;

    fn ev(kind: EventKind, y: i32, m: u32, d: u32, h: u32, min: u32) -> AttendanceEvent {
        AttendanceEvent {
            kind,
            timestamp: Local
                .with_ymd_and_hms(y, m, d, h, min, 0)
                .single()
                .unwrap(),
            work_mode: WorkMode::Office,
            location: None,
            image_present: false,
        }
    }

    struct ScriptedApi {
        batches: RefCell<Vec<Vec<AttendanceEvent>>>,
    }

    impl AttendanceApi for ScriptedApi {
        fn append(&self, _event: &NewAttendanceEvent) -> AppResult<()> {
            Ok(())
        }

        fn fetch_events(&self, _user: &str) -> AppResult<Vec<AttendanceEvent>> {
            let mut batches = self.batches.borrow_mut();
            if batches.is_empty() {
                Err(AppError::Api("no more batches".to_string()))
            } else {
                Ok(batches.remove(0))
            }
        }

        fn fetch_holidays(&self) -> AppResult<Vec<Holiday>> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn refresh_replaces_the_list_wholesale() {
        let api = ScriptedApi {
            batches: RefCell::new(vec![
                vec![
                    ev(EventKind::CheckIn, 2024, 1, 1, 9, 0),
                    ev(EventKind::CheckOut, 2024, 1, 1, 17, 0),
                ],
                vec![ev(EventKind::CheckIn, 2024, 1, 2, 9, 0)],
            ]),
        };

        let mut store = AttendanceEventStore::new();
        assert_eq!(store.refresh(&api, "mine").unwrap(), 2);
        assert_eq!(store.refresh(&api, "mine").unwrap(), 1);
        // Nothing from the first batch survives the second refresh.
        assert_eq!(store.events()[0].date_str(), "2024-01-02");
    }

    #[test]
    fn failed_refresh_surfaces_the_error() {
        let api = ScriptedApi {
            batches: RefCell::new(Vec::new()),
        };
        let mut store = AttendanceEventStore::new();
        assert!(store.refresh(&api, "mine").is_err());
    }

    #[test]
    fn next_action_walks_in_then_out_then_nothing() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        assert_eq!(next_action(&[], date), Some(EventKind::CheckIn));

        let one_in = [ev(EventKind::CheckIn, 2024, 1, 1, 9, 0)];
        assert_eq!(next_action(&one_in, date), Some(EventKind::CheckOut));

        let done = [
            ev(EventKind::CheckIn, 2024, 1, 1, 9, 0),
            ev(EventKind::CheckOut, 2024, 1, 1, 17, 0),
        ];
        assert_eq!(next_action(&done, date), None);
    }

    #[test]
    fn next_action_offers_nothing_on_odd_histories() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        // Duplicate check-ins from retries.
        let doubled = [
            ev(EventKind::CheckIn, 2024, 1, 1, 9, 0),
            ev(EventKind::CheckIn, 2024, 1, 1, 9, 5),
        ];
        assert_eq!(next_action(&doubled, date), None);

        // A stray check-out without a check-in.
        let orphan = [ev(EventKind::CheckOut, 2024, 1, 1, 17, 0)];
        assert_eq!(next_action(&orphan, date), None);
    }

    #[test]
    fn next_action_ignores_other_days() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let yesterday = [
            ev(EventKind::CheckIn, 2024, 1, 1, 9, 0),
            ev(EventKind::CheckOut, 2024, 1, 1, 17, 0),
        ];
        assert_eq!(next_action(&yesterday, date), Some(EventKind::CheckIn));
    }
}
