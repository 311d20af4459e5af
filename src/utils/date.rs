use chrono::{Datelike, Duration, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// The most recent Monday on or before `date`.
pub fn monday_of(date: NaiveDate) -> NaiveDate {
    let days_from_monday = date.weekday().num_days_from_monday() as i64;
    date - Duration::days(days_from_monday)
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(
        date.weekday(),
        chrono::Weekday::Sat | chrono::Weekday::Sun
    )
}

pub fn all_days_of_month(year: i32, month: u32) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let mut d = match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(d) => d,
        None => return out,
    };

    while d.month() == month {
        out.push(d);
        match d.succ_opt() {
            Some(next) => d = next,
            None => break,
        }
    }

    out
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    all_days_of_month(year, month).len() as u32
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monday_anchor_is_identity_on_monday() {
        let mon = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(); // a Monday
        assert_eq!(monday_of(mon), mon);
    }

    #[test]
    fn monday_anchor_from_midweek_and_sunday() {
        let wed = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        let sun = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
        let mon = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(monday_of(wed), mon);
        assert_eq!(monday_of(sun), mon);
    }

    #[test]
    fn month_days_handle_leap_february() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 4), 30);
    }

    #[test]
    fn weekend_detection() {
        assert!(is_weekend(NaiveDate::from_ymd_opt(2024, 1, 6).unwrap()));
        assert!(is_weekend(NaiveDate::from_ymd_opt(2024, 1, 7).unwrap()));
        assert!(!is_weekend(NaiveDate::from_ymd_opt(2024, 1, 8).unwrap()));
    }
}
