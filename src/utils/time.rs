//! Time utilities: hour formatting for summaries and calendar cells.

/// Format fractional hours as "H:MM" (8.5 → "8:30").
pub fn format_hours(hours: f64) -> String {
    let total_minutes = (hours * 60.0).round() as i64;
    format!("{}:{:02}", total_minutes / 60, total_minutes % 60)
}

/// Format a percentage for display, one decimal place.
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_fractional_hours() {
        assert_eq!(format_hours(8.5), "8:30");
        assert_eq!(format_hours(0.0), "0:00");
        assert_eq!(format_hours(40.25), "40:15");
    }
}
