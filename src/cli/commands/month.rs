use crate::api::AttendanceApi;
use crate::api::client::HttpApi;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregate::daily::{build_daily_records, worked_hours_on};
use crate::core::aggregate::monthly::{MonthlyWindow, summarize_month};
use crate::core::store::AttendanceEventStore;
use crate::errors::AppResult;
use crate::models::holiday::Holiday;
use crate::ui::messages;
use crate::utils::date;
use crate::utils::table::{Column, Table};
use crate::utils::time::format_hours;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Month { year, month } = cmd {
        let today = date::today();
        let window = match (year, month) {
            (Some(y), Some(m)) => MonthlyWindow::new(*y, *m),
            _ => MonthlyWindow::current(today),
        };

        let api = HttpApi::new(cfg);
        let mut store = AttendanceEventStore::new();
        store.refresh(&api, &cfg.user)?;

        // Holidays only annotate the calendar; a fetch failure downgrades
        // to an unannotated view.
        let holidays = api.fetch_holidays().unwrap_or_else(|e| {
            messages::warning(format!("Holidays unavailable: {}", e));
            Vec::new()
        });

        let records = build_daily_records(store.events());
        let summary = summarize_month(&records, window, today);

        messages::header(format!("Month {}-{:02}", window.year, window.month));

        let mut table = Table::new(vec![
            Column::new("Date", 10),
            Column::new("Day", 3),
            Column::new("Hours", 6),
            Column::new("Bucket", 8),
            Column::new("Note", 16),
        ]);
        for day in window.days() {
            let bucket = summary.day_buckets[&day];
            table.add_row(vec![
                day.to_string(),
                day.format("%a").to_string(),
                format_hours(worked_hours_on(&records, day)),
                messages::paint_bucket(bucket.label(), bucket),
                holiday_note(&holidays, day),
            ]);
        }
        print!("{}", table.render());

        println!();
        println!("Total effort: {}", format_hours(summary.total_effort_hours));
    }
    Ok(())
}

fn holiday_note(holidays: &[Holiday], day: chrono::NaiveDate) -> String {
    holidays
        .iter()
        .find(|h| h.date == day)
        .map(|h| h.name.clone())
        .unwrap_or_default()
}
