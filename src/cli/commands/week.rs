use crate::api::client::HttpApi;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregate::daily::{build_daily_records, worked_hours_on};
use crate::core::aggregate::weekly::{WeeklyWindow, summarize_week};
use crate::core::store::AttendanceEventStore;
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::date;
use crate::utils::table::{Column, Table};
use crate::utils::time::{format_hours, format_percent};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Week { offset } = cmd {
        let api = HttpApi::new(cfg);
        let mut store = AttendanceEventStore::new();
        store.refresh(&api, &cfg.user)?;

        let records = build_daily_records(store.events());
        let today = date::today();
        let window = WeeklyWindow::for_offset(today, *offset);
        let summary = summarize_week(&records, window);

        messages::header(format!("Week {} → {}", window.start, window.end()));

        let mut table = Table::new(vec![
            Column::new("Date", 10),
            Column::new("Day", 3),
            Column::new("Hours", 6),
            Column::new("", 1),
        ]);
        for day in window.days() {
            let marker = if window.contains(today) && day == today {
                "*"
            } else {
                ""
            };
            table.add_row(vec![
                day.to_string(),
                day.format("%a").to_string(),
                format_hours(worked_hours_on(&records, day)),
                marker.to_string(),
            ]);
        }
        print!("{}", table.render());

        println!();
        println!(
            "Worked: {}  |  Working days: {}  |  Expected: {}",
            format_hours(summary.total_worked_hours),
            summary.working_days,
            format_hours(summary.expected_hours),
        );
        println!(
            "Efficiency: {}  →  {}",
            format_percent(summary.efficiency_score),
            summary.performance.label()
        );
    }
    Ok(())
}
