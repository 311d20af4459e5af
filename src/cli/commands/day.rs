use crate::api::client::HttpApi;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregate::daily::build_daily_records;
use crate::core::aggregate::monthly::selectable_for_capture;
use crate::core::store::AttendanceEventStore;
use crate::errors::{AppError, AppResult};
use crate::models::day_record::DayState;
use crate::ui::messages;
use crate::utils::date;
use crate::utils::time::format_hours;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Day { date: date_arg } = cmd {
        let day = match date_arg {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::today(),
        };

        let api = HttpApi::new(cfg);
        let mut store = AttendanceEventStore::new();
        store.refresh(&api, &cfg.user)?;

        let records = build_daily_records(store.events());

        messages::header(format!("Attendance for {}", day));
        match records.get(&day) {
            None if !selectable_for_capture(day, date::today()) => {
                println!("Future day, nothing to capture yet.")
            }
            None => println!("No activity."),
            Some(r) => {
                println!(
                    "Check-in:  {}  [{}]",
                    r.check_in.time_str(),
                    r.check_in.work_mode.code()
                );
                match (&r.check_out, r.state) {
                    (Some(out), DayState::Complete) => {
                        println!("Check-out: {}", out.time_str());
                        println!("Worked:    {}", format_hours(r.worked_hours));
                    }
                    _ => println!("Check-out: (still open)"),
                }
            }
        }
    }
    Ok(())
}
