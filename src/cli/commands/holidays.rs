use crate::api::AttendanceApi;
use crate::api::client::HttpApi;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let api = HttpApi::new(cfg);
    let mut holidays = api.fetch_holidays()?;
    holidays.sort_by_key(|h| h.date);

    if holidays.is_empty() {
        messages::info("No holidays on record.");
        return Ok(());
    }

    messages::header("Holidays");
    for h in &holidays {
        println!("{}  {}", h.date, h.name);
    }
    Ok(())
}
