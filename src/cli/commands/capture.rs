use crate::api::client::HttpApi;
use crate::capture::{CaptureSession, FileCamera, FixedLocator};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::{AttendanceEventStore, next_action};
use crate::errors::{AppError, AppResult};
use crate::models::event_type::EventKind;
use crate::models::geo::GeoPoint;
use crate::models::work_mode::WorkMode;
use crate::ui::messages;
use crate::utils::date;
use std::path::PathBuf;

/// Run the capture workflow end to end: derive today's action from the
/// event history, acquire the devices, submit, and refresh the store.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Capture {
        mode,
        photo,
        no_photo,
        no_location,
    } = cmd
    {
        let work_mode = resolve_work_mode(mode.as_deref(), cfg)?;

        let api = HttpApi::new(cfg);
        let mut store = AttendanceEventStore::new();
        store.refresh(&api, &cfg.user)?;

        let today = date::today();
        let kind = next_action(store.events(), today)
            .ok_or_else(|| AppError::AlreadyCompleted(today.to_string()))?;

        // Without a frame to attach the camera leg is skipped entirely.
        let skip_camera = *no_photo || photo.is_none();
        let use_location = cfg.use_location && !no_location;

        let camera = FileCamera::new(PathBuf::from(photo.clone().unwrap_or_default()));
        let locator = FixedLocator::new(configured_point(cfg));
        let mut session = CaptureSession::new(kind, camera, locator, cfg.photo_quality);

        session.start(work_mode, skip_camera, use_location)?;
        if !skip_camera {
            session.capture()?;
        }

        if let Err(e) = session.submit(&api) {
            session.cancel();
            return Err(e);
        }

        let count = store.refresh(&api, &cfg.user)?;
        match kind {
            EventKind::CheckIn => messages::success(format!(
                "Checked in ({}), {} events on record",
                work_mode.to_api_str(),
                count
            )),
            EventKind::CheckOut => messages::success(format!(
                "Checked out ({}), {} events on record",
                work_mode.to_api_str(),
                count
            )),
        }

        if next_action(store.events(), today).is_none() {
            messages::info("Attendance for today is complete.");
        }
    }

    Ok(())
}

fn resolve_work_mode(mode: Option<&str>, cfg: &Config) -> AppResult<WorkMode> {
    let code = mode.unwrap_or(&cfg.default_work_mode);
    WorkMode::from_code(code).ok_or_else(|| {
        AppError::InvalidWorkMode(format!(
            "Invalid work mode '{}'. Use O (office), H (hybrid) or R (remote)",
            code
        ))
    })
}

fn configured_point(cfg: &Config) -> Option<GeoPoint> {
    match (cfg.latitude, cfg.longitude) {
        (Some(lat), Some(lon)) => Some(GeoPoint::new(lat, lon)),
        _ => None,
    }
}
