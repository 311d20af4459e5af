//! HTTP implementation of the attendance API over `ureq`.

use super::{AttendanceApi, RawEventRecord, RawHoliday, validate_event, validate_holiday};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::event::{AttendanceEvent, NewAttendanceEvent};
use crate::models::holiday::Holiday;
use std::time::Duration;

pub struct HttpApi {
    agent: ureq::Agent,
    base_url: String,
}

impl HttpApi {
    pub fn new(cfg: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_millis(cfg.connect_timeout_ms))
            .timeout_read(Duration::from_millis(cfg.request_timeout_ms))
            .timeout_write(Duration::from_millis(cfg.request_timeout_ms))
            .build();

        Self {
            agent,
            base_url: cfg.api_base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl AttendanceApi for HttpApi {
    fn append(&self, event: &NewAttendanceEvent) -> AppResult<()> {
        let boundary = multipart_boundary();
        let body = encode_multipart(&boundary, event);

        let resp = self
            .agent
            .post(&self.url("/attendance"))
            .set(
                "content-type",
                &format!("multipart/form-data; boundary={}", boundary),
            )
            .send_bytes(&body);

        match resp {
            Ok(r) if (200..=299).contains(&r.status()) => Ok(()),
            Ok(r) => Err(AppError::SubmissionFailed(format!(
                "attendance API returned http status {}",
                r.status()
            ))),
            Err(ureq::Error::Status(code, _)) => Err(AppError::SubmissionFailed(format!(
                "attendance API returned http status {}",
                code
            ))),
            Err(ureq::Error::Transport(err)) => {
                Err(AppError::SubmissionFailed(format!("transport error: {}", err)))
            }
        }
    }

    fn fetch_events(&self, user: &str) -> AppResult<Vec<AttendanceEvent>> {
        let resp = self
            .agent
            .get(&self.url("/attendance"))
            .query("user", user)
            .call()
            .map_err(|e| AppError::Api(e.to_string()))?;

        let text = resp.into_string()?;
        let raw: Vec<RawEventRecord> = serde_json::from_str(&text)
            .map_err(|e| AppError::Api(format!("invalid event list payload: {}", e)))?;

        // Malformed rows are skipped, never fatal.
        Ok(raw.iter().filter_map(validate_event).collect())
    }

    fn fetch_holidays(&self) -> AppResult<Vec<Holiday>> {
        let resp = self
            .agent
            .get(&self.url("/holidays"))
            .call()
            .map_err(|e| AppError::Api(e.to_string()))?;

        let text = resp.into_string()?;
        let raw: Vec<RawHoliday> = serde_json::from_str(&text)
            .map_err(|e| AppError::Api(format!("invalid holiday payload: {}", e)))?;

        Ok(raw.iter().filter_map(validate_holiday).collect())
    }
}

/// One boundary per submission, derived from the wall clock. Good enough
/// for a body we fully control.
fn multipart_boundary() -> String {
    format!("presenza-{}", chrono::Local::now().timestamp_micros())
}

/// Hand-assembled multipart/form-data body carrying the event fields.
/// Parts: `type`, `workMode`, optional `latitude`/`longitude`, optional
/// `image` (deflate-compressed frame bytes).
fn encode_multipart(boundary: &str, event: &NewAttendanceEvent) -> Vec<u8> {
    let mut body = Vec::new();

    let mut push_text = |name: &str, value: &str| {
        body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name).as_bytes(),
        );
        body.extend_from_slice(value.as_bytes());
        body.extend_from_slice(b"\r\n");
    };

    push_text("type", event.kind.to_api_str());
    push_text("workMode", event.work_mode.to_api_str());
    if let Some(loc) = &event.location {
        push_text("latitude", &loc.latitude.to_string());
        push_text("longitude", &loc.longitude.to_string());
    }

    if let Some(image) = &event.image {
        body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
        body.extend_from_slice(
            b"Content-Disposition: form-data; name=\"image\"; filename=\"attendance.bin\"\r\n",
        );
        body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
        body.extend_from_slice(image);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{}--\r\n", boundary).as_bytes());
    body
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event_type::EventKind;
    use crate::models::geo::GeoPoint;
    use crate::models::work_mode::WorkMode;

    #[test]
    fn multipart_body_contains_all_parts() {
        let event = NewAttendanceEvent {
            kind: EventKind::CheckIn,
            work_mode: WorkMode::Remote,
            location: Some(GeoPoint::new(45.07, 7.69)),
            image: Some(vec![1, 2, 3]),
        };

        let body = encode_multipart("b123", &event);
        let text = String::from_utf8_lossy(&body);

        assert!(text.contains("name=\"type\"\r\n\r\ncheck-in"));
        assert!(text.contains("name=\"workMode\"\r\n\r\nremote"));
        assert!(text.contains("name=\"latitude\"\r\n\r\n45.07"));
        assert!(text.contains("name=\"longitude\"\r\n\r\n7.69"));
        assert!(text.contains("filename=\"attendance.bin\""));
        assert!(text.ends_with("--b123--\r\n"));
    }

    #[test]
    fn multipart_body_omits_absent_parts() {
        let event = NewAttendanceEvent {
            kind: EventKind::CheckOut,
            work_mode: WorkMode::Office,
            location: None,
            image: None,
        };

        let body = encode_multipart("b123", &event);
        let text = String::from_utf8_lossy(&body);

        assert!(text.contains("check-out"));
        assert!(!text.contains("latitude"));
        assert!(!text.contains("image"));
    }
}
