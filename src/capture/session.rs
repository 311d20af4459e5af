//! The capture workflow as an explicit finite-state object. The session is
//! owned by the initiating command, lives only between `start()` and
//! completion or cancellation, and is never persisted.

use super::device::{Camera, Locator};
use super::image::compress_frame;
use crate::api::AttendanceApi;
use crate::errors::{AppError, AppResult};
use crate::models::event::NewAttendanceEvent;
use crate::models::event_type::EventKind;
use crate::models::geo::GeoPoint;
use crate::models::work_mode::WorkMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    CameraDenied,
    SubmissionError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Requesting,
    /// Camera live; whether a compressed still is ready is tracked by
    /// `has_image()`.
    Previewing,
    /// Fast path with no camera involved.
    SkipCamera,
    Submitting,
    Completed,
}

pub struct CaptureSession<C: Camera, L: Locator> {
    camera: C,
    locator: L,
    state: SessionState,
    kind: EventKind,
    work_mode: WorkMode,
    photo_level: u32,
    image: Option<Vec<u8>>,
    location: Option<GeoPoint>,
    last_failure: Option<FailureKind>,
}

impl<C: Camera, L: Locator> CaptureSession<C, L> {
    pub fn new(kind: EventKind, camera: C, locator: L, photo_level: u32) -> Self {
        Self {
            camera,
            locator,
            state: SessionState::Idle,
            kind,
            work_mode: WorkMode::Office,
            photo_level,
            image: None,
            location: None,
            last_failure: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    pub fn location(&self) -> Option<GeoPoint> {
        self.location
    }

    pub fn last_failure(&self) -> Option<FailureKind> {
        self.last_failure
    }

    /// Acquire the devices and enter the preview (or skip-camera) state.
    /// Camera denial aborts the session back to `Idle` and is retryable; a
    /// failed location fix degrades to "no location" and never aborts.
    pub fn start(
        &mut self,
        work_mode: WorkMode,
        skip_camera: bool,
        use_location: bool,
    ) -> AppResult<()> {
        if self.state != SessionState::Idle {
            return Err(AppError::InvalidTransition(format!(
                "start() while {:?}",
                self.state
            )));
        }

        self.work_mode = work_mode;
        self.last_failure = None;
        self.state = SessionState::Requesting;

        if !skip_camera {
            if let Err(e) = self.camera.open() {
                self.release_devices();
                self.state = SessionState::Idle;
                self.last_failure = Some(FailureKind::CameraDenied);
                return Err(e);
            }
        }

        if use_location {
            match self.locator.fix() {
                Ok(point) => self.location = Some(point),
                Err(e) => {
                    tracing::debug!("location fix failed, continuing without: {}", e);
                    self.location = None;
                }
            }
        }

        self.state = if skip_camera {
            SessionState::SkipCamera
        } else {
            SessionState::Previewing
        };
        Ok(())
    }

    /// Grab one still from the live preview and compress it.
    pub fn capture(&mut self) -> AppResult<()> {
        if self.state != SessionState::Previewing || self.image.is_some() {
            return Err(AppError::InvalidTransition(format!(
                "capture() while {:?}",
                self.state
            )));
        }

        let frame = self.camera.capture_frame()?;
        self.image = Some(compress_frame(&frame, self.photo_level)?);
        Ok(())
    }

    /// Discard the captured still and go back to the live preview.
    pub fn retake(&mut self) -> AppResult<()> {
        if self.state != SessionState::Previewing || self.image.is_none() {
            return Err(AppError::InvalidTransition(
                "retake() without a captured image".to_string(),
            ));
        }

        self.image = None;
        Ok(())
    }

    /// Issue exactly one append to the attendance API. On failure the
    /// captured image and location fix stay in place so the user can retry
    /// from the same state, or cancel.
    pub fn submit(&mut self, api: &dyn AttendanceApi) -> AppResult<()> {
        let ready = match self.state {
            SessionState::Previewing => self.image.is_some(),
            SessionState::SkipCamera => true,
            _ => false,
        };
        if !ready {
            return Err(AppError::InvalidTransition(format!(
                "submit() while {:?}",
                self.state
            )));
        }

        let resume = self.state;
        self.state = SessionState::Submitting;

        let event = NewAttendanceEvent {
            kind: self.kind,
            work_mode: self.work_mode,
            location: self.location,
            image: self.image.clone(),
        };

        match api.append(&event) {
            Ok(()) => {
                self.release_devices();
                self.image = None;
                self.state = SessionState::Completed;
                self.last_failure = None;
                Ok(())
            }
            Err(e) => {
                self.state = resume;
                self.last_failure = Some(FailureKind::SubmissionError);
                Err(e)
            }
        }
    }

    /// Tear everything down and return to `Idle`. Idempotent, callable from
    /// any state, and guaranteed to leave no camera stream open.
    pub fn cancel(&mut self) {
        self.release_devices();
        self.image = None;
        self.location = None;
        self.last_failure = None;
        self.state = SessionState::Idle;
    }

    fn release_devices(&mut self) {
        self.camera.release();
        self.locator.release();
        debug_assert!(!self.camera.is_open());
    }
}
