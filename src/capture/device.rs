//! Capability interfaces for the devices the capture flow touches.
//! The state machine only sees these traits, so it can be driven by fakes
//! in tests and by file-backed implementations from the CLI.

use crate::errors::{AppError, AppResult};
use crate::models::geo::GeoPoint;
use std::fs;
use std::path::PathBuf;

/// A camera that can be acquired, asked for one still frame, and released.
/// `release` must be idempotent: cancellation may call it at any time.
pub trait Camera {
    fn open(&mut self) -> AppResult<()>;
    fn capture_frame(&mut self) -> AppResult<Vec<u8>>;
    fn release(&mut self);
    fn is_open(&self) -> bool;
}

/// A one-shot location source. A failed fix degrades to "no location",
/// it never blocks a submission.
pub trait Locator {
    fn fix(&mut self) -> AppResult<GeoPoint>;
    /// Tear down any pending watch. Idempotent.
    fn release(&mut self);
}

/// CLI-side camera: the "stream" is a still image file on disk.
pub struct FileCamera {
    path: PathBuf,
    open: bool,
}

impl FileCamera {
    pub fn new(path: PathBuf) -> Self {
        Self { path, open: false }
    }
}

impl Camera for FileCamera {
    fn open(&mut self) -> AppResult<()> {
        if !self.path.is_file() {
            return Err(AppError::CameraDenied(format!(
                "no readable frame at {}",
                self.path.display()
            )));
        }
        self.open = true;
        Ok(())
    }

    fn capture_frame(&mut self) -> AppResult<Vec<u8>> {
        if !self.open {
            return Err(AppError::CameraDenied("camera not acquired".to_string()));
        }
        Ok(fs::read(&self.path)?)
    }

    fn release(&mut self) {
        self.open = false;
    }

    fn is_open(&self) -> bool {
        self.open
    }
}

/// CLI-side locator reporting the fixed coordinates from the config file,
/// if the user configured any.
pub struct FixedLocator {
    point: Option<GeoPoint>,
}

impl FixedLocator {
    pub fn new(point: Option<GeoPoint>) -> Self {
        Self { point }
    }
}

impl Locator for FixedLocator {
    fn fix(&mut self) -> AppResult<GeoPoint> {
        self.point
            .ok_or_else(|| AppError::LocationUnavailable("no coordinates configured".to_string()))
    }

    fn release(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_camera_denies_missing_file() {
        let mut cam = FileCamera::new(PathBuf::from("/definitely/not/here.jpg"));
        assert!(matches!(cam.open(), Err(AppError::CameraDenied(_))));
        assert!(!cam.is_open());
    }

    #[test]
    fn file_camera_refuses_capture_before_open() {
        let mut cam = FileCamera::new(PathBuf::from("/tmp/x.jpg"));
        assert!(cam.capture_frame().is_err());
    }

    #[test]
    fn fixed_locator_without_coordinates_fails_softly() {
        let mut loc = FixedLocator::new(None);
        assert!(matches!(
            loc.fix(),
            Err(AppError::LocationUnavailable(_))
        ));
    }

    #[test]
    fn fixed_locator_reports_configured_point() {
        let mut loc = FixedLocator::new(Some(GeoPoint::new(45.07, 7.69)));
        let p = loc.fix().unwrap();
        assert_eq!(p.latitude, 45.07);
    }
}
