pub mod device;
pub mod image;
pub mod session;

pub use device::{Camera, FileCamera, FixedLocator, Locator};
pub use session::{CaptureSession, FailureKind, SessionState};
