//! Unified application error type.
//! All modules (api, capture, core, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Device / permission
    // ---------------------------
    #[error("Camera unavailable or denied: {0}")]
    CameraDenied(String),

    #[error("Location unavailable: {0}")]
    LocationUnavailable(String),

    // ---------------------------
    // Remote API
    // ---------------------------
    #[error("Submission failed: {0}")]
    SubmissionFailed(String),

    #[error("Attendance API error: {0}")]
    Api(String),

    #[error("Malformed event record: {0}")]
    MalformedEvent(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid work mode code: {0}")]
    InvalidWorkMode(String),

    // ---------------------------
    // Capture flow
    // ---------------------------
    #[error("Invalid capture transition: {0}")]
    InvalidTransition(String),

    #[error("Attendance already completed for {0}")]
    AlreadyCompleted(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
