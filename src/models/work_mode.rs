use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WorkMode {
    Office, // O
    Hybrid, // H
    Remote, // R
}

impl WorkMode {
    pub fn code(&self) -> &str {
        match self {
            WorkMode::Office => "O",
            WorkMode::Hybrid => "H",
            WorkMode::Remote => "R",
        }
    }

    /// Convert enum → API string
    pub fn to_api_str(&self) -> &'static str {
        match self {
            WorkMode::Office => "office",
            WorkMode::Hybrid => "hybrid",
            WorkMode::Remote => "remote",
        }
    }

    /// Convert API string → enum. Records without a work mode default to
    /// Office, but that fallback belongs to the caller, not the codec.
    pub fn from_api_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "office" => Some(WorkMode::Office),
            "hybrid" => Some(WorkMode::Hybrid),
            "remote" => Some(WorkMode::Remote),
            _ => None,
        }
    }

    /// Helper: convert input code from CLI (lowercase or uppercase)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "O" => Some(WorkMode::Office),
            "H" => Some(WorkMode::Hybrid),
            "R" => Some(WorkMode::Remote),
            other => Self::from_api_str(other),
        }
    }
}
