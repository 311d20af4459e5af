use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum EventKind {
    CheckIn,
    CheckOut,
}

impl EventKind {
    /// Convert enum → API string
    pub fn to_api_str(&self) -> &'static str {
        match self {
            EventKind::CheckIn => "check-in",
            EventKind::CheckOut => "check-out",
        }
    }

    /// Convert API string → enum. The remote store also carries legacy
    /// records written as "checkin"/"checkout" without the dash.
    pub fn from_api_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "check-in" | "checkin" | "in" => Some(EventKind::CheckIn),
            "check-out" | "checkout" | "out" => Some(EventKind::CheckOut),
            _ => None,
        }
    }

    pub fn is_check_in(&self) -> bool {
        matches!(self, EventKind::CheckIn)
    }

    pub fn is_check_out(&self) -> bool {
        matches!(self, EventKind::CheckOut)
    }
}
