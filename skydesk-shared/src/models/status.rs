use serde::{Deserialize, Serialize};
use std::fmt;

/// Payment status of a booking.
///
/// The backend sends free-form strings in any letter case. Everything that is
/// not one of the four known values is kept verbatim in `Unknown`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentStatus {
    Pending,
    Waiting,
    Confirmed,
    Cancelled,
    Unknown(String),
}

/// Aggregation bucket a status is counted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusBucket {
    Pending,
    Confirmed,
    Cancelled,
    /// Counted toward the total only.
    Uncounted,
}

/// Colour tone used when rendering a status chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusTone {
    Success,
    Warning,
    Error,
    Default,
}

impl PaymentStatus {
    pub fn parse(raw: &str) -> Self {
        match raw.to_lowercase().as_str() {
            "pending" => PaymentStatus::Pending,
            "waiting" => PaymentStatus::Waiting,
            "confirmed" => PaymentStatus::Confirmed,
            "cancelled" => PaymentStatus::Cancelled,
            _ => PaymentStatus::Unknown(raw.to_string()),
        }
    }

    /// `Waiting` folds into `Pending`.
    pub fn bucket(&self) -> StatusBucket {
        match self {
            PaymentStatus::Pending | PaymentStatus::Waiting => StatusBucket::Pending,
            PaymentStatus::Confirmed => StatusBucket::Confirmed,
            PaymentStatus::Cancelled => StatusBucket::Cancelled,
            PaymentStatus::Unknown(_) => StatusBucket::Uncounted,
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            PaymentStatus::Confirmed => StatusTone::Success,
            PaymentStatus::Pending | PaymentStatus::Waiting => StatusTone::Warning,
            PaymentStatus::Cancelled => StatusTone::Error,
            PaymentStatus::Unknown(_) => StatusTone::Default,
        }
    }

    /// Canonical lowercase name; `Unknown` gives back the label it was parsed from.
    pub fn as_str(&self) -> &str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Waiting => "waiting",
            PaymentStatus::Confirmed => "confirmed",
            PaymentStatus::Cancelled => "cancelled",
            PaymentStatus::Unknown(raw) => raw.as_str(),
        }
    }
}

impl From<String> for PaymentStatus {
    fn from(raw: String) -> Self {
        PaymentStatus::parse(&raw)
    }
}

impl From<PaymentStatus> for String {
    fn from(status: PaymentStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A payment status as the backend spelled it.
///
/// `status` drives counting and colouring; `raw` is what gets displayed,
/// searched and serialized, so `"Confirmed"` stays `"Confirmed"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct StatusLabel {
    raw: String,
    status: PaymentStatus,
}

impl StatusLabel {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let status = PaymentStatus::parse(&raw);
        Self { raw, status }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn status(&self) -> &PaymentStatus {
        &self.status
    }

    pub fn bucket(&self) -> StatusBucket {
        self.status.bucket()
    }

    pub fn tone(&self) -> StatusTone {
        self.status.tone()
    }
}

/// A missing status is an empty, uncounted label.
impl Default for StatusLabel {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl From<PaymentStatus> for StatusLabel {
    fn from(status: PaymentStatus) -> Self {
        Self { raw: status.as_str().to_string(), status }
    }
}

impl From<String> for StatusLabel {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<StatusLabel> for String {
    fn from(label: StatusLabel) -> Self {
        label.raw
    }
}

impl PartialEq<PaymentStatus> for StatusLabel {
    fn eq(&self, other: &PaymentStatus) -> bool {
        self.status == *other
    }
}

impl fmt::Display for StatusLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl fmt::Display for StatusTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StatusTone::Success => "success",
            StatusTone::Warning => "warning",
            StatusTone::Error => "error",
            StatusTone::Default => "default",
        };
        f.write_str(name)
    }
}
