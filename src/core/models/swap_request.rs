use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Approval state of a swap request.
///
/// `Pending` is the initial state. `Approved` and `Denied` are terminal
/// only by convention: nothing prevents moving out of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestStatus {
    Pending,
    Approved,
    Denied,
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            RequestStatus::Pending => "PENDING",
            RequestStatus::Approved => "APPROVED",
            RequestStatus::Denied => "DENIED",
        };
        f.write_str(label)
    }
}

/// The status a reviewer can assign to an existing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Deny,
}

impl Decision {
    pub fn status(self) -> RequestStatus {
        match self {
            Decision::Approve => RequestStatus::Approved,
            Decision::Deny => RequestStatus::Denied,
        }
    }
}

/// One shift-swap request with its approval state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapRequest {
    pub id: String,
    pub from: String,
    pub to: String,
    pub with: String,
    pub reason: String,
    pub status: RequestStatus,
    #[serde(with = "millis_timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "millis_timestamp")]
    pub updated_at: DateTime<Utc>,
}

/// RFC 3339 in UTC with exactly three fractional digits,
/// e.g. `2026-01-10T09:30:12.000Z`.
mod millis_timestamp {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        ts: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        DateTime::<Utc>::deserialize(deserializer)
    }
}

/// Caller-supplied fields for a new request, before validation.
#[derive(Debug, Clone, Default)]
pub struct NewRequest {
    pub from: String,
    pub to: String,
    pub with: String,
    pub reason: String,
}

/// The persisted collection of requests, newest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestDocument {
    pub requests: Vec<SwapRequest>,
}

impl RequestDocument {
    pub fn find_mut(&mut self, id: &str) -> Option<&mut SwapRequest> {
        self.requests.iter_mut().find(|r| r.id == id)
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.requests.iter().any(|r| r.id == id)
    }
}
