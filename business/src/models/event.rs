use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A scheduled wedding event (ceremony, rehearsal dinner, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub venue: Option<String>,
    pub starts_at: DateTime<Utc>,
    /// Expected headcount, maintained by the backend from RSVPs.
    #[serde(default)]
    pub guest_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListEventsResponse {
    pub events: Vec<Event>,
}
