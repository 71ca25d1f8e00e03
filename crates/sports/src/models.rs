//! Request and response types for the sports API.

use chrono::{DateTime, Utc};
use feed_core::{EventStatus, SortOrder};
use serde::{Deserialize, Serialize};

/// A single sporting event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    /// Competition or fixture group the event belongs to.
    pub event_id: i64,
    /// Sport name, e.g. "Cricket".
    pub sports_type: String,
    pub name: String,
    pub number: i64,
    pub advertised_start_time: DateTime<Utc>,
    /// `OPEN` until the advertised start time passes, then `CLOSED`.
    pub status: EventStatus,
}

/// Optional narrowing and ordering for `ListEvents`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListEventsRequestFilter {
    pub event_ids: Vec<i64>,
    pub sort_by: String,
    pub order_by: SortOrder,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListEventsRequest {
    #[serde(default)]
    pub filter: Option<ListEventsRequestFilter>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListEventsResponse {
    pub events: Vec<Event>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetEventRequest {
    pub id: i64,
}
