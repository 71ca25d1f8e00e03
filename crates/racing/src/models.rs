//! Request and response types for the racing API.

use chrono::{DateTime, Utc};
use feed_core::{EventStatus, SortOrder};
use serde::{Deserialize, Serialize};

/// A single race.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Race {
    /// Unique race identifier.
    pub id: i64,
    /// Meeting (race day at a venue) this race belongs to.
    pub meeting_id: i64,
    /// Official race name.
    pub name: String,
    /// Race number within the meeting.
    pub number: i64,
    /// Whether the race is visible to punters.
    pub visible: bool,
    /// Advertised jump time.
    pub advertised_start_time: DateTime<Utc>,
    /// `OPEN` until the advertised start time passes, then `CLOSED`.
    pub status: EventStatus,
}

/// Optional narrowing and ordering for `ListRaces`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListRacesRequestFilter {
    /// Only races from these meetings. Empty means all meetings.
    pub meeting_ids: Vec<i64>,
    /// Column to sort by. Unknown columns are ignored.
    pub sort_by: String,
    /// Sort direction, ascending unless set.
    pub order_by: SortOrder,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListRacesRequest {
    #[serde(default)]
    pub filter: Option<ListRacesRequestFilter>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListRacesResponse {
    pub races: Vec<Race>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetRaceRequest {
    pub id: i64,
}
