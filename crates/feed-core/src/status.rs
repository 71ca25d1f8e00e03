//! Read-time status derivation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whether an event is still open for betting.
///
/// Never stored: computed from the advertised start time on every read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EventStatus {
    /// The advertised start time has not passed yet.
    Open,
    /// The advertised start time is in the past.
    Closed,
}

impl EventStatus {
    /// Status of an event starting at `start`, as seen at `now`.
    ///
    /// An event starting exactly at `now` is still open.
    pub fn at(start: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        if start < now {
            Self::Closed
        } else {
            Self::Open
        }
    }

    /// Status of an event starting at `start`, as seen right now.
    pub fn derive(start: DateTime<Utc>) -> Self {
        Self::at(start, Utc::now())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::Closed => "CLOSED",
        }
    }
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
