//! Repository modules for database operations.

pub mod events;

pub use events::{apply_filter, scan_events, SqliteSportsRepo};

use crate::models::{Event, GetEventRequest, ListEventsRequestFilter};
use feed_core::RepoResult;

/// Provides repository access to sporting events.
pub trait SportsRepo: Send + Sync {
    /// Seed the sports table with dummy data, once.
    fn init(&self) -> RepoResult<()>;

    /// Return the events matching `filter` (all events for `None`).
    fn list(&self, filter: Option<&ListEventsRequestFilter>) -> RepoResult<Vec<Event>>;

    /// Return the single event with the requested ID.
    fn get(&self, request: &GetEventRequest) -> RepoResult<Event>;
}
