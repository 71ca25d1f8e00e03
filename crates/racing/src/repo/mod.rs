//! Repository modules for database operations.

pub mod races;

pub use races::{apply_filter, scan_races, SqliteRacesRepo};

use crate::models::{GetRaceRequest, ListRacesRequestFilter, Race};
use feed_core::RepoResult;

/// Provides repository access to races.
pub trait RacesRepo: Send + Sync {
    /// Seed the races table with dummy data, once.
    fn init(&self) -> RepoResult<()>;

    /// Return the races matching `filter` (all races for `None`).
    fn list(&self, filter: Option<&ListRacesRequestFilter>) -> RepoResult<Vec<Race>>;

    /// Return the single race with the requested ID.
    fn get(&self, request: &GetRaceRequest) -> RepoResult<Race>;
}
