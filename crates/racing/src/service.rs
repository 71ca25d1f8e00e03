//! Racing service: forwards requests to the races repository.

use crate::models::{GetRaceRequest, ListRacesRequest, ListRacesResponse, Race};
use crate::repo::RacesRepo;
use feed_core::RepoResult;
use std::sync::Arc;

pub trait Racing: Send + Sync {
    /// Return a collection of races.
    fn list_races(&self, request: ListRacesRequest) -> RepoResult<ListRacesResponse>;

    /// Return a single race based on the given ID.
    fn get_race(&self, request: GetRaceRequest) -> RepoResult<Race>;
}

/// [`Racing`] backed by a [`RacesRepo`].
pub struct RacingService {
    races_repo: Arc<dyn RacesRepo>,
}

impl RacingService {
    pub fn new(races_repo: Arc<dyn RacesRepo>) -> Self {
        Self { races_repo }
    }
}

impl Racing for RacingService {
    fn list_races(&self, request: ListRacesRequest) -> RepoResult<ListRacesResponse> {
        let races = self.races_repo.list(request.filter.as_ref())?;
        Ok(ListRacesResponse { races })
    }

    fn get_race(&self, request: GetRaceRequest) -> RepoResult<Race> {
        self.races_repo.get(&request)
    }
}
