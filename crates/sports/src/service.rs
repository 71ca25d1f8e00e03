//! Sports service: forwards requests to the sports repository.

use crate::models::{Event, GetEventRequest, ListEventsRequest, ListEventsResponse};
use crate::repo::SportsRepo;
use feed_core::RepoResult;
use std::sync::Arc;

pub trait Sports: Send + Sync {
    /// Return a collection of events.
    fn list_events(&self, request: ListEventsRequest) -> RepoResult<ListEventsResponse>;

    /// Return a single event based on the given ID.
    fn get_event(&self, request: GetEventRequest) -> RepoResult<Event>;
}

pub struct SportsService {
    sports_repo: Arc<dyn SportsRepo>,
}

impl SportsService {
    pub fn new(sports_repo: Arc<dyn SportsRepo>) -> Self {
        Self { sports_repo }
    }
}

impl Sports for SportsService {
    fn list_events(&self, request: ListEventsRequest) -> RepoResult<ListEventsResponse> {
        let events = self.sports_repo.list(request.filter.as_ref())?;
        Ok(ListEventsResponse { events })
    }

    fn get_event(&self, request: GetEventRequest) -> RepoResult<Event> {
        self.sports_repo.get(&request)
    }
}
