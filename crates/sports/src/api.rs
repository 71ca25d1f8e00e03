//! Sports API handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use feed_core::RepoError;

use crate::models::{Event, GetEventRequest, ListEventsRequest, ListEventsResponse};
use crate::AppState;

/// Health check endpoint.
pub async fn health() -> &'static str {
    "ok"
}

/// List events with optional filtering.
///
/// # Endpoint
///
/// `POST /v1/list-events`
///
/// # Response
///
/// - `200 OK`: `{"events": [...]}`
/// - `500 Internal Server Error`: Database error
pub async fn list_events(
    State(state): State<AppState>,
    Json(request): Json<ListEventsRequest>,
) -> Result<Json<ListEventsResponse>, StatusCode> {
    state
        .sports
        .list_events(request)
        .map(Json)
        .map_err(|e| error_status("list events", e))
}

/// Get a single event.
///
/// # Endpoint
///
/// `GET /v1/events/:id`
///
/// # Response
///
/// - `200 OK`: JSON event object
/// - `400 Bad Request`: ID is zero or negative
/// - `404 Not Found`: Event with given ID doesn't exist
/// - `500 Internal Server Error`: Database error
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Event>, StatusCode> {
    state
        .sports
        .get_event(GetEventRequest { id })
        .map(Json)
        .map_err(|e| error_status("get event", e))
}

fn error_status(operation: &str, err: RepoError) -> StatusCode {
    let status = err.status_code();
    if status.is_server_error() {
        tracing::error!(error = %err, "Failed to {operation}");
    } else {
        tracing::debug!(error = %err, "Rejected {operation}");
    }
    status
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::SqliteSportsRepo;
    use crate::service::SportsService;
    use feed_core::db::open_in_memory;
    use std::sync::Arc;

    fn test_state(seed_rows: u32) -> AppState {
        let repo = SqliteSportsRepo::new(open_in_memory().unwrap(), seed_rows);
        AppState::new(Arc::new(SportsService::new(Arc::new(repo))))
    }

    #[tokio::test]
    async fn test_list_events() {
        let Json(response) = list_events(State(test_state(7)), Json(ListEventsRequest::default()))
            .await
            .unwrap();
        assert_eq!(response.events.len(), 7);
    }

    #[tokio::test]
    async fn test_get_event() {
        let Json(event) = get_event(State(test_state(7)), Path(7)).await.unwrap();
        assert_eq!(event.id, 7);
    }

    #[tokio::test]
    async fn test_get_event_errors() {
        let state = test_state(1);
        assert_eq!(
            get_event(State(state.clone()), Path(2)).await.unwrap_err(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_event(State(state), Path(-5)).await.unwrap_err(),
            StatusCode::BAD_REQUEST
        );
    }
}
