//! Racing API handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use feed_core::RepoError;

use crate::models::{GetRaceRequest, ListRacesRequest, ListRacesResponse, Race};
use crate::AppState;

/// Health check endpoint.
pub async fn health() -> &'static str {
    "ok"
}

/// List races with optional filtering.
///
/// # Endpoint
///
/// `POST /v1/list-races`
///
/// # Body
///
/// `{"filter": {"meeting_ids": [..], "sort_by": "number", "order_by": 1}}`,
/// every field optional.
///
/// # Response
///
/// - `200 OK`: `{"races": [...]}`
/// - `500 Internal Server Error`: Database error
pub async fn list_races(
    State(state): State<AppState>,
    Json(request): Json<ListRacesRequest>,
) -> Result<Json<ListRacesResponse>, StatusCode> {
    state
        .racing
        .list_races(request)
        .map(Json)
        .map_err(|e| error_status("list races", e))
}

/// Get a single race.
///
/// # Endpoint
///
/// `GET /v1/races/:id`
///
/// # Response
///
/// - `200 OK`: JSON race object
/// - `400 Bad Request`: ID is zero or negative
/// - `404 Not Found`: Race with given ID doesn't exist
/// - `500 Internal Server Error`: Database error
pub async fn get_race(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Race>, StatusCode> {
    state
        .racing
        .get_race(GetRaceRequest { id })
        .map(Json)
        .map_err(|e| error_status("get race", e))
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
    use crate::models::ListRacesRequestFilter;
    use crate::repo::{RacesRepo, SqliteRacesRepo};
    use crate::service::RacingService;
    use chrono::{Duration, Utc};
    use feed_core::db::open_in_memory;
    use feed_core::seed::format_timestamp;
    use feed_core::{DbPool, EventStatus, SortOrder};
    use std::sync::Arc;

    fn test_state() -> (DbPool, AppState) {
        let db = open_in_memory().expect("Failed to open test db");
        let repo = SqliteRacesRepo::new(db.clone(), 0);
        repo.init().unwrap();
        let state = AppState::new(Arc::new(RacingService::new(Arc::new(repo))));
        (db, state)
    }

    fn insert_race(db: &DbPool, id: i64, meeting_id: i64, number: i64, hours_from_now: i64) {
        let conn = db.lock().unwrap();
        conn.execute(
            "INSERT INTO races (id, meeting_id, name, number, visible, advertised_start_time)
             VALUES (?1, ?2, 'Cairns Kings', ?3, 1, ?4)",
            rusqlite::params![
                id,
                meeting_id,
                number,
                format_timestamp(Utc::now() + Duration::hours(hours_from_now))
            ],
        )
        .unwrap();
    }

    #[tokio::test]
    async fn test_health_returns_ok() {
        assert_eq!(health().await, "ok");
    }

    #[tokio::test]
    async fn test_list_races_empty() {
        let (_db, state) = test_state();
        let result = list_races(State(state), Json(ListRacesRequest::default())).await;
        let Json(response) = result.unwrap();
        assert!(response.races.is_empty());
    }

    #[tokio::test]
    async fn test_list_races_with_filter() {
        let (db, state) = test_state();
        insert_race(&db, 1, 1, 3, 1);
        insert_race(&db, 2, 2, 7, 1);
        insert_race(&db, 3, 2, 5, -1);

        let request = ListRacesRequest {
            filter: Some(ListRacesRequestFilter {
                meeting_ids: vec![2],
                sort_by: "number".to_string(),
                order_by: SortOrder::Desc,
            }),
        };
        let Json(response) = list_races(State(state), Json(request)).await.unwrap();

        assert_eq!(response.races.len(), 2);
        assert_eq!(response.races[0].id, 2);
        assert_eq!(response.races[0].status, EventStatus::Open);
        assert_eq!(response.races[1].id, 3);
        assert_eq!(response.races[1].status, EventStatus::Closed);
    }

    #[tokio::test]
    async fn test_get_race_found() {
        let (db, state) = test_state();
        insert_race(&db, 8, 4, 2, -2);

        let Json(race) = get_race(State(state), Path(8)).await.unwrap();
        assert_eq!(race.id, 8);
        assert_eq!(race.meeting_id, 4);
        assert_eq!(race.status, EventStatus::Closed);
    }

    #[tokio::test]
    async fn test_get_race_not_found() {
        let (_db, state) = test_state();
        let result = get_race(State(state), Path(404)).await;
        assert_eq!(result.unwrap_err(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_get_race_rejects_non_positive_id() {
        let (_db, state) = test_state();
        let result = get_race(State(state), Path(0)).await;
        assert_eq!(result.unwrap_err(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_database_error_is_500() {
        let (db, state) = test_state();
        db.lock()
            .unwrap()
            .execute_batch("DROP TABLE races")
            .unwrap();

        let result = list_races(State(state), Json(ListRacesRequest::default())).await;
        assert_eq!(result.unwrap_err(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
