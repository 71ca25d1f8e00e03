//! Racing Service
//!
//! Read-only listing of races over a seeded SQLite table:
//! - `POST /v1/list-races`: list races, optionally filtered and sorted
//! - `GET /v1/races/:id`: fetch one race
//!
//! Every race carries a status derived at read time from its advertised
//! start time.

pub mod api;
pub mod db;
pub mod models;
pub mod repo;
pub mod service;

use axum::routing::{get, post};
use axum::{middleware, Router};
use feed_core::middleware::timing_layer;
use feed_core::ServiceConfig;
use service::Racing;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Default listen address.
pub const DEFAULT_LISTEN: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::new(127, 0, 0, 1), 9000));

/// Default database file.
pub const DEFAULT_DATABASE: &str = "data/racing.db";

/// Built-in configuration before any file or flag is applied.
pub fn default_config() -> ServiceConfig {
    ServiceConfig::new(DEFAULT_LISTEN, DEFAULT_DATABASE)
}

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub racing: Arc<dyn Racing>,
}

impl AppState {
    pub fn new(racing: Arc<dyn Racing>) -> Self {
        Self { racing }
    }
}

/// Build the HTTP router for the racing API.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(api::health))
        .route("/v1/list-races", post(api::list_races))
        .route("/v1/races/:id", get(api::get_race))
        .with_state(state)
        .layer(middleware::from_fn(timing_layer))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = default_config();
        assert_eq!(config.listen.to_string(), "127.0.0.1:9000");
        assert_eq!(config.database.to_str(), Some("data/racing.db"));
        assert_eq!(config.seed_rows, 100);
    }
}
