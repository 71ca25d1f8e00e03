//! Sports Service
//!
//! Read-only listing of sporting events over a seeded SQLite table:
//! - `POST /v1/list-events`: list events, optionally filtered and sorted
//! - `GET /v1/events/:id`: fetch one event
//!
//! Every event carries a status derived at read time from its advertised
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
use service::Sports;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Default listen address.
pub const DEFAULT_LISTEN: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::new(127, 0, 0, 1), 9001));

/// Default database file.
pub const DEFAULT_DATABASE: &str = "data/sports.db";

/// Built-in configuration before any file or flag is applied.
pub fn default_config() -> ServiceConfig {
    ServiceConfig::new(DEFAULT_LISTEN, DEFAULT_DATABASE)
}

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub sports: Arc<dyn Sports>,
}

impl AppState {
    pub fn new(sports: Arc<dyn Sports>) -> Self {
        Self { sports }
    }
}

/// Build the HTTP router for the sports API.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(api::health))
        .route("/v1/list-events", post(api::list_events))
        .route("/v1/events/:id", get(api::get_event))
        .with_state(state)
        .layer(middleware::from_fn(timing_layer))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
