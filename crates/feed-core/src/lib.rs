//! Feed Core
//!
//! Shared plumbing for the racing and sports query services:
//! - SQLite connection handling
//! - List query construction from ID and sort filters
//! - Read-time `OPEN`/`CLOSED` status derivation
//! - Service configuration, seed data helpers and request timing

pub mod config;
pub mod db;
pub mod error;
pub mod filter;
pub mod middleware;
pub mod seed;
pub mod status;

pub use config::{ConfigError, ServiceConfig};
pub use db::DbPool;
pub use error::{RepoError, RepoResult};
pub use filter::{ListQuery, SortOrder};
pub use status::EventStatus;
