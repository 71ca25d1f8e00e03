//! Database handle shared by a service's repository.

use crate::error::RepoResult;
use rusqlite::Connection;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Thread-safe database connection pool.
pub type DbPool = Arc<Mutex<Connection>>;

/// Open (or create) the SQLite database at `path`.
///
/// Parent directories are created as needed. `:memory:` opens a private
/// in-memory database.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the database
/// cannot be opened.
pub fn open<P: AsRef<Path>>(path: P) -> RepoResult<DbPool> {
    let path = path.as_ref();

    if path != Path::new(":memory:") {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
    }

    let conn = Connection::open(path)?;
    Ok(Arc::new(Mutex::new(conn)))
}

/// Open a fresh in-memory database.
pub fn open_in_memory() -> RepoResult<DbPool> {
    Ok(Arc::new(Mutex::new(Connection::open_in_memory()?)))
}
