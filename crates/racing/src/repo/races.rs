//! SQLite-backed race repository.

use crate::db;
use crate::models::{GetRaceRequest, ListRacesRequestFilter, Race};
use crate::repo::RacesRepo;
use chrono::Utc;
use feed_core::seed::parse_timestamp;
use feed_core::{DbPool, EventStatus, ListQuery, RepoError, RepoResult};
use rusqlite::{params_from_iter, Rows};
use std::sync::atomic::{AtomicBool, Ordering};

/// Base query shared by list and get.
pub const RACES_LIST: &str = "
    SELECT
        id,
        meeting_id,
        name,
        number,
        visible,
        advertised_start_time
    FROM races
";

/// Columns a list request may sort by.
pub const SORTABLE_FIELDS: &[&str] = &[
    "advertised_start_time",
    "number",
    "meeting_id",
    "name",
    "visible",
];

/// Repository for race database operations.
pub struct SqliteRacesRepo {
    db: DbPool,
    seed_rows: u32,
    seeded: AtomicBool,
}

impl SqliteRacesRepo {
    /// Create a repository over `db` that seeds `seed_rows` races on first use.
    pub fn new(db: DbPool, seed_rows: u32) -> Self {
        Self {
            db,
            seed_rows,
            seeded: AtomicBool::new(false),
        }
    }

    fn query(&self, sql: &str, args: Vec<i64>) -> RepoResult<Vec<Race>> {
        self.init()?;

        let conn = self.db.lock()?;
        let mut stmt = conn.prepare(sql)?;
        let rows = stmt.query(params_from_iter(args))?;
        let races = scan_races(rows)?;
        Ok(races)
    }
}

impl RacesRepo for SqliteRacesRepo {
    fn init(&self) -> RepoResult<()> {
        if self.seeded.load(Ordering::Acquire) {
            return Ok(());
        }

        // Seeding holds the connection, so concurrent callers wait here and
        // then observe the flag.
        let conn = self.db.lock()?;
        if !self.seeded.load(Ordering::Acquire) {
            db::seed(&conn, self.seed_rows)?;
            self.seeded.store(true, Ordering::Release);
            tracing::info!(rows = self.seed_rows, "Seeded races table");
        }
        Ok(())
    }

    fn list(&self, filter: Option<&ListRacesRequestFilter>) -> RepoResult<Vec<Race>> {
        let (sql, args) = apply_filter(RACES_LIST, filter);
        tracing::debug!(sql = %sql, args = ?args, "Listing races");
        self.query(&sql, args)
    }

    fn get(&self, request: &GetRaceRequest) -> RepoResult<Race> {
        if request.id <= 0 {
            return Err(RepoError::MissingId);
        }

        let (base, _) = ListQuery::new(RACES_LIST).build();
        let sql = format!("{base} WHERE id = ?");

        self.query(&sql, vec![request.id])?
            .into_iter()
            .next()
            .ok_or(RepoError::NotFound(request.id))
    }
}

/// Append the meeting and sort clauses from `filter` onto `query`.
///
/// Returns the final SQL and the meeting IDs to bind, in placeholder order.
pub fn apply_filter(query: &str, filter: Option<&ListRacesRequestFilter>) -> (String, Vec<i64>) {
    let list = ListQuery::new(query);

    let Some(filter) = filter else {
        return list.build();
    };

    list.with_ids("meeting_id", &filter.meeting_ids)
        .with_sort(&filter.sort_by, SORTABLE_FIELDS, filter.order_by)
        .build()
}

/// Read every row into a [`Race`], deriving its status against the current
/// time.
///
/// Expects the column order of [`RACES_LIST`].
pub fn scan_races(mut rows: Rows<'_>) -> RepoResult<Vec<Race>> {
    let now = Utc::now();
    let mut races = Vec::new();

    while let Some(row) = rows.next()? {
        let id: i64 = row.get(0)?;
        let raw_start: String = row.get(5)?;
        let advertised_start_time = match parse_timestamp(&raw_start) {
            Some(ts) => ts,
            None => {
                return Err(RepoError::InvalidTimestamp {
                    id,
                    value: raw_start,
                })
            }
        };

        races.push(Race {
            id,
            meeting_id: row.get(1)?,
            name: row.get(2)?,
            number: row.get(3)?,
            visible: row.get(4)?,
            advertised_start_time,
            status: EventStatus::at(advertised_start_time, now),
        });
    }

    Ok(races)
}
