//! SQLite-backed sports event repository.

use crate::db;
use crate::models::{Event, GetEventRequest, ListEventsRequestFilter};
use crate::repo::SportsRepo;
use chrono::Utc;
use feed_core::seed::parse_timestamp;
use feed_core::{DbPool, EventStatus, ListQuery, RepoError, RepoResult};
use rusqlite::{params_from_iter, Rows};
use std::sync::atomic::{AtomicBool, Ordering};

pub const SPORTS_LIST: &str = "
    SELECT
        id,
        event_id,
        sports_type,
        name,
        number,
        advertised_start_time
    FROM sports
";

/// Columns a list request may sort by.
pub const SORTABLE_FIELDS: &[&str] = &[
    "advertised_start_time",
    "number",
    "event_id",
    "name",
    "sports_type",
];

/// Repository for sports event database operations.
pub struct SqliteSportsRepo {
    db: DbPool,
    seed_rows: u32,
    seeded: AtomicBool,
}

impl SqliteSportsRepo {
    pub fn new(db: DbPool, seed_rows: u32) -> Self {
        Self {
            db,
            seed_rows,
            seeded: AtomicBool::new(false),
        }
    }

    fn query(&self, sql: &str, args: Vec<i64>) -> RepoResult<Vec<Event>> {
        self.init()?;

        let conn = self.db.lock()?;
        let mut stmt = conn.prepare(sql)?;
        let rows = stmt.query(params_from_iter(args))?;
        let events = scan_events(rows)?;
        Ok(events)
    }
}

impl SportsRepo for SqliteSportsRepo {
    fn init(&self) -> RepoResult<()> {
        if self.seeded.load(Ordering::Acquire) {
            return Ok(());
        }

        let conn = self.db.lock()?;
        if !self.seeded.load(Ordering::Acquire) {
            db::seed(&conn, self.seed_rows)?;
            self.seeded.store(true, Ordering::Release);
            tracing::info!(rows = self.seed_rows, "Seeded sports table");
        }
        Ok(())
    }

    fn list(&self, filter: Option<&ListEventsRequestFilter>) -> RepoResult<Vec<Event>> {
        let (sql, args) = apply_filter(SPORTS_LIST, filter);
        tracing::debug!(sql = %sql, args = ?args, "Listing events");
        self.query(&sql, args)
    }

    fn get(&self, request: &GetEventRequest) -> RepoResult<Event> {
        if request.id <= 0 {
            return Err(RepoError::MissingId);
        }

        let (base, _) = ListQuery::new(SPORTS_LIST).build();
        let sql = format!("{base} WHERE id = ?");

        // ids are primary keys, so at most one row comes back
        self.query(&sql, vec![request.id])?
            .into_iter()
            .next()
            .ok_or(RepoError::NotFound(request.id))
    }
}

/// Append the event-id and sort clauses from `filter` onto `query`.
pub fn apply_filter(query: &str, filter: Option<&ListEventsRequestFilter>) -> (String, Vec<i64>) {
    let list = ListQuery::new(query);

    let Some(filter) = filter else {
        return list.build();
    };

    list.with_ids("event_id", &filter.event_ids)
        .with_sort(&filter.sort_by, SORTABLE_FIELDS, filter.order_by)
        .build()
}

/// Read every row into an [`Event`] in [`SPORTS_LIST`] column order.
pub fn scan_events(mut rows: Rows<'_>) -> RepoResult<Vec<Event>> {
    let now = Utc::now();
    let mut events = Vec::new();

    while let Some(row) = rows.next()? {
        let id: i64 = row.get(0)?;
        let raw_start: String = row.get(5)?;
        let Some(advertised_start_time) = parse_timestamp(&raw_start) else {
            return Err(RepoError::InvalidTimestamp {
                id,
                value: raw_start,
            });
        };

        events.push(Event {
            id,
            event_id: row.get(1)?,
            sports_type: row.get(2)?,
            name: row.get(3)?,
            number: row.get(4)?,
            advertised_start_time,
            status: EventStatus::at(advertised_start_time, now),
        });
    }

    Ok(events)
}
