//! Races table schema and demo data.

use chrono::Utc;
use feed_core::seed::{format_timestamp, start_time_between, team_name};
use rand::Rng;
use rusqlite::{params, Connection, Result as SqliteResult};

/// Schema for the `races` table.
pub const CREATE_RACES: &str = "CREATE TABLE IF NOT EXISTS races (
    id INTEGER PRIMARY KEY,
    meeting_id INTEGER,
    name TEXT,
    number INTEGER,
    visible INTEGER,
    advertised_start_time DATETIME
)";

/// Create the `races` table and fill ids `1..=rows` with random races.
///
/// Existing ids are left untouched, so seeding a persistent database twice
/// is harmless.
///
/// # Errors
///
/// Returns an error if the table cannot be created or an insert fails.
pub fn seed(conn: &Connection, rows: u32) -> SqliteResult<()> {
    conn.execute_batch(CREATE_RACES)?;

    let tx = conn.unchecked_transaction()?;
    {
        let mut stmt = tx.prepare(
            "INSERT OR IGNORE INTO races (id, meeting_id, name, number, visible, advertised_start_time)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )?;

        let mut rng = rand::thread_rng();
        let now = Utc::now();

        for id in 1..=rows {
            stmt.execute(params![
                id,
                rng.gen_range(1..=10_i64),
                team_name(&mut rng),
                rng.gen_range(1..=12_i64),
                rng.gen_bool(0.5),
                format_timestamp(start_time_between(&mut rng, now)),
            ])?;
        }
    }
    tx.commit()
}
