//! Sports table schema and demo data.

use chrono::Utc;
use feed_core::seed::{format_timestamp, start_time_between, team_name};
use rand::seq::SliceRandom;
use rand::Rng;
use rusqlite::{params, Connection, Result as SqliteResult};

/// Schema for the `sports` table.
pub const CREATE_SPORTS: &str = "CREATE TABLE IF NOT EXISTS sports (
    id INTEGER PRIMARY KEY,
    event_id INTEGER,
    sports_type TEXT,
    name TEXT,
    number INTEGER,
    advertised_start_time DATETIME
)";

/// Sports the demo data is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SportType {
    Football,
    Basketball,
    Tennis,
    Soccer,
    Cricket,
    Dota,
    CounterStrike,
    Boxing,
}

impl SportType {
    pub const ALL: [SportType; 8] = [
        Self::Football,
        Self::Basketball,
        Self::Tennis,
        Self::Soccer,
        Self::Cricket,
        Self::Dota,
        Self::CounterStrike,
        Self::Boxing,
    ];

    /// Name as stored in `sports_type`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Football => "Football",
            Self::Basketball => "Basketball",
            Self::Tennis => "Tennis",
            Self::Soccer => "Soccer",
            Self::Cricket => "Cricket",
            Self::Dota => "DOTA",
            Self::CounterStrike => "Counter Strike 2",
            Self::Boxing => "Boxing",
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        *Self::ALL.choose(rng).unwrap_or(&Self::Football)
    }
}

/// Create the `sports` table and fill ids `1..=rows` with random events.
///
/// Existing ids are left untouched.
///
/// # Errors
///
/// Returns an error if the table cannot be created or an insert fails.
pub fn seed(conn: &Connection, rows: u32) -> SqliteResult<()> {
    conn.execute_batch(CREATE_SPORTS)?;

    let tx = conn.unchecked_transaction()?;
    {
        let mut stmt = tx.prepare(
            "INSERT OR IGNORE INTO sports (id, event_id, sports_type, name, number, advertised_start_time)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )?;

        let mut rng = rand::thread_rng();
        let now = Utc::now();

        for id in 1..=rows {
            stmt.execute(params![
                id,
                rng.gen_range(1..=10_i64),
                SportType::random(&mut rng).as_str(),
                team_name(&mut rng),
                rng.gen_range(1..=10_i64),
                format_timestamp(start_time_between(&mut rng, now)),
            ])?;
        }
    }
    tx.commit()
}
