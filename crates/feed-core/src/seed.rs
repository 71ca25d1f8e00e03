//! Random data for seeding demo tables.

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

const PLACES: &[&str] = &[
    "Adelaide", "Ballarat", "Bendigo", "Brisbane", "Cairns", "Canberra", "Darwin", "Geelong",
    "Hobart", "Launceston", "Melbourne", "Newcastle", "Perth", "Sydney", "Townsville",
    "Wollongong",
];

const MASCOTS: &[&str] = &[
    "Bandits", "Bears", "Comets", "Dragons", "Eagles", "Falcons", "Hawks", "Kings", "Lions",
    "Magpies", "Raiders", "Rangers", "Rovers", "Sharks", "Storm", "Titans",
];

/// Seeded rows start somewhere between a day ago and two days from now, so a
/// fresh table holds a mix of open and closed entries.
pub fn start_time_between<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> DateTime<Utc> {
    let earliest = now - Duration::days(1);
    let span = Duration::days(3).num_seconds();
    earliest + Duration::seconds(rng.gen_range(0..span))
}

/// RFC 3339 text as stored in the `advertised_start_time` column.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// A random "<Place> <Mascot>" name.
pub fn team_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    // both lists are non-empty constants
    let place = PLACES.choose(rng).copied().unwrap_or("Sydney");
    let mascot = MASCOTS.choose(rng).copied().unwrap_or("Storm");
    format!("{place} {mascot}")
}

/// Parse a stored timestamp.
///
/// Accepts RFC 3339 as written by [`format_timestamp`], plus the
/// `YYYY-MM-DD HH:MM:SS` form SQLite's own date functions produce (read as
/// UTC).
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|naive| naive.and_utc())
}
