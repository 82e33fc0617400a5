//! Database module for the tournament record store.

use crate::error::StoreResult;
use rusqlite::Connection;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Thread-safe database connection handle shared by the repositories.
pub type DbPool = Arc<Mutex<Connection>>;

/// Initialize the database with the tournament schema.
///
/// Creates all tables used by the record store:
/// - `tournaments`: one row per tournament, with its declared capacity
/// - `players`: global player identities (names need not be unique)
/// - `enrollments`: per-(tournament, player) win/match tallies
/// - `matches`: immutable reported match outcomes
///
/// # Arguments
///
/// * `path` - Path to the SQLite database file (use `:memory:` for in-memory)
///
/// # Errors
///
/// Returns an error if the database cannot be opened or schema creation fails.
pub fn init_db<P: AsRef<Path>>(path: P) -> StoreResult<DbPool> {
    let conn = Connection::open(path)?;

    conn.execute_batch(
        "
        PRAGMA foreign_keys = ON;

        CREATE TABLE IF NOT EXISTS tournaments (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            player_capacity INTEGER NOT NULL,
            created_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS players (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            created_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS enrollments (
            tournament_id INTEGER NOT NULL REFERENCES tournaments(id),
            player_id INTEGER NOT NULL REFERENCES players(id),
            wins INTEGER NOT NULL DEFAULT 0,
            matches_played INTEGER NOT NULL DEFAULT 0,
            PRIMARY KEY (tournament_id, player_id)
        );

        CREATE TABLE IF NOT EXISTS matches (
            id TEXT PRIMARY KEY,
            tournament_id INTEGER NOT NULL REFERENCES tournaments(id),
            player_a INTEGER NOT NULL REFERENCES players(id),
            player_b INTEGER NOT NULL REFERENCES players(id),
            winner INTEGER NOT NULL REFERENCES players(id),
            played_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_enrollments_tournament ON enrollments(tournament_id);
        CREATE INDEX IF NOT EXISTS idx_matches_tournament ON matches(tournament_id);
        ",
    )?;

    Ok(Arc::new(Mutex::new(conn)))
}
