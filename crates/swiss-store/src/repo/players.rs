//! Player repository for record store operations.

use crate::db::DbPool;
use crate::error::StoreResult;
use crate::models::Player;
use rusqlite::OptionalExtension;

/// Repository for player registration and enrollment bookkeeping.
pub struct PlayerRepo {
    db: DbPool,
}

impl PlayerRepo {
    /// Create a new player repository with the given database pool.
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    /// Register a player into a tournament.
    ///
    /// Inserts the player row and the enrollment row (tallies at zero) in
    /// one transaction, so a player never exists half-registered. Duplicate
    /// names are allowed; the store assigns the unique id.
    ///
    /// Returns the id assigned to the new player.
    pub fn register(&self, name: &str, tournament_id: i64) -> StoreResult<i64> {
        let conn = self.db.lock().unwrap();
        conn.execute_batch("BEGIN IMMEDIATE;")?;

        let result: StoreResult<i64> = (|| {
            let now = chrono::Utc::now().to_rfc3339();
            conn.execute(
                "INSERT INTO players (name, created_at) VALUES (?1, ?2)",
                (name, &now),
            )?;
            let player_id = conn.last_insert_rowid();
            conn.execute(
                "INSERT INTO enrollments (tournament_id, player_id) VALUES (?1, ?2)",
                (tournament_id, player_id),
            )?;
            Ok(player_id)
        })();

        match result {
            Ok(id) => {
                conn.execute_batch("COMMIT;")?;
                Ok(id)
            }
            Err(e) => {
                let _ = conn.execute_batch("ROLLBACK;");
                Err(e)
            }
        }
    }

    /// Get a player by id.
    ///
    /// Returns `None` if the player doesn't exist.
    pub fn get(&self, id: i64) -> StoreResult<Option<Player>> {
        let conn = self.db.lock().unwrap();
        let mut stmt =
            conn.prepare("SELECT id, name, created_at FROM players WHERE id = ?1")?;
        let player = stmt
            .query_row([id], |row| {
                Ok(Player {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    created_at: row.get(2)?,
                })
            })
            .optional()?;
        Ok(player)
    }

    /// Count the players enrolled in a tournament.
    pub fn count(&self, tournament_id: i64) -> StoreResult<i64> {
        let conn = self.db.lock().unwrap();
        let count = conn.query_row(
            "SELECT COUNT(*) FROM enrollments WHERE tournament_id = ?1",
            [tournament_id],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    /// Remove every enrollment for a tournament.
    ///
    /// Player rows stay in place; a player is a global identity and may be
    /// enrolled elsewhere.
    pub fn clear(&self, tournament_id: i64) -> StoreResult<()> {
        let conn = self.db.lock().unwrap();
        conn.execute(
            "DELETE FROM enrollments WHERE tournament_id = ?1",
            [tournament_id],
        )?;
        Ok(())
    }
}
