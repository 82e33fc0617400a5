//! Tournament repository for record store operations.

use crate::db::DbPool;
use crate::error::StoreResult;
use crate::models::Tournament;
use rusqlite::OptionalExtension;
use swiss_core::Standing;

/// Repository for tournament operations and standings reads.
pub struct TournamentRepo {
    db: DbPool,
}

impl TournamentRepo {
    /// Create a new tournament repository with the given database pool.
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    /// Create a tournament with the declared player capacity.
    ///
    /// Returns the id assigned to the new tournament.
    pub fn create(&self, player_capacity: i64) -> StoreResult<i64> {
        let conn = self.db.lock().unwrap();
        let now = chrono::Utc::now().to_rfc3339();
        conn.execute(
            "INSERT INTO tournaments (player_capacity, created_at) VALUES (?1, ?2)",
            (player_capacity, &now),
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Get a tournament by id.
    ///
    /// Returns `None` if the tournament doesn't exist.
    pub fn get(&self, id: i64) -> StoreResult<Option<Tournament>> {
        let conn = self.db.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT id, player_capacity, created_at FROM tournaments WHERE id = ?1",
        )?;
        let tournament = stmt
            .query_row([id], |row| {
                Ok(Tournament {
                    id: row.get(0)?,
                    player_capacity: row.get(1)?,
                    created_at: row.get(2)?,
                })
            })
            .optional()?;
        Ok(tournament)
    }

    /// Delete a tournament along with its matches and enrollments.
    ///
    /// Player rows are left untouched: a player is a global identity and may
    /// be enrolled in other tournaments.
    pub fn delete(&self, id: i64) -> StoreResult<()> {
        let conn = self.db.lock().unwrap();
        conn.execute_batch("BEGIN IMMEDIATE;")?;

        let result: StoreResult<()> = (|| {
            conn.execute("DELETE FROM matches WHERE tournament_id = ?1", [id])?;
            conn.execute("DELETE FROM enrollments WHERE tournament_id = ?1", [id])?;
            conn.execute("DELETE FROM tournaments WHERE id = ?1", [id])?;
            Ok(())
        })();

        match result {
            Ok(()) => {
                conn.execute_batch("COMMIT;")?;
                Ok(())
            }
            Err(e) => {
                let _ = conn.execute_batch("ROLLBACK;");
                Err(e)
            }
        }
    }

    /// Display standings for a tournament: one row per enrolled player,
    /// ordered by wins descending.
    ///
    /// Ties carry no documented secondary order; callers must not rely on
    /// the relative position of equal-win players.
    pub fn standings(&self, id: i64) -> StoreResult<Vec<Standing>> {
        self.ranked(id, "e.wins DESC")
    }

    /// Ranking used to generate next-round pairs: matches played ascending,
    /// then wins descending.
    ///
    /// This is the order [`swiss_core::compute_pairings`] expects its input
    /// in; players behind on rounds come first so they catch up.
    pub fn pairing_ranking(&self, id: i64) -> StoreResult<Vec<Standing>> {
        self.ranked(id, "e.matches_played ASC, e.wins DESC")
    }

    fn ranked(&self, id: i64, order_by: &str) -> StoreResult<Vec<Standing>> {
        let conn = self.db.lock().unwrap();
        let mut stmt = conn.prepare(&format!(
            "SELECT p.id, p.name, e.wins, e.matches_played
             FROM enrollments e
             JOIN players p ON p.id = e.player_id
             WHERE e.tournament_id = ?1
             ORDER BY {order_by}"
        ))?;

        let standings = stmt
            .query_map([id], |row| {
                Ok(Standing {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    wins: row.get(2)?,
                    matches_played: row.get(3)?,
                })
            })?
            .filter_map(|r| r.ok())
            .collect();

        Ok(standings)
    }
}
