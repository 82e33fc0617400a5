//! Match repository for record store operations.

use crate::db::DbPool;
use crate::error::{StoreError, StoreResult};
use crate::models::MatchRecord;
use uuid::Uuid;

/// Repository for match reporting and history reads.
pub struct MatchRepo {
    db: DbPool,
}

impl MatchRepo {
    /// Create a new match repository with the given database pool.
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    /// Record the outcome of a single match between two players.
    ///
    /// Appends one immutable match row, increments `matches_played` for both
    /// participants, and increments `wins` for the winner, all inside a
    /// single transaction. A concurrent standings read observes either the
    /// pre-report state or the post-report state, never a partial update.
    ///
    /// Returns the id assigned to the match record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotEnrolled`] and rolls back the whole report
    /// if either participant has no enrollment in the tournament.
    pub fn report(
        &self,
        winner_id: i64,
        loser_id: i64,
        tournament_id: i64,
    ) -> StoreResult<String> {
        let conn = self.db.lock().unwrap();
        conn.execute_batch("BEGIN IMMEDIATE;")?;

        let result: StoreResult<String> = (|| {
            let id = Uuid::new_v4().to_string();
            let now = chrono::Utc::now().to_rfc3339();
            conn.execute(
                "INSERT INTO matches (id, tournament_id, player_a, player_b, winner, played_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                (&id, tournament_id, winner_id, loser_id, winner_id, &now),
            )?;

            let updated = conn.execute(
                "UPDATE enrollments SET matches_played = matches_played + 1
                 WHERE tournament_id = ?1 AND player_id = ?2",
                (tournament_id, loser_id),
            )?;
            if updated == 0 {
                return Err(StoreError::NotEnrolled {
                    tournament_id,
                    player_id: loser_id,
                });
            }

            let updated = conn.execute(
                "UPDATE enrollments SET matches_played = matches_played + 1, wins = wins + 1
                 WHERE tournament_id = ?1 AND player_id = ?2",
                (tournament_id, winner_id),
            )?;
            if updated == 0 {
                return Err(StoreError::NotEnrolled {
                    tournament_id,
                    player_id: winner_id,
                });
            }

            Ok(id)
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

    /// List the matches reported for a tournament, oldest first.
    pub fn list(&self, tournament_id: i64) -> StoreResult<Vec<MatchRecord>> {
        let conn = self.db.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT id, tournament_id, player_a, player_b, winner, played_at
             FROM matches WHERE tournament_id = ?1
             ORDER BY played_at ASC",
        )?;

        let matches = stmt
            .query_map([tournament_id], |row| {
                Ok(MatchRecord {
                    id: row.get(0)?,
                    tournament_id: row.get(1)?,
                    player_a: row.get(2)?,
                    player_b: row.get(3)?,
                    winner: row.get(4)?,
                    played_at: row.get(5)?,
                })
            })?
            .filter_map(|r| r.ok())
            .collect();

        Ok(matches)
    }

    /// Count the matches reported for a tournament.
    pub fn count(&self, tournament_id: i64) -> StoreResult<i64> {
        let conn = self.db.lock().unwrap();
        let count = conn.query_row(
            "SELECT COUNT(*) FROM matches WHERE tournament_id = ?1",
            [tournament_id],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    /// Delete every match reported for a tournament.
    ///
    /// Enrollment tallies are not rewound; callers starting a tournament
    /// over pair this with [`PlayerRepo::clear`].
    ///
    /// [`PlayerRepo::clear`]: crate::repo::PlayerRepo::clear
    pub fn clear(&self, tournament_id: i64) -> StoreResult<()> {
        let conn = self.db.lock().unwrap();
        conn.execute("DELETE FROM matches WHERE tournament_id = ?1", [tournament_id])?;
        Ok(())
    }
}
