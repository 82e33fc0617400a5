//! Store error types.

use thiserror::Error;

/// Errors surfaced by record store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Underlying SQLite failure.
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    /// A match report referenced a player with no enrollment in the
    /// tournament. The report is rolled back in full.
    #[error("player {player_id} is not enrolled in tournament {tournament_id}")]
    NotEnrolled {
        /// Tournament the report was addressed to.
        tournament_id: i64,
        /// Player missing an enrollment row.
        player_id: i64,
    },
}

/// Convenience alias for store results.
pub type StoreResult<T> = Result<T, StoreError>;
