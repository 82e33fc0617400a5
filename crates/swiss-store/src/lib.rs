//! Record store for Swiss-system tournaments.
//!
//! Durable keeper of tournaments, players, enrollments (with running
//! win/match tallies), and reported matches, backed by SQLite:
//!
//! - [`db`] - connection handling and schema creation
//! - [`models`] - row types
//! - [`repo`] - repository structs exposing the store operations
//!
//! The store hands ordered standings snapshots to the pairing engine in
//! `swiss-core`; it never computes pairings itself.

pub mod db;
pub mod error;
pub mod models;
pub mod repo;

pub use db::{init_db, DbPool};
pub use error::{StoreError, StoreResult};
pub use repo::{MatchRepo, PlayerRepo, TournamentRepo};
