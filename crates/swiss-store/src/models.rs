//! Row types for the record store.
//!
//! Per-tournament standings rows are [`swiss_core::Standing`]; the store
//! returns those directly so the pairing engine consumes them unchanged.

use serde::{Deserialize, Serialize};

/// A tournament with its declared player capacity.
///
/// The capacity is informational; registration does not enforce it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tournament {
    /// Unique tournament id.
    pub id: i64,
    /// Declared number of players.
    pub player_capacity: i64,
    /// When the tournament was created (RFC 3339).
    pub created_at: String,
}

/// A globally-identified player.
///
/// Players outlive individual tournaments; removing a tournament's
/// enrollments leaves the player rows in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Unique player id.
    pub id: i64,
    /// Display name (free text, not necessarily unique).
    pub name: String,
    /// When the player was first registered (RFC 3339).
    pub created_at: String,
}

/// An immutable record of a reported match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Unique match identifier.
    pub id: String,
    /// Tournament the match was played in.
    pub tournament_id: i64,
    /// First participant (the reported winner).
    pub player_a: i64,
    /// Second participant (the reported loser).
    pub player_b: i64,
    /// Winner id; always one of the two participants.
    pub winner: i64,
    /// When the result was reported (RFC 3339).
    pub played_at: String,
}
