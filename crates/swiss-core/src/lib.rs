//! Core types for Swiss-system tournament pairing.
//!
//! This crate provides the fundamental types used across the tracker:
//! - [`Standing`] for a player's record within one tournament
//! - [`Pairing`] for a proposed next-round match-up
//! - [`compute_pairings`] for turning a ranking into round pairings
//!
//! Everything here is a pure computation over in-memory snapshots; the
//! persistent record store lives in the `swiss-store` crate.

mod pairing;
mod standing;

pub use pairing::{compute_pairings, Pairing, PairingError};
pub use standing::{pairing_order, Standing};
