//! Repository modules for record store operations.

pub mod matches;
pub mod players;
pub mod tournaments;

pub use matches::MatchRepo;
pub use players::PlayerRepo;
pub use tournaments::TournamentRepo;
