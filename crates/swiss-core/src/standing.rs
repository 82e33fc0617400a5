//! Per-tournament player records.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A player's record within a single tournament.
///
/// One `Standing` exists per enrollment; the same player enrolled in two
/// tournaments has independent tallies in each.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    /// Unique player id (assigned by the record store).
    pub id: i64,
    /// Display name (not necessarily unique).
    pub name: String,
    /// Matches won in this tournament.
    pub wins: i64,
    /// Matches played in this tournament.
    pub matches_played: i64,
}

/// Ordering used to rank players for pairing: fewer matches played first,
/// then more wins first.
///
/// Players behind on rounds sort to the front so they catch up in
/// scheduling. This is distinct from the display standings, which rank by
/// wins alone.
pub fn pairing_order(a: &Standing, b: &Standing) -> Ordering {
    a.matches_played
        .cmp(&b.matches_played)
        .then(b.wins.cmp(&a.wins))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standing(id: i64, wins: i64, matches_played: i64) -> Standing {
        Standing {
            id,
            name: format!("player {id}"),
            wins,
            matches_played,
        }
    }

    #[test]
    fn fewer_matches_sort_first() {
        let behind = standing(1, 3, 2);
        let ahead = standing(2, 0, 3);
        assert_eq!(pairing_order(&behind, &ahead), Ordering::Less);
        assert_eq!(pairing_order(&ahead, &behind), Ordering::Greater);
    }

    #[test]
    fn equal_matches_rank_by_wins_descending() {
        let winner = standing(1, 2, 3);
        let loser = standing(2, 1, 3);
        assert_eq!(pairing_order(&winner, &loser), Ordering::Less);
        assert_eq!(pairing_order(&loser, &winner), Ordering::Greater);
    }

    #[test]
    fn identical_records_compare_equal() {
        let a = standing(1, 1, 2);
        let b = standing(2, 1, 2);
        assert_eq!(pairing_order(&a, &b), Ordering::Equal);
    }

    #[test]
    fn sorting_a_ranking() {
        let mut ranking = vec![
            standing(1, 0, 1),
            standing(2, 1, 1),
            standing(3, 0, 0),
            standing(4, 2, 2),
        ];
        ranking.sort_by(pairing_order);
        let ids: Vec<i64> = ranking.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![3, 2, 1, 4]);
    }
}
