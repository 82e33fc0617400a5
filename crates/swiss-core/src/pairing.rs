//! Next-round pairing computation.

use crate::standing::Standing;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced by the pairing computation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PairingError {
    /// Pairs can only be formed from an even number of players.
    #[error("cannot pair an odd number of players ({0})")]
    InvalidPlayerCount(usize),
}

/// A proposed next-round match-up between two players.
///
/// `first` is the player encountered earlier in the ranking scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    /// Id of the higher-ranked player of the pair.
    pub first_id: i64,
    /// Name of the higher-ranked player of the pair.
    pub first_name: String,
    /// Id of the lower-ranked player of the pair.
    pub second_id: i64,
    /// Name of the lower-ranked player of the pair.
    pub second_name: String,
}

/// Pairs adjacent players in the given ranking.
///
/// The input is expected to be sorted by [`pairing_order`]: matches played
/// ascending, then wins descending. Players at positions 0 and 1 form the
/// first pair, 2 and 3 the second, and so on, so players with similar
/// records meet.
///
/// This only reads the ranking; it never touches storage and does not
/// schedule anything. Rematches are allowed: two players who already met
/// are paired again whenever the ranking places them next to each other.
///
/// # Errors
///
/// Returns [`PairingError::InvalidPlayerCount`] if the ranking holds an odd
/// number of players; no partial pairing is produced. An empty ranking
/// yields an empty pairing list.
///
/// [`pairing_order`]: crate::pairing_order
pub fn compute_pairings(ranking: &[Standing]) -> Result<Vec<Pairing>, PairingError> {
    if ranking.len() % 2 != 0 {
        return Err(PairingError::InvalidPlayerCount(ranking.len()));
    }

    Ok(ranking
        .chunks_exact(2)
        .map(|pair| Pairing {
            first_id: pair[0].id,
            first_name: pair[0].name.clone(),
            second_id: pair[1].id,
            second_name: pair[1].name.clone(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn standing(id: i64, name: &str, wins: i64, matches_played: i64) -> Standing {
        Standing {
            id,
            name: name.to_string(),
            wins,
            matches_played,
        }
    }

    #[test]
    fn empty_ranking_yields_no_pairs() {
        assert_eq!(compute_pairings(&[]).unwrap(), vec![]);
    }

    #[test]
    fn two_players_form_one_pair() {
        let ranking = vec![standing(1, "A", 0, 0), standing(2, "B", 0, 0)];
        let pairs = compute_pairings(&ranking).unwrap();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].first_id, 1);
        assert_eq!(pairs[0].second_id, 2);
    }

    #[test]
    fn odd_ranking_is_rejected() {
        let ranking = vec![
            standing(1, "A", 0, 0),
            standing(2, "B", 0, 0),
            standing(3, "C", 0, 0),
        ];
        assert_eq!(
            compute_pairings(&ranking),
            Err(PairingError::InvalidPlayerCount(3))
        );
    }

    #[test]
    fn four_fresh_players_pair_in_ranking_order() {
        let ranking = vec![
            standing(1, "A", 0, 0),
            standing(2, "B", 0, 0),
            standing(3, "C", 0, 0),
            standing(4, "D", 0, 0),
        ];
        let pairs = compute_pairings(&ranking).unwrap();
        assert_eq!(
            pairs,
            vec![
                Pairing {
                    first_id: 1,
                    first_name: "A".to_string(),
                    second_id: 2,
                    second_name: "B".to_string(),
                },
                Pairing {
                    first_id: 3,
                    first_name: "C".to_string(),
                    second_id: 4,
                    second_name: "D".to_string(),
                },
            ]
        );
    }

    #[test]
    fn winners_meet_winners_after_one_round() {
        // A beat B, C beat D: the ranking puts the two 1-win players ahead
        // of the two 0-win players, so winners face each other next.
        let ranking = vec![
            standing(1, "A", 1, 1),
            standing(3, "C", 1, 1),
            standing(2, "B", 0, 1),
            standing(4, "D", 0, 1),
        ];
        let pairs = compute_pairings(&ranking).unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!((pairs[0].first_id, pairs[0].second_id), (1, 3));
        assert_eq!((pairs[1].first_id, pairs[1].second_id), (2, 4));
    }

    #[test]
    fn pair_k_holds_positions_2k_and_2k_plus_1() {
        let ranking: Vec<Standing> = (0..8)
            .map(|i| standing(i, &format!("P{i}"), 0, 0))
            .collect();
        let pairs = compute_pairings(&ranking).unwrap();
        for (k, pair) in pairs.iter().enumerate() {
            assert_eq!(pair.first_id, ranking[2 * k].id);
            assert_eq!(pair.second_id, ranking[2 * k + 1].id);
        }
    }

    #[test]
    fn repeated_calls_yield_identical_output() {
        let ranking = vec![
            standing(1, "A", 1, 1),
            standing(2, "B", 0, 1),
            standing(3, "C", 1, 1),
            standing(4, "D", 0, 1),
        ];
        assert_eq!(
            compute_pairings(&ranking).unwrap(),
            compute_pairings(&ranking).unwrap()
        );
    }

    fn arb_ranking(len: impl Into<prop::collection::SizeRange>) -> impl Strategy<Value = Vec<Standing>> {
        prop::collection::vec((0u8..10, 0u8..10), len).prop_map(|records| {
            records
                .into_iter()
                .enumerate()
                .map(|(i, (wins, extra))| Standing {
                    id: i as i64,
                    name: format!("player {i}"),
                    wins: wins as i64,
                    matches_played: (wins + extra) as i64,
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn every_player_appears_in_exactly_one_pair(ranking in arb_ranking(0..32usize)) {
            prop_assume!(ranking.len() % 2 == 0);
            let pairs = compute_pairings(&ranking).unwrap();
            prop_assert_eq!(pairs.len(), ranking.len() / 2);

            let mut paired: Vec<i64> = pairs
                .iter()
                .flat_map(|p| [p.first_id, p.second_id])
                .collect();
            paired.sort_unstable();
            let mut expected: Vec<i64> = ranking.iter().map(|s| s.id).collect();
            expected.sort_unstable();
            prop_assert_eq!(paired, expected);
        }

        #[test]
        fn odd_rankings_always_fail(ranking in arb_ranking(0..32usize)) {
            prop_assume!(ranking.len() % 2 == 1);
            prop_assert_eq!(
                compute_pairings(&ranking),
                Err(PairingError::InvalidPlayerCount(ranking.len()))
            );
        }
    }
}
