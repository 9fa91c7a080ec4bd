use serde::Serialize;

use crate::types::{RoundResult, Tournament, TournamentRound};

/// Win/loss/tie record of a tournament, derived from its rounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Standing {
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub total_rounds: u32,
    pub win_rate: f64,
}

impl Standing {
    /// No-shows and byes count as wins.
    #[must_use]
    pub fn from_rounds(rounds: &[TournamentRound]) -> Self {
        let mut standing = Self::default();
        for round in rounds {
            match round.result {
                r if r.counts_as_win() => standing.wins += 1,
                RoundResult::Lose => standing.losses += 1,
                _ => standing.ties += 1,
            }
        }
        standing.total_rounds = u32::try_from(rounds.len()).unwrap_or(u32::MAX);
        standing.win_rate = if standing.total_rounds > 0 {
            f64::from(standing.wins) / f64::from(standing.total_rounds) * 100.0
        } else {
            0.0
        };
        standing
    }

    /// Record formatted as `W-L-T`.
    #[must_use]
    pub fn record(&self) -> String {
        format!("{}-{}-{}", self.wins, self.losses, self.ties)
    }
}

impl From<&Tournament> for Standing {
    fn from(tournament: &Tournament) -> Self {
        Self::from_rounds(&tournament.rounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rounds(results: &[RoundResult]) -> Vec<TournamentRound> {
        results
            .iter()
            .map(|r| TournamentRound::new("t1", vec!["lugia".to_string()], *r))
            .collect()
    }

    #[test]
    fn test_auto_wins_count_toward_wins() {
        let rounds = rounds(&[
            RoundResult::Win,
            RoundResult::Lose,
            RoundResult::Tie,
            RoundResult::NoShow,
            RoundResult::Bye,
        ]);
        let standing = Standing::from_rounds(&rounds);
        assert_eq!(standing.wins, 3);
        assert_eq!(standing.losses, 1);
        assert_eq!(standing.ties, 1);
        assert_eq!(standing.total_rounds, 5);
        assert!((standing.win_rate - 60.0).abs() < f64::EPSILON);
        assert_eq!(standing.record(), "3-1-1");
    }

    #[test]
    fn test_single_round_matches_counts_as_win() {
        for result in [
            RoundResult::Win,
            RoundResult::Lose,
            RoundResult::Tie,
            RoundResult::NoShow,
            RoundResult::Bye,
        ] {
            let standing = Standing::from_rounds(&rounds(&[result]));
            assert_eq!(standing.wins == 1, result.counts_as_win(), "{result:?}");
            assert_eq!(standing.wins + standing.losses + standing.ties, 1);
            assert_eq!(standing.total_rounds, 1);
        }
    }

    #[test]
    fn test_no_rounds() {
        let standing = Standing::from_rounds(&[]);
        assert_eq!(standing, Standing::default());
        assert_eq!(standing.win_rate, 0.0);
    }

    #[test]
    fn test_recomputing_gives_same_standing() {
        let rounds = rounds(&[RoundResult::Win, RoundResult::Lose, RoundResult::Lose]);
        assert_eq!(Standing::from_rounds(&rounds), Standing::from_rounds(&rounds));
    }

    #[test]
    fn test_serializes_camel_case() {
        let value = serde_json::to_value(Standing::default()).unwrap();
        assert_eq!(value["totalRounds"], 0);
        assert_eq!(value["winRate"], 0.0);
    }
}
