use std::fmt;
use std::str::FromStr;

use crate::error::Error;

use super::Matchup;

/// Ordering for match history listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    /// Newest first.
    #[default]
    Date,
    Result,
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date => f.write_str("date"),
            Self::Result => f.write_str("result"),
        }
    }
}

impl FromStr for SortBy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "date" => Ok(Self::Date),
            "result" => Ok(Self::Result),
            _ => Err(Error::Validation(format!(
                "invalid sort '{s}' (expected date or result)"
            ))),
        }
    }
}

/// Keeps matches where any Pokemon on either side contains `search`, ignoring case.
/// An empty search keeps everything.
pub fn filter_matchups<'a>(matchups: &'a [Matchup], search: &str) -> Vec<&'a Matchup> {
    let needle = search.trim().to_lowercase();
    matchups
        .iter()
        .filter(|m| {
            needle.is_empty()
                || m.my_pokemon
                    .iter()
                    .chain(&m.enemy_pokemon)
                    .any(|p| p.to_lowercase().contains(&needle))
        })
        .collect()
}

pub fn sort_matchups(matchups: &mut [&Matchup], sort_by: SortBy) {
    match sort_by {
        SortBy::Date => matchups.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortBy::Result => matchups.sort_by(|a, b| a.result.as_str().cmp(b.result.as_str())),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;
    use crate::types::{GameResult, TurnOrder};

    fn matchup(my: &[&str], enemy: &[&str], result: GameResult, age_mins: i64) -> Matchup {
        let mut m = Matchup::new(
            my.iter().map(|s| s.to_string()).collect(),
            enemy.iter().map(|s| s.to_string()).collect(),
            result,
            TurnOrder::First,
            None,
        );
        m.created_at = Utc::now() - Duration::minutes(age_mins);
        m
    }

    #[test]
    fn test_filter_matches_either_side_case_insensitive() {
        let all = vec![
            matchup(&["gardevoir"], &["charizard"], GameResult::Win, 0),
            matchup(&["lugia", "archeops"], &["gardevoir"], GameResult::Lose, 1),
            matchup(&["miraidon"], &["iron-hands"], GameResult::Win, 2),
        ];
        assert_eq!(filter_matchups(&all, "GARDE").len(), 2);
        assert_eq!(filter_matchups(&all, "iron").len(), 1);
        assert_eq!(filter_matchups(&all, "").len(), 3);
        assert!(filter_matchups(&all, "pikachu").is_empty());
    }

    #[test]
    fn test_sort_by_date_newest_first() {
        let all = vec![
            matchup(&["a"], &["b"], GameResult::Win, 30),
            matchup(&["c"], &["d"], GameResult::Win, 0),
            matchup(&["e"], &["f"], GameResult::Win, 10),
        ];
        let mut view = filter_matchups(&all, "");
        sort_matchups(&mut view, SortBy::Date);
        let firsts: Vec<&str> = view.iter().map(|m| m.my_pokemon[0].as_str()).collect();
        assert_eq!(firsts, ["c", "e", "a"]);
    }

    #[test]
    fn test_sort_by_result_puts_losses_first() {
        let all = vec![
            matchup(&["a"], &["b"], GameResult::Win, 0),
            matchup(&["c"], &["d"], GameResult::Lose, 0),
        ];
        let mut view = filter_matchups(&all, "");
        sort_matchups(&mut view, SortBy::Result);
        assert_eq!(view[0].result, GameResult::Lose);
    }
}
