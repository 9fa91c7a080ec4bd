use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::types::{GameResult, Matchup};

/// Joins the sorted Pokemon names of a team into its composition key.
pub const COMPOSITION_DELIMITER: &str = "|";

/// Canonical key for a team: names sorted, then joined with [`COMPOSITION_DELIMITER`].
///
/// Two teams holding the same Pokemon in a different order share a key.
pub fn composition_key<S: AsRef<str>>(team: &[S]) -> String {
    let mut names: Vec<&str> = team.iter().map(AsRef::as_ref).collect();
    names.sort_unstable();
    names.join(COMPOSITION_DELIMITER)
}

/// Splits a composition key back into Pokemon names.
pub fn split_composition_key(key: &str) -> impl Iterator<Item = &str> {
    key.split(COMPOSITION_DELIMITER).filter(|s| !s.is_empty())
}

/// Win/total counts for one (my team, enemy team) pairing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CellSummary {
    pub wins: u32,
    pub total: u32,
}

impl CellSummary {
    #[must_use]
    pub const fn has_data(&self) -> bool {
        self.total > 0
    }

    /// Percentage of matches won, or `None` when nothing was recorded for this pairing.
    #[must_use]
    pub fn win_rate(&self) -> Option<f64> {
        self.has_data()
            .then(|| f64::from(self.wins) / f64::from(self.total) * 100.0)
    }
}

/// Win rates of every logged team against every opposing team.
///
/// Rows are my compositions, columns are enemy compositions. Only pairings that
/// were actually played are stored; [`MatchupMatrix::cell`] reports the rest as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MatchupMatrix {
    my_archetypes: BTreeSet<String>,
    enemy_archetypes: BTreeSet<String>,
    cells: BTreeMap<String, BTreeMap<String, CellSummary>>,
    total_matchups: u32,
    total_wins: u32,
}

impl MatchupMatrix {
    #[must_use]
    pub fn from_matchups<'a, I>(matchups: I) -> Self
    where
        I: IntoIterator<Item = &'a Matchup>,
    {
        let mut matrix = Self::default();
        for m in matchups {
            matrix.record(m);
        }
        matrix
    }

    /// Adds one match to its cell. Each match lands in exactly one cell.
    pub fn record(&mut self, matchup: &Matchup) {
        let row = composition_key(&matchup.my_pokemon);
        let col = composition_key(&matchup.enemy_pokemon);

        let won = matchup.result == GameResult::Win;
        let cell = self
            .cells
            .entry(row.clone())
            .or_default()
            .entry(col.clone())
            .or_default();
        cell.total += 1;
        self.total_matchups += 1;
        if won {
            cell.wins += 1;
            self.total_wins += 1;
        }

        self.my_archetypes.insert(row);
        self.enemy_archetypes.insert(col);
    }

    /// Distinct compositions I played, sorted.
    pub fn my_archetypes(&self) -> impl Iterator<Item = &str> {
        self.my_archetypes.iter().map(String::as_str)
    }

    /// Distinct compositions I played against, sorted.
    pub fn enemy_archetypes(&self) -> impl Iterator<Item = &str> {
        self.enemy_archetypes.iter().map(String::as_str)
    }

    #[must_use]
    pub fn cell(&self, my: &str, enemy: &str) -> CellSummary {
        self.cells
            .get(my)
            .and_then(|row| row.get(enemy))
            .copied()
            .unwrap_or_default()
    }

    /// Every pairing with at least one recorded match, in key order.
    pub fn cells(&self) -> impl Iterator<Item = (&str, &str, CellSummary)> {
        self.cells.iter().flat_map(|(my, row)| {
            row.iter()
                .map(move |(enemy, cell)| (my.as_str(), enemy.as_str(), *cell))
        })
    }

    #[must_use]
    pub const fn total_matchups(&self) -> u32 {
        self.total_matchups
    }

    #[must_use]
    pub const fn total_wins(&self) -> u32 {
        self.total_wins
    }

    /// Win percentage across all matches, 0 when none are logged.
    #[must_use]
    pub fn overall_win_rate(&self) -> f64 {
        if self.total_matchups == 0 {
            return 0.0;
        }
        f64::from(self.total_wins) / f64::from(self.total_matchups) * 100.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_matchups == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TurnOrder;

    fn matchup(my: &[&str], enemy: &[&str], result: GameResult) -> Matchup {
        Matchup::new(
            my.iter().map(|s| s.to_string()).collect(),
            enemy.iter().map(|s| s.to_string()).collect(),
            result,
            TurnOrder::First,
            None,
        )
    }

    #[test]
    fn test_composition_key_ignores_order() {
        assert_eq!(composition_key(&["pidgeot", "charizard"]), "charizard|pidgeot");
        assert_eq!(
            composition_key(&["charizard", "pidgeot"]),
            composition_key(&["pidgeot", "charizard"])
        );
        assert_eq!(composition_key(&["mew"]), "mew");
    }

    #[test]
    fn test_split_composition_key() {
        let names: Vec<&str> = split_composition_key("charizard|pidgeot").collect();
        assert_eq!(names, ["charizard", "pidgeot"]);
    }

    #[test]
    fn test_empty_input() {
        let matrix = MatchupMatrix::from_matchups(std::iter::empty());
        assert!(matrix.is_empty());
        assert_eq!(matrix.my_archetypes().count(), 0);
        assert_eq!(matrix.enemy_archetypes().count(), 0);
        assert_eq!(matrix.cells().count(), 0);
        assert_eq!(matrix.overall_win_rate(), 0.0);
    }

    #[test]
    fn test_same_team_in_any_order_shares_a_cell() {
        let all = vec![
            matchup(&["gardevoir", "kirlia"], &["charizard", "pidgeot"], GameResult::Win),
            matchup(&["kirlia", "gardevoir"], &["pidgeot", "charizard"], GameResult::Lose),
            matchup(&["gardevoir", "kirlia"], &["pidgeot", "charizard"], GameResult::Win),
        ];
        let matrix = MatchupMatrix::from_matchups(&all);

        assert_eq!(matrix.cells().count(), 1);
        assert_eq!(
            matrix.cell("gardevoir|kirlia", "charizard|pidgeot"),
            CellSummary { wins: 2, total: 3 }
        );
    }

    #[test]
    fn test_cells_are_sparse() {
        let all = vec![
            matchup(&["gardevoir"], &["charizard"], GameResult::Win),
            matchup(&["lugia"], &["miraidon"], GameResult::Lose),
        ];
        let matrix = MatchupMatrix::from_matchups(&all);

        let my: Vec<&str> = matrix.my_archetypes().collect();
        let enemy: Vec<&str> = matrix.enemy_archetypes().collect();
        assert_eq!(my, ["gardevoir", "lugia"]);
        assert_eq!(enemy, ["charizard", "miraidon"]);

        let missing = matrix.cell("gardevoir", "miraidon");
        assert_eq!(missing, CellSummary::default());
        assert!(!missing.has_data());
        assert_eq!(missing.win_rate(), None);

        let lost = matrix.cell("lugia", "miraidon");
        assert_eq!(lost.win_rate(), Some(0.0));
    }

    #[test]
    fn test_cell_invariants_hold() {
        let all = vec![
            matchup(&["a"], &["x"], GameResult::Win),
            matchup(&["a"], &["x"], GameResult::Lose),
            matchup(&["a", "b"], &["x"], GameResult::Win),
            matchup(&["b", "a"], &["y"], GameResult::Lose),
            matchup(&["a"], &["y"], GameResult::Lose),
        ];
        let matrix = MatchupMatrix::from_matchups(&all);

        let mut counted = 0;
        for (my, enemy, cell) in matrix.cells() {
            assert!(cell.wins <= cell.total);
            let expected = all
                .iter()
                .filter(|m| {
                    composition_key(&m.my_pokemon) == my
                        && composition_key(&m.enemy_pokemon) == enemy
                })
                .count() as u32;
            assert_eq!(cell.total, expected);
            counted += cell.total;
        }
        assert_eq!(counted, all.len() as u32);
        assert_eq!(matrix.total_wins(), 2);
        assert!((matrix.overall_win_rate() - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_order_of_input_does_not_matter() {
        let mut all = vec![
            matchup(&["a"], &["x"], GameResult::Win),
            matchup(&["b"], &["x"], GameResult::Lose),
            matchup(&["a"], &["y"], GameResult::Win),
        ];
        let forward = MatchupMatrix::from_matchups(&all);
        all.reverse();
        let backward = MatchupMatrix::from_matchups(&all);
        assert_eq!(forward, backward);
        assert_eq!(forward, MatchupMatrix::from_matchups(&all));
    }
}
