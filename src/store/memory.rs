use std::sync::{Mutex, MutexGuard};

use super::Store;
use crate::error::Result;
use crate::types::*;

#[derive(Default)]
struct Collections {
    matchups: Vec<Matchup>,
    tournaments: Vec<Tournament>,
}

/// In-process store, mostly useful for tests and embedding.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Collections>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_data(matchups: Vec<Matchup>, tournaments: Vec<Tournament>) -> Self {
        Self {
            inner: Mutex::new(Collections {
                matchups,
                tournaments,
            }),
        }
    }

    fn inner(&self) -> MutexGuard<'_, Collections> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Store for MemoryStore {
    fn load_matchups(&self) -> Result<Vec<Matchup>> {
        Ok(self.inner().matchups.clone())
    }

    fn save_matchups(&self, matchups: &[Matchup]) -> Result<()> {
        self.inner().matchups = matchups.to_vec();
        Ok(())
    }

    fn load_tournaments(&self) -> Result<Vec<Tournament>> {
        Ok(self.inner().tournaments.clone())
    }

    fn save_tournaments(&self, tournaments: &[Tournament]) -> Result<()> {
        self.inner().tournaments = tournaments.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::MatchupMatrix;

    #[test]
    fn test_matrix_over_stored_matchups() {
        let store = MemoryStore::new();
        for (my, enemy, result) in [
            ("gardevoir", "charizard", GameResult::Win),
            ("gardevoir", "charizard", GameResult::Lose),
            ("lugia", "charizard", GameResult::Win),
        ] {
            store
                .create_matchup(&Matchup::new(
                    vec![my.to_string()],
                    vec![enemy.to_string()],
                    result,
                    TurnOrder::Second,
                    None,
                ))
                .unwrap();
        }

        let matchups = store.list_matchups().unwrap();
        let matrix = MatchupMatrix::from_matchups(&matchups);
        assert_eq!(matrix.total_matchups(), 3);
        assert_eq!(matrix.cell("gardevoir", "charizard").total, 2);

        let again = MatchupMatrix::from_matchups(&store.list_matchups().unwrap());
        assert_eq!(matrix, again);
    }

    #[test]
    fn test_with_data_preserves_snapshot() {
        let m = Matchup::new(
            vec!["a".to_string()],
            vec!["b".to_string()],
            GameResult::Win,
            TurnOrder::First,
            None,
        );
        let store = MemoryStore::with_data(vec![m.clone()], Vec::new());
        assert_eq!(store.get_matchup(&m.id).unwrap(), Some(m));
    }
}
