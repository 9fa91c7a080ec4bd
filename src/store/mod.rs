mod json;
mod memory;

pub use json::JsonStore;
pub use memory::MemoryStore;

use chrono::Utc;

use crate::error::{Error, Result};
use crate::stats::Standing;
use crate::types::*;
use crate::validation::{validate_matchup, validate_round, validate_tournament};

/// Store defines the persistence interface.
///
/// Implementations only load and save whole collections. Every record operation
/// is a provided method that loads a snapshot, changes it and saves it back, so
/// the last write wins.
pub trait Store: Send + Sync {
    fn load_matchups(&self) -> Result<Vec<Matchup>>;
    fn save_matchups(&self, matchups: &[Matchup]) -> Result<()>;
    fn load_tournaments(&self) -> Result<Vec<Tournament>>;
    fn save_tournaments(&self, tournaments: &[Tournament]) -> Result<()>;

    // Matchup operations

    fn create_matchup(&self, matchup: &Matchup) -> Result<Matchup> {
        let mut matchup = matchup.clone();
        validate_matchup(&mut matchup)?;

        let mut all = self.load_matchups()?;
        if all.iter().any(|m| m.id == matchup.id) {
            return Err(Error::Validation(format!(
                "a match with id '{}' already exists",
                matchup.id
            )));
        }
        all.push(matchup.clone());
        self.save_matchups(&all)?;
        Ok(matchup)
    }

    fn get_matchup(&self, id: &str) -> Result<Option<Matchup>> {
        Ok(self.load_matchups()?.into_iter().find(|m| m.id == id))
    }

    fn list_matchups(&self) -> Result<Vec<Matchup>> {
        self.load_matchups()
    }

    /// Replaces the stored match with the same id and bumps its update time.
    fn update_matchup(&self, matchup: &Matchup) -> Result<Matchup> {
        let mut matchup = matchup.clone();
        validate_matchup(&mut matchup)?;
        matchup.updated_at = Utc::now();

        let mut all = self.load_matchups()?;
        let slot = all
            .iter_mut()
            .find(|m| m.id == matchup.id)
            .ok_or(Error::NotFound)?;
        *slot = matchup.clone();
        self.save_matchups(&all)?;
        Ok(matchup)
    }

    fn delete_matchup(&self, id: &str) -> Result<bool> {
        Ok(self.delete_matchups(&[id.to_string()])? > 0)
    }

    /// Removes every match whose id is listed. Returns how many were removed.
    fn delete_matchups(&self, ids: &[String]) -> Result<usize> {
        let mut all = self.load_matchups()?;
        let before = all.len();
        all.retain(|m| !ids.contains(&m.id));
        let removed = before - all.len();
        if removed > 0 {
            self.save_matchups(&all)?;
        }
        Ok(removed)
    }

    /// Swaps the whole match list for `matchups`, validating every record first.
    /// Nothing is written if any record is rejected.
    fn replace_matchups(&self, matchups: &[Matchup]) -> Result<()> {
        let mut checked = matchups.to_vec();
        for (i, m) in checked.iter_mut().enumerate() {
            validate_matchup(m).map_err(|e| Error::Import(format!("record {}: {e}", i + 1)))?;
        }
        self.save_matchups(&checked)
    }

    // Tournament operations

    fn create_tournament(&self, tournament: &Tournament) -> Result<Tournament> {
        let mut tournament = tournament.clone();
        validate_tournament(&mut tournament)?;

        let mut all = self.load_tournaments()?;
        if all.iter().any(|t| t.id == tournament.id) {
            return Err(Error::Validation(format!(
                "a tournament with id '{}' already exists",
                tournament.id
            )));
        }
        all.push(tournament.clone());
        self.save_tournaments(&all)?;
        Ok(tournament)
    }

    fn get_tournament(&self, id: &str) -> Result<Option<Tournament>> {
        Ok(self.load_tournaments()?.into_iter().find(|t| t.id == id))
    }

    fn list_tournaments(&self) -> Result<Vec<Tournament>> {
        self.load_tournaments()
    }

    fn update_tournament(&self, tournament: &Tournament) -> Result<Tournament> {
        let mut tournament = tournament.clone();
        validate_tournament(&mut tournament)?;
        tournament.updated_at = Utc::now();

        let mut all = self.load_tournaments()?;
        let slot = all
            .iter_mut()
            .find(|t| t.id == tournament.id)
            .ok_or(Error::NotFound)?;
        *slot = tournament.clone();
        self.save_tournaments(&all)?;
        Ok(tournament)
    }

    /// Deletes a tournament together with its rounds.
    fn delete_tournament(&self, id: &str) -> Result<bool> {
        let mut all = self.load_tournaments()?;
        let before = all.len();
        all.retain(|t| t.id != id);
        if all.len() == before {
            return Ok(false);
        }
        self.save_tournaments(&all)?;
        Ok(true)
    }

    fn replace_tournaments(&self, tournaments: &[Tournament]) -> Result<()> {
        let mut checked = tournaments.to_vec();
        for (i, t) in checked.iter_mut().enumerate() {
            validate_tournament(t)
                .map_err(|e| Error::Import(format!("tournament {}: {e}", i + 1)))?;
        }
        self.save_tournaments(&checked)
    }

    // Round operations (rounds live inside their tournament)

    fn add_round(&self, tournament_id: &str, round: &TournamentRound) -> Result<TournamentRound> {
        let mut round = round.clone();
        validate_round(&mut round)?;
        round.tournament_id = tournament_id.to_string();

        modify_tournament(self, tournament_id, |t| {
            t.rounds.push(round.clone());
            Ok(())
        })?;
        Ok(round)
    }

    fn update_round(&self, tournament_id: &str, round: &TournamentRound) -> Result<TournamentRound> {
        let mut round = round.clone();
        validate_round(&mut round)?;
        round.tournament_id = tournament_id.to_string();
        round.updated_at = Utc::now();

        modify_tournament(self, tournament_id, |t| {
            let slot = t
                .rounds
                .iter_mut()
                .find(|r| r.id == round.id)
                .ok_or(Error::NotFound)?;
            *slot = round.clone();
            Ok(())
        })?;
        Ok(round)
    }

    fn delete_round(&self, tournament_id: &str, round_id: &str) -> Result<bool> {
        let mut removed = false;
        modify_tournament(self, tournament_id, |t| {
            let before = t.rounds.len();
            t.rounds.retain(|r| r.id != round_id);
            removed = t.rounds.len() != before;
            Ok(())
        })?;
        Ok(removed)
    }

    /// Standing of a tournament, or `None` if there is no tournament with this id.
    fn tournament_standing(&self, tournament_id: &str) -> Result<Option<Standing>> {
        Ok(self
            .get_tournament(tournament_id)?
            .map(|t| Standing::from_rounds(&t.rounds)))
    }
}

/// Loads the tournament list, applies `change` to one tournament and saves the list.
fn modify_tournament<S, F>(store: &S, tournament_id: &str, change: F) -> Result<()>
where
    S: Store + ?Sized,
    F: FnOnce(&mut Tournament) -> Result<()>,
{
    let mut all = store.load_tournaments()?;
    let tournament = all
        .iter_mut()
        .find(|t| t.id == tournament_id)
        .ok_or(Error::NotFound)?;
    change(tournament)?;
    tournament.updated_at = Utc::now();
    store.save_tournaments(&all)
}
