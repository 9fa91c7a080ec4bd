//! Checks applied before a record is stored or imported.
//!
//! The statistics code assumes its input already passed through here and does
//! not validate again.

use crate::error::{Error, Result};
use crate::stats::COMPOSITION_DELIMITER;
use crate::transfer::LIST_DELIMITER;
use crate::types::{Matchup, Tournament, TournamentRound};

const MAX_NAME_LEN: usize = 64;
const MAX_TEAM_SIZE: usize = 2;
const MAX_ROUND_TEAM_SIZE: usize = 3;
const MAX_DECK_SIZE: usize = 3;
const MAX_TOURNAMENT_NAME_LEN: usize = 120;

/// Canonical form of a Pokemon name: trimmed and lower-cased.
pub fn normalize_name(name: &str) -> Result<String> {
    let name = name.trim().to_lowercase();

    if name.is_empty() {
        return Err(Error::Validation("Pokemon name cannot be empty".to_string()));
    }
    if name.len() > MAX_NAME_LEN {
        return Err(Error::Validation(format!(
            "Pokemon name cannot exceed {MAX_NAME_LEN} characters"
        )));
    }
    if name.contains(COMPOSITION_DELIMITER)
        || name.contains(LIST_DELIMITER)
        || name.contains(char::is_control)
    {
        return Err(Error::Validation(format!(
            "Pokemon name '{name}' contains invalid characters"
        )));
    }

    Ok(name)
}

fn normalize_team(names: &[String], min: usize, max: usize, side: Side) -> Result<Vec<String>> {
    if names.len() < min {
        return Err(Error::Validation(side.too_few().to_string()));
    }
    if names.len() > max {
        return Err(Error::Validation(side.too_many(max)));
    }
    names.iter().map(|n| normalize_name(n)).collect()
}

#[derive(Clone, Copy)]
enum Side {
    Mine,
    Enemy,
    Deck,
}

impl Side {
    fn too_few(self) -> &'static str {
        match self {
            Side::Mine | Side::Deck => "Please select at least one Pokemon for your team.",
            Side::Enemy => "Please select at least one Pokemon for the enemy team.",
        }
    }

    fn too_many(self, max: usize) -> String {
        match self {
            Side::Mine => format!("Your team cannot have more than {max} Pokemon."),
            Side::Enemy => format!("The enemy team cannot have more than {max} Pokemon."),
            Side::Deck => format!("A deck cannot list more than {max} Pokemon."),
        }
    }
}

/// Normalizes a match in place, rejecting it if either team is empty or too large.
pub fn validate_matchup(matchup: &mut Matchup) -> Result<()> {
    matchup.my_pokemon = normalize_team(&matchup.my_pokemon, 1, MAX_TEAM_SIZE, Side::Mine)?;
    matchup.enemy_pokemon =
        normalize_team(&matchup.enemy_pokemon, 1, MAX_TEAM_SIZE, Side::Enemy)?;
    matchup.notes = normalize_text(matchup.notes.take());
    Ok(())
}

pub fn validate_tournament(tournament: &mut Tournament) -> Result<()> {
    let name = tournament.name.trim();
    if name.is_empty() {
        return Err(Error::Validation("Tournament name is required".to_string()));
    }
    if name.len() > MAX_TOURNAMENT_NAME_LEN {
        return Err(Error::Validation(format!(
            "Tournament name cannot exceed {MAX_TOURNAMENT_NAME_LEN} characters"
        )));
    }
    tournament.name = name.to_string();
    tournament.location = normalize_text(tournament.location.take());
    tournament.deck = normalize_team(&tournament.deck, 0, MAX_DECK_SIZE, Side::Deck)?;
    for round in &mut tournament.rounds {
        validate_round(round)?;
    }
    Ok(())
}

pub fn validate_round(round: &mut TournamentRound) -> Result<()> {
    round.enemy_pokemon =
        normalize_team(&round.enemy_pokemon, 1, MAX_ROUND_TEAM_SIZE, Side::Enemy)?;
    Ok(())
}

/// Blank free text is stored as absent.
fn normalize_text(text: Option<String>) -> Option<String> {
    text.map(|t| t.trim().to_string()).filter(|t| !t.is_empty())
}
