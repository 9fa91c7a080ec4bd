use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{GameResult, MatchFormat, RoundResult, TournamentType, TurnOrder};

/// A single logged match between two teams of one or two Pokemon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Matchup {
    pub id: String,
    pub my_pokemon: Vec<String>,
    pub enemy_pokemon: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub result: GameResult,
    pub turn_order: TurnOrder,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Matchup {
    #[must_use]
    pub fn new(
        my_pokemon: Vec<String>,
        enemy_pokemon: Vec<String>,
        result: GameResult,
        turn_order: TurnOrder,
        notes: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: new_id(),
            my_pokemon,
            enemy_pokemon,
            notes,
            result,
            turn_order,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: TournamentType,
    pub format: MatchFormat,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub date: NaiveDate,
    /// The deck played for the whole event. Only the opponent changes per round.
    #[serde(default)]
    pub deck: Vec<String>,
    #[serde(default)]
    pub rounds: Vec<TournamentRound>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Tournament {
    #[must_use]
    pub fn new(
        name: String,
        kind: TournamentType,
        format: MatchFormat,
        location: Option<String>,
        date: NaiveDate,
        deck: Vec<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: new_id(),
            name,
            kind,
            format,
            location,
            date,
            deck,
            rounds: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentRound {
    pub id: String,
    pub tournament_id: String,
    pub enemy_pokemon: Vec<String>,
    pub result: RoundResult,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TournamentRound {
    #[must_use]
    pub fn new(tournament_id: &str, enemy_pokemon: Vec<String>, result: RoundResult) -> Self {
        let now = Utc::now();
        Self {
            id: new_id(),
            tournament_id: tournament_id.to_string(),
            enemy_pokemon,
            result,
            created_at: now,
            updated_at: now,
        }
    }
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}
