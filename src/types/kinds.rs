use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Result of a single logged match. Matches are never drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameResult {
    Win,
    Lose,
}

impl GameResult {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Win => "win",
            Self::Lose => "lose",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnOrder {
    First,
    Second,
}

impl TurnOrder {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Second => "second",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TournamentType {
    #[default]
    Regional,
    Cup,
    Local,
    Challenge,
    International,
    Worlds,
    Other,
}

impl TournamentType {
    pub const ALL: [TournamentType; 7] = [
        Self::Regional,
        Self::Cup,
        Self::Local,
        Self::Challenge,
        Self::International,
        Self::Worlds,
        Self::Other,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Regional => "regional",
            Self::Cup => "cup",
            Self::Local => "local",
            Self::Challenge => "challenge",
            Self::International => "international",
            Self::Worlds => "worlds",
            Self::Other => "other",
        }
    }

    /// Human-readable name used in listings.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Regional => "Regional Championship",
            Self::Cup => "Cup",
            Self::Local => "Local Tournament",
            Self::Challenge => "Challenge Cup",
            Self::International => "International Championship",
            Self::Worlds => "World Championship",
            Self::Other => "Other",
        }
    }
}

/// How many games make up one tournament round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchFormat {
    Bo1,
    #[default]
    Bo3,
}

impl MatchFormat {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bo1 => "bo1",
            Self::Bo3 => "bo3",
        }
    }

    /// Upper bound on games recorded within one round.
    pub const fn max_games(self) -> u32 {
        match self {
            Self::Bo1 => 1,
            Self::Bo3 => 3,
        }
    }
}

/// Recorded result of a tournament round.
///
/// `NoShow` and `Bye` are uncontested wins. They are kept apart from `Win` so
/// listings can show how the round was won, but standings count all three alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundResult {
    Win,
    Lose,
    Tie,
    NoShow,
    Bye,
}

impl RoundResult {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Win => "win",
            Self::Lose => "lose",
            Self::Tie => "tie",
            Self::NoShow => "no_show",
            Self::Bye => "bye",
        }
    }

    #[must_use]
    pub const fn is_auto_win(self) -> bool {
        matches!(self, Self::NoShow | Self::Bye)
    }

    #[must_use]
    pub const fn counts_as_win(self) -> bool {
        matches!(self, Self::Win | Self::NoShow | Self::Bye)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Win => "Win",
            Self::Lose => "Lose",
            Self::Tie => "Tie",
            Self::NoShow => "No Show (Auto Win)",
            Self::Bye => "Bye (Auto Win)",
        }
    }
}

/// Outcome of a contested round or of one game within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundOutcome {
    Win,
    Lose,
    Tie,
}

impl RoundOutcome {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Win => "win",
            Self::Lose => "lose",
            Self::Tie => "tie",
        }
    }
}

impl From<RoundOutcome> for RoundResult {
    fn from(outcome: RoundOutcome) -> Self {
        match outcome {
            RoundOutcome::Win => Self::Win,
            RoundOutcome::Lose => Self::Lose,
            RoundOutcome::Tie => Self::Tie,
        }
    }
}

fn unknown(kind: &str, value: &str, expected: &[&str]) -> Error {
    Error::Validation(format!(
        "invalid {kind} '{value}' (expected one of: {})",
        expected.join(", ")
    ))
}

impl FromStr for GameResult {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "win" | "w" => Ok(Self::Win),
            "lose" | "loss" | "l" => Ok(Self::Lose),
            _ => Err(unknown("result", s, &["win", "lose"])),
        }
    }
}

impl FromStr for TurnOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first" | "1st" => Ok(Self::First),
            "second" | "2nd" => Ok(Self::Second),
            _ => Err(unknown("turn order", s, &["first", "second"])),
        }
    }
}

impl FromStr for TournamentType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == needle)
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|t| t.as_str()).collect();
                unknown("tournament type", s, &names)
            })
    }
}

impl FromStr for MatchFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bo1" => Ok(Self::Bo1),
            "bo3" => Ok(Self::Bo3),
            _ => Err(unknown("format", s, &["bo1", "bo3"])),
        }
    }
}

impl FromStr for RoundResult {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "win" => Ok(Self::Win),
            "lose" | "loss" => Ok(Self::Lose),
            "tie" => Ok(Self::Tie),
            "no_show" => Ok(Self::NoShow),
            "bye" => Ok(Self::Bye),
            _ => Err(unknown(
                "round result",
                s,
                &["win", "lose", "tie", "no_show", "bye"],
            )),
        }
    }
}

impl FromStr for RoundOutcome {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "win" | "w" => Ok(Self::Win),
            "lose" | "loss" | "l" => Ok(Self::Lose),
            "tie" | "t" => Ok(Self::Tie),
            _ => Err(unknown("game outcome", s, &["w", "l", "t"])),
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

display_as_str!(GameResult, TurnOrder, TournamentType, MatchFormat, RoundResult, RoundOutcome);
