//! Moving match records in and out of files.
//!
//! Two interchangeable encodings are supported for the match list: JSON, which
//! keeps every field as stored, and CSV, with team lists flattened into a single
//! cell. A backup document carries both collections at once.

mod delimited;

use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{Matchup, Tournament};
use crate::validation::{validate_matchup, validate_tournament};

/// Separates Pokemon names inside a single CSV cell.
pub const LIST_DELIMITER: &str = ";";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    #[default]
    Json,
    Csv,
}

impl Encoding {
    /// `.csv` files are CSV, everything else is JSON.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Self::Csv,
            _ => Self::Json,
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::Csv => f.write_str("csv"),
        }
    }
}

impl FromStr for Encoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(Error::Validation(format!(
                "invalid format '{s}' (expected json or csv)"
            ))),
        }
    }
}

pub fn encode_matchups(matchups: &[Matchup], encoding: Encoding) -> Result<String> {
    match encoding {
        Encoding::Json => Ok(serde_json::to_string_pretty(matchups)?),
        Encoding::Csv => delimited::encode(matchups),
    }
}

/// Parses and validates a whole match file.
///
/// Either every record is accepted or the call fails with [`Error::Import`];
/// callers never see a partial list.
pub fn decode_matchups(input: &str, encoding: Encoding) -> Result<Vec<Matchup>> {
    let mut matchups = match encoding {
        Encoding::Json => serde_json::from_str::<Vec<Matchup>>(input)
            .map_err(|e| Error::Import(format!("invalid JSON: {e}")))?,
        Encoding::Csv => delimited::decode(input)?,
    };

    let mut seen = HashSet::new();
    for (i, m) in matchups.iter_mut().enumerate() {
        validate_matchup(m).map_err(|e| Error::Import(format!("record {}: {e}", i + 1)))?;
        if !seen.insert(m.id.clone()) {
            return Err(Error::Import(format!(
                "record {}: duplicate id '{}'",
                i + 1,
                m.id
            )));
        }
    }
    Ok(matchups)
}

/// Everything the tool stores, in one document.
///
/// On restore a missing collection is left as it is rather than cleared.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Backup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matchups: Option<Vec<Matchup>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tournaments: Option<Vec<Tournament>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_date: Option<DateTime<Utc>>,
}

impl Backup {
    #[must_use]
    pub fn new(matchups: Vec<Matchup>, tournaments: Vec<Tournament>) -> Self {
        Self {
            matchups: Some(matchups),
            tournaments: Some(tournaments),
            export_date: Some(Utc::now()),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses and validates a backup document; any bad record rejects the whole file.
    pub fn from_json(input: &str) -> Result<Self> {
        let mut backup: Backup = serde_json::from_str(input)
            .map_err(|e| Error::Import(format!("invalid backup file: {e}")))?;

        if let Some(matchups) = backup.matchups.as_mut() {
            for (i, m) in matchups.iter_mut().enumerate() {
                validate_matchup(m)
                    .map_err(|e| Error::Import(format!("match {}: {e}", i + 1)))?;
            }
        }
        if let Some(tournaments) = backup.tournaments.as_mut() {
            for (i, t) in tournaments.iter_mut().enumerate() {
                validate_tournament(t)
                    .map_err(|e| Error::Import(format!("tournament {}: {e}", i + 1)))?;
            }
        }
        Ok(backup)
    }
}
