use chrono::{DateTime, Utc};
use csv::{QuoteStyle, ReaderBuilder, Trim, WriterBuilder};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::LIST_DELIMITER;
use crate::error::{Error, Result};
use crate::types::Matchup;

/// One match as a flat row. Team columns hold names joined by [`LIST_DELIMITER`].
#[derive(Debug, Serialize, Deserialize)]
struct MatchupRow {
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "My Pokemon")]
    my_pokemon: String,
    #[serde(rename = "Enemy Pokemon")]
    enemy_pokemon: String,
    #[serde(rename = "Notes", default)]
    notes: String,
    #[serde(rename = "Result")]
    result: String,
    #[serde(rename = "Turn Order")]
    turn_order: String,
    #[serde(rename = "Created At", default)]
    created_at: String,
    #[serde(rename = "Updated At", default)]
    updated_at: String,
}

impl From<&Matchup> for MatchupRow {
    fn from(m: &Matchup) -> Self {
        Self {
            id: m.id.clone(),
            my_pokemon: m.my_pokemon.join(LIST_DELIMITER),
            enemy_pokemon: m.enemy_pokemon.join(LIST_DELIMITER),
            notes: m.notes.clone().unwrap_or_default(),
            result: m.result.to_string(),
            turn_order: m.turn_order.to_string(),
            created_at: m.created_at.to_rfc3339(),
            updated_at: m.updated_at.to_rfc3339(),
        }
    }
}

impl MatchupRow {
    fn into_matchup(self) -> Result<Matchup> {
        let id = if self.id.trim().is_empty() {
            Uuid::new_v4().to_string()
        } else {
            self.id.trim().to_string()
        };
        let created_at = parse_timestamp(&self.created_at, "Created At")?.unwrap_or_else(Utc::now);
        let updated_at = parse_timestamp(&self.updated_at, "Updated At")?.unwrap_or(created_at);
        let notes = Some(self.notes).filter(|n| !n.trim().is_empty());

        Ok(Matchup {
            id,
            my_pokemon: split_list(&self.my_pokemon),
            enemy_pokemon: split_list(&self.enemy_pokemon),
            notes,
            result: self.result.parse()?,
            turn_order: self.turn_order.parse()?,
            created_at,
            updated_at,
        })
    }
}

fn split_list(cell: &str) -> Vec<String> {
    cell.split(LIST_DELIMITER)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_timestamp(value: &str, column: &str) -> Result<Option<DateTime<Utc>>> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    DateTime::parse_from_rfc3339(value)
        .map(|dt| Some(dt.with_timezone(&Utc)))
        .map_err(|e| Error::Validation(format!("invalid {column} '{value}': {e}")))
}

pub(super) fn encode(matchups: &[Matchup]) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(Vec::new());
    if matchups.is_empty() {
        writer.write_record([
            "ID",
            "My Pokemon",
            "Enemy Pokemon",
            "Notes",
            "Result",
            "Turn Order",
            "Created At",
            "Updated At",
        ])?;
    }
    for m in matchups {
        writer.serialize(MatchupRow::from(m))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| Error::Io(std::io::Error::other(e.error().to_string())))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Rows are reported by their line in the file, header included.
pub(super) fn decode(input: &str) -> Result<Vec<Matchup>> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_reader(input.as_bytes());

    let mut matchups = Vec::new();
    for (i, row) in reader.deserialize::<MatchupRow>().enumerate() {
        let line = i + 2;
        let matchup = row
            .map_err(Error::from)
            .and_then(MatchupRow::into_matchup)
            .map_err(|e| Error::Import(format!("line {line}: {e}")))?;
        matchups.push(matchup);
    }
    Ok(matchups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GameResult, TurnOrder};

    const EXPORTED: &str = "\"ID\",\"My Pokemon\",\"Enemy Pokemon\",\"Notes\",\"Result\",\"Turn Order\",\"Created At\",\"Updated At\"
\"1718000000000\",\"gardevoir;kirlia\",\"charizard\",\"\",\"win\",\"first\",\"2024-06-10T08:00:00.000Z\",\"2024-06-10T08:00:00.000Z\"
\"1718000000001\",\"lugia\",\"charizard;pidgeot\",\"went second, bricked\",\"lose\",\"second\",\"2024-06-11T08:00:00.000Z\",\"2024-06-11T09:30:00.000Z\"
";

    #[test]
    fn test_decode_splits_team_lists() {
        let matchups = decode(EXPORTED).unwrap();
        assert_eq!(matchups.len(), 2);
        assert_eq!(matchups[0].my_pokemon, ["gardevoir", "kirlia"]);
        assert_eq!(matchups[0].notes, None);
        assert_eq!(matchups[1].enemy_pokemon, ["charizard", "pidgeot"]);
        assert_eq!(matchups[1].notes.as_deref(), Some("went second, bricked"));
        assert_eq!(matchups[1].result, GameResult::Lose);
        assert_eq!(matchups[1].turn_order, TurnOrder::Second);
        assert!(matchups[1].updated_at > matchups[1].created_at);
    }

    #[test]
    fn test_encode_quotes_every_field() {
        let matchups = decode(EXPORTED).unwrap();
        let csv = encode(&matchups).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "\"ID\",\"My Pokemon\",\"Enemy Pokemon\",\"Notes\",\"Result\",\"Turn Order\",\"Created At\",\"Updated At\""
        );
        let first = lines.next().unwrap();
        assert!(first.starts_with("\"1718000000000\",\"gardevoir;kirlia\",\"charizard\",\"\",\"win\",\"first\""));
    }

    #[test]
    fn test_encode_empty_list_keeps_header() {
        let csv = encode(&[]).unwrap();
        assert!(csv.starts_with("\"ID\",\"My Pokemon\""));
        assert!(decode(&csv).unwrap().is_empty());
    }

    #[test]
    fn test_decode_reports_bad_line() {
        let input = "ID,My Pokemon,Enemy Pokemon,Notes,Result,Turn Order,Created At,Updated At
1,a,b,,win,first,,
2,a,b,,draw,first,,
";
        let err = decode(input).unwrap_err();
        assert!(matches!(err, Error::Import(_)));
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn test_decode_fills_missing_id_and_dates() {
        let input = "ID,My Pokemon,Enemy Pokemon,Notes,Result,Turn Order,Created At,Updated At
,mew,mewtwo,,lose,second,,
";
        let matchups = decode(input).unwrap();
        assert!(!matchups[0].id.is_empty());
        assert_eq!(matchups[0].created_at, matchups[0].updated_at);
    }
}
