use std::fmt;

use chrono::{DateTime, Utc};
use inquire::{InquireError, MultiSelect, Select};

use crate::stats::Standing;
use crate::store::Store;
use crate::types::{Matchup, Tournament};

/// Tournament with its current record for display
pub struct TournamentDisplay {
    pub tournament: Tournament,
    pub standing: Standing,
}

impl fmt::Display for TournamentDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}  {}  {}  [{}]",
            self.tournament.date,
            self.tournament.name,
            self.tournament.kind.label(),
            self.standing.record()
        )
    }
}

/// Match summary for display
pub struct MatchupDisplay {
    pub matchup: Matchup,
}

impl fmt::Display for MatchupDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} vs {}  {}  {}",
            team_label(&self.matchup.my_pokemon),
            team_label(&self.matchup.enemy_pokemon),
            self.matchup.result,
            format_relative_time(&self.matchup.created_at)
        )
    }
}

/// Join a team for display, e.g. "charizard + pidgeot"
#[must_use]
pub fn team_label(team: &[String]) -> String {
    if team.is_empty() {
        "-".to_string()
    } else {
        team.join(" + ")
    }
}

/// Format a datetime as relative time (e.g., "2 days ago")
#[must_use]
pub fn format_relative_time(dt: &DateTime<Utc>) -> String {
    let diff = Utc::now().signed_duration_since(*dt);

    if diff.num_seconds() < 0 {
        return "in the future".to_string();
    }
    if diff.num_seconds() < 60 {
        return "just now".to_string();
    }

    let (amount, unit) = if diff.num_minutes() < 60 {
        (diff.num_minutes(), "minute")
    } else if diff.num_hours() < 24 {
        (diff.num_hours(), "hour")
    } else if diff.num_days() < 30 {
        (diff.num_days(), "day")
    } else if diff.num_days() < 365 {
        (diff.num_days() / 30, "month")
    } else {
        (diff.num_days() / 365, "year")
    };

    if amount == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{amount} {unit}s ago")
    }
}

/// Load tournaments with their standings, most recent event first
pub fn list_tournaments(store: &impl Store) -> anyhow::Result<Vec<TournamentDisplay>> {
    let mut tournaments = store.list_tournaments()?;
    tournaments.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
    Ok(tournaments
        .into_iter()
        .map(|tournament| {
            let standing = Standing::from(&tournament);
            TournamentDisplay {
                tournament,
                standing,
            }
        })
        .collect())
}

/// Pick a tournament from the list
pub fn pick_tournament(store: &impl Store) -> anyhow::Result<Option<Tournament>> {
    let tournaments = list_tournaments(store)?;

    if tournaments.is_empty() {
        println!("No tournaments found.");
        return Ok(None);
    }

    let selection = Select::new("Select tournament:", tournaments)
        .with_page_size(15)
        .with_help_message("Type to filter, Enter to select")
        .with_vim_mode(true)
        .prompt();

    match selection {
        Ok(display) => Ok(Some(display.tournament)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Get a tournament by ID or interactively pick one
pub fn get_or_pick_tournament(
    store: &impl Store,
    tournament_id: Option<String>,
    non_interactive: bool,
) -> anyhow::Result<Option<Tournament>> {
    if let Some(id) = tournament_id {
        let tournament = store
            .get_tournament(&id)?
            .ok_or_else(|| anyhow::anyhow!("Tournament not found: {id}"))?;
        Ok(Some(tournament))
    } else if non_interactive {
        anyhow::bail!("--id is required in non-interactive mode");
    } else {
        pick_tournament(store)
    }
}

/// Pick any number of matches from the history
pub fn pick_matchups(store: &impl Store) -> anyhow::Result<Vec<Matchup>> {
    let mut matchups = store.list_matchups()?;

    if matchups.is_empty() {
        println!("No matches found.");
        return Ok(Vec::new());
    }

    matchups.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    let displays: Vec<MatchupDisplay> = matchups
        .into_iter()
        .map(|matchup| MatchupDisplay { matchup })
        .collect();

    let selection = MultiSelect::new("Select matches:", displays)
        .with_page_size(15)
        .with_help_message("Space to toggle, Enter to confirm")
        .with_vim_mode(true)
        .prompt();

    match selection {
        Ok(selected) => Ok(selected.into_iter().map(|d| d.matchup).collect()),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(Vec::new()),
        Err(e) => Err(e.into()),
    }
}

/// Request confirmation for a destructive operation
pub fn confirm_action(message: &str, yes: bool, non_interactive: bool) -> anyhow::Result<bool> {
    if yes {
        Ok(true)
    } else if non_interactive {
        anyhow::bail!("--yes is required for destructive operations in non-interactive mode");
    } else {
        Ok(inquire::Confirm::new(message)
            .with_default(false)
            .prompt()?)
    }
}
