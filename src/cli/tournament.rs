use chrono::{Local, NaiveDate};
use serde::Serialize;

use super::init_store;
use super::pickers::{confirm_action, get_or_pick_tournament, list_tournaments, team_label};
use crate::config::Config;
use crate::stats::{GameTally, Standing, resolve_round};
use crate::store::Store;
use crate::types::{
    MatchFormat, RoundOutcome, RoundResult, Tournament, TournamentRound, TournamentType,
};

#[derive(Serialize)]
struct TournamentOutput<'a> {
    #[serde(flatten)]
    tournament: &'a Tournament,
    standing: Standing,
}

/// Tally a comma-separated list of game outcomes like "w,l,t"
fn parse_games(games: &str) -> anyhow::Result<GameTally> {
    games
        .split(',')
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(|g| g.parse::<RoundOutcome>().map_err(anyhow::Error::from))
        .collect()
}

/// Work out a round result from either an explicit result or the games played
fn round_result(
    result: Option<RoundResult>,
    games: Option<&str>,
    format: MatchFormat,
) -> anyhow::Result<Option<RoundResult>> {
    match (result, games) {
        (Some(result), _) => Ok(Some(result)),
        (None, Some(games)) => {
            let tally = parse_games(games)?;
            let outcome = resolve_round(tally, format)?;
            tracing::debug!(?tally, %format, %outcome, "resolved round from games");
            Ok(Some(outcome.into()))
        }
        (None, None) => Ok(None),
    }
}

fn find_tournament(store: &impl Store, id: &str) -> anyhow::Result<Tournament> {
    store
        .get_tournament(id)?
        .ok_or_else(|| anyhow::anyhow!("Tournament not found: {id}"))
}

pub fn run_tournament_create(
    config: &Config,
    name: String,
    kind: TournamentType,
    format: MatchFormat,
    location: Option<String>,
    date: Option<NaiveDate>,
    deck: Vec<String>,
) -> anyhow::Result<()> {
    let store = init_store(config)?;

    let date = date.unwrap_or_else(|| Local::now().date_naive());
    let tournament = Tournament::new(name, kind, format, location, date, deck);
    let saved = store.create_tournament(&tournament)?;

    println!();
    println!("Created tournament '{}' ({})", saved.name, saved.id);
    println!();

    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn run_tournament_update(
    config: &Config,
    id: String,
    name: Option<String>,
    kind: Option<TournamentType>,
    format: Option<MatchFormat>,
    location: Option<String>,
    date: Option<NaiveDate>,
    deck: Vec<String>,
) -> anyhow::Result<()> {
    let store = init_store(config)?;
    let mut tournament = find_tournament(&store, &id)?;

    if let Some(name) = name {
        tournament.name = name;
    }
    if let Some(kind) = kind {
        tournament.kind = kind;
    }
    if let Some(format) = format {
        tournament.format = format;
    }
    if location.is_some() {
        tournament.location = location;
    }
    if let Some(date) = date {
        tournament.date = date;
    }
    if !deck.is_empty() {
        tournament.deck = deck;
    }

    let saved = store.update_tournament(&tournament)?;

    println!();
    println!("Updated tournament '{}' ({})", saved.name, saved.id);
    println!();

    Ok(())
}

pub fn run_tournament_list(config: &Config, json: bool) -> anyhow::Result<()> {
    let store = init_store(config)?;
    let tournaments = list_tournaments(&store)?;

    if json {
        let output: Vec<TournamentOutput<'_>> = tournaments
            .iter()
            .map(|d| TournamentOutput {
                tournament: &d.tournament,
                standing: d.standing,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if tournaments.is_empty() {
        println!("No tournaments found.");
        return Ok(());
    }

    println!();
    for display in &tournaments {
        println!("  {display}");
        println!("    {}", display.tournament.id);
    }
    println!();

    Ok(())
}

pub fn run_tournament_show(
    config: &Config,
    id: Option<String>,
    non_interactive: bool,
    json: bool,
) -> anyhow::Result<()> {
    let store = init_store(config)?;

    let Some(tournament) = get_or_pick_tournament(&store, id, non_interactive)? else {
        return Ok(());
    };
    let standing = Standing::from(&tournament);

    if json {
        let output = TournamentOutput {
            tournament: &tournament,
            standing,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!();
    println!("{}", tournament.name);
    println!("  Type:     {}", tournament.kind.label());
    println!("  Format:   {}", tournament.format);
    println!("  Date:     {}", tournament.date);
    if let Some(location) = &tournament.location {
        println!("  Location: {location}");
    }
    if !tournament.deck.is_empty() {
        println!("  Deck:     {}", team_label(&tournament.deck));
    }
    println!();

    if tournament.rounds.is_empty() {
        println!("  No rounds recorded.");
    } else {
        for (i, round) in tournament.rounds.iter().enumerate() {
            println!(
                "  Round {}: {} vs {}  ({})",
                i + 1,
                round.result.label(),
                team_label(&round.enemy_pokemon),
                round.id
            );
        }
    }

    println!();
    println!(
        "Record: {}  ({} rounds, {:.1}% win rate)",
        standing.record(),
        standing.total_rounds,
        standing.win_rate
    );
    println!();

    Ok(())
}

pub fn run_tournament_delete(
    config: &Config,
    id: Option<String>,
    non_interactive: bool,
    yes: bool,
) -> anyhow::Result<()> {
    let store = init_store(config)?;

    let Some(tournament) = get_or_pick_tournament(&store, id, non_interactive)? else {
        return Ok(());
    };

    let message = format!(
        "Delete tournament '{}' and its {} round(s)?",
        tournament.name,
        tournament.rounds.len()
    );
    if !confirm_action(&message, yes, non_interactive)? {
        println!("Cancelled.");
        return Ok(());
    }

    store.delete_tournament(&tournament.id)?;

    println!();
    println!("Deleted tournament '{}'", tournament.name);
    println!();

    Ok(())
}

pub fn run_round_add(
    config: &Config,
    tournament_id: String,
    enemy_pokemon: Vec<String>,
    result: Option<RoundResult>,
    games: Option<String>,
) -> anyhow::Result<()> {
    let store = init_store(config)?;
    let tournament = find_tournament(&store, &tournament_id)?;

    let Some(result) = round_result(result, games.as_deref(), tournament.format)? else {
        anyhow::bail!("Either --result or --games is required");
    };

    let round = TournamentRound::new(&tournament.id, enemy_pokemon, result);
    let saved = store.add_round(&tournament.id, &round)?;
    let standing = store.tournament_standing(&tournament.id)?.unwrap_or_default();

    println!();
    println!(
        "Recorded {} vs {}: {}",
        saved.result.label(),
        team_label(&saved.enemy_pokemon),
        saved.id
    );
    println!("Record: {}", standing.record());
    println!();

    Ok(())
}

pub fn run_round_update(
    config: &Config,
    tournament_id: String,
    round_id: String,
    enemy_pokemon: Vec<String>,
    result: Option<RoundResult>,
    games: Option<String>,
) -> anyhow::Result<()> {
    let store = init_store(config)?;
    let tournament = find_tournament(&store, &tournament_id)?;

    let mut round = tournament
        .rounds
        .iter()
        .find(|r| r.id == round_id)
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("Round not found: {round_id}"))?;

    if !enemy_pokemon.is_empty() {
        round.enemy_pokemon = enemy_pokemon;
    }
    if let Some(result) = round_result(result, games.as_deref(), tournament.format)? {
        round.result = result;
    }

    let saved = store.update_round(&tournament.id, &round)?;
    let standing = store.tournament_standing(&tournament.id)?.unwrap_or_default();

    println!();
    println!("Updated round {}: {}", saved.id, saved.result.label());
    println!("Record: {}", standing.record());
    println!();

    Ok(())
}

pub fn run_round_delete(
    config: &Config,
    tournament_id: String,
    round_id: String,
) -> anyhow::Result<()> {
    let store = init_store(config)?;
    let tournament = find_tournament(&store, &tournament_id)?;

    if !store.delete_round(&tournament.id, &round_id)? {
        anyhow::bail!("Round not found: {round_id}");
    }

    println!();
    println!("Deleted round {round_id}");
    println!();

    Ok(())
}
