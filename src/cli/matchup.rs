use std::fs;
use std::path::Path;

use super::init_store;
use super::pickers::{MatchupDisplay, confirm_action, pick_matchups, team_label};
use crate::config::Config;
use crate::store::Store;
use crate::transfer::{Encoding, decode_matchups, encode_matchups};
use crate::types::{GameResult, Matchup, SortBy, TurnOrder, filter_matchups, sort_matchups};

pub fn run_match_add(
    config: &Config,
    my_pokemon: Vec<String>,
    enemy_pokemon: Vec<String>,
    result: GameResult,
    turn_order: TurnOrder,
    notes: Option<String>,
) -> anyhow::Result<()> {
    let store = init_store(config)?;

    let matchup = Matchup::new(my_pokemon, enemy_pokemon, result, turn_order, notes);
    let saved = store.create_matchup(&matchup)?;

    println!();
    println!(
        "Logged {} vs {} ({}): {}",
        team_label(&saved.my_pokemon),
        team_label(&saved.enemy_pokemon),
        saved.result,
        saved.id
    );
    println!();

    Ok(())
}

pub fn run_match_update(
    config: &Config,
    id: String,
    my_pokemon: Vec<String>,
    enemy_pokemon: Vec<String>,
    result: Option<GameResult>,
    turn_order: Option<TurnOrder>,
    notes: Option<String>,
) -> anyhow::Result<()> {
    let store = init_store(config)?;

    let mut matchup = store
        .get_matchup(&id)?
        .ok_or_else(|| anyhow::anyhow!("Match not found: {id}"))?;

    if !my_pokemon.is_empty() {
        matchup.my_pokemon = my_pokemon;
    }
    if !enemy_pokemon.is_empty() {
        matchup.enemy_pokemon = enemy_pokemon;
    }
    if let Some(result) = result {
        matchup.result = result;
    }
    if let Some(turn_order) = turn_order {
        matchup.turn_order = turn_order;
    }
    if notes.is_some() {
        matchup.notes = notes;
    }

    let saved = store.update_matchup(&matchup)?;

    println!();
    println!("Updated match {}", saved.id);
    println!();

    Ok(())
}

pub fn run_match_delete(
    config: &Config,
    ids: Vec<String>,
    non_interactive: bool,
    yes: bool,
) -> anyhow::Result<()> {
    let store = init_store(config)?;

    let ids = if !ids.is_empty() {
        for id in &ids {
            if store.get_matchup(id)?.is_none() {
                anyhow::bail!("Match not found: {id}");
            }
        }
        ids
    } else if non_interactive {
        anyhow::bail!("--id is required in non-interactive mode");
    } else {
        let picked = pick_matchups(&store)?;
        if picked.is_empty() {
            return Ok(());
        }
        picked.into_iter().map(|m| m.id).collect()
    };

    let message = if ids.len() == 1 {
        "Delete 1 match?".to_string()
    } else {
        format!("Delete {} matches?", ids.len())
    };
    if !confirm_action(&message, yes, non_interactive)? {
        println!("Cancelled.");
        return Ok(());
    }

    let removed = store.delete_matchups(&ids)?;

    println!();
    println!("Deleted {removed} match(es)");
    println!();

    Ok(())
}

pub fn run_match_list(
    config: &Config,
    search: Option<String>,
    sort: SortBy,
    json: bool,
) -> anyhow::Result<()> {
    let store = init_store(config)?;
    let all = store.list_matchups()?;

    let mut matchups = filter_matchups(&all, search.as_deref().unwrap_or_default());
    sort_matchups(&mut matchups, sort);

    if json {
        println!("{}", serde_json::to_string_pretty(&matchups)?);
        return Ok(());
    }

    if matchups.is_empty() {
        println!("No matches found.");
        return Ok(());
    }

    println!();
    for matchup in matchups {
        let display = MatchupDisplay {
            matchup: matchup.clone(),
        };
        println!("  {display}");
        println!("    {}  turn: {}", matchup.id, matchup.turn_order);
        if let Some(notes) = &matchup.notes {
            println!("    {notes}");
        }
    }
    println!();

    Ok(())
}

pub fn run_match_import(
    config: &Config,
    file: &Path,
    format: Option<Encoding>,
) -> anyhow::Result<()> {
    let store = init_store(config)?;

    let encoding = format.unwrap_or_else(|| Encoding::from_path(file));
    let content = fs::read_to_string(file)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", file.display()))?;

    // A rejected file leaves the stored history untouched
    let matchups = decode_matchups(&content, encoding)?;
    store.replace_matchups(&matchups)?;

    tracing::info!("Imported {} matches from {}", matchups.len(), file.display());

    println!();
    println!("Imported {} match(es) from {}", matchups.len(), file.display());
    println!();

    Ok(())
}

pub fn run_match_export(
    config: &Config,
    file: &Path,
    format: Option<Encoding>,
) -> anyhow::Result<()> {
    let store = init_store(config)?;

    let encoding = format.unwrap_or_else(|| Encoding::from_path(file));
    let matchups = store.list_matchups()?;
    let content = encode_matchups(&matchups, encoding)?;

    fs::write(file, content)
        .map_err(|e| anyhow::anyhow!("Failed to write {}: {e}", file.display()))?;

    println!();
    println!(
        "Exported {} match(es) to {} as {encoding}",
        matchups.len(),
        file.display()
    );
    println!();

    Ok(())
}
