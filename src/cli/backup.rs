use std::fs;
use std::path::Path;

use super::init_store;
use super::pickers::confirm_action;
use crate::config::Config;
use crate::store::Store;
use crate::transfer::Backup;

pub fn run_backup_export(config: &Config, file: &Path) -> anyhow::Result<()> {
    let store = init_store(config)?;

    let backup = Backup::new(store.list_matchups()?, store.list_tournaments()?);
    fs::write(file, backup.to_json()?)
        .map_err(|e| anyhow::anyhow!("Failed to write {}: {e}", file.display()))?;

    println!();
    println!(
        "Backed up {} match(es) and {} tournament(s) to {}",
        backup.matchups.as_ref().map_or(0, Vec::len),
        backup.tournaments.as_ref().map_or(0, Vec::len),
        file.display()
    );
    println!();

    Ok(())
}

pub fn run_backup_import(
    config: &Config,
    file: &Path,
    non_interactive: bool,
    yes: bool,
) -> anyhow::Result<()> {
    let store = init_store(config)?;

    let content = fs::read_to_string(file)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", file.display()))?;
    let backup = Backup::from_json(&content)?;

    if backup.matchups.is_none() && backup.tournaments.is_none() {
        anyhow::bail!("{} contains no matches or tournaments", file.display());
    }

    if !confirm_action(
        "Restoring replaces the stored data found in the backup. Continue?",
        yes,
        non_interactive,
    )? {
        println!("Cancelled.");
        return Ok(());
    }

    println!();
    if let Some(matchups) = &backup.matchups {
        store.replace_matchups(matchups)?;
        println!("Restored {} match(es)", matchups.len());
    }
    if let Some(tournaments) = &backup.tournaments {
        store.replace_tournaments(tournaments)?;
        println!("Restored {} tournament(s)", tournaments.len());
    }
    if let Some(date) = backup.export_date {
        println!("Backup taken {}", date.format("%Y-%m-%d %H:%M UTC"));
    }
    println!();

    Ok(())
}
