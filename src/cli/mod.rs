mod backup;
mod commands;
mod matchup;
pub mod pickers;
pub mod pokeapi;
mod pokemon;
mod stats;
mod tournament;

pub use backup::{run_backup_export, run_backup_import};
pub use commands::{
    BackupCommands, MatchCommands, PokemonCommands, RoundCommands, TournamentCommands,
};
pub use matchup::{
    run_match_add, run_match_delete, run_match_export, run_match_import, run_match_list,
    run_match_update,
};
pub use pokemon::{run_pokemon_info, run_pokemon_list, run_pokemon_sprite};
pub use stats::run_stats;
pub use tournament::{
    run_round_add, run_round_delete, run_round_update, run_tournament_create,
    run_tournament_delete, run_tournament_list, run_tournament_show, run_tournament_update,
};

use std::path::PathBuf;

use crate::config::Config;
use crate::store::JsonStore;

/// Load configuration, letting command-line flags override the file
pub fn load_config(
    data_dir: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> anyhow::Result<Config> {
    let mut config = match config_path.or_else(Config::default_path) {
        Some(path) => Config::load(&path)?,
        None => Config::default(),
    };

    if let Some(dir) = data_dir {
        config.data_dir = dir;
    }

    tracing::debug!("Using data directory {}", config.data_dir.display());
    Ok(config)
}

/// Open the store in the configured data directory, creating it if needed
pub fn init_store(config: &Config) -> anyhow::Result<JsonStore> {
    JsonStore::new(&config.data_dir).map_err(|e| {
        anyhow::anyhow!(
            "Failed to open data directory {}: {e}",
            config.data_dir.display()
        )
    })
}
