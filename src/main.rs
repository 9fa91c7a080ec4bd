use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use matchlog::cli::{
    BackupCommands, MatchCommands, PokemonCommands, RoundCommands, TournamentCommands,
    load_config, run_backup_export, run_backup_import, run_match_add, run_match_delete,
    run_match_export, run_match_import, run_match_list, run_match_update, run_pokemon_info,
    run_pokemon_list, run_pokemon_sprite, run_round_add, run_round_delete, run_round_update,
    run_stats, run_tournament_create, run_tournament_delete, run_tournament_list,
    run_tournament_show, run_tournament_update,
};

#[derive(Parser)]
#[command(name = "matchlog")]
#[command(about = "Track Pokemon TCG matches, tournaments and matchup win rates", long_about = None)]
struct Cli {
    /// Directory holding the match and tournament files
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log and manage individual matches
    Match {
        #[command(subcommand)]
        command: MatchCommands,
    },

    /// Show the matchup win-rate matrix
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage tournaments and their rounds
    Tournament {
        #[command(subcommand)]
        command: TournamentCommands,
    },

    /// Back up or restore all stored data
    Backup {
        #[command(subcommand)]
        command: BackupCommands,
    },

    /// Look up Pokemon names, details and artwork
    Pokemon {
        #[command(subcommand)]
        command: PokemonCommands,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("matchlog=warn".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.data_dir, cli.config)?;

    match cli.command {
        Commands::Match { command } => match command {
            MatchCommands::Add {
                my_pokemon,
                enemy_pokemon,
                result,
                turn_order,
                notes,
            } => run_match_add(&config, my_pokemon, enemy_pokemon, result, turn_order, notes)?,
            MatchCommands::Update {
                id,
                my_pokemon,
                enemy_pokemon,
                result,
                turn_order,
                notes,
            } => run_match_update(
                &config,
                id,
                my_pokemon,
                enemy_pokemon,
                result,
                turn_order,
                notes,
            )?,
            MatchCommands::Delete {
                ids,
                non_interactive,
                yes,
            } => run_match_delete(&config, ids, non_interactive, yes)?,
            MatchCommands::List { search, sort, json } => {
                run_match_list(&config, search, sort, json)?;
            }
            MatchCommands::Import { file, format } => run_match_import(&config, &file, format)?,
            MatchCommands::Export { file, format } => run_match_export(&config, &file, format)?,
        },
        Commands::Stats { json } => run_stats(&config, json)?,
        Commands::Tournament { command } => match command {
            TournamentCommands::Create {
                name,
                kind,
                format,
                location,
                date,
                deck,
            } => run_tournament_create(&config, name, kind, format, location, date, deck)?,
            TournamentCommands::Update {
                id,
                name,
                kind,
                format,
                location,
                date,
                deck,
            } => run_tournament_update(&config, id, name, kind, format, location, date, deck)?,
            TournamentCommands::List { json } => run_tournament_list(&config, json)?,
            TournamentCommands::Show {
                id,
                non_interactive,
                json,
            } => run_tournament_show(&config, id, non_interactive, json)?,
            TournamentCommands::Delete {
                id,
                non_interactive,
                yes,
            } => run_tournament_delete(&config, id, non_interactive, yes)?,
            TournamentCommands::Round { command } => match command {
                RoundCommands::Add {
                    tournament_id,
                    enemy_pokemon,
                    result,
                    games,
                } => run_round_add(&config, tournament_id, enemy_pokemon, result, games)?,
                RoundCommands::Update {
                    tournament_id,
                    round_id,
                    enemy_pokemon,
                    result,
                    games,
                } => run_round_update(
                    &config,
                    tournament_id,
                    round_id,
                    enemy_pokemon,
                    result,
                    games,
                )?,
                RoundCommands::Delete {
                    tournament_id,
                    round_id,
                } => run_round_delete(&config, tournament_id, round_id)?,
            },
        },
        Commands::Backup { command } => match command {
            BackupCommands::Export { file } => run_backup_export(&config, &file)?,
            BackupCommands::Import {
                file,
                non_interactive,
                yes,
            } => run_backup_import(&config, &file, non_interactive, yes)?,
        },
        Commands::Pokemon { command } => match command {
            PokemonCommands::Sprite { name } => run_pokemon_sprite(&name)?,
            PokemonCommands::List { search } => run_pokemon_list(&config, search)?,
            PokemonCommands::Info { name, json } => run_pokemon_info(&config, &name, json)?,
        },
    }

    Ok(())
}
