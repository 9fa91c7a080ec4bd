use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Subcommand;

use crate::transfer::Encoding;
use crate::types::{GameResult, MatchFormat, RoundResult, SortBy, TournamentType, TurnOrder};

#[derive(Subcommand)]
pub enum MatchCommands {
    /// Log a new match
    Add {
        /// Pokemon on your side (repeat for a second one)
        #[arg(long = "my", required = true)]
        my_pokemon: Vec<String>,

        /// Pokemon on the opponent's side (repeat for a second one)
        #[arg(long = "enemy", required = true)]
        enemy_pokemon: Vec<String>,

        /// Match result: win or lose
        #[arg(long)]
        result: GameResult,

        /// Whether you went first or second
        #[arg(long = "turn", default_value = "first")]
        turn_order: TurnOrder,

        /// Free-text notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// Edit a logged match
    Update {
        /// Match ID to update
        #[arg(long)]
        id: String,

        /// Replace your side (repeat for a second one)
        #[arg(long = "my")]
        my_pokemon: Vec<String>,

        /// Replace the opponent's side (repeat for a second one)
        #[arg(long = "enemy")]
        enemy_pokemon: Vec<String>,

        #[arg(long)]
        result: Option<GameResult>,

        #[arg(long = "turn")]
        turn_order: Option<TurnOrder>,

        /// Replace the notes (pass an empty string to clear them)
        #[arg(long)]
        notes: Option<String>,
    },

    /// Delete one or more matches
    Delete {
        /// Match IDs to delete (omit to pick interactively)
        #[arg(long = "id")]
        ids: Vec<String>,

        /// Skip interactive prompts (requires --id)
        #[arg(long)]
        non_interactive: bool,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Show match history
    List {
        /// Only show matches involving a Pokemon whose name contains this text
        #[arg(long)]
        search: Option<String>,

        /// Sort by date (newest first) or result
        #[arg(long, default_value = "date")]
        sort: SortBy,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Replace the match list with the contents of a file
    Import {
        /// File to read
        file: PathBuf,

        /// File encoding (defaults to the file extension: .csv or JSON)
        #[arg(long)]
        format: Option<Encoding>,
    },

    /// Write the match list to a file
    Export {
        /// File to write
        file: PathBuf,

        /// File encoding (defaults to the file extension: .csv or JSON)
        #[arg(long)]
        format: Option<Encoding>,
    },
}

#[derive(Subcommand)]
pub enum TournamentCommands {
    /// Register a tournament
    Create {
        /// Tournament name
        #[arg(long)]
        name: String,

        /// regional, cup, local, challenge, international, worlds or other
        #[arg(long = "type", default_value = "regional")]
        kind: TournamentType,

        /// Games per round: bo1 or bo3
        #[arg(long, default_value = "bo3")]
        format: MatchFormat,

        #[arg(long)]
        location: Option<String>,

        /// Event date, YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Pokemon in the deck you played (repeatable)
        #[arg(long = "deck")]
        deck: Vec<String>,
    },

    /// Edit a tournament's details (rounds are left as they are)
    Update {
        /// Tournament ID to update
        #[arg(long)]
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long = "type")]
        kind: Option<TournamentType>,

        /// Games per round for rounds recorded from now on
        #[arg(long)]
        format: Option<MatchFormat>,

        /// Replace the location (pass an empty string to clear it)
        #[arg(long)]
        location: Option<String>,

        #[arg(long)]
        date: Option<NaiveDate>,

        /// Replace the deck list (repeatable)
        #[arg(long = "deck")]
        deck: Vec<String>,
    },

    /// List tournaments with their standings
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a tournament's rounds and standing
    Show {
        /// Tournament ID (omit to pick interactively)
        #[arg(long)]
        id: Option<String>,

        /// Skip interactive prompts (requires --id)
        #[arg(long)]
        non_interactive: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a tournament and all of its rounds
    Delete {
        /// Tournament ID (omit to pick interactively)
        #[arg(long)]
        id: Option<String>,

        /// Skip interactive prompts (requires --id)
        #[arg(long)]
        non_interactive: bool,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Manage rounds
    Round {
        #[command(subcommand)]
        command: RoundCommands,
    },
}

#[derive(Subcommand)]
pub enum RoundCommands {
    /// Record a round
    Add {
        #[arg(long)]
        tournament_id: String,

        /// Opponent's Pokemon (repeatable)
        #[arg(long = "enemy", required = true)]
        enemy_pokemon: Vec<String>,

        /// Round result: win, lose, tie, no_show or bye
        #[arg(long, conflicts_with = "games", required_unless_present = "games")]
        result: Option<RoundResult>,

        /// Per-game outcomes, e.g. "w,l,w", resolved with the tournament's format
        #[arg(long)]
        games: Option<String>,
    },

    /// Edit a recorded round
    Update {
        #[arg(long)]
        tournament_id: String,

        #[arg(long)]
        round_id: String,

        /// Replace the opponent's Pokemon (repeatable)
        #[arg(long = "enemy")]
        enemy_pokemon: Vec<String>,

        #[arg(long, conflicts_with = "games")]
        result: Option<RoundResult>,

        #[arg(long)]
        games: Option<String>,
    },

    /// Delete a round
    Delete {
        #[arg(long)]
        tournament_id: String,

        #[arg(long)]
        round_id: String,
    },
}

#[derive(Subcommand)]
pub enum BackupCommands {
    /// Write matches and tournaments to a single JSON file
    Export {
        file: PathBuf,
    },

    /// Restore matches and tournaments from a backup file
    Import {
        file: PathBuf,

        /// Skip interactive prompts
        #[arg(long)]
        non_interactive: bool,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum PokemonCommands {
    /// Print the artwork URL for a Pokemon
    Sprite {
        name: String,
    },

    /// List Pokemon names known to the public API
    List {
        /// Only show names containing this text
        #[arg(long)]
        search: Option<String>,
    },

    /// Show details for a Pokemon from the public API
    Info {
        name: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
