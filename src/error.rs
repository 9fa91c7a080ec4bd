use thiserror::Error;

use crate::types::MatchFormat;

#[derive(Debug, Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("not found")]
    NotFound,

    #[error("{0}")]
    Validation(String),

    #[error("invalid {format} game tally: {wins} won, {losses} lost, {ties} tied")]
    InvalidTally {
        format: MatchFormat,
        wins: u32,
        losses: u32,
        ties: u32,
    },

    #[error("import rejected: {0}")]
    Import(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
