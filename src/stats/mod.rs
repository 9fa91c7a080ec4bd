//! Pure computations over logged records: the matchup matrix, round resolution
//! and tournament standings. Nothing here touches storage.

mod aggregate;
mod round;
mod standing;

pub use aggregate::{
    COMPOSITION_DELIMITER, CellSummary, MatchupMatrix, composition_key, split_composition_key,
};
pub use round::{GameTally, resolve_round};
pub use standing::Standing;
