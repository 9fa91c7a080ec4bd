use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{MatchFormat, RoundOutcome};

/// Games won, lost and tied within a single round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameTally {
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
}

impl GameTally {
    #[must_use]
    pub const fn new(wins: u32, losses: u32, ties: u32) -> Self {
        Self { wins, losses, ties }
    }

    #[must_use]
    pub const fn games(&self) -> u32 {
        self.wins
            .saturating_add(self.losses)
            .saturating_add(self.ties)
    }

    pub fn record(&mut self, game: RoundOutcome) {
        match game {
            RoundOutcome::Win => self.wins += 1,
            RoundOutcome::Lose => self.losses += 1,
            RoundOutcome::Tie => self.ties += 1,
        }
    }
}

impl FromIterator<RoundOutcome> for GameTally {
    fn from_iter<I: IntoIterator<Item = RoundOutcome>>(iter: I) -> Self {
        let mut tally = Self::default();
        for game in iter {
            tally.record(game);
        }
        tally
    }
}

/// Decides a round from the games played in it.
///
/// Best-of-1 takes exactly one game and mirrors it. Best-of-3 takes one to three
/// games: two wins or two losses decide the set, a win or loss paired with a tie
/// carries the round, and a split with no decider is a tied round. Tallies outside
/// those bounds are rejected rather than read as a tie.
pub fn resolve_round(tally: GameTally, format: MatchFormat) -> Result<RoundOutcome> {
    let games = tally.games();
    if games == 0 || games > format.max_games() {
        return Err(invalid(tally, format));
    }

    let GameTally { wins, losses, ties } = tally;
    let outcome = match format {
        MatchFormat::Bo1 => single_game(tally),
        MatchFormat::Bo3 if games == 1 => single_game(tally),
        MatchFormat::Bo3 if wins >= 2 => RoundOutcome::Win,
        MatchFormat::Bo3 if losses >= 2 => RoundOutcome::Lose,
        // 1-1-0 and 1-1-1: the set was split and never decided
        MatchFormat::Bo3 if wins == 1 && losses == 1 => RoundOutcome::Tie,
        MatchFormat::Bo3 if wins == 1 && ties == 1 => RoundOutcome::Win,
        MatchFormat::Bo3 if losses == 1 && ties == 1 => RoundOutcome::Lose,
        MatchFormat::Bo3 => RoundOutcome::Tie,
    };
    Ok(outcome)
}

fn single_game(tally: GameTally) -> RoundOutcome {
    if tally.wins == 1 {
        RoundOutcome::Win
    } else if tally.losses == 1 {
        RoundOutcome::Lose
    } else {
        RoundOutcome::Tie
    }
}

fn invalid(tally: GameTally, format: MatchFormat) -> Error {
    Error::InvalidTally {
        format,
        wins: tally.wins,
        losses: tally.losses,
        ties: tally.ties,
    }
}
