//! Player and StandingsEntry data structures.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (used in match records and lookups).
pub type PlayerId = Uuid;

/// One row of the standings: a player's rank-relevant record (for API / display).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct StandingsEntry {
    pub player_id: PlayerId,
    pub name: String,
    pub wins: u32,
    pub matches_played: u32,
}

impl StandingsEntry {
    pub fn from_player(p: &Player) -> Self {
        Self {
            player_id: p.id,
            name: p.name.clone(),
            wins: p.wins,
            matches_played: p.matches_played(),
        }
    }
}

/// A registered player. Counters move only when a match outcome is recorded.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub wins: u32,
    pub losses: u32,
}

impl Player {
    /// Create a new player with the given name and a zeroed record.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            wins: 0,
            losses: 0,
        }
    }

    /// Create a player with a preexisting record (seeding, tests).
    pub fn with_record(name: impl Into<String>, wins: u32, losses: u32) -> Self {
        Self {
            wins,
            losses,
            ..Self::new(name)
        }
    }

    /// Matches played so far (derived, never stored).
    pub fn matches_played(&self) -> u32 {
        self.wins + self.losses
    }

    /// Current standings row for this player.
    pub fn standings_entry(&self) -> StandingsEntry {
        StandingsEntry::from_player(self)
    }

    pub(crate) fn add_win(&mut self) {
        self.wins += 1;
    }

    pub(crate) fn add_loss(&mut self) {
        self.losses += 1;
    }

    pub(crate) fn reset_record(&mut self) {
        self.wins = 0;
        self.losses = 0;
    }
}
