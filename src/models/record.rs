//! Match records and next-round pairings.

use crate::models::player::{PlayerId, StandingsEntry};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a recorded match.
pub type MatchId = Uuid;

/// One completed match: who beat whom. Append-only; immutable once recorded.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: MatchId,
    pub winner: PlayerId,
    pub loser: PlayerId,
    pub recorded_at: DateTime<Utc>,
}

impl MatchRecord {
    pub fn new(winner: PlayerId, loser: PlayerId) -> Self {
        Self {
            id: Uuid::new_v4(),
            winner,
            loser,
            recorded_at: Utc::now(),
        }
    }

    /// True if this record is between the given unordered pair.
    pub fn is_between(&self, a: PlayerId, b: PlayerId) -> bool {
        (self.winner == a && self.loser == b) || (self.winner == b && self.loser == a)
    }
}

/// A proposed next-round match between two standings entries.
/// Transient: recomputed each round, never stored.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Pairing {
    pub player_1: StandingsEntry,
    pub player_2: StandingsEntry,
}

impl Pairing {
    pub fn new(player_1: StandingsEntry, player_2: StandingsEntry) -> Self {
        Self { player_1, player_2 }
    }

    /// True if either side of the pairing is the given player.
    pub fn involves(&self, id: PlayerId) -> bool {
        self.player_1.player_id == id || self.player_2.player_id == id
    }
}
