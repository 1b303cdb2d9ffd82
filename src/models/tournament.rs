//! Tournament: the player roster and append-only match log.

use crate::models::player::{Player, PlayerId};
use crate::models::record::MatchRecord;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// Fewer than two players in the standings when pairings were requested.
    NotEnoughPlayers,
    /// A player ran out of unplayed opponents while pairing the round.
    UnpairableRemainder { player_id: PlayerId, name: String },
    /// Player not found in the roster.
    PlayerNotFound(PlayerId),
    /// Reported winner and loser are the same player.
    SelfMatch(PlayerId),
    /// Player name is empty after trimming.
    EmptyPlayerName,
    /// Bulk player import could not be parsed.
    InvalidImport(String),
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::NotEnoughPlayers => {
                write!(f, "Need at least 2 players to generate pairings")
            }
            TournamentError::UnpairableRemainder { name, .. } => {
                write!(f, "No unplayed opponent left for {}", name)
            }
            TournamentError::PlayerNotFound(_) => write!(f, "Player not found"),
            TournamentError::SelfMatch(_) => {
                write!(f, "Winner and loser must be different players")
            }
            TournamentError::EmptyPlayerName => write!(f, "Player name must not be empty"),
            TournamentError::InvalidImport(reason) => write!(f, "Import failed: {}", reason),
        }
    }
}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Full tournament state: registered players and every recorded match.
///
/// Standings and pairings are derived views over this data; they are computed
/// on demand and never stored back.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    /// Registered players, in registration order.
    pub players: Vec<Player>,
    /// All recorded match results, append-only.
    pub matches: Vec<MatchRecord>,
}

impl Tournament {
    /// Create a new tournament with an empty roster.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            players: Vec::new(),
            matches: Vec::new(),
        }
    }

    /// Create a tournament with an initial roster (e.g. from import or tests).
    pub fn with_players(players: Vec<Player>) -> Self {
        Self {
            players,
            ..Self::new()
        }
    }

    /// Register a player. Names are trimmed and must be non-empty; duplicate
    /// display names are allowed since identity is the id.
    pub fn register_player(&mut self, name: impl Into<String>) -> Result<PlayerId, TournamentError> {
        let name = name.into();
        let name_trimmed = name.trim();
        if name_trimmed.is_empty() {
            return Err(TournamentError::EmptyPlayerName);
        }
        let player = Player::new(name_trimmed);
        let id = player.id;
        self.players.push(player);
        Ok(id)
    }

    /// Remove a player from the roster by id.
    pub fn remove_player(&mut self, player_id: PlayerId) -> Result<(), TournamentError> {
        let idx = self
            .players
            .iter()
            .position(|p| p.id == player_id)
            .ok_or(TournamentError::PlayerNotFound(player_id))?;
        self.players.remove(idx);
        Ok(())
    }

    /// Number of registered players.
    pub fn count_players(&self) -> usize {
        self.players.len()
    }

    /// Look up a player by id.
    pub fn get_player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub(crate) fn get_player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    /// Remove every match record and zero every player's win/loss counters,
    /// keeping the roster intact.
    pub fn clear_matches(&mut self) {
        self.matches.clear();
        for p in &mut self.players {
            p.reset_record();
        }
    }

    /// Remove every player from the roster. Match records are a separate
    /// concern; callers purging a whole tournament clear matches first.
    pub fn clear_players(&mut self) {
        self.players.clear();
    }
}

impl Default for Tournament {
    fn default() -> Self {
        Self::new()
    }
}
