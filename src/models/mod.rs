//! Data structures for the tournament: players, match records, pairings.

mod player;
mod record;
mod tournament;

pub use player::{Player, PlayerId, StandingsEntry};
pub use record::{MatchId, MatchRecord, Pairing};
pub use tournament::{Tournament, TournamentError, TournamentId};
