//! Swiss-system tournament web app: library with models and business logic.

pub mod logic;
pub mod models;

pub use logic::{
    compute_standings, generate_pairings, import_players_csv, next_round_pairings, record_match,
    MatchHistory,
};
pub use models::{
    MatchId, MatchRecord, Pairing, Player, PlayerId, StandingsEntry, Tournament, TournamentError,
    TournamentId,
};
