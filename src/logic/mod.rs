//! Tournament business logic: standings, pairing, recording, import.

mod import;
mod pairing;
mod recording;
mod standings;

pub use import::import_players_csv;
pub use pairing::{generate_pairings, next_round_pairings, MatchHistory};
pub use recording::record_match;
pub use standings::compute_standings;
