//! Standings: ranked view of the roster by wins.

use crate::models::{Player, StandingsEntry};

/// Compute the current standings from the roster.
///
/// Sorted by wins descending. The sort is stable, so players with equal wins
/// keep their registration order; no secondary tiebreak is applied.
pub fn compute_standings(players: &[Player]) -> Vec<StandingsEntry> {
    let mut entries: Vec<StandingsEntry> =
        players.iter().map(StandingsEntry::from_player).collect();
    entries.sort_by(|a, b| b.wins.cmp(&a.wins));
    entries
}
