//! Next-round pairing: greedy matching over the ranked standings.

use crate::logic::standings::compute_standings;
use crate::models::{Pairing, PlayerId, StandingsEntry, Tournament, TournamentError};

/// Match-history oracle consumed by the pairing engine.
///
/// Symmetric: the answer does not depend on which player won or on argument
/// order, only on whether the unordered pair appears in the match log.
pub trait MatchHistory {
    fn has_played(&self, a: PlayerId, b: PlayerId) -> bool;
}

impl MatchHistory for Tournament {
    fn has_played(&self, a: PlayerId, b: PlayerId) -> bool {
        self.matches.iter().any(|m| m.is_between(a, b))
    }
}

/// Generate the next round's pairings from a standings snapshot.
///
/// Walks the ranked list front-to-back: the highest-ranked unpaired player is
/// matched with the first lower-ranked player they have not yet played, so
/// opponents have equal or nearly-equal win records and rematches are never
/// proposed. Greedy, no backtracking.
///
/// With an odd number of entries the last unpaired player is left out of the
/// result; no bye is recorded.
///
/// Errors:
/// - `NotEnoughPlayers` if the standings have fewer than two entries.
/// - `UnpairableRemainder` if some player has already played every remaining
///   candidate, which a greedy pass cannot resolve. Callers choose whether to
///   relax the no-rematch rule or surface the error.
pub fn generate_pairings(
    standings: &[StandingsEntry],
    history: &impl MatchHistory,
) -> Result<Vec<Pairing>, TournamentError> {
    if standings.len() < 2 {
        return Err(TournamentError::NotEnoughPlayers);
    }

    let mut remaining = standings.to_vec();
    let mut pairings = Vec::with_capacity(remaining.len() / 2);

    while remaining.len() > 1 {
        let first = remaining.remove(0);
        let opponent_idx = remaining
            .iter()
            .position(|e| !history.has_played(first.player_id, e.player_id))
            .ok_or_else(|| TournamentError::UnpairableRemainder {
                player_id: first.player_id,
                name: first.name.clone(),
            })?;
        let second = remaining.remove(opponent_idx);
        pairings.push(Pairing::new(first, second));
    }

    Ok(pairings)
}

/// Compute standings and generate the next round's pairings in one step.
pub fn next_round_pairings(tournament: &Tournament) -> Result<Vec<Pairing>, TournamentError> {
    let standings = compute_standings(&tournament.players);
    generate_pairings(&standings, tournament)
}
