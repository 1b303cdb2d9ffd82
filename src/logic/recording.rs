//! Match recording: one transactional operation per reported outcome.

use crate::models::{MatchId, MatchRecord, PlayerId, Tournament, TournamentError};

/// Record the outcome of a single completed match.
///
/// Appends the match record and updates both players' counters as one
/// operation: all validation happens before any mutation, so a failed report
/// leaves the tournament untouched.
pub fn record_match(
    tournament: &mut Tournament,
    winner: PlayerId,
    loser: PlayerId,
) -> Result<MatchId, TournamentError> {
    if winner == loser {
        return Err(TournamentError::SelfMatch(winner));
    }
    if tournament.get_player(winner).is_none() {
        return Err(TournamentError::PlayerNotFound(winner));
    }
    if tournament.get_player(loser).is_none() {
        return Err(TournamentError::PlayerNotFound(loser));
    }

    let record = MatchRecord::new(winner, loser);
    let id = record.id;
    tournament.matches.push(record);
    if let Some(p) = tournament.get_player_mut(winner) {
        p.add_win();
    }
    if let Some(p) = tournament.get_player_mut(loser) {
        p.add_loss();
    }
    Ok(id)
}
