//! Integration tests for pairing generation: greedy matching, rematch
//! avoidance, and the explicit failure branches.

use std::collections::HashSet;
use swiss_tournament_web::{
    compute_standings, generate_pairings, next_round_pairings, record_match, MatchHistory, Pairing,
    Player, PlayerId, StandingsEntry, Tournament, TournamentError,
};

/// Oracle stub: an explicit list of unordered pairs that have already met.
struct PlayedPairs(Vec<(PlayerId, PlayerId)>);

impl MatchHistory for PlayedPairs {
    fn has_played(&self, a: PlayerId, b: PlayerId) -> bool {
        self.0
            .iter()
            .any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
    }
}

fn standings_for(records: &[(&str, u32)]) -> Vec<StandingsEntry> {
    let players: Vec<Player> = records
        .iter()
        .map(|&(name, wins)| Player::with_record(name, wins, 0))
        .collect();
    compute_standings(&players)
}

fn names(pairings: &[Pairing]) -> Vec<(String, String)> {
    pairings
        .iter()
        .map(|p| (p.player_1.name.clone(), p.player_2.name.clone()))
        .collect()
}

#[test]
fn no_history_pairs_adjacent_ranks() {
    // P1 and P2 share the top win count, P3 and P4 the next: greedy pairs
    // within the rank groups when nobody has met yet.
    let standings = standings_for(&[("P1", 2), ("P2", 2), ("P3", 1), ("P4", 1)]);
    let pairings = generate_pairings(&standings, &PlayedPairs(Vec::new())).unwrap();
    assert_eq!(
        names(&pairings),
        [
            ("P1".to_string(), "P2".to_string()),
            ("P3".to_string(), "P4".to_string())
        ]
    );
}

#[test]
fn prior_opponents_are_skipped() {
    let standings = standings_for(&[("P1", 0), ("P2", 0), ("P3", 0), ("P4", 0)]);
    let played = PlayedPairs(vec![(standings[0].player_id, standings[1].player_id)]);
    let pairings = generate_pairings(&standings, &played).unwrap();
    assert_eq!(
        names(&pairings),
        [
            ("P1".to_string(), "P3".to_string()),
            ("P2".to_string(), "P4".to_string())
        ]
    );
}

#[test]
fn odd_roster_leaves_last_player_out() {
    // Known limitation: the trailing unpaired player is dropped, no bye.
    let standings = standings_for(&[("P1", 2), ("P2", 1), ("P3", 0)]);
    let pairings = generate_pairings(&standings, &PlayedPairs(Vec::new())).unwrap();
    assert_eq!(names(&pairings), [("P1".to_string(), "P2".to_string())]);
    assert!(!pairings.iter().any(|p| p.involves(standings[2].player_id)));
}

#[test]
fn even_roster_covers_every_player_exactly_once() {
    let records: Vec<(String, u32)> = (0..8).map(|i| (format!("P{i}"), i as u32 / 2)).collect();
    let refs: Vec<(&str, u32)> = records.iter().map(|(n, w)| (n.as_str(), *w)).collect();
    let standings = standings_for(&refs);
    let pairings = generate_pairings(&standings, &PlayedPairs(Vec::new())).unwrap();
    assert_eq!(pairings.len(), 4);
    let mut seen = HashSet::new();
    for p in &pairings {
        assert!(seen.insert(p.player_1.player_id));
        assert!(seen.insert(p.player_2.player_id));
    }
    assert_eq!(seen.len(), 8);
}

#[test]
fn pairings_never_repeat_a_played_match() {
    let standings = standings_for(&[("P1", 1), ("P2", 1), ("P3", 0), ("P4", 0)]);
    let played = PlayedPairs(vec![
        (standings[0].player_id, standings[1].player_id),
        (standings[2].player_id, standings[3].player_id),
    ]);
    let pairings = generate_pairings(&standings, &played).unwrap();
    for p in &pairings {
        assert!(!played.has_played(p.player_1.player_id, p.player_2.player_id));
    }
}

#[test]
fn fewer_than_two_players_is_no_pairing_possible() {
    assert!(matches!(
        generate_pairings(&[], &PlayedPairs(Vec::new())),
        Err(TournamentError::NotEnoughPlayers)
    ));
    let standings = standings_for(&[("P1", 0)]);
    assert!(matches!(
        generate_pairings(&standings, &PlayedPairs(Vec::new())),
        Err(TournamentError::NotEnoughPlayers)
    ));
}

#[test]
fn everyone_played_everyone_reports_unpairable_remainder() {
    let standings = standings_for(&[("P1", 3), ("P2", 2), ("P3", 1), ("P4", 0)]);
    let mut all_pairs = Vec::new();
    for i in 0..standings.len() {
        for j in (i + 1)..standings.len() {
            all_pairs.push((standings[i].player_id, standings[j].player_id));
        }
    }
    let result = generate_pairings(&standings, &PlayedPairs(all_pairs));
    match result {
        Err(TournamentError::UnpairableRemainder { player_id, name }) => {
            assert_eq!(player_id, standings[0].player_id);
            assert_eq!(name, "P1");
        }
        other => panic!("expected unpairable remainder, got {:?}", other),
    }
}

#[test]
fn pairing_does_not_mutate_the_tournament() {
    let mut t = Tournament::new();
    for name in ["P1", "P2", "P3", "P4"] {
        t.register_player(name).unwrap();
    }
    let before = t.clone();
    next_round_pairings(&t).unwrap();
    assert_eq!(t.players, before.players);
    assert_eq!(t.matches, before.matches);
}

#[test]
fn next_round_skips_recorded_opponents() {
    let mut t = Tournament::new();
    let ids: Vec<PlayerId> = ["P1", "P2", "P3", "P4"]
        .iter()
        .map(|name| t.register_player(*name).unwrap())
        .collect();
    record_match(&mut t, ids[0], ids[1]).unwrap();

    // Standings: P1 (1 win), then P2, P3, P4 in registration order. P1 has
    // already met P2, so the round is (P1,P3) and (P2,P4).
    let pairings = next_round_pairings(&t).unwrap();
    assert_eq!(
        names(&pairings),
        [
            ("P1".to_string(), "P3".to_string()),
            ("P2".to_string(), "P4".to_string())
        ]
    );
}
