//! Integration tests for appending matches when a team joins late.

use foosball_league_web::{generate_late_join_matches, PlayerId, Team, TournamentId};

fn team(name: &str) -> Team {
    Team::new(name, vec![PlayerId::new_v4()])
}

#[test]
fn single_round_appends_one_round_per_existing_team() {
    let existing = vec![team("A"), team("B"), team("C")];
    let newcomer = team("D");
    let tid = TournamentId::new_v4();
    let matches = generate_late_join_matches(tid, &newcomer, &existing, 3, false);

    assert_eq!(matches.len(), 3);
    assert_eq!(matches.iter().map(|m| m.round).collect::<Vec<_>>(), vec![4, 5, 6]);
    for (m, opponent) in matches.iter().zip(&existing) {
        assert_eq!(m.home_players, newcomer.players);
        assert_eq!(m.away_players, opponent.players);
        assert_eq!(m.tournament_id, Some(tid));
    }
}

#[test]
fn double_round_adds_return_match_in_next_round() {
    let existing = vec![team("A"), team("B")];
    let newcomer = team("C");
    let matches = generate_late_join_matches(TournamentId::new_v4(), &newcomer, &existing, 6, true);

    assert_eq!(matches.len(), 4);
    assert_eq!(matches.iter().map(|m| m.round).collect::<Vec<_>>(), vec![7, 8, 9, 10]);
    assert_eq!(matches[0].home_players, newcomer.players);
    assert_eq!(matches[1].home_players, existing[0].players);
    assert_eq!(matches[1].away_players, newcomer.players);
    assert_eq!(matches[3].home_players, existing[1].players);
}

#[test]
fn starts_at_round_one_when_nothing_is_scheduled() {
    let matches = generate_late_join_matches(TournamentId::new_v4(), &team("B"), &[team("A")], 0, false);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].round, 1);
}

#[test]
fn no_existing_teams_means_no_matches() {
    assert!(generate_late_join_matches(TournamentId::new_v4(), &team("A"), &[], 4, true).is_empty());
}
