//! Integration tests for the tournament lifecycle: registration, start, late joins, results.

use foosball_league_web::{
    add_late_team, record_match_result, standings_to_csv, start_tournament, CardEffect, CardUsage,
    DrawOrder, MatchId, MatchStatus, ScoringRules, TeamId, Tournament, TournamentError,
    TournamentState, TournamentType,
};

/// Tournament in Setup with `n` doubles teams named T0, T1, ...
fn tournament_with_teams(n: usize, double_round: bool) -> Tournament {
    let mut t = Tournament::new("Office league", TournamentType::RoundRobin, double_round);
    for i in 0..n {
        let p1 = t.add_player(format!("P{i}a")).unwrap();
        let p2 = t.add_player(format!("P{i}b")).unwrap();
        t.add_team(&format!("T{i}"), &[p1, p2]).unwrap();
    }
    t
}

fn match_between(t: &Tournament, home: TeamId, away: TeamId) -> MatchId {
    let home = t.get_team(home).unwrap();
    let away = t.get_team(away).unwrap();
    t.matches
        .iter()
        .find(|m| m.home_players == home.players && m.away_players == away.players)
        .map(|m| m.id)
        .expect("match exists")
}

#[test]
fn player_names_are_unique_and_non_empty() {
    let mut t = Tournament::new("L", TournamentType::RoundRobin, false);
    t.add_player("Alice").unwrap();
    assert_eq!(t.add_player("alice"), Err(TournamentError::DuplicatePlayerName));
    assert_eq!(t.add_player("   "), Err(TournamentError::EmptyName));
}

#[test]
fn team_registration_is_validated() {
    let mut t = Tournament::new("L", TournamentType::RoundRobin, false);
    let a = t.add_player("A").unwrap();
    let b = t.add_player("B").unwrap();
    t.add_team("Reds", &[a]).unwrap();

    assert_eq!(t.add_team("Blues", &[]), Err(TournamentError::EmptyTeam));
    assert_eq!(t.add_team("reds", &[b]), Err(TournamentError::DuplicateTeamName));
    assert_eq!(t.add_team("Blues", &[a]), Err(TournamentError::PlayerAlreadyOnTeam(a)));
    assert_eq!(t.add_team("Blues", &[b, b]), Err(TournamentError::PlayerAlreadyOnTeam(b)));
    let unknown = uuid::Uuid::new_v4();
    assert_eq!(t.add_team("Blues", &[unknown]), Err(TournamentError::PlayerNotFound(unknown)));
    assert_eq!(t.teams.len(), 1);
}

#[test]
fn start_requires_two_teams_and_leaves_setup_untouched() {
    let mut t = tournament_with_teams(1, false);
    assert_eq!(
        start_tournament(&mut t, DrawOrder::Registration),
        Err(TournamentError::NotEnoughTeams { required: 2, found: 1 })
    );
    assert_eq!(t.state, TournamentState::Setup);
    assert!(t.matches.is_empty());
}

#[test]
fn elimination_tournaments_cannot_be_scheduled() {
    let mut t = tournament_with_teams(4, false);
    t.tournament_type = TournamentType::Elimination;
    assert_eq!(
        start_tournament(&mut t, DrawOrder::Registration),
        Err(TournamentError::UnsupportedType)
    );
}

#[test]
fn start_generates_the_schedule() {
    let mut t = tournament_with_teams(4, true);
    start_tournament(&mut t, DrawOrder::Registration).unwrap();
    assert_eq!(t.state, TournamentState::InProgress);
    assert_eq!(t.matches.len(), 12);
    assert_eq!(t.max_round(), 6);
    assert!(t.matches.iter().all(|m| m.tournament_id == Some(t.id)));
    assert_eq!(start_tournament(&mut t, DrawOrder::Registration), Err(TournamentError::InvalidState));
}

#[test]
fn random_draw_keeps_every_team() {
    let mut t = tournament_with_teams(6, false);
    let mut before: Vec<TeamId> = t.teams.iter().map(|team| team.id).collect();
    start_tournament(&mut t, DrawOrder::Random).unwrap();
    let mut after: Vec<TeamId> = t.teams.iter().map(|team| team.id).collect();
    before.sort();
    after.sort();
    assert_eq!(before, after);
    assert_eq!(t.matches.len(), 15);
}

#[test]
fn setup_only_edits_are_rejected_after_start() {
    let mut t = tournament_with_teams(2, false);
    start_tournament(&mut t, DrawOrder::Registration).unwrap();
    let p = t.add_player("Newbie").unwrap();
    assert_eq!(t.add_team("Late", &[p]), Err(TournamentError::InvalidState));
    assert_eq!(t.set_rules(ScoringRules::default()), Err(TournamentError::InvalidState));
    assert_eq!(t.set_double_round(true), Err(TournamentError::InvalidState));
    let id = t.teams[0].id;
    assert_eq!(t.remove_team(id), Err(TournamentError::InvalidState));
    t.rename_team(id, "Renamed").unwrap();
    assert_eq!(t.get_team(id).unwrap().name, "Renamed");
}

#[test]
fn late_team_is_appended_after_last_round() {
    let mut t = tournament_with_teams(3, false);
    assert_eq!(add_late_team(&mut t, "Late", &[]), Err(TournamentError::InvalidState));
    start_tournament(&mut t, DrawOrder::Registration).unwrap();
    assert_eq!(t.max_round(), 3);

    let a = t.add_player("La").unwrap();
    let b = t.add_player("Lb").unwrap();
    let late = add_late_team(&mut t, "Late", &[a, b]).unwrap();
    assert_eq!(t.teams.len(), 4);
    assert_eq!(t.matches.len(), 6);

    let late_rounds: Vec<u32> = t
        .matches
        .iter()
        .filter(|m| m.home_players == vec![a, b])
        .map(|m| m.round)
        .collect();
    assert_eq!(late_rounds, vec![4, 5, 6]);

    let table = t.standings();
    let row = table.iter().find(|r| r.team_id == late).unwrap();
    assert_eq!(row.matches_remaining, 3);
}

#[test]
fn recording_results_feeds_standings_and_completes_the_tournament() {
    let mut t = tournament_with_teams(2, false);
    start_tournament(&mut t, DrawOrder::Registration).unwrap();
    let (home, away) = (t.teams[0].id, t.teams[1].id);
    let id = match_between(&t, home, away);

    let outsider = uuid::Uuid::new_v4();
    let bad_card = CardUsage {
        team_id: outsider,
        effect: CardEffect::DoublePoints,
    };
    assert_eq!(
        record_match_result(&mut t, id, 1, 0, &[bad_card]),
        Err(TournamentError::CardTeamNotInMatch(outsider))
    );
    let missing = uuid::Uuid::new_v4();
    assert_eq!(
        record_match_result(&mut t, missing, 1, 0, &[]),
        Err(TournamentError::MatchNotFound(missing))
    );

    let card = CardUsage {
        team_id: home,
        effect: CardEffect::DoublePoints,
    };
    record_match_result(&mut t, id, 6, 2, &[card]).unwrap();
    let m = t.matches.iter().find(|m| m.id == id).unwrap();
    assert_eq!(m.status, MatchStatus::Played);
    assert!(m.played_at.is_some());
    assert_eq!(t.state, TournamentState::Completed);

    let table = t.standings();
    assert_eq!(table[0].team_id, home);
    assert_eq!(table[0].points, 6);
    assert_eq!(table[1].points, 0);
}

#[test]
fn a_result_cannot_be_recorded_twice() {
    let mut t = tournament_with_teams(3, false);
    start_tournament(&mut t, DrawOrder::Registration).unwrap();
    let id = t.matches[0].id;
    record_match_result(&mut t, id, 2, 1, &[]).unwrap();
    assert_eq!(t.state, TournamentState::InProgress);
    assert_eq!(
        record_match_result(&mut t, id, 3, 1, &[]),
        Err(TournamentError::MatchAlreadyPlayed(id))
    );
}

#[test]
fn standings_export_as_csv() {
    let mut t = tournament_with_teams(2, false);
    start_tournament(&mut t, DrawOrder::Registration).unwrap();
    let csv = standings_to_csv(&t.standings()).unwrap();
    let mut lines = csv.lines();
    let header = lines.next().unwrap();
    assert!(header.starts_with("position,team_id,team_name,played,won,drawn,lost"));
    assert_eq!(lines.count(), 2);
}

#[test]
fn empty_standings_export_keeps_the_header() {
    let csv = standings_to_csv(&[]).unwrap();
    assert_eq!(
        csv,
        "position,team_id,team_name,played,won,drawn,lost,goals_for,goals_against,\
         goal_difference,points,matches_remaining,points_per_game,projected_points\n"
    );
}
