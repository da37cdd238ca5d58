//! Team registration after the tournament has started.

use crate::logic::late_join::generate_late_join_matches;
use crate::models::{PlayerId, TeamId, Tournament, TournamentError, TournamentState};
use log::info;

/// Register a team while the tournament is InProgress and append its matches against every
/// existing team after the current last round. Before start, use `Tournament::add_team`.
pub fn add_late_team(
    tournament: &mut Tournament,
    name: &str,
    player_ids: &[PlayerId],
) -> Result<TeamId, TournamentError> {
    if tournament.state != TournamentState::InProgress {
        return Err(TournamentError::InvalidState);
    }
    let team = tournament.validate_new_team(name, player_ids)?;
    let max_round = tournament.max_round();
    let new_matches = generate_late_join_matches(
        tournament.id,
        &team,
        &tournament.teams,
        max_round,
        tournament.double_round,
    );

    info!(
        "Team '{}' joined '{}' late: {} matches added after round {}",
        team.name,
        tournament.name,
        new_matches.len(),
        max_round
    );
    let id = team.id;
    tournament.teams.push(team);
    tournament.matches.extend(new_matches);
    Ok(id)
}
