//! Schedule extension for a team that joins after the tournament has started.

use crate::models::{GameMatch, Team, TournamentId};
use log::debug;

/// Matches between `new_team` and every team in `existing_teams`, appended after the
/// current schedule.
///
/// The newcomer is at home in round `max_existing_round + offset`, starting at offset 1.
/// With `double_round` the return match follows in the next round and the offset advances
/// by 2, otherwise by 1. Existing rounds are never renumbered, since some of their matches
/// may already have results.
pub fn generate_late_join_matches(
    tournament_id: TournamentId,
    new_team: &Team,
    existing_teams: &[Team],
    max_existing_round: u32,
    double_round: bool,
) -> Vec<GameMatch> {
    let step = if double_round { 2 } else { 1 };
    let mut matches = Vec::with_capacity(existing_teams.len() * step as usize);
    let mut offset = 1;
    for existing in existing_teams {
        let round = max_existing_round + offset;
        let first = GameMatch::scheduled(Some(tournament_id), round, new_team, existing);
        if double_round {
            let ret = first.mirrored(round + 1);
            matches.push(first);
            matches.push(ret);
        } else {
            matches.push(first);
        }
        offset += step;
    }
    debug!(
        "Late join of '{}': {} new matches from round {}",
        new_team.name,
        matches.len(),
        max_existing_round + 1
    );
    matches
}
