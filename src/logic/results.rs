//! Recording match results.

use crate::logic::standings::{player_team_lookup, resolve_side};
use crate::models::{CardUsage, MatchId, MatchStatus, Tournament, TournamentError, TournamentState};
use chrono::Utc;
use log::info;

/// Record the final score of a scheduled match, with any cards played on it.
///
/// Every card must belong to the home or away team. The match flips to `Played`; once no
/// scheduled match is left, the tournament is Completed.
pub fn record_match_result(
    tournament: &mut Tournament,
    match_id: MatchId,
    home_score: u32,
    away_score: u32,
    cards: &[CardUsage],
) -> Result<(), TournamentError> {
    if tournament.state != TournamentState::InProgress {
        return Err(TournamentError::InvalidState);
    }

    let lookup = player_team_lookup(&tournament.teams);
    let m = tournament
        .matches
        .iter()
        .find(|m| m.id == match_id)
        .ok_or(TournamentError::MatchNotFound(match_id))?;
    if m.is_played() {
        return Err(TournamentError::MatchAlreadyPlayed(match_id));
    }
    let sides = [
        resolve_side(&lookup, &m.home_players),
        resolve_side(&lookup, &m.away_players),
    ];
    for card in cards {
        let in_match = sides
            .iter()
            .flatten()
            .any(|&idx| tournament.teams[idx].id == card.team_id);
        if !in_match {
            return Err(TournamentError::CardTeamNotInMatch(card.team_id));
        }
    }

    let m = tournament
        .get_match_mut(match_id)
        .ok_or(TournamentError::MatchNotFound(match_id))?;
    m.home_score = home_score;
    m.away_score = away_score;
    m.cards = cards.to_vec();
    m.status = MatchStatus::Played;
    m.played_at = Some(Utc::now());

    if tournament.matches.iter().all(|m| m.is_played()) {
        tournament.state = TournamentState::Completed;
        info!("Tournament '{}' completed", tournament.name);
    }
    Ok(())
}
