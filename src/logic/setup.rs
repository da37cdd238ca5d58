//! Setup phase: start the tournament (Setup -> InProgress) and draw the schedule.

use crate::logic::schedule::generate_schedule;
use crate::models::{Tournament, TournamentError, TournamentState, TournamentType};
use log::info;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Order in which teams are placed on the circle before scheduling.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawOrder {
    /// Registration order.
    #[default]
    Registration,
    /// Shuffled once at start; the shuffled order is kept on the tournament.
    Random,
}

/// Start the tournament: require a round-robin with at least 2 teams, generate the full
/// schedule, stamp it with the tournament id and move to InProgress.
///
/// On error the tournament is left untouched.
pub fn start_tournament(tournament: &mut Tournament, draw: DrawOrder) -> Result<(), TournamentError> {
    if tournament.state != TournamentState::Setup {
        return Err(TournamentError::InvalidState);
    }
    if tournament.tournament_type != TournamentType::RoundRobin {
        return Err(TournamentError::UnsupportedType);
    }

    let mut teams = tournament.teams.clone();
    if draw == DrawOrder::Random {
        teams.shuffle(&mut rand::thread_rng());
    }
    let mut matches = generate_schedule(&teams, tournament.double_round)?;
    for m in &mut matches {
        m.tournament_id = Some(tournament.id);
    }

    info!(
        "Tournament '{}' started: {} teams, {} matches, {} rounds",
        tournament.name,
        teams.len(),
        matches.len(),
        matches.iter().map(|m| m.round).max().unwrap_or(0)
    );
    tournament.teams = teams;
    tournament.matches = matches;
    tournament.state = TournamentState::InProgress;
    Ok(())
}
