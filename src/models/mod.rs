//! Data structures for the league: players, teams, matches, scoring rules, standings, tournament state.

mod game;
mod player;
mod rules;
mod standing;
mod team;
mod tournament;

pub use game::{CardEffect, CardUsage, GameMatch, MatchId, MatchStatus};
pub use player::{Player, PlayerId};
pub use rules::{ScoringRules, BLOW_OUT_GOALS};
pub use standing::StandingRow;
pub use team::{Team, TeamId};
pub use tournament::{Tournament, TournamentError, TournamentId, TournamentState, TournamentType};
