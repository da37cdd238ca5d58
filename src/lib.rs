//! Foosball league web app: library with models and business logic.

pub mod logic;
pub mod models;

pub use logic::{
    add_late_team, compute_standings, generate_late_join_matches, generate_schedule,
    record_match_result, standings_to_csv, start_tournament, DrawOrder, MIN_TEAMS,
};
pub use models::{
    CardEffect, CardUsage, GameMatch, MatchId, MatchStatus, Player, PlayerId, ScoringRules,
    StandingRow, Team, TeamId, Tournament, TournamentError, TournamentId, TournamentState,
    TournamentType, BLOW_OUT_GOALS,
};
