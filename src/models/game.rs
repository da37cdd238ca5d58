//! Match (game), its status, and the bonus cards that can be played on it.

use crate::models::player::PlayerId;
use crate::models::team::{Team, TeamId};
use crate::models::tournament::TournamentId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Scheduled,
    Played,
}

/// Effect of a bonus card.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardEffect {
    /// Doubles the win points of the team that played it, if that team wins the match.
    DoublePoints,
}

/// A card played by a team on one specific match.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct CardUsage {
    pub team_id: TeamId,
    pub effect: CardEffect,
}

/// A single match between a home side and an away side.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    pub id: MatchId,
    pub tournament_id: Option<TournamentId>,
    /// 1-based round number.
    pub round: u32,
    pub status: MatchStatus,
    pub home_score: u32,
    pub away_score: u32,
    pub home_players: Vec<PlayerId>,
    pub away_players: Vec<PlayerId>,
    #[serde(default)]
    pub cards: Vec<CardUsage>,
    /// Table label (e.g. "Table 2"), purely informational.
    #[serde(default)]
    pub table: Option<String>,
    #[serde(default)]
    pub scheduled_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub played_at: Option<DateTime<Utc>>,
}

impl GameMatch {
    /// A 0-0 `Scheduled` match with each side populated from the team's full roster.
    pub fn scheduled(
        tournament_id: Option<TournamentId>,
        round: u32,
        home: &Team,
        away: &Team,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            tournament_id,
            round,
            status: MatchStatus::Scheduled,
            home_score: 0,
            away_score: 0,
            home_players: home.players.clone(),
            away_players: away.players.clone(),
            cards: Vec::new(),
            table: None,
            scheduled_at: None,
            played_at: None,
        }
    }

    /// Return leg of this match: sides swapped, fresh id, still 0-0 and `Scheduled`.
    pub fn mirrored(&self, round: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            tournament_id: self.tournament_id,
            round,
            status: MatchStatus::Scheduled,
            home_score: 0,
            away_score: 0,
            home_players: self.away_players.clone(),
            away_players: self.home_players.clone(),
            cards: Vec::new(),
            table: self.table.clone(),
            scheduled_at: None,
            played_at: None,
        }
    }

    pub fn is_played(&self) -> bool {
        self.status == MatchStatus::Played
    }

    /// True if `team_id` played the given card effect on this match.
    pub fn has_card(&self, team_id: TeamId, effect: CardEffect) -> bool {
        self.cards
            .iter()
            .any(|c| c.team_id == team_id && c.effect == effect)
    }
}
