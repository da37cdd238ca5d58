//! Tournament, TournamentType and TournamentState.

use crate::logic::compute_standings;
use crate::models::game::{GameMatch, MatchId};
use crate::models::player::{Player, PlayerId};
use crate::models::rules::ScoringRules;
use crate::models::standing::StandingRow;
use crate::models::team::{Team, TeamId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// Tournament is not in a state that allows this action.
    InvalidState,
    /// Fewer teams than a round-robin needs.
    NotEnoughTeams { required: usize, found: usize },
    /// The tournament type has no scheduling algorithm (elimination).
    UnsupportedType,
    PlayerNotFound(PlayerId),
    TeamNotFound(TeamId),
    MatchNotFound(MatchId),
    /// A player with this name already exists (names are unique, case-insensitive).
    DuplicatePlayerName,
    /// A team with this name already exists (names are unique, case-insensitive).
    DuplicateTeamName,
    /// The player is already on another team's roster.
    PlayerAlreadyOnTeam(PlayerId),
    /// A team needs at least one player.
    EmptyTeam,
    EmptyName,
    /// The result of this match has already been recorded.
    MatchAlreadyPlayed(MatchId),
    /// A card was played by a team that is not on either side of the match.
    CardTeamNotInMatch(TeamId),
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::InvalidState => write!(f, "Invalid state for this action"),
            TournamentError::NotEnoughTeams { required, found } => {
                write!(f, "Need at least {} teams to schedule matches (found {})", required, found)
            }
            TournamentError::UnsupportedType => {
                write!(f, "Scheduling is only supported for round-robin tournaments")
            }
            TournamentError::PlayerNotFound(_) => write!(f, "Player not found"),
            TournamentError::TeamNotFound(_) => write!(f, "Team not found"),
            TournamentError::MatchNotFound(_) => write!(f, "Match not found"),
            TournamentError::DuplicatePlayerName => write!(f, "A player with this name already exists"),
            TournamentError::DuplicateTeamName => write!(f, "A team with this name already exists"),
            TournamentError::PlayerAlreadyOnTeam(_) => write!(f, "Player is already on a team"),
            TournamentError::EmptyTeam => write!(f, "A team needs at least one player"),
            TournamentError::EmptyName => write!(f, "Name must not be empty"),
            TournamentError::MatchAlreadyPlayed(_) => write!(f, "Match result already recorded"),
            TournamentError::CardTeamNotInMatch(_) => {
                write!(f, "Card played by a team that is not in this match")
            }
        }
    }
}

impl std::error::Error for TournamentError {}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Format of the tournament. Only round-robin has a scheduler.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentType {
    #[default]
    RoundRobin,
    Elimination,
}

/// Current phase of the tournament.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentState {
    /// Registering players and teams, editing rules; no matches yet.
    #[default]
    Setup,
    /// Schedule generated; results being recorded. Late teams may still join.
    InProgress,
    /// Every scheduled match has a result.
    Completed,
}

/// Full tournament: registrations, rules, schedule and phase.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub tournament_type: TournamentType,
    /// Play every pairing twice, with home and away swapped in the second leg.
    pub double_round: bool,
    pub rules: ScoringRules,
    pub players: Vec<Player>,
    /// Teams in registration order (the draw order unless shuffled at start).
    pub teams: Vec<Team>,
    pub matches: Vec<GameMatch>,
    pub state: TournamentState,
}

impl Tournament {
    /// Create a new tournament in Setup state with default scoring rules.
    pub fn new(name: impl Into<String>, tournament_type: TournamentType, double_round: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            tournament_type,
            double_round,
            rules: ScoringRules::default(),
            players: Vec::new(),
            teams: Vec::new(),
            matches: Vec::new(),
            state: TournamentState::Setup,
        }
    }

    pub fn with_rules(self, rules: ScoringRules) -> Self {
        Self { rules, ..self }
    }

    pub fn get_team(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn get_match_mut(&mut self, id: MatchId) -> Option<&mut GameMatch> {
        self.matches.iter_mut().find(|m| m.id == id)
    }

    /// Highest round number among the stored matches (0 when nothing is scheduled).
    pub fn max_round(&self) -> u32 {
        self.matches.iter().map(|m| m.round).max().unwrap_or(0)
    }

    /// Add a player (valid in Setup or InProgress). Names must be unique (case-insensitive).
    pub fn add_player(&mut self, name: impl Into<String>) -> Result<PlayerId, TournamentError> {
        if self.state == TournamentState::Completed {
            return Err(TournamentError::InvalidState);
        }
        let name = name.into();
        let name_trimmed = name.trim();
        if name_trimmed.is_empty() {
            return Err(TournamentError::EmptyName);
        }
        let is_duplicate = self
            .players
            .iter()
            .any(|p| p.name.eq_ignore_ascii_case(name_trimmed));
        if is_duplicate {
            return Err(TournamentError::DuplicatePlayerName);
        }
        let player = Player::new(name_trimmed);
        let id = player.id;
        self.players.push(player);
        Ok(id)
    }

    /// Build a team after checking name and roster against the current registrations.
    /// Does not store it; see `add_team` and `logic::add_late_team`.
    pub fn validate_new_team(
        &self,
        name: &str,
        player_ids: &[PlayerId],
    ) -> Result<Team, TournamentError> {
        let name_trimmed = name.trim();
        if name_trimmed.is_empty() {
            return Err(TournamentError::EmptyName);
        }
        if player_ids.is_empty() {
            return Err(TournamentError::EmptyTeam);
        }
        if self
            .teams
            .iter()
            .any(|t| t.name.eq_ignore_ascii_case(name_trimmed))
        {
            return Err(TournamentError::DuplicateTeamName);
        }
        let mut roster: Vec<PlayerId> = Vec::with_capacity(player_ids.len());
        for &pid in player_ids {
            if !self.players.iter().any(|p| p.id == pid) {
                return Err(TournamentError::PlayerNotFound(pid));
            }
            if roster.contains(&pid) || self.teams.iter().any(|t| t.has_player(pid)) {
                return Err(TournamentError::PlayerAlreadyOnTeam(pid));
            }
            roster.push(pid);
        }
        Ok(Team::new(name_trimmed, roster))
    }

    /// Register a team (Setup only). Late registrations go through `logic::add_late_team`.
    pub fn add_team(
        &mut self,
        name: &str,
        player_ids: &[PlayerId],
    ) -> Result<TeamId, TournamentError> {
        if self.state != TournamentState::Setup {
            return Err(TournamentError::InvalidState);
        }
        let team = self.validate_new_team(name, player_ids)?;
        let id = team.id;
        self.teams.push(team);
        Ok(id)
    }

    /// Remove a team by id (only valid in Setup; afterwards matches reference its roster).
    pub fn remove_team(&mut self, team_id: TeamId) -> Result<(), TournamentError> {
        if self.state != TournamentState::Setup {
            return Err(TournamentError::InvalidState);
        }
        let idx = self
            .teams
            .iter()
            .position(|t| t.id == team_id)
            .ok_or(TournamentError::TeamNotFound(team_id))?;
        self.teams.remove(idx);
        Ok(())
    }

    /// Rename a team. Allowed in any state since membership is untouched.
    pub fn rename_team(&mut self, team_id: TeamId, name: &str) -> Result<(), TournamentError> {
        let name_trimmed = name.trim();
        if name_trimmed.is_empty() {
            return Err(TournamentError::EmptyName);
        }
        if self
            .teams
            .iter()
            .any(|t| t.id != team_id && t.name.eq_ignore_ascii_case(name_trimmed))
        {
            return Err(TournamentError::DuplicateTeamName);
        }
        let team = self
            .teams
            .iter_mut()
            .find(|t| t.id == team_id)
            .ok_or(TournamentError::TeamNotFound(team_id))?;
        team.name = name_trimmed.to_string();
        Ok(())
    }

    /// Replace the scoring rules (only valid in Setup).
    pub fn set_rules(&mut self, rules: ScoringRules) -> Result<(), TournamentError> {
        if self.state != TournamentState::Setup {
            return Err(TournamentError::InvalidState);
        }
        self.rules = rules;
        Ok(())
    }

    /// Toggle return legs (only valid in Setup).
    pub fn set_double_round(&mut self, double_round: bool) -> Result<(), TournamentError> {
        if self.state != TournamentState::Setup {
            return Err(TournamentError::InvalidState);
        }
        self.double_round = double_round;
        Ok(())
    }

    /// Current standings computed from this tournament's teams, matches and rules.
    pub fn standings(&self) -> Vec<StandingRow> {
        compute_standings(&self.teams, &self.matches, &self.rules)
    }
}
