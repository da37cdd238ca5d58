//! Standings table: aggregates match results under a tournament's scoring rules.

use crate::models::{CardEffect, GameMatch, PlayerId, ScoringRules, StandingRow, Team};
use log::{debug, warn};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Result of one match from one side's point of view.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Outcome {
    Win,
    Draw,
    Loss,
}

impl Outcome {
    fn from_scores(scored: u32, conceded: u32) -> Self {
        match scored.cmp(&conceded) {
            Ordering::Greater => Outcome::Win,
            Ordering::Equal => Outcome::Draw,
            Ordering::Less => Outcome::Loss,
        }
    }
}

/// Map every rostered player to the index of their team in `teams`.
/// If a player appears on several rosters the first team wins.
pub(crate) fn player_team_lookup(teams: &[Team]) -> HashMap<PlayerId, usize> {
    let mut lookup: HashMap<PlayerId, usize> = HashMap::new();
    for (idx, team) in teams.iter().enumerate() {
        for &pid in &team.players {
            if let Some(&first) = lookup.get(&pid) {
                warn!(
                    "Player {} is on both '{}' and '{}'; counting them for '{}'",
                    pid, teams[first].name, team.name, teams[first].name
                );
                continue;
            }
            lookup.insert(pid, idx);
        }
    }
    lookup
}

/// Team index of a match side, taken from its first participant.
pub(crate) fn resolve_side(lookup: &HashMap<PlayerId, usize>, side: &[PlayerId]) -> Option<usize> {
    side.first().and_then(|pid| lookup.get(pid).copied())
}

/// Points one side earns from a played match.
///
/// Only the win component is doubled by a card; draw, loss and bonus points never are.
fn match_points(rules: &ScoringRules, scored: u32, conceded: u32, doubled: bool) -> (Outcome, i32) {
    let outcome = Outcome::from_scores(scored, conceded);
    let base = match outcome {
        Outcome::Win if doubled => rules.points_for_win * 2,
        Outcome::Win => rules.points_for_win,
        Outcome::Draw => rules.points_for_draw,
        Outcome::Loss => rules.points_for_loss,
    };
    (outcome, base + rules.score_bonus(scored, conceded))
}

fn apply_side(row: &mut StandingRow, outcome: Outcome, points: i32, scored: u32, conceded: u32) {
    row.played += 1;
    row.add_goals(scored, conceded);
    row.points += points;
    match outcome {
        Outcome::Win => row.won += 1,
        Outcome::Draw => row.drawn += 1,
        Outcome::Loss => row.lost += 1,
    }
}

/// Compute the ranked standings table.
///
/// Every team gets a row, even with nothing played. A match whose home or away side
/// cannot be resolved to a team is skipped entirely. Scheduled matches only count toward
/// `matches_remaining`; played ones also feed results, goals and points.
///
/// Ranking: points, then goal difference, then goals for (all descending), then team name
/// in plain byte order. `position` runs 1..=N.
pub fn compute_standings(
    teams: &[Team],
    matches: &[GameMatch],
    rules: &ScoringRules,
) -> Vec<StandingRow> {
    let lookup = player_team_lookup(teams);
    let mut rows: Vec<StandingRow> = teams
        .iter()
        .map(|t| StandingRow::new(t.id, t.name.as_str()))
        .collect();
    let mut counted = vec![0u32; teams.len()];

    for m in matches {
        let (Some(home), Some(away)) = (
            resolve_side(&lookup, &m.home_players),
            resolve_side(&lookup, &m.away_players),
        ) else {
            debug!("Skipping match {}: a side has no known team", m.id);
            continue;
        };
        counted[home] += 1;
        counted[away] += 1;

        if !m.is_played() {
            continue;
        }

        let home_doubled = m.has_card(teams[home].id, CardEffect::DoublePoints);
        let away_doubled = m.has_card(teams[away].id, CardEffect::DoublePoints);
        let (home_outcome, home_points) =
            match_points(rules, m.home_score, m.away_score, home_doubled);
        let (away_outcome, away_points) =
            match_points(rules, m.away_score, m.home_score, away_doubled);

        apply_side(&mut rows[home], home_outcome, home_points, m.home_score, m.away_score);
        apply_side(&mut rows[away], away_outcome, away_points, m.away_score, m.home_score);
    }

    for (row, total) in rows.iter_mut().zip(counted) {
        row.matches_remaining = total.saturating_sub(row.played);
        if row.played > 0 {
            row.points_per_game = f64::from(row.points) / f64::from(row.played);
            let projected_rest = (row.points_per_game * f64::from(row.matches_remaining)).round_ties_even();
            row.projected_points = row.points + projected_rest as i32;
        } else {
            row.points_per_game = 0.0;
            row.projected_points = 0;
        }
    }

    rows.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then_with(|| b.goal_difference.cmp(&a.goal_difference))
            .then_with(|| b.goals_for.cmp(&a.goals_for))
            .then_with(|| a.team_name.cmp(&b.team_name))
    });
    for (idx, row) in rows.iter_mut().enumerate() {
        row.position = idx as u32 + 1;
    }
    rows
}
