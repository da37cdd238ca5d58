//! Scoring configuration of a tournament.

use serde::{Deserialize, Serialize};

/// Margin a blow-out needs: the winner scores at least this many while the loser scores zero.
pub const BLOW_OUT_GOALS: u32 = 10;

/// Points awarded per match result plus the optional bonuses.
///
/// Points are signed so a league can penalise losses if it wants to.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringRules {
    pub points_for_win: i32,
    pub points_for_draw: i32,
    pub points_for_loss: i32,
    /// A side scoring at least this many goals earns `goal_threshold_bonus`, win or lose.
    pub goal_threshold: Option<u32>,
    pub goal_threshold_bonus: i32,
    /// Enables the 10-0 blow-out bonus.
    pub ten_zero_bonus_enabled: bool,
    pub ten_zero_bonus: i32,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            points_for_win: 3,
            points_for_draw: 1,
            points_for_loss: 0,
            goal_threshold: None,
            goal_threshold_bonus: 0,
            ten_zero_bonus_enabled: false,
            ten_zero_bonus: 1,
        }
    }
}

impl ScoringRules {
    /// Bonus points a side earns from its own and the opponent's score alone.
    /// Threshold and blow-out bonuses stack.
    pub fn score_bonus(&self, scored: u32, conceded: u32) -> i32 {
        let mut bonus = 0;
        if let Some(threshold) = self.goal_threshold {
            if scored >= threshold {
                bonus += self.goal_threshold_bonus;
            }
        }
        if self.ten_zero_bonus_enabled && scored >= BLOW_OUT_GOALS && conceded == 0 {
            bonus += self.ten_zero_bonus;
        }
        bonus
    }
}
