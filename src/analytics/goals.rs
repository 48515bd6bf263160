//! Progress of actual intake against daily goals.

use serde::{Deserialize, Serialize};

use crate::models::{MacroGoals, MacroTotals};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressStatus {
    /// Within 90-110% of goal
    OnTrack,
    /// 80-89% or 111-120%
    Close,
    OffTrack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalProgress {
    pub actual: u32,
    pub goal: u32,
    /// Rounded; 0 when the goal is 0
    pub percentage: u32,
    pub status: ProgressStatus,
    pub over: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyGoalProgress {
    pub calories: GoalProgress,
    pub protein: GoalProgress,
    pub carbs: GoalProgress,
    pub fat: GoalProgress,
}

fn status_for(percentage: u32) -> ProgressStatus {
    match percentage {
        90..=110 => ProgressStatus::OnTrack,
        80..=89 | 111..=120 => ProgressStatus::Close,
        _ => ProgressStatus::OffTrack,
    }
}

pub fn goal_progress(actual: u32, goal: u32) -> GoalProgress {
    let percentage = if goal == 0 {
        0
    } else {
        (f64::from(actual) / f64::from(goal) * 100.0).round() as u32
    };

    GoalProgress {
        actual,
        goal,
        percentage,
        status: status_for(percentage),
        over: actual > goal,
    }
}

pub fn daily_goal_progress(totals: &MacroTotals, goals: &MacroGoals) -> DailyGoalProgress {
    DailyGoalProgress {
        calories: goal_progress(totals.calories, goals.calories),
        protein: goal_progress(totals.protein_g, goals.protein_g),
        carbs: goal_progress(totals.carbs_g, goals.carbs_g),
        fat: goal_progress(totals.fat_g, goals.fat_g),
    }
}
