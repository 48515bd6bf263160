//! Logging streaks.
//!
//! The current streak is anchored to "now" and exits at the first gap; the
//! longest streak scans the whole history. They are computed in separate passes.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::daily::DailyMacroTotal;

/// Upper bound on how far back the current streak walks
pub const CURRENT_STREAK_LOOKBACK_DAYS: u32 = 365;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakInfo {
    pub current_streak: u32,
    pub longest_streak: u32,
}

pub fn calculate_streak(history: &[DailyMacroTotal], today: NaiveDate) -> StreakInfo {
    if history.is_empty() {
        return StreakInfo::default();
    }

    // Dates are unique per day upstream; the set also orders them.
    let logged: BTreeSet<NaiveDate> = history.iter().map(|d| d.date).collect();

    StreakInfo {
        current_streak: current_streak(&logged, today),
        longest_streak: longest_streak(&logged),
    }
}

/// Consecutive logged days ending today, or ending yesterday when today has
/// no entry yet. Zero when neither day is logged.
fn current_streak(logged: &BTreeSet<NaiveDate>, today: NaiveDate) -> u32 {
    let anchor = if logged.contains(&today) {
        today
    } else {
        match today.pred_opt() {
            Some(yesterday) if logged.contains(&yesterday) => yesterday,
            _ => return 0,
        }
    };

    let mut streak = 0;
    let mut day = anchor;
    while streak < CURRENT_STREAK_LOOKBACK_DAYS && logged.contains(&day) {
        streak += 1;
        match day.pred_opt() {
            Some(prev) => day = prev,
            None => break,
        }
    }
    streak
}

/// Best run anywhere in the history: walk newest to oldest, a gap of more than
/// one day closes the run.
fn longest_streak(logged: &BTreeSet<NaiveDate>) -> u32 {
    let descending: Vec<NaiveDate> = logged.iter().rev().copied().collect();

    let mut longest = 0;
    let mut run = 0;
    for (i, date) in descending.iter().enumerate() {
        run += 1;
        if let Some(next) = descending.get(i + 1) {
            if (*date - *next).num_days() > 1 {
                longest = longest.max(run);
                run = 0;
            }
        }
    }
    longest.max(run)
}
