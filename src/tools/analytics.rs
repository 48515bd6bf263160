//! Analytics MCP Tools
//!
//! Loads per-day totals from storage and runs the pure analytics over them.

use chrono::NaiveDate;
use serde::Serialize;

use crate::analytics::{
    days_before, detect_missing_days, summarize_trend, DailyMacroTotal, TrendSummary, CURRENT_STREAK_LOOKBACK_DAYS,
};
use crate::config::MAX_TREND_DAYS;
use crate::db::Database;
use crate::models::{MacroGoals, MealEntry, Profile};

#[derive(Debug, Serialize)]
pub struct TrendResponse {
    pub today: NaiveDate,
    /// Days with entries inside the window, ascending
    pub daily: Vec<DailyMacroTotal>,
    pub summary: TrendSummary,
    pub goals: Option<MacroGoals>,
}

#[derive(Debug, Serialize)]
pub struct MissingDaysResponse {
    pub days: Vec<NaiveDate>,
    pub count: usize,
}

/// History needed to analyse `window_days`; at least a year so streaks are not cut short
pub fn load_history(db: &Database, today: NaiveDate, window_days: u32) -> Result<Vec<DailyMacroTotal>, String> {
    let lookback = window_days.max(CURRENT_STREAK_LOOKBACK_DAYS);
    let conn = db.get_conn().map_err(|e| format!("Database error: {}", e))?;

    let history = MealEntry::daily_totals_since(&conn, days_before(today, u64::from(lookback)))
        .map_err(|e| format!("Failed to load history: {}", e))?;
    Ok(history.into_iter().filter(|d| d.date <= today).collect())
}

fn check_window(days: u32) -> Result<(), String> {
    if days == 0 || days > MAX_TREND_DAYS {
        return Err(format!("days must be between 1 and {}", MAX_TREND_DAYS));
    }
    Ok(())
}

pub fn nutrition_trend(db: &Database, today: NaiveDate, window_days: u32) -> Result<TrendResponse, String> {
    check_window(window_days)?;
    let history = load_history(db, today, window_days)?;
    let summary = summarize_trend(&history, today, window_days);

    let start = days_before(today, u64::from(window_days));
    let daily = history.iter().filter(|d| d.date >= start).copied().collect();

    let conn = db.get_conn().map_err(|e| format!("Database error: {}", e))?;
    let goals = Profile::get(&conn)
        .map_err(|e| format!("Failed to get goals: {}", e))?
        .map(|p| p.goals);

    Ok(TrendResponse {
        today,
        daily,
        summary,
        goals,
    })
}

/// Past days (never today) with no entries, oldest first; `days_back = 0` checks nothing
pub fn missing_days(db: &Database, today: NaiveDate, days_back: u32) -> Result<MissingDaysResponse, String> {
    if days_back == 0 {
        return Ok(MissingDaysResponse { days: Vec::new(), count: 0 });
    }
    check_window(days_back)?;
    let history = load_history(db, today, days_back)?;
    let days = detect_missing_days(&history, days_back, today);
    let count = days.len();
    Ok(MissingDaysResponse { days, count })
}
