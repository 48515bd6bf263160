//! Everything the analytics and insights views derive from one history window.

use chrono::NaiveDate;
use serde::Serialize;

use super::daily::{days_before, DailyMacroTotal};
use super::missing_days::detect_missing_days;
use super::ratios::{calculate_macro_ratios, MacroRatios};
use super::streak::{calculate_streak, StreakInfo};
use super::weekly::{calculate_weekly_summary, WeeklySummary};

#[derive(Debug, Clone, Serialize)]
pub struct TrendSummary {
    pub window_days: u32,
    /// Days with data in `[today - window_days, today]`
    pub days_tracked: u32,
    pub missing_days: Vec<NaiveDate>,
    pub weekly: WeeklySummary,
    pub streak: StreakInfo,
    pub ratios: MacroRatios,
}

pub fn summarize_trend(history: &[DailyMacroTotal], today: NaiveDate, window_days: u32) -> TrendSummary {
    let start = days_before(today, u64::from(window_days));
    let days_tracked = history
        .iter()
        .filter(|d| d.date >= start && d.date <= today)
        .count() as u32;

    TrendSummary {
        window_days,
        days_tracked,
        missing_days: detect_missing_days(history, window_days, today),
        weekly: calculate_weekly_summary(history, today),
        streak: calculate_streak(history, today),
        ratios: calculate_macro_ratios(history, today),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_trend() {
        let today = NaiveDate::from_ymd_opt(2025, 4, 30).unwrap();
        let history: Vec<_> = [0u64, 1, 2, 10, 40]
            .iter()
            .map(|&i| DailyMacroTotal {
                date: days_before(today, i),
                calories: 2100,
                protein_grams: 150,
                carb_grams: 210,
                fat_grams: 70,
            })
            .collect();

        let trend = summarize_trend(&history, today, 30);
        assert_eq!(trend.days_tracked, 4);
        assert_eq!(trend.missing_days.len(), 27);
        assert_eq!(trend.streak.current_streak, 3);
        assert_eq!(trend.weekly.days_logged, 3);
        assert_eq!(trend.weekly.avg_calories, 2100);
    }
}
