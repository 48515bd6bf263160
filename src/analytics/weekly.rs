use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::daily::{days_before, DailyMacroTotal};

/// Lookback for the weekly window; the lower bound is inclusive
pub const WEEK_LOOKBACK_DAYS: u64 = 7;

/// Averages over the days that actually have data in the weekly window
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySummary {
    pub avg_calories: u32,
    pub avg_protein: u32,
    pub avg_carbs: u32,
    pub avg_fat: u32,
    pub total_calories: u64,
    pub days_logged: u32,
}

/// Entries dated on or after `today - 7 days`
pub fn week_window(history: &[DailyMacroTotal], today: NaiveDate) -> impl Iterator<Item = &DailyMacroTotal> {
    let start = days_before(today, WEEK_LOOKBACK_DAYS);
    history.iter().filter(move |d| d.date >= start)
}

fn rounded_mean(total: u64, count: u64) -> u32 {
    (total as f64 / count as f64).round() as u32
}

/// Average each macro over the logged days of the past week. Divides by the
/// number of days present, not by 7, so unlogged days do not dilute the mean.
pub fn calculate_weekly_summary(history: &[DailyMacroTotal], today: NaiveDate) -> WeeklySummary {
    let mut days: u64 = 0;
    let (mut calories, mut protein, mut carbs, mut fat) = (0u64, 0u64, 0u64, 0u64);

    for day in week_window(history, today) {
        days += 1;
        calories += u64::from(day.calories);
        protein += u64::from(day.protein_grams);
        carbs += u64::from(day.carb_grams);
        fat += u64::from(day.fat_grams);
    }

    if days == 0 {
        return WeeklySummary::default();
    }

    WeeklySummary {
        avg_calories: rounded_mean(calories, days),
        avg_protein: rounded_mean(protein, days),
        avg_carbs: rounded_mean(carbs, days),
        avg_fat: rounded_mean(fat, days),
        total_calories: calories,
        days_logged: days as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 20).unwrap()
    }

    fn day(offset: u64, calories: u32, protein: u32, carbs: u32, fat: u32) -> DailyMacroTotal {
        DailyMacroTotal {
            date: days_before(today(), offset),
            calories,
            protein_grams: protein,
            carb_grams: carbs,
            fat_grams: fat,
        }
    }

    #[test]
    fn test_empty_history() {
        let summary = calculate_weekly_summary(&[], today());
        assert_eq!(summary, WeeklySummary::default());
        assert_eq!(summary.days_logged, 0);
    }

    #[test]
    fn test_full_week_is_exact_mean() {
        let history: Vec<_> = (0..7)
            .map(|i| day(i, 2000 + 100 * i as u32, 150, 200 + 10 * i as u32, 70))
            .collect();
        let summary = calculate_weekly_summary(&history, today());

        assert_eq!(summary.days_logged, 7);
        assert_eq!(summary.total_calories, 16_100);
        assert_eq!(summary.avg_calories, 2300);
        assert_eq!(summary.avg_protein, 150);
        assert_eq!(summary.avg_carbs, 230);
        assert_eq!(summary.avg_fat, 70);
    }

    #[test]
    fn test_divides_by_logged_days_only() {
        let history = vec![day(1, 1800, 100, 200, 60), day(4, 2201, 121, 181, 71)];
        let summary = calculate_weekly_summary(&history, today());
        assert_eq!(summary.days_logged, 2);
        // 4001 / 2 = 2000.5 rounds up
        assert_eq!(summary.avg_calories, 2001);
        assert_eq!(summary.avg_protein, 111);
        assert_eq!(summary.avg_carbs, 191);
        assert_eq!(summary.avg_fat, 66);
        assert_eq!(summary.total_calories, 4001);
    }

    #[test]
    fn test_window_lower_bound_is_inclusive() {
        let history = vec![day(7, 1000, 10, 10, 10), day(8, 5000, 50, 50, 50)];
        let summary = calculate_weekly_summary(&history, today());
        assert_eq!(summary.days_logged, 1);
        assert_eq!(summary.avg_calories, 1000);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let history = vec![day(2, 1500, 90, 150, 50), day(0, 2500, 140, 260, 80)];
        let before = history.clone();
        let first = calculate_weekly_summary(&history, today());
        let second = calculate_weekly_summary(&history, today());
        assert_eq!(first, second);
        assert_eq!(history, before);
    }
}
