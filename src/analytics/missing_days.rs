use std::collections::HashSet;

use chrono::NaiveDate;

use super::daily::{days_before, DailyMacroTotal};

/// Calendar days in `[today - days_back, today - 1]` with no entry in `history`,
/// oldest first. Today is never reported.
pub fn detect_missing_days(history: &[DailyMacroTotal], days_back: u32, today: NaiveDate) -> Vec<NaiveDate> {
    let logged: HashSet<NaiveDate> = history.iter().map(|d| d.date).collect();

    let mut missing: Vec<NaiveDate> = (1..=u64::from(days_back))
        .map(|i| days_before(today, i))
        .filter(|date| !logged.contains(date))
        .collect();

    missing.sort();
    missing
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
    }

    fn day(date: NaiveDate) -> DailyMacroTotal {
        DailyMacroTotal {
            date,
            calories: 1800,
            protein_grams: 120,
            carb_grams: 200,
            fat_grams: 60,
        }
    }

    #[test]
    fn test_empty_history_is_all_missing() {
        let missing = detect_missing_days(&[], 30, today());
        assert_eq!(missing.len(), 30);
        assert_eq!(missing[0], days_before(today(), 30));
        assert_eq!(missing[29], days_before(today(), 1));
        assert!(missing.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_zero_days_back() {
        assert!(detect_missing_days(&[], 0, today()).is_empty());
    }

    #[test]
    fn test_full_week_has_no_gaps() {
        let history: Vec<_> = (0..7).map(|i| day(days_before(today(), i))).collect();
        // today-7 is outside the logged range
        assert!(detect_missing_days(&history, 6, today()).is_empty());
        assert_eq!(detect_missing_days(&history, 7, today()), vec![days_before(today(), 7)]);
    }

    #[test]
    fn test_never_reports_today() {
        let missing = detect_missing_days(&[], 3, today());
        assert!(!missing.contains(&today()));

        let only_today = vec![day(today())];
        let missing = detect_missing_days(&only_today, 2, today());
        assert_eq!(missing, vec![days_before(today(), 2), days_before(today(), 1)]);
    }

    #[test]
    fn test_crosses_month_boundary() {
        let history = vec![day(NaiveDate::from_ymd_opt(2025, 2, 27).unwrap())];
        let missing = detect_missing_days(&history, 3, today());
        assert_eq!(
            missing,
            vec![
                NaiveDate::from_ymd_opt(2025, 2, 26).unwrap(),
                NaiveDate::from_ymd_opt(2025, 2, 28).unwrap(),
            ]
        );
    }
}
