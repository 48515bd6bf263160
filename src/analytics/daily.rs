//! Per-day totals and the daily summary reduction.

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::models::{MacroTotals, MealEntry};

/// One calendar day of already-summed intake. Dates are unique within a history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyMacroTotal {
    pub date: NaiveDate,
    pub calories: u32,
    pub protein_grams: u32,
    pub carb_grams: u32,
    pub fat_grams: u32,
}

impl DailyMacroTotal {
    pub fn totals(&self) -> MacroTotals {
        MacroTotals::new(self.calories, self.protein_grams, self.carb_grams, self.fat_grams)
    }
}

/// `today - n` days, saturating at the earliest representable date
pub fn days_before(today: NaiveDate, n: u64) -> NaiveDate {
    today.checked_sub_days(Days::new(n)).unwrap_or(NaiveDate::MIN)
}

/// Half-open bounds `[day 00:00, next day 00:00)`
pub fn day_bounds(day: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let start = NaiveDateTime::new(day, NaiveTime::MIN);
    let end = day
        .succ_opt()
        .map(|next| NaiveDateTime::new(next, NaiveTime::MIN))
        .unwrap_or(NaiveDateTime::MAX);
    (start, end)
}

/// Sum the entries logged on `day`. Entries outside the day are ignored, so an
/// entry at exactly midnight counts toward the day it starts.
pub fn daily_macro_summary(entries: &[MealEntry], day: NaiveDate) -> MacroTotals {
    let (start, end) = day_bounds(day);
    entries
        .iter()
        .filter(|e| e.logged_at >= start && e.logged_at < end)
        .map(|e| e.macros)
        .sum()
}
