//! Macrolog Status Tool
//!
//! Runtime status of the service plus the usage guide served to AI assistants.

use chrono::NaiveDate;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::analytics::day_bounds;
use crate::build_info::BuildInfo;
use crate::db::Database;
use crate::models::{Food, MacroTotals, MealEntry, Profile};

/// How to log meals and read analytics with the macrolog tools
pub const MEAL_INSTRUCTIONS: &str = r#"
# Macrolog Usage Guide

Macrolog keeps a local log of meals (calories, protein, carbs, fat) and derives
daily, weekly and streak analytics from it. All dates are local dates in
YYYY-MM-DD format; "today" is the server's local date.

## Logging a meal

Pick the most specific tool that fits:

1. **log_meal** - you know the macros (from a label, a recipe or an estimate).
   - meal_type: breakfast, lunch, dinner, snack or supplement
   - description: 1-200 characters
   - calories: 1-10000; protein_g, carbs_g, fat_g: 0-1000 (whole grams)
2. **log_library_meal** - the food is in the personal library.
   Use `search_foods` to find its id, then pass the portion in grams.
   Library values are per 100 g and are scaled and rounded.
   `search_catalog` suggests common foods (per 100 g) that are not in the
   library yet; add them with `add_food` or use the values directly.
3. **analyze_meal_photos** - the user has photos of the meal.
   Pass local file paths or data URLs. Each photo is estimated separately and
   the results are summed. Set `log_as` to a meal type to log the combined
   meal immediately, otherwise confirm the estimate with the user first.
   If the combined meal breaks a meal limit it is not logged; the estimate is
   still returned with `log_error` set.
4. **backfill_meal** - the meal belongs to an earlier day (up to one year back).
   Use `missing_days` to find days without entries.

## Ranges

When a nutrition source gives a range, log low + 80% of the difference
(500-600 kcal becomes 580 kcal).

## Goals

`get_goals` shows whether a profile exists. `set_goals` needs age (18+),
height (cm), weight (kg), activity level (sedentary, light, moderate, very,
super) and daily targets (calories at least 1000). `recommend_goals` asks the
AI advisor for targets; it does not save them.

## Analytics

- `daily_summary` - totals for a day and progress against goals
  (on_track 90-110%, close 80-89% or 111-120%, otherwise off_track)
- `nutrition_trend` - per-day totals, weekly averages, streaks, macro split
  and missing days for a window (default 30 days)
- `generate_insights` - AI coaching based on the trend; requires goals and
  at least one logged day in the window
"#;

/// Runtime status of the macrolog service
#[derive(Debug, Clone, Serialize)]
pub struct MacrologStatus {
    pub build: BuildInfo,

    pub database_path: String,
    pub database_size_bytes: Option<u64>,
    pub meal_count: i64,
    pub food_count: i64,
    pub has_profile: bool,
    pub today: NaiveDate,
    pub today_totals: MacroTotals,

    pub ai_enabled: bool,
    pub gemini_model: String,

    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

pub struct StatusTracker {
    start_time: Instant,
    database_path: PathBuf,
    gemini_model: String,
    ai_enabled: bool,
}

impl StatusTracker {
    pub fn new(database_path: PathBuf, gemini_model: String, ai_enabled: bool) -> Self {
        Self {
            start_time: Instant::now(),
            database_path,
            gemini_model,
            ai_enabled,
        }
    }

    pub fn get_status(&self, db: &Database, today: NaiveDate) -> Result<MacrologStatus, String> {
        let conn = db.get_conn().map_err(|e| format!("Database error: {}", e))?;
        let meal_count = MealEntry::count(&conn).map_err(|e| format!("Failed to count meals: {}", e))?;
        let food_count = Food::count(&conn).map_err(|e| format!("Failed to count foods: {}", e))?;
        let has_profile = Profile::exists(&conn).map_err(|e| format!("Failed to check goals: {}", e))?;
        let (start, end) = day_bounds(today);
        let today_totals =
            MealEntry::totals_between(&conn, start, end).map_err(|e| format!("Failed to total today: {}", e))?;

        let database_size_bytes = std::fs::metadata(&self.database_path).ok().map(|m| m.len());

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));
        let memory_usage_bytes = sys.process(Pid::from_u32(pid)).map(|p| p.memory()).unwrap_or(0);

        Ok(MacrologStatus {
            build: BuildInfo::current(),
            database_path: self.database_path.display().to_string(),
            database_size_bytes,
            meal_count,
            food_count,
            has_profile,
            today,
            today_totals,
            ai_enabled: self.ai_enabled,
            gemini_model: self.gemini_model.clone(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        })
    }
}
