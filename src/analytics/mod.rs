//! Nutrition analytics
//!
//! Pure functions over a history of per-day totals. Nothing here touches the
//! database or the clock: callers pass `today` explicitly.

mod daily;
mod goals;
mod missing_days;
mod ratios;
mod streak;
mod trend;
mod weekly;

pub use daily::{daily_macro_summary, day_bounds, days_before, DailyMacroTotal};
pub use goals::{daily_goal_progress, goal_progress, DailyGoalProgress, GoalProgress, ProgressStatus};
pub use missing_days::detect_missing_days;
pub use ratios::{calculate_macro_ratios, MacroRatios};
pub use streak::{calculate_streak, StreakInfo, CURRENT_STREAK_LOOKBACK_DAYS};
pub use trend::{summarize_trend, TrendSummary};
pub use weekly::{calculate_weekly_summary, week_window, WeeklySummary, WEEK_LOOKBACK_DAYS};
