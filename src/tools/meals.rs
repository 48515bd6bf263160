//! Meal logging tools
//!
//! Manual entries, portions from the food library, backfills for past days,
//! recent history and the daily summary with goal progress.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;
use tracing::info;

use crate::analytics::{daily_goal_progress, daily_macro_summary, day_bounds, DailyGoalProgress};
use crate::db::Database;
use crate::models::{Food, MacroTotals, MealEntry, MealEntryCreate, MealSource, MealType, Profile};
use crate::validation::{self, MealMacrosInput};

pub const DEFAULT_RECENT_LIMIT: i64 = 10;
pub const MAX_PORTION_GRAMS: f64 = 5000.0;

#[derive(Debug, Serialize)]
pub struct LogMealResponse {
    pub id: i64,
    pub meal_type: MealType,
    pub description: String,
    pub macros: MacroTotals,
    pub source: MealSource,
    pub logged_at: NaiveDateTime,
}

impl From<MealEntry> for LogMealResponse {
    fn from(entry: MealEntry) -> Self {
        Self {
            id: entry.id,
            meal_type: entry.meal_type,
            description: entry.description,
            macros: entry.macros,
            source: entry.source,
            logged_at: entry.logged_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RecentMealsResponse {
    pub meals: Vec<MealEntry>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct DeleteMealResponse {
    pub success: bool,
    pub deleted_id: i64,
}

#[derive(Debug, Serialize)]
pub struct DailySummaryResponse {
    pub date: NaiveDate,
    pub totals: MacroTotals,
    pub meals: Vec<MealEntry>,
    /// Absent until goals have been set
    pub progress: Option<DailyGoalProgress>,
}

fn insert_meal(db: &Database, data: MealEntryCreate) -> Result<LogMealResponse, String> {
    let conn = db.get_conn().map_err(|e| format!("Database error: {}", e))?;
    let entry = MealEntry::create(&conn, &data).map_err(|e| format!("Failed to log meal: {}", e))?;

    info!(
        id = entry.id,
        meal_type = entry.meal_type.as_str(),
        source = entry.source.as_str(),
        calories = entry.macros.calories,
        "Logged meal"
    );
    Ok(entry.into())
}

/// Log a meal with explicit macros at `now`
pub fn log_meal(
    db: &Database,
    now: NaiveDateTime,
    meal_type: &str,
    description: &str,
    macros: MealMacrosInput,
    source: MealSource,
) -> Result<LogMealResponse, String> {
    let meal = validation::validate_meal(meal_type, description, &macros).map_err(|e| e.to_string())?;

    insert_meal(
        db,
        MealEntryCreate {
            meal_type: meal.meal_type,
            description: meal.description,
            macros: meal.macros,
            source,
            logged_at: now,
        },
    )
}

/// Log a portion of a library food; macros scale from the per-100g values
pub fn log_library_meal(
    db: &Database,
    now: NaiveDateTime,
    meal_type: &str,
    food_id: i64,
    grams: f64,
) -> Result<LogMealResponse, String> {
    let meal_type = validation::parse_meal_type(meal_type).map_err(|e| e.to_string())?;
    if !grams.is_finite() || grams <= 0.0 || grams > MAX_PORTION_GRAMS {
        return Err(format!("grams must be greater than 0 and at most {}", MAX_PORTION_GRAMS));
    }

    let food = {
        let conn = db.get_conn().map_err(|e| format!("Database error: {}", e))?;
        Food::get_by_id(&conn, food_id)
            .map_err(|e| format!("Failed to get food: {}", e))?
            .ok_or_else(|| format!("Food not found with id: {}", food_id))?
    };

    let portion = food.portion(grams);
    let macros = validation::validate_meal_macros(&MealMacrosInput {
        calories: i64::from(portion.calories),
        protein_g: i64::from(portion.protein_g),
        carbs_g: i64::from(portion.carbs_g),
        fat_g: i64::from(portion.fat_g),
    })
    .map_err(|e| e.to_string())?;

    let description = validation::validate_description(&format!("{}g of {}", grams, food.name))
        .map_err(|e| e.to_string())?;

    insert_meal(
        db,
        MealEntryCreate {
            meal_type,
            description,
            macros,
            source: MealSource::Library,
            logged_at: now,
        },
    )
}

/// Backfilled entries are stamped at noon of the target day
pub fn backfill_timestamp(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap_or(NaiveTime::MIN))
}

/// Log a meal on a past day (within the last year)
pub fn backfill_meal(
    db: &Database,
    today: NaiveDate,
    target_date: &str,
    meal_type: &str,
    description: &str,
    macros: MealMacrosInput,
) -> Result<LogMealResponse, String> {
    let date = validation::validate_backfill_date(target_date, today).map_err(|e| e.to_string())?;
    let meal = validation::validate_meal(meal_type, description, &macros).map_err(|e| e.to_string())?;

    insert_meal(
        db,
        MealEntryCreate {
            meal_type: meal.meal_type,
            description: meal.description,
            macros: meal.macros,
            source: MealSource::Backfill,
            logged_at: backfill_timestamp(date),
        },
    )
}

pub fn recent_meals(db: &Database, limit: i64) -> Result<RecentMealsResponse, String> {
    let limit = limit.clamp(1, 100);
    let conn = db.get_conn().map_err(|e| format!("Database error: {}", e))?;

    let meals = MealEntry::recent(&conn, limit).map_err(|e| format!("Failed to list meals: {}", e))?;
    let count = meals.len();
    Ok(RecentMealsResponse { meals, count })
}

pub fn delete_meal(db: &Database, id: i64) -> Result<DeleteMealResponse, String> {
    let conn = db.get_conn().map_err(|e| format!("Database error: {}", e))?;

    let deleted = MealEntry::delete(&conn, id).map_err(|e| format!("Failed to delete meal: {}", e))?;
    if !deleted {
        return Err(format!("Meal not found with id: {}", id));
    }

    info!(id, "Deleted meal");
    Ok(DeleteMealResponse {
        success: true,
        deleted_id: id,
    })
}

/// Totals for one day plus progress against the current goals
pub fn daily_summary(db: &Database, date: NaiveDate) -> Result<DailySummaryResponse, String> {
    let conn = db.get_conn().map_err(|e| format!("Database error: {}", e))?;

    let (start, end) = day_bounds(date);
    let meals = MealEntry::list_between(&conn, start, end).map_err(|e| format!("Failed to list meals: {}", e))?;
    let totals = daily_macro_summary(&meals, date);

    let profile = Profile::get(&conn).map_err(|e| format!("Failed to get goals: {}", e))?;
    let progress = profile.map(|p| daily_goal_progress(&totals, &p.goals));

    Ok(DailySummaryResponse {
        date,
        totals,
        meals,
        progress,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::temp_database;
    use crate::models::FoodCreate;

    fn at(date: &str, time: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{date} {time}"), "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn macros(calories: i64, protein_g: i64, carbs_g: i64, fat_g: i64) -> MealMacrosInput {
        MealMacrosInput {
            calories,
            protein_g,
            carbs_g,
            fat_g,
        }
    }

    #[test]
    fn test_log_and_summarize_day() {
        let (_dir, db) = temp_database();
        let day = NaiveDate::from_ymd_opt(2025, 5, 20).unwrap();

        log_meal(&db, at("2025-05-20", "08:00:00"), "breakfast", "Oats", macros(350, 12, 60, 7), MealSource::Manual)
            .unwrap();
        log_meal(&db, at("2025-05-20", "23:59:59"), "snack", "Yogurt", macros(150, 15, 10, 5), MealSource::Manual)
            .unwrap();
        log_meal(&db, at("2025-05-21", "00:00:00"), "snack", "Late toast", macros(90, 3, 15, 1), MealSource::Manual)
            .unwrap();

        let summary = daily_summary(&db, day).unwrap();
        assert_eq!(summary.meals.len(), 2);
        assert_eq!(summary.totals, MacroTotals::new(500, 27, 70, 12));
        assert!(summary.progress.is_none());
    }

    #[test]
    fn test_log_meal_rejects_invalid_input() {
        let (_dir, db) = temp_database();
        let now = at("2025-05-20", "12:00:00");

        let err = log_meal(&db, now, "lunch", "Pizza", macros(12_000, 0, 0, 0), MealSource::Manual).unwrap_err();
        assert!(err.starts_with("calories"));
        assert!(log_meal(&db, now, "elevenses", "Tea", macros(5, 0, 1, 0), MealSource::Manual).is_err());
        assert_eq!(recent_meals(&db, 10).unwrap().count, 0);
    }

    #[test]
    fn test_log_library_meal_scales_portion() {
        let (_dir, db) = temp_database();
        let food = db
            .with_conn(|conn| {
                Food::create(
                    conn,
                    &FoodCreate {
                        name: "Chicken Breast".to_string(),
                        calories: 165.0,
                        protein_g: 31.0,
                        carbs_g: 0.0,
                        fat_g: 3.6,
                    },
                )
            })
            .unwrap();

        let logged = log_library_meal(&db, at("2025-05-20", "13:00:00"), "lunch", food.id, 150.0).unwrap();
        assert_eq!(logged.description, "150g of Chicken Breast");
        assert_eq!(logged.macros, MacroTotals::new(248, 47, 0, 5));
        assert_eq!(logged.source, MealSource::Library);

        assert!(log_library_meal(&db, at("2025-05-20", "13:00:00"), "lunch", food.id, 0.0).is_err());
        assert!(log_library_meal(&db, at("2025-05-20", "13:00:00"), "lunch", 9999, 100.0).is_err());
    }

    #[test]
    fn test_backfill_meal() {
        let (_dir, db) = temp_database();
        let today = NaiveDate::from_ymd_opt(2025, 5, 20).unwrap();

        let logged = backfill_meal(&db, today, "2025-05-18", "dinner", "Salmon and rice", macros(700, 45, 70, 22))
            .unwrap();
        assert_eq!(logged.logged_at, at("2025-05-18", "12:00:00"));
        assert_eq!(logged.source, MealSource::Backfill);

        assert!(backfill_meal(&db, today, "2025-05-21", "dinner", "Future", macros(100, 0, 0, 0)).is_err());
        assert!(backfill_meal(&db, today, "2023-01-01", "dinner", "Ancient", macros(100, 0, 0, 0)).is_err());
    }

    #[test]
    fn test_recent_and_delete() {
        let (_dir, db) = temp_database();
        let first = log_meal(&db, at("2025-05-19", "12:00:00"), "lunch", "Soup", macros(300, 10, 30, 10), MealSource::Manual)
            .unwrap();
        let second = log_meal(&db, at("2025-05-20", "12:00:00"), "lunch", "Salad", macros(250, 8, 20, 14), MealSource::Manual)
            .unwrap();

        let recent = recent_meals(&db, DEFAULT_RECENT_LIMIT).unwrap();
        assert_eq!(recent.count, 2);
        assert_eq!(recent.meals[0].id, second.id);

        delete_meal(&db, first.id).unwrap();
        assert!(delete_meal(&db, first.id).is_err());
        assert_eq!(recent_meals(&db, DEFAULT_RECENT_LIMIT).unwrap().count, 1);
    }
}
