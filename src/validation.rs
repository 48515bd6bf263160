//! Input validation
//!
//! Turns raw tool parameters into checked model data. Each rule reports the
//! offending field so the caller can surface it.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{ActivityLevel, MacroGoals, MacroTotals, MealType, ProfileSet};

pub const MAX_DESCRIPTION_CHARS: usize = 200;
pub const MAX_MEAL_CALORIES: i64 = 10_000;
pub const MAX_MEAL_MACRO_G: i64 = 1_000;
pub const MIN_CALORIE_GOAL: i64 = 1_000;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

pub type ValidationResult<T> = Result<T, ValidationError>;

fn int_in_range(field: &'static str, value: i64, min: i64, max: i64, message: &str) -> ValidationResult<u32> {
    if value < min || value > max {
        return Err(ValidationError::new(field, message));
    }
    u32::try_from(value).map_err(|_| ValidationError::new(field, message))
}

/// Raw macros for one meal as supplied by a caller
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MealMacrosInput {
    pub calories: i64,
    pub protein_g: i64,
    pub carbs_g: i64,
    pub fat_g: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidMeal {
    pub meal_type: MealType,
    pub description: String,
    pub macros: MacroTotals,
}

pub fn parse_meal_type(raw: &str) -> ValidationResult<MealType> {
    MealType::parse(raw).ok_or_else(|| {
        ValidationError::new("meal_type", "must be one of breakfast, lunch, dinner, snack, supplement")
    })
}

pub fn validate_description(raw: &str) -> ValidationResult<String> {
    let description = raw.trim();
    if description.is_empty() {
        return Err(ValidationError::new("description", "is required"));
    }
    if description.chars().count() > MAX_DESCRIPTION_CHARS {
        return Err(ValidationError::new(
            "description",
            format!("must be at most {} characters", MAX_DESCRIPTION_CHARS),
        ));
    }
    Ok(description.to_string())
}

pub fn validate_meal_macros(input: &MealMacrosInput) -> ValidationResult<MacroTotals> {
    Ok(MacroTotals {
        calories: int_in_range(
            "calories",
            input.calories,
            1,
            MAX_MEAL_CALORIES,
            "must be between 1 and 10000 (values above 10000 look like a typo)",
        )?,
        protein_g: int_in_range("protein_g", input.protein_g, 0, MAX_MEAL_MACRO_G, "must be between 0 and 1000")?,
        carbs_g: int_in_range("carbs_g", input.carbs_g, 0, MAX_MEAL_MACRO_G, "must be between 0 and 1000")?,
        fat_g: int_in_range("fat_g", input.fat_g, 0, MAX_MEAL_MACRO_G, "must be between 0 and 1000")?,
    })
}

pub fn validate_meal(meal_type: &str, description: &str, macros: &MealMacrosInput) -> ValidationResult<ValidMeal> {
    Ok(ValidMeal {
        meal_type: parse_meal_type(meal_type)?,
        description: validate_description(description)?,
        macros: validate_meal_macros(macros)?,
    })
}

pub fn parse_date(field: &'static str, raw: &str) -> ValidationResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| ValidationError::new(field, "must be a date in YYYY-MM-DD format"))
}

/// A backfill date must lie within the past year and not in the future
pub fn validate_backfill_date(raw: &str, today: NaiveDate) -> ValidationResult<NaiveDate> {
    let date = parse_date("target_date", raw)?;
    let earliest = today.checked_sub_months(Months::new(12)).unwrap_or(NaiveDate::MIN);

    if date > today {
        return Err(ValidationError::new("target_date", "cannot be in the future"));
    }
    if date < earliest {
        return Err(ValidationError::new("target_date", "must be within the last 365 days"));
    }
    Ok(date)
}

/// Raw goal settings as supplied by a caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalsInput {
    pub age: i64,
    pub height_cm: i64,
    pub weight_kg: f64,
    pub activity_level: String,
    pub calorie_goal: i64,
    pub protein_goal_g: i64,
    pub carbs_goal_g: i64,
    pub fat_goal_g: i64,
}

pub fn parse_activity_level(raw: &str) -> ValidationResult<ActivityLevel> {
    ActivityLevel::parse(raw).ok_or_else(|| {
        ValidationError::new("activity_level", "must be one of sedentary, light, moderate, very, super")
    })
}

fn non_negative(field: &'static str, value: i64) -> ValidationResult<u32> {
    int_in_range(field, value, 0, i64::from(u32::MAX), "cannot be negative")
}

pub fn validate_goals(input: &GoalsInput) -> ValidationResult<ProfileSet> {
    let age = int_in_range("age", input.age, 18, 120, "must be 18 or older")?;
    let height_cm = int_in_range("height_cm", input.height_cm, 50, 300, "must be at least 50 cm")?;
    if !input.weight_kg.is_finite() || input.weight_kg < 10.0 {
        return Err(ValidationError::new("weight_kg", "must be at least 10 kg"));
    }
    let activity_level = parse_activity_level(&input.activity_level)?;
    let calories = int_in_range(
        "calorie_goal",
        input.calorie_goal,
        MIN_CALORIE_GOAL,
        i64::from(u32::MAX),
        "must be at least 1000 kcal",
    )?;

    Ok(ProfileSet {
        age,
        height_cm,
        weight_kg: input.weight_kg,
        activity_level,
        goals: MacroGoals {
            calories,
            protein_g: non_negative("protein_goal_g", input.protein_goal_g)?,
            carbs_g: non_negative("carbs_goal_g", input.carbs_goal_g)?,
            fat_g: non_negative("fat_goal_g", input.fat_goal_g)?,
        },
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightGoal {
    Lose,
    Maintain,
    Gain,
}

/// Raw answers for the goal advisor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisorInput {
    pub age: i64,
    pub sex: String,
    pub height_cm: i64,
    pub weight_kg: f64,
    pub activity_level: String,
    pub goal: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdvisorAnswers {
    pub age: u32,
    pub sex: Sex,
    pub height_cm: u32,
    pub weight_kg: f64,
    pub activity_level: ActivityLevel,
    pub goal: WeightGoal,
}

pub fn validate_advisor(input: &AdvisorInput) -> ValidationResult<AdvisorAnswers> {
    let age = int_in_range("age", input.age, 18, 100, "must be between 18 and 100")?;
    let sex = match input.sex.trim().to_lowercase().as_str() {
        "male" => Sex::Male,
        "female" => Sex::Female,
        _ => return Err(ValidationError::new("sex", "must be male or female")),
    };
    let height_cm = int_in_range("height_cm", input.height_cm, 100, 250, "must be between 100 and 250 cm")?;
    if !input.weight_kg.is_finite() || !(30.0..=300.0).contains(&input.weight_kg) {
        return Err(ValidationError::new("weight_kg", "must be between 30 and 300 kg"));
    }
    let activity_level = parse_activity_level(&input.activity_level)?;
    let goal = match input.goal.trim().to_lowercase().as_str() {
        "lose" => WeightGoal::Lose,
        "maintain" => WeightGoal::Maintain,
        "gain" => WeightGoal::Gain,
        _ => return Err(ValidationError::new("goal", "must be lose, maintain or gain")),
    };

    Ok(AdvisorAnswers {
        age,
        sex,
        height_cm,
        weight_kg: input.weight_kg,
        activity_level,
        goal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn macros(calories: i64, protein_g: i64, carbs_g: i64, fat_g: i64) -> MealMacrosInput {
        MealMacrosInput {
            calories,
            protein_g,
            carbs_g,
            fat_g,
        }
    }

    #[test]
    fn test_valid_meal() {
        let meal = validate_meal("Lunch", "  Turkey sandwich ", &macros(520, 35, 48, 18)).unwrap();
        assert_eq!(meal.meal_type, MealType::Lunch);
        assert_eq!(meal.description, "Turkey sandwich");
        assert_eq!(meal.macros, MacroTotals::new(520, 35, 48, 18));
    }

    #[test]
    fn test_meal_rejects_bad_values() {
        assert_eq!(validate_meal("brunch", "x", &macros(100, 0, 0, 0)).unwrap_err().field, "meal_type");
        assert_eq!(validate_meal("lunch", "   ", &macros(100, 0, 0, 0)).unwrap_err().field, "description");
        assert_eq!(validate_meal("lunch", &"a".repeat(201), &macros(100, 0, 0, 0)).unwrap_err().field, "description");
        assert_eq!(validate_meal("lunch", "x", &macros(0, 0, 0, 0)).unwrap_err().field, "calories");
        assert_eq!(validate_meal("lunch", "x", &macros(10_001, 0, 0, 0)).unwrap_err().field, "calories");
        assert_eq!(validate_meal("lunch", "x", &macros(100, -1, 0, 0)).unwrap_err().field, "protein_g");
        assert_eq!(validate_meal("lunch", "x", &macros(100, 0, 1001, 0)).unwrap_err().field, "carbs_g");
    }

    #[test]
    fn test_backfill_date_window() {
        let today = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
        assert_eq!(
            validate_backfill_date("2025-06-30", today).unwrap(),
            NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()
        );
        assert!(validate_backfill_date("2025-07-01", today).is_ok());
        assert!(validate_backfill_date("2024-07-01", today).is_ok());
        assert!(validate_backfill_date("2024-06-30", today).is_err());
        assert!(validate_backfill_date("2025-07-02", today).is_err());
        assert!(validate_backfill_date("07/01/2025", today).is_err());
    }

    fn goals() -> GoalsInput {
        GoalsInput {
            age: 30,
            height_cm: 170,
            weight_kg: 70.0,
            activity_level: "moderate".to_string(),
            calorie_goal: 2200,
            protein_goal_g: 140,
            carbs_goal_g: 250,
            fat_goal_g: 70,
        }
    }

    #[test]
    fn test_validate_goals() {
        let profile = validate_goals(&goals()).unwrap();
        assert_eq!(profile.goals.calories, 2200);
        assert_eq!(profile.activity_level, ActivityLevel::Moderate);

        let mut low = goals();
        low.calorie_goal = 900;
        assert_eq!(validate_goals(&low).unwrap_err().field, "calorie_goal");

        let mut young = goals();
        young.age = 17;
        assert_eq!(validate_goals(&young).unwrap_err().field, "age");

        let mut negative = goals();
        negative.fat_goal_g = -5;
        assert_eq!(validate_goals(&negative).unwrap_err().field, "fat_goal_g");
    }

    #[test]
    fn test_validate_advisor() {
        let input = AdvisorInput {
            age: 40,
            sex: "Female".to_string(),
            height_cm: 165,
            weight_kg: 68.0,
            activity_level: "light".to_string(),
            goal: "lose".to_string(),
        };
        let answers = validate_advisor(&input).unwrap();
        assert_eq!(answers.sex, Sex::Female);
        assert_eq!(answers.goal, WeightGoal::Lose);

        let mut heavy = input.clone();
        heavy.weight_kg = 301.0;
        assert_eq!(validate_advisor(&heavy).unwrap_err().field, "weight_kg");

        let mut unknown = input;
        unknown.goal = "bulk".to_string();
        assert_eq!(validate_advisor(&unknown).unwrap_err().field, "goal");
    }
}
