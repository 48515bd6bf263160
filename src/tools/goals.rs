use serde::Serialize;
use tracing::info;

use crate::db::Database;
use crate::models::Profile;
use crate::validation::{self, GoalsInput};

#[derive(Debug, Serialize)]
pub struct GoalsResponse {
    pub has_profile: bool,
    pub profile: Option<Profile>,
}

pub fn get_goals(db: &Database) -> Result<GoalsResponse, String> {
    let conn = db.get_conn().map_err(|e| format!("Database error: {}", e))?;
    let profile = Profile::get(&conn).map_err(|e| format!("Failed to get goals: {}", e))?;

    Ok(GoalsResponse {
        has_profile: profile.is_some(),
        profile,
    })
}

/// Create or replace the profile and daily targets
pub fn set_goals(db: &Database, input: GoalsInput) -> Result<Profile, String> {
    let data = validation::validate_goals(&input).map_err(|e| e.to_string())?;

    let conn = db.get_conn().map_err(|e| format!("Database error: {}", e))?;
    let profile = Profile::set(&conn, &data).map_err(|e| format!("Failed to save goals: {}", e))?;

    info!(
        calories = profile.goals.calories,
        protein_g = profile.goals.protein_g,
        activity = profile.activity_level.as_str(),
        "Saved goals"
    );
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::temp_database;

    fn input(calorie_goal: i64) -> GoalsInput {
        GoalsInput {
            age: 28,
            height_cm: 175,
            weight_kg: 72.4,
            activity_level: "light".to_string(),
            calorie_goal,
            protein_goal_g: 130,
            carbs_goal_g: 240,
            fat_goal_g: 65,
        }
    }

    #[test]
    fn test_get_without_profile() {
        let (_dir, db) = temp_database();
        let goals = get_goals(&db).unwrap();
        assert!(!goals.has_profile);
        assert!(goals.profile.is_none());
    }

    #[test]
    fn test_set_then_replace() {
        let (_dir, db) = temp_database();
        set_goals(&db, input(2100)).unwrap();
        let updated = set_goals(&db, input(1900)).unwrap();
        assert_eq!(updated.goals.calories, 1900);

        let goals = get_goals(&db).unwrap();
        assert!(goals.has_profile);
        assert_eq!(goals.profile.unwrap().goals.calories, 1900);
    }

    #[test]
    fn test_set_rejects_low_calorie_goal() {
        let (_dir, db) = temp_database();
        let err = set_goals(&db, input(800)).unwrap_err();
        assert!(err.contains("calorie_goal"));
        assert!(!get_goals(&db).unwrap().has_profile);
    }
}
