//! Profile model
//!
//! Biometrics and daily nutrition goals. Single row (id = 1).

use rusqlite::{params, Connection, Row};
use serde::{Deserialize, Serialize};

use crate::db::{DbError, DbResult};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Very,
    Super,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Very,
        ActivityLevel::Super,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Very => "very",
            ActivityLevel::Super => "super",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|l| l.as_str() == lower)
    }

    /// Human description used in AI prompts
    pub fn describe(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary (little or no exercise)",
            ActivityLevel::Light => "lightly active (1-3 days/week)",
            ActivityLevel::Moderate => "moderately active (3-5 days/week)",
            ActivityLevel::Very => "very active (6-7 days/week)",
            ActivityLevel::Super => "super active (physical job or twice-daily training)",
        }
    }
}

/// Daily targets
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MacroGoals {
    pub calories: u32,
    pub protein_g: u32,
    pub carbs_g: u32,
    pub fat_g: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub age: u32,
    pub height_cm: u32,
    pub weight_kg: f64,
    pub activity_level: ActivityLevel,
    pub goals: MacroGoals,
    pub updated_at: String,
}

/// Data for setting the profile; replaces every field
#[derive(Debug, Clone)]
pub struct ProfileSet {
    pub age: u32,
    pub height_cm: u32,
    pub weight_kg: f64,
    pub activity_level: ActivityLevel,
    pub goals: MacroGoals,
}

impl Profile {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        let level: String = row.get("activity_level")?;
        let activity_level = ActivityLevel::parse(&level).ok_or_else(|| {
            rusqlite::Error::InvalidColumnType(4, "activity_level".to_string(), rusqlite::types::Type::Text)
        })?;

        Ok(Self {
            age: row.get("age")?,
            height_cm: row.get("height_cm")?,
            weight_kg: row.get("weight_kg")?,
            activity_level,
            goals: MacroGoals {
                calories: row.get("calorie_goal")?,
                protein_g: row.get("protein_goal_g")?,
                carbs_g: row.get("carbs_goal_g")?,
                fat_g: row.get("fat_goal_g")?,
            },
            updated_at: row.get("updated_at")?,
        })
    }

    pub fn get(conn: &Connection) -> DbResult<Option<Self>> {
        let mut stmt = conn.prepare("SELECT * FROM profile WHERE id = 1")?;

        match stmt.query_row([], Self::from_row) {
            Ok(profile) => Ok(Some(profile)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub fn exists(conn: &Connection) -> DbResult<bool> {
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM profile WHERE id = 1", [], |row| row.get(0))?;
        Ok(count > 0)
    }

    /// Insert or replace the profile
    pub fn set(conn: &Connection, data: &ProfileSet) -> DbResult<Self> {
        conn.execute(
            r#"
            INSERT INTO profile (
                id, age, height_cm, weight_kg, activity_level,
                calorie_goal, protein_goal_g, carbs_goal_g, fat_goal_g
            )
            VALUES (1, ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            ON CONFLICT(id) DO UPDATE SET
                age = excluded.age,
                height_cm = excluded.height_cm,
                weight_kg = excluded.weight_kg,
                activity_level = excluded.activity_level,
                calorie_goal = excluded.calorie_goal,
                protein_goal_g = excluded.protein_goal_g,
                carbs_goal_g = excluded.carbs_goal_g,
                fat_goal_g = excluded.fat_goal_g,
                updated_at = datetime('now')
            "#,
            params![
                data.age,
                data.height_cm,
                data.weight_kg,
                data.activity_level.as_str(),
                data.goals.calories,
                data.goals.protein_g,
                data.goals.carbs_g,
                data.goals.fat_g,
            ],
        )?;

        Self::get(conn)?.ok_or(DbError::Sqlite(rusqlite::Error::QueryReturnedNoRows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrations::run_migrations;

    fn sample(calories: u32) -> ProfileSet {
        ProfileSet {
            age: 34,
            height_cm: 178,
            weight_kg: 81.5,
            activity_level: ActivityLevel::Moderate,
            goals: MacroGoals {
                calories,
                protein_g: 160,
                carbs_g: 250,
                fat_g: 70,
            },
        }
    }

    #[test]
    fn test_set_then_replace() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();

        assert!(Profile::get(&conn).unwrap().is_none());
        assert!(!Profile::exists(&conn).unwrap());

        Profile::set(&conn, &sample(2400)).unwrap();
        let updated = Profile::set(&conn, &sample(2200)).unwrap();
        assert_eq!(updated.goals.calories, 2200);
        assert_eq!(updated.activity_level, ActivityLevel::Moderate);
        assert!(Profile::exists(&conn).unwrap());
    }

    #[test]
    fn test_activity_level_parse() {
        assert_eq!(ActivityLevel::parse("Very"), Some(ActivityLevel::Very));
        assert_eq!(ActivityLevel::parse("extreme"), None);
    }
}
