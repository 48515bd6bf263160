//! Meal Entry model
//!
//! A single logged meal with its macros already scaled to the portion eaten.

use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{params, Connection, Row};
use serde::{Deserialize, Serialize};

use crate::analytics::DailyMacroTotal;
use crate::db::{DbError, DbResult};
use super::MacroTotals;

/// Storage format for `logged_at` (local time)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
    Supplement,
}

impl MealType {
    pub const ALL: [MealType; 5] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
        MealType::Supplement,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
            MealType::Supplement => "supplement",
        }
    }

    /// Case-insensitive parse; `None` for anything outside the five meal types
    pub fn parse(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|t| t.as_str() == lower)
    }
}

/// How an entry got into the log
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MealSource {
    Manual,
    Library,
    AiPhoto,
    Backfill,
}

impl MealSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealSource::Manual => "manual",
            MealSource::Library => "library",
            MealSource::AiPhoto => "ai_photo",
            MealSource::Backfill => "backfill",
        }
    }

    fn from_db(s: &str) -> Self {
        match s {
            "library" => MealSource::Library,
            "ai_photo" => MealSource::AiPhoto,
            "backfill" => MealSource::Backfill,
            _ => MealSource::Manual,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealEntry {
    pub id: i64,
    pub meal_type: MealType,
    pub description: String,
    pub macros: MacroTotals,
    pub source: MealSource,
    pub logged_at: NaiveDateTime,
    pub created_at: String,
}

/// Data for creating a meal entry
#[derive(Debug, Clone)]
pub struct MealEntryCreate {
    pub meal_type: MealType,
    pub description: String,
    pub macros: MacroTotals,
    pub source: MealSource,
    pub logged_at: NaiveDateTime,
}

fn conversion_error(column: usize, e: impl std::error::Error + Send + Sync + 'static) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(column, rusqlite::types::Type::Text, Box::new(e))
}

fn parse_timestamp(raw: &str, column: usize) -> rusqlite::Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT).map_err(|e| conversion_error(column, e))
}

impl MealEntry {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        let meal_type_str: String = row.get("meal_type")?;
        let meal_type = MealType::parse(&meal_type_str).ok_or_else(|| {
            rusqlite::Error::InvalidColumnType(1, "meal_type".to_string(), rusqlite::types::Type::Text)
        })?;
        let source: String = row.get("source")?;
        let logged_at: String = row.get("logged_at")?;

        Ok(Self {
            id: row.get("id")?,
            meal_type,
            description: row.get("description")?,
            macros: MacroTotals {
                calories: row.get("calories")?,
                protein_g: row.get("protein_g")?,
                carbs_g: row.get("carbs_g")?,
                fat_g: row.get("fat_g")?,
            },
            source: MealSource::from_db(&source),
            logged_at: parse_timestamp(&logged_at, 8)?,
            created_at: row.get("created_at")?,
        })
    }

    pub fn create(conn: &Connection, data: &MealEntryCreate) -> DbResult<Self> {
        conn.execute(
            r#"
            INSERT INTO meal_entries (
                meal_type, description, calories, protein_g, carbs_g, fat_g, source, logged_at
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
            params![
                data.meal_type.as_str(),
                data.description,
                data.macros.calories,
                data.macros.protein_g,
                data.macros.carbs_g,
                data.macros.fat_g,
                data.source.as_str(),
                data.logged_at.format(TIMESTAMP_FORMAT).to_string(),
            ],
        )?;

        let id = conn.last_insert_rowid();
        Self::get_by_id(conn, id)?
            .ok_or(DbError::Sqlite(rusqlite::Error::QueryReturnedNoRows))
    }

    pub fn get_by_id(conn: &Connection, id: i64) -> DbResult<Option<Self>> {
        let mut stmt = conn.prepare("SELECT * FROM meal_entries WHERE id = ?1")?;

        match stmt.query_row([id], Self::from_row) {
            Ok(entry) => Ok(Some(entry)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Most recently logged entries first
    pub fn recent(conn: &Connection, limit: i64) -> DbResult<Vec<Self>> {
        let mut stmt = conn.prepare(
            "SELECT * FROM meal_entries ORDER BY logged_at DESC, id DESC LIMIT ?1",
        )?;

        let entries = stmt
            .query_map([limit], Self::from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(entries)
    }

    /// Entries with `start <= logged_at < end`, oldest first
    pub fn list_between(conn: &Connection, start: NaiveDateTime, end: NaiveDateTime) -> DbResult<Vec<Self>> {
        let mut stmt = conn.prepare(
            "SELECT * FROM meal_entries WHERE logged_at >= ?1 AND logged_at < ?2 ORDER BY logged_at, id",
        )?;

        let entries = stmt
            .query_map(
                params![
                    start.format(TIMESTAMP_FORMAT).to_string(),
                    end.format(TIMESTAMP_FORMAT).to_string(),
                ],
                Self::from_row,
            )?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(entries)
    }

    /// Summed macros for `start <= logged_at < end`; zeros when nothing was logged
    pub fn totals_between(conn: &Connection, start: NaiveDateTime, end: NaiveDateTime) -> DbResult<MacroTotals> {
        let totals = conn.query_row(
            r#"
            SELECT
                COALESCE(SUM(calories), 0) AS calories,
                COALESCE(SUM(protein_g), 0) AS protein_g,
                COALESCE(SUM(carbs_g), 0) AS carbs_g,
                COALESCE(SUM(fat_g), 0) AS fat_g
            FROM meal_entries
            WHERE logged_at >= ?1 AND logged_at < ?2
            "#,
            params![
                start.format(TIMESTAMP_FORMAT).to_string(),
                end.format(TIMESTAMP_FORMAT).to_string(),
            ],
            |row| {
                Ok(MacroTotals {
                    calories: row.get("calories")?,
                    protein_g: row.get("protein_g")?,
                    carbs_g: row.get("carbs_g")?,
                    fat_g: row.get("fat_g")?,
                })
            },
        )?;

        Ok(totals)
    }

    /// Per-day totals from `since` (inclusive) onward, ascending by date.
    /// Days without entries produce no row.
    pub fn daily_totals_since(conn: &Connection, since: NaiveDate) -> DbResult<Vec<DailyMacroTotal>> {
        let mut stmt = conn.prepare(
            r#"
            SELECT
                date(logged_at) AS day,
                SUM(calories) AS calories,
                SUM(protein_g) AS protein_g,
                SUM(carbs_g) AS carbs_g,
                SUM(fat_g) AS fat_g
            FROM meal_entries
            WHERE logged_at >= ?1
            GROUP BY date(logged_at)
            ORDER BY day
            "#,
        )?;

        let since = since.format("%Y-%m-%d").to_string();
        let rows = stmt
            .query_map([since], |row| {
                let day: String = row.get("day")?;
                Ok(DailyMacroTotal {
                    date: NaiveDate::parse_from_str(&day, "%Y-%m-%d")
                        .map_err(|e| conversion_error(0, e))?,
                    calories: row.get("calories")?,
                    protein_grams: row.get("protein_g")?,
                    carb_grams: row.get("carbs_g")?,
                    fat_grams: row.get("fat_g")?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(rows)
    }

    pub fn count(conn: &Connection) -> DbResult<i64> {
        let count = conn.query_row("SELECT COUNT(*) FROM meal_entries", [], |row| row.get(0))?;
        Ok(count)
    }

    pub fn delete(conn: &Connection, id: i64) -> DbResult<bool> {
        let rows = conn.execute("DELETE FROM meal_entries WHERE id = ?1", [id])?;
        Ok(rows > 0)
    }
}
