//! Food library model
//!
//! Personal food library; macros are stored per 100g.

use rusqlite::{params, Connection, Row};
use serde::{Deserialize, Serialize};

use crate::db::{DbError, DbResult};
use super::MacroTotals;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Food {
    pub id: i64,
    pub name: String,
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub created_at: String,
}

/// Data for creating a food (values per 100g)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodCreate {
    pub name: String,
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

fn scaled(per_100g: f64, ratio: f64) -> u32 {
    // Inputs are validated non-negative; the clamp keeps `as` well-defined
    (per_100g * ratio).round().clamp(0.0, f64::from(u32::MAX)) as u32
}

impl Food {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            name: row.get("name")?,
            calories: row.get("calories")?,
            protein_g: row.get("protein_g")?,
            carbs_g: row.get("carbs_g")?,
            fat_g: row.get("fat_g")?,
            created_at: row.get("created_at")?,
        })
    }

    /// Macros for a portion of `grams`, each value rounded independently
    pub fn portion(&self, grams: f64) -> MacroTotals {
        let ratio = grams / 100.0;
        MacroTotals {
            calories: scaled(self.calories, ratio),
            protein_g: scaled(self.protein_g, ratio),
            carbs_g: scaled(self.carbs_g, ratio),
            fat_g: scaled(self.fat_g, ratio),
        }
    }

    pub fn create(conn: &Connection, data: &FoodCreate) -> DbResult<Self> {
        conn.execute(
            "INSERT INTO foods (name, calories, protein_g, carbs_g, fat_g) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![data.name, data.calories, data.protein_g, data.carbs_g, data.fat_g],
        )?;

        let id = conn.last_insert_rowid();
        Self::get_by_id(conn, id)?
            .ok_or(DbError::Sqlite(rusqlite::Error::QueryReturnedNoRows))
    }

    /// Insert unless a food with the same name (case-insensitive) exists.
    /// Returns true when a row was inserted.
    pub fn insert_if_missing(conn: &Connection, data: &FoodCreate) -> DbResult<bool> {
        let rows = conn.execute(
            "INSERT OR IGNORE INTO foods (name, calories, protein_g, carbs_g, fat_g) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![data.name, data.calories, data.protein_g, data.carbs_g, data.fat_g],
        )?;
        Ok(rows > 0)
    }

    pub fn get_by_id(conn: &Connection, id: i64) -> DbResult<Option<Self>> {
        let mut stmt = conn.prepare("SELECT * FROM foods WHERE id = ?1")?;

        match stmt.query_row([id], Self::from_row) {
            Ok(food) => Ok(Some(food)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub fn get_by_name(conn: &Connection, name: &str) -> DbResult<Option<Self>> {
        let mut stmt = conn.prepare("SELECT * FROM foods WHERE name = ?1")?;

        match stmt.query_row([name], Self::from_row) {
            Ok(food) => Ok(Some(food)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Substring search on name, alphabetical
    pub fn search(conn: &Connection, query: &str, limit: i64) -> DbResult<Vec<Self>> {
        let pattern = format!("%{}%", query.trim());
        let mut stmt = conn.prepare(
            "SELECT * FROM foods WHERE name LIKE ?1 ORDER BY name LIMIT ?2",
        )?;

        let foods = stmt
            .query_map(params![pattern, limit], Self::from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(foods)
    }

    pub fn list(conn: &Connection, limit: i64, offset: i64) -> DbResult<Vec<Self>> {
        let mut stmt = conn.prepare("SELECT * FROM foods ORDER BY name LIMIT ?1 OFFSET ?2")?;

        let foods = stmt
            .query_map(params![limit, offset], Self::from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(foods)
    }

    pub fn count(conn: &Connection) -> DbResult<i64> {
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM foods", [], |row| row.get(0))?;
        Ok(count)
    }

    pub fn delete(conn: &Connection, id: i64) -> DbResult<bool> {
        let rows = conn.execute("DELETE FROM foods WHERE id = ?1", [id])?;
        Ok(rows > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrations::run_migrations;

    fn conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        conn
    }

    fn chicken() -> FoodCreate {
        FoodCreate {
            name: "Chicken Breast (Cooked)".to_string(),
            calories: 165.0,
            protein_g: 31.0,
            carbs_g: 0.0,
            fat_g: 3.6,
        }
    }

    #[test]
    fn test_portion_rounds_each_macro() {
        let conn = conn();
        let food = Food::create(&conn, &chicken()).unwrap();
        let portion = food.portion(150.0);
        assert_eq!(portion, MacroTotals::new(248, 47, 0, 5));
    }

    #[test]
    fn test_insert_if_missing_is_case_insensitive() {
        let conn = conn();
        assert!(Food::insert_if_missing(&conn, &chicken()).unwrap());

        let mut shouting = chicken();
        shouting.name = shouting.name.to_uppercase();
        assert!(!Food::insert_if_missing(&conn, &shouting).unwrap());
        assert_eq!(Food::count(&conn).unwrap(), 1);
    }

    #[test]
    fn test_search_and_delete() {
        let conn = conn();
        let food = Food::create(&conn, &chicken()).unwrap();
        Food::create(
            &conn,
            &FoodCreate {
                name: "Brown Rice (Cooked)".to_string(),
                calories: 123.0,
                protein_g: 2.7,
                carbs_g: 25.6,
                fat_g: 0.9,
            },
        )
        .unwrap();

        let hits = Food::search(&conn, "chicken", 20).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, food.id);

        assert!(Food::delete(&conn, food.id).unwrap());
        assert!(Food::get_by_id(&conn, food.id).unwrap().is_none());
    }
}
