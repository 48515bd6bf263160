//! Database migrations
//!
//! Schema creation and versioning.

use rusqlite::Connection;
use tracing::info;

use super::connection::DbResult;

/// Current schema version
pub const SCHEMA_VERSION: i32 = 2;

/// Bring the database up to the current schema version
pub fn run_migrations(conn: &Connection) -> DbResult<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_migrations (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        )",
        [],
    )?;

    let current_version = get_schema_version(conn)?;

    if current_version < 1 {
        migrate_v1(conn)?;
        conn.execute("INSERT INTO schema_migrations (version) VALUES (1)", [])?;
        info!("Applied schema migration v1");
    }

    if current_version < 2 {
        migrate_v2(conn)?;
        conn.execute("INSERT INTO schema_migrations (version) VALUES (2)", [])?;
        info!("Applied schema migration v2");
    }

    Ok(())
}

/// v1: meal log and food library
fn migrate_v1(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(
        r#"
        -- ============================================
        -- MEAL ENTRIES
        -- One row per logged meal; macros already scaled to the portion eaten
        -- ============================================
        CREATE TABLE meal_entries (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            meal_type TEXT NOT NULL CHECK(meal_type IN ('breakfast', 'lunch', 'dinner', 'snack', 'supplement')),
            description TEXT NOT NULL,

            calories INTEGER NOT NULL CHECK(calories >= 0),
            protein_g INTEGER NOT NULL DEFAULT 0 CHECK(protein_g >= 0),
            carbs_g INTEGER NOT NULL DEFAULT 0 CHECK(carbs_g >= 0),
            fat_g INTEGER NOT NULL DEFAULT 0 CHECK(fat_g >= 0),

            source TEXT NOT NULL DEFAULT 'manual' CHECK(source IN ('manual', 'library', 'ai_photo', 'backfill')),
            logged_at TEXT NOT NULL,             -- local time: "2025-01-09 12:30:00"
            created_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE INDEX idx_meal_entries_logged_at ON meal_entries(logged_at);

        -- ============================================
        -- FOODS
        -- Personal food library, macros per 100g
        -- ============================================
        CREATE TABLE foods (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE COLLATE NOCASE,
            calories REAL NOT NULL CHECK(calories >= 0),
            protein_g REAL NOT NULL DEFAULT 0 CHECK(protein_g >= 0),
            carbs_g REAL NOT NULL DEFAULT 0 CHECK(carbs_g >= 0),
            fat_g REAL NOT NULL DEFAULT 0 CHECK(fat_g >= 0),
            created_at TEXT NOT NULL DEFAULT (datetime('now'))
        );
        "#,
    )?;

    Ok(())
}

/// v2: biometrics and nutrition goals (single row)
fn migrate_v2(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE profile (
            id INTEGER PRIMARY KEY CHECK(id = 1),
            age INTEGER NOT NULL,
            height_cm INTEGER NOT NULL,
            weight_kg REAL NOT NULL,
            activity_level TEXT NOT NULL CHECK(activity_level IN ('sedentary', 'light', 'moderate', 'very', 'super')),

            calorie_goal INTEGER NOT NULL,
            protein_goal_g INTEGER NOT NULL,
            carbs_goal_g INTEGER NOT NULL,
            fat_goal_g INTEGER NOT NULL,

            updated_at TEXT NOT NULL DEFAULT (datetime('now'))
        );
        "#,
    )?;

    Ok(())
}

pub fn get_schema_version(conn: &Connection) -> DbResult<i32> {
    let version: i32 = conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_migrations",
        [],
        |row| row.get(0),
    )?;
    Ok(version)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_are_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        run_migrations(&conn).unwrap();
        assert_eq!(get_schema_version(&conn).unwrap(), SCHEMA_VERSION);

        let tables: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name IN ('meal_entries', 'foods', 'profile')",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(tables, 3);
    }
}
