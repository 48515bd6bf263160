//! Database module
//!
//! Handles SQLite connection and migrations.

pub mod connection;
pub mod migrations;

pub use connection::{Database, DbError, DbResult};

#[cfg(test)]
pub(crate) mod test_support {
    use super::Database;

    /// Fresh migrated database in a temp dir; keep the `TempDir` alive for the test's duration
    pub fn temp_database() -> (tempfile::TempDir, Database) {
        let dir = tempfile::tempdir().unwrap();
        let database = Database::open(dir.path().join("macrolog-test.db")).unwrap();
        (dir, database)
    }
}
