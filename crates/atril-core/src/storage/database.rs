//! SQLite-based practice-record storage.
//!
//! Stores one row per recorded practice session; the progress views query
//! back date ranges to feed the daily series.

use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{params, Connection};

use super::data_dir;
use crate::error::{Result, StorageError};
use crate::stats::PracticeRecord;

/// Timestamp wire format inside the database.
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// SQLite database for practice records.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Get a reference to the underlying SQLite connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Open the database at `~/.config/atril/atril.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self> {
        let path = data_dir()?.join("atril.db");
        let conn = Connection::open(&path).map_err(|source| StorageError::OpenFailed {
            path: path.clone(),
            source,
        })?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    pub fn open_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), StorageError> {
        self.conn
            .execute_batch(
                "CREATE TABLE IF NOT EXISTS practice_records (
                    id               TEXT PRIMARY KEY,
                    student          TEXT NOT NULL,
                    started_at       TEXT NOT NULL,
                    duration_secs    INTEGER NOT NULL,
                    completed_blocks INTEGER NOT NULL DEFAULT 0,
                    skipped_blocks   INTEGER NOT NULL DEFAULT 0,
                    rating           REAL,
                    focus            TEXT
                );

                CREATE INDEX IF NOT EXISTS idx_practice_started_at
                    ON practice_records(started_at);
                CREATE INDEX IF NOT EXISTS idx_practice_student_started_at
                    ON practice_records(student, started_at);",
            )
            .map_err(|e| StorageError::MigrationFailed(e.to_string()))
    }

    /// Insert one practice record.
    ///
    /// # Errors
    /// Returns an error if the insert fails (including duplicate ids).
    pub fn record_practice(&self, record: &PracticeRecord) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT INTO practice_records
                (id, student, started_at, duration_secs, completed_blocks, skipped_blocks, rating, focus)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                record.id,
                record.student,
                record.started_at.format(DATETIME_FORMAT).to_string(),
                record.duration_secs,
                record.completed_blocks,
                record.skipped_blocks,
                record.rating,
                record.focus,
            ],
        )?;
        Ok(())
    }

    /// Practice records whose local start day falls in `start..=end`,
    /// optionally restricted to one student, ordered by start time.
    pub fn records_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        student: Option<&str>,
    ) -> Result<Vec<PracticeRecord>, StorageError> {
        let from = format!("{start} 00:00:00");
        let to = format!("{end} 23:59:59");

        let mut sql = String::from(
            "SELECT id, student, started_at, duration_secs, completed_blocks,
                    skipped_blocks, rating, focus
             FROM practice_records
             WHERE started_at >= ?1 AND started_at <= ?2",
        );
        if student.is_some() {
            sql.push_str(" AND student = ?3");
        }
        sql.push_str(" ORDER BY started_at");

        let mut stmt = self.conn.prepare(&sql)?;
        let map_row = |row: &rusqlite::Row<'_>| {
            let started_raw: String = row.get(2)?;
            let started_at = NaiveDateTime::parse_from_str(&started_raw, DATETIME_FORMAT)
                .map_err(|e| {
                    rusqlite::Error::FromSqlConversionFailure(
                        2,
                        rusqlite::types::Type::Text,
                        Box::new(e),
                    )
                })?;
            Ok(PracticeRecord {
                id: row.get(0)?,
                student: row.get(1)?,
                started_at,
                duration_secs: row.get(3)?,
                completed_blocks: row.get(4)?,
                skipped_blocks: row.get(5)?,
                rating: row.get(6)?,
                focus: row.get(7)?,
            })
        };

        let rows = match student {
            Some(student) => stmt.query_map(params![from, to, student], map_row)?,
            None => stmt.query_map(params![from, to], map_row)?,
        };

        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }
}
