//! SQLite profile store.
//!
//! Readings and generated profiles are stored as JSON text columns;
//! timestamps as RFC 3339 text with a fixed microsecond width so that
//! lexical order matches chronological order.

use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};
use parking_lot::Mutex;
use rusqlite::{params, Connection, OptionalExtension};

use super::interface::ProfileStore;
use super::records::{ProfileRecord, SessionRecord};
use crate::utilities::errors::StoreError;

/// Profile store backed by a single SQLite connection.
pub struct SqliteStore {
    /// Path to the database file, `None` for in-memory databases.
    pub db_path: Option<PathBuf>,
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open (or create) the database at `db_path` and ensure the schema.
    pub fn open(db_path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let db_path = db_path.as_ref().to_path_buf();

        // Ensure parent directory exists
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(&db_path)?;
        let store = Self {
            db_path: Some(db_path),
            conn: Mutex::new(conn),
        };
        store.initialize_db()?;
        Ok(store)
    }

    /// Open a private in-memory database.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let store = Self {
            db_path: None,
            conn: Mutex::new(Connection::open_in_memory()?),
        };
        store.initialize_db()?;
        Ok(store)
    }

    fn initialize_db(&self) -> Result<(), StoreError> {
        self.conn.lock().execute_batch(
            "CREATE TABLE IF NOT EXISTS energy_profiles (
                id                TEXT PRIMARY KEY,
                session_id        TEXT NOT NULL,
                energy_centers    TEXT NOT NULL,
                generated_profile TEXT NOT NULL,
                created_at        TEXT NOT NULL,
                updated_at        TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS sessions (
                session_id       TEXT PRIMARY KEY,
                profile_count    INTEGER NOT NULL DEFAULT 0,
                created_at       TEXT NOT NULL,
                last_accessed_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_energy_profiles_session_created
                ON energy_profiles(session_id, created_at);",
        )?;
        log::debug!("Energy profile tables initialized");
        Ok(())
    }
}

/// Raw `energy_profiles` row before JSON and timestamp decoding.
type ProfileRow = (String, String, String, String, String, String);

const PROFILE_COLUMNS: &str =
    "id, session_id, energy_centers, generated_profile, created_at, updated_at";

fn profile_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<ProfileRow> {
    Ok((
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
        row.get(4)?,
        row.get(5)?,
    ))
}

fn decode_profile(row: ProfileRow) -> Result<ProfileRecord, StoreError> {
    let (id, session_id, energy_centers, generated_profile, created_at, updated_at) = row;
    Ok(ProfileRecord {
        id,
        session_id,
        energy_centers: serde_json::from_str(&energy_centers)?,
        generated_profile: serde_json::from_str(&generated_profile)?,
        created_at: parse_timestamp(created_at)?,
        updated_at: parse_timestamp(updated_at)?,
    })
}

fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_timestamp(value: String) -> Result<DateTime<Utc>, StoreError> {
    match DateTime::parse_from_rfc3339(&value) {
        Ok(at) => Ok(at.with_timezone(&Utc)),
        Err(source) => Err(StoreError::Timestamp { value, source }),
    }
}

fn load_session(conn: &Connection, session_id: &str) -> Result<Option<SessionRecord>, StoreError> {
    let row = conn
        .query_row(
            "SELECT session_id, profile_count, created_at, last_accessed_at
             FROM sessions WHERE session_id = ?1",
            params![session_id],
            |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, i64>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                ))
            },
        )
        .optional()?;

    row.map(|(session_id, profile_count, created_at, last_accessed_at)| {
        Ok(SessionRecord {
            session_id,
            profile_count: profile_count.max(0) as u64,
            created_at: parse_timestamp(created_at)?,
            last_accessed_at: parse_timestamp(last_accessed_at)?,
        })
    })
    .transpose()
}

impl ProfileStore for SqliteStore {
    fn record_profile(&self, record: &ProfileRecord) -> Result<SessionRecord, StoreError> {
        let energy_centers = serde_json::to_string(&record.energy_centers)?;
        let generated_profile = serde_json::to_string(&record.generated_profile)?;
        let created_at = format_timestamp(record.created_at);
        let updated_at = format_timestamp(record.updated_at);

        let mut conn = self.conn.lock();
        let tx = conn.transaction()?;
        tx.execute(
            "INSERT INTO energy_profiles
                (id, session_id, energy_centers, generated_profile, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                record.id,
                record.session_id,
                energy_centers,
                generated_profile,
                created_at,
                updated_at
            ],
        )?;
        tx.execute(
            "INSERT INTO sessions (session_id, profile_count, created_at, last_accessed_at)
             VALUES (?1, 1, ?2, ?2)
             ON CONFLICT(session_id) DO UPDATE SET
                profile_count = profile_count + 1,
                last_accessed_at = excluded.last_accessed_at",
            params![record.session_id, created_at],
        )?;
        let session = load_session(&tx, &record.session_id)?;
        tx.commit()?;

        session.ok_or(StoreError::Sqlite(rusqlite::Error::QueryReturnedNoRows))
    }

    fn profiles_for_session(
        &self,
        session_id: &str,
        limit: usize,
    ) -> Result<Vec<ProfileRecord>, StoreError> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(&format!(
            "SELECT {PROFILE_COLUMNS}
             FROM energy_profiles
             WHERE session_id = ?1
             ORDER BY created_at DESC, rowid DESC
             LIMIT ?2"
        ))?;

        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let rows = stmt.query_map(params![session_id, limit], profile_row)?;

        let mut results = Vec::new();
        for row in rows {
            results.push(decode_profile(row?)?);
        }
        Ok(results)
    }

    fn profile_by_id(&self, id: &str) -> Result<Option<ProfileRecord>, StoreError> {
        let conn = self.conn.lock();
        let row = conn
            .query_row(
                &format!("SELECT {PROFILE_COLUMNS} FROM energy_profiles WHERE id = ?1"),
                params![id],
                profile_row,
            )
            .optional()?;
        row.map(decode_profile).transpose()
    }

    fn session(&self, session_id: &str) -> Result<Option<SessionRecord>, StoreError> {
        load_session(&self.conn.lock(), session_id)
    }
}
