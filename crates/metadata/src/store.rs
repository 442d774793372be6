//! Metadata store trait and SQLite implementation.

use crate::error::{MetadataError, MetadataResult};
use crate::repos::{BacklogRepo, PreferenceRepo, StatsRepo, ViewerRepo};
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::{Pool, Sqlite};
use std::path::Path;
use std::time::Duration;

/// Combined metadata store trait.
#[async_trait]
pub trait MetadataStore:
    ViewerRepo + BacklogRepo + PreferenceRepo + StatsRepo + Send + Sync
{
    /// Create any missing tables.
    async fn migrate(&self) -> MetadataResult<()>;

    /// Check database connectivity and health.
    async fn health_check(&self) -> MetadataResult<()>;
}

/// SQLite-based metadata store.
///
/// Every operation borrows a connection from the pool for the duration of its
/// statements; the connection goes back to the pool when the guard drops,
/// whether the operation succeeded or failed.
pub struct SqliteStore {
    pool: Pool<Sqlite>,
}

impl SqliteStore {
    /// Open (creating if needed) the database at `path` and ensure the schema exists.
    pub async fn new(path: impl AsRef<Path>, busy_timeout: Duration) -> MetadataResult<Self> {
        let path = path.as_ref();

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let opts = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            // backlog.username declares a reference to viewers but it is not enforced
            .foreign_keys(false)
            .busy_timeout(busy_timeout);

        let pool = SqlitePoolOptions::new()
            // SQLite permits one writer at a time; a single connection serializes
            // statements instead of surfacing "database is locked".
            .max_connections(1)
            .connect_with(opts)
            .await?;

        let store = Self { pool };
        store.migrate().await?;

        tracing::info!(path = %path.display(), "SQLite metadata store opened");
        Ok(store)
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }
}

#[async_trait]
impl MetadataStore for SqliteStore {
    async fn migrate(&self) -> MetadataResult<()> {
        sqlx::query(SCHEMA_SQL).execute(&self.pool).await?;
        Ok(())
    }

    async fn health_check(&self) -> MetadataResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

// Implement all the repository traits for SqliteStore
mod sqlite_impl {
    use super::*;
    use crate::models::*;
    use overlay_core::viewer::encode_info;
    use overlay_core::{
        ACTIVE_WINDOW, BacklogItem, NewBacklogItem, NewStatEvent, Preference, StatsSummary, Viewer,
    };
    use time::OffsetDateTime;

    #[async_trait]
    impl ViewerRepo for SqliteStore {
        async fn upsert_viewer(&self, viewer: &Viewer) -> MetadataResult<()> {
            let info = encode_info(&viewer.info)?;
            let now = OffsetDateTime::now_utc();

            sqlx::query(
                r#"
                INSERT INTO viewers (username, info, last_active, task_count, created_at)
                VALUES (?, ?, ?, ?, ?)
                ON CONFLICT(username) DO UPDATE SET
                    info = excluded.info,
                    last_active = excluded.last_active,
                    task_count = excluded.task_count
                "#,
            )
            .bind(&viewer.username)
            .bind(info)
            .bind(now)
            .bind(viewer.task_count)
            .bind(now)
            .execute(&self.pool)
            .await?;

            tracing::debug!(username = %viewer.username, "viewer upserted");
            Ok(())
        }

        async fn set_viewer_info_field(
            &self,
            username: &str,
            field: &str,
            value: &str,
        ) -> MetadataResult<()> {
            let now = OffsetDateTime::now_utc();

            // json_patch merges the single-key object into whatever is stored, so
            // concurrent writers touching different fields do not clobber each other.
            sqlx::query(
                r#"
                INSERT INTO viewers (username, info, last_active, task_count, created_at)
                VALUES (?, json_object(?, ?), ?, 0, ?)
                ON CONFLICT(username) DO UPDATE SET
                    info = json_patch(COALESCE(NULLIF(viewers.info, ''), '{}'), excluded.info),
                    last_active = excluded.last_active
                "#,
            )
            .bind(username)
            .bind(field)
            .bind(value)
            .bind(now)
            .bind(now)
            .execute(&self.pool)
            .await?;

            tracing::debug!(username = %username, field = %field, "viewer info field set");
            Ok(())
        }

        async fn list_viewers(&self) -> MetadataResult<Vec<Viewer>> {
            let rows = sqlx::query_as::<_, ViewerRow>(
                "SELECT * FROM viewers ORDER BY julianday(last_active) DESC, username",
            )
            .fetch_all(&self.pool)
            .await?;

            rows.into_iter().map(ViewerRow::into_viewer).collect()
        }

        async fn get_viewer(&self, username: &str) -> MetadataResult<Viewer> {
            let row = sqlx::query_as::<_, ViewerRow>("SELECT * FROM viewers WHERE username = ?")
                .bind(username)
                .fetch_optional(&self.pool)
                .await?
                .ok_or_else(|| MetadataError::viewer_not_found(username))?;

            row.into_viewer()
        }
    }

    #[async_trait]
    impl BacklogRepo for SqliteStore {
        async fn add_backlog_item(&self, item: &NewBacklogItem) -> MetadataResult<BacklogItem> {
            // Insert and reload on the same connection so the returned row is the persisted one.
            let mut conn = self.pool.acquire().await?;

            let result = sqlx::query(
                r#"
                INSERT INTO backlog (username, description, priority, completed, created_at)
                VALUES (?, ?, ?, ?, ?)
                "#,
            )
            .bind(&item.username)
            .bind(&item.description)
            .bind(item.priority)
            .bind(item.completed)
            .bind(OffsetDateTime::now_utc())
            .execute(&mut *conn)
            .await?;

            let id = result.last_insert_rowid();
            let row = sqlx::query_as::<_, BacklogRow>("SELECT * FROM backlog WHERE id = ?")
                .bind(id)
                .fetch_one(&mut *conn)
                .await?;

            tracing::debug!(id, username = %row.username, "backlog item added");
            Ok(row.into())
        }

        async fn list_backlog(&self, username: &str) -> MetadataResult<Vec<BacklogItem>> {
            // id breaks ties between items created within the same millisecond
            let rows = sqlx::query_as::<_, BacklogRow>(
                r#"
                SELECT * FROM backlog
                WHERE username = ?
                ORDER BY completed ASC, priority DESC, julianday(created_at) ASC, id ASC
                "#,
            )
            .bind(username)
            .fetch_all(&self.pool)
            .await?;

            Ok(rows.into_iter().map(BacklogItem::from).collect())
        }

        async fn toggle_backlog_item(&self, id: i64) -> MetadataResult<()> {
            let result = sqlx::query("UPDATE backlog SET completed = NOT completed WHERE id = ?")
                .bind(id)
                .execute(&self.pool)
                .await?;

            if result.rows_affected() == 0 {
                return Err(MetadataError::backlog_item_not_found(id));
            }
            Ok(())
        }

        async fn delete_backlog_item(&self, id: i64) -> MetadataResult<()> {
            let result = sqlx::query("DELETE FROM backlog WHERE id = ?")
                .bind(id)
                .execute(&self.pool)
                .await?;

            if result.rows_affected() == 0 {
                return Err(MetadataError::backlog_item_not_found(id));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl PreferenceRepo for SqliteStore {
        async fn get_preference(&self, key: &str) -> MetadataResult<Preference> {
            let row = sqlx::query_as::<_, PreferenceRow>("SELECT * FROM preferences WHERE key = ?")
                .bind(key)
                .fetch_optional(&self.pool)
                .await?
                .ok_or_else(|| MetadataError::preference_not_found(key))?;
            Ok(row.into())
        }

        async fn set_preference(&self, preference: &Preference) -> MetadataResult<()> {
            sqlx::query(
                r#"
                INSERT INTO preferences (key, value, updated_at)
                VALUES (?, ?, ?)
                ON CONFLICT(key) DO UPDATE SET
                    value = excluded.value,
                    updated_at = excluded.updated_at
                "#,
            )
            .bind(&preference.key)
            .bind(&preference.value)
            .bind(OffsetDateTime::now_utc())
            .execute(&self.pool)
            .await?;
            Ok(())
        }
    }

    #[async_trait]
    impl StatsRepo for SqliteStore {
        async fn log_stat(&self, event: &NewStatEvent) -> MetadataResult<i64> {
            let result = sqlx::query(
                "INSERT INTO stats (event_type, username, data, created_at) VALUES (?, ?, ?, ?)",
            )
            .bind(&event.event_type)
            .bind(&event.username)
            .bind(&event.data)
            .bind(OffsetDateTime::now_utc())
            .execute(&self.pool)
            .await?;
            Ok(result.last_insert_rowid())
        }

        async fn list_stats(&self, limit: u32) -> MetadataResult<Vec<StatEventRow>> {
            let rows =
                sqlx::query_as::<_, StatEventRow>("SELECT * FROM stats ORDER BY id DESC LIMIT ?")
                    .bind(i64::from(limit))
                    .fetch_all(&self.pool)
                    .await?;
            Ok(rows)
        }

        async fn stats_summary(&self, now: OffsetDateTime) -> MetadataResult<StatsSummary> {
            let mut conn = self.pool.acquire().await?;
            let cutoff = now - ACTIVE_WINDOW;

            let total_viewers: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM viewers")
                .fetch_one(&mut *conn)
                .await?;
            let active_viewers: i64 = sqlx::query_scalar(
                "SELECT COUNT(*) FROM viewers WHERE julianday(last_active) > julianday(?)",
            )
            .bind(cutoff)
            .fetch_one(&mut *conn)
            .await?;
            let total_backlog: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM backlog")
                .fetch_one(&mut *conn)
                .await?;
            let completed_backlog: i64 =
                sqlx::query_scalar("SELECT COUNT(*) FROM backlog WHERE completed = 1")
                    .fetch_one(&mut *conn)
                    .await?;

            Ok(StatsSummary::new(
                total_viewers as u64,
                active_viewers as u64,
                total_backlog as u64,
                completed_backlog as u64,
            ))
        }
    }
}

const SCHEMA_SQL: &str = r#"
-- Viewer profiles
CREATE TABLE IF NOT EXISTS viewers (
    username TEXT PRIMARY KEY,
    info TEXT,
    last_active TEXT,
    task_count INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL
);

-- Backlog items (username reference is declared, not enforced)
CREATE TABLE IF NOT EXISTS backlog (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL,
    description TEXT NOT NULL,
    priority INTEGER NOT NULL DEFAULT 3,
    completed INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL,
    FOREIGN KEY (username) REFERENCES viewers(username)
);
CREATE INDEX IF NOT EXISTS idx_backlog_username ON backlog(username);

-- Preferences
CREATE TABLE IF NOT EXISTS preferences (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

-- Stat events (append-only)
CREATE TABLE IF NOT EXISTS stats (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    event_type TEXT NOT NULL,
    username TEXT,
    data TEXT,
    created_at TEXT NOT NULL
);
"#;
