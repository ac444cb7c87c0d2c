// backend/src/db.rs
//
// Report storage. One table; rows are only ever appended.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;
use suraksha_shared::{IncidentKind, IncidentReport};
use tracing::info;

/// A `reports` row as read back.
#[cfg(test)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredReport {
    pub id: i64,
    pub created_at_ms: i64,
    pub incident_type: String,
    pub location: String,
    pub description: String,
}

pub async fn open(path: &Path) -> anyhow::Result<SqlitePool> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(dir).await?;
    }
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new().connect_with(options).await?;
    migrate(&pool).await?;
    let stored = count_reports(&pool).await?;
    info!(path = %path.display(), stored, "report store ready");
    Ok(pool)
}

pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS reports (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            created_at_ms INTEGER NOT NULL,
            incident_type TEXT    NOT NULL,
            location      TEXT    NOT NULL,
            description   TEXT    NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

/// Store a validated report; returns its row id.
pub async fn insert_report(
    pool: &SqlitePool,
    kind: IncidentKind,
    report: &IncidentReport,
    created_at_ms: i64,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO reports (created_at_ms, incident_type, location, description) VALUES (?, ?, ?, ?)",
    )
    .bind(created_at_ms)
    .bind(kind.as_str())
    .bind(report.location.trim())
    .bind(report.description.trim())
    .execute(pool)
    .await?;
    Ok(result.last_insert_rowid())
}

pub async fn count_reports(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM reports")
        .fetch_one(pool)
        .await
}

/// Newest first.
#[cfg(test)]
pub async fn recent_reports(pool: &SqlitePool, limit: i64) -> Result<Vec<StoredReport>, sqlx::Error> {
    use sqlx::Row;

    let rows = sqlx::query(
        r#"
        SELECT id, created_at_ms, incident_type, location, description
        FROM reports
        ORDER BY id DESC
        LIMIT ?
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    rows.iter()
        .map(|row| {
            Ok(StoredReport {
                id: row.try_get("id")?,
                created_at_ms: row.try_get("created_at_ms")?,
                incident_type: row.try_get("incident_type")?,
                location: row.try_get("location")?,
                description: row.try_get("description")?,
            })
        })
        .collect()
}

#[cfg(test)]
pub async fn memory_pool() -> SqlitePool {
    // Every connection to `:memory:` is its own database, so keep exactly one.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    migrate(&pool).await.unwrap();
    pool
}
