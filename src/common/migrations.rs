// src/common/migrations.rs
//! Database migration and schema management

use sqlx::SqlitePool;
use tracing::{info, warn};

/// Run all database migrations
///
/// Tables are created if missing. When `reset` is set every table is dropped
/// first, which discards all accounts and reports.
pub async fn run_migrations(pool: &SqlitePool, reset: bool) -> Result<(), sqlx::Error> {
    if reset {
        warn!("RESET_DB=true - Dropping all tables and recreating schema...");
        drop_all_tables(pool).await?;
        info!("Dropped old tables");
    }

    create_user_tables(pool).await?;
    create_telemetry_tables(pool).await?;
    create_indexes(pool).await?;

    info!("Database migration completed successfully");

    Ok(())
}

async fn drop_all_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for table in ["location_reports", "users"] {
        sqlx::query(&format!("DROP TABLE IF EXISTS {}", table))
            .execute(pool)
            .await?;
    }

    Ok(())
}

async fn create_user_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    // Profile upserts may create a row that only carries the email, so
    // everything except the key is nullable. UNIQUE allows many NULL phones.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            email TEXT PRIMARY KEY,
            name TEXT,
            phone_number TEXT UNIQUE,
            password_hash TEXT,
            device_id TEXT,
            pin TEXT,
            vehicle_number TEXT,
            anti_theft INTEGER,
            created_at TEXT DEFAULT (datetime('now')),
            updated_at TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_telemetry_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS location_reports (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            owner_email TEXT NOT NULL,
            latitude REAL NOT NULL,
            longitude REAL NOT NULL,
            battery REAL NOT NULL,
            status TEXT NOT NULL,
            recorded_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_indexes(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let indexes = [
        "CREATE INDEX IF NOT EXISTS idx_location_reports_owner ON location_reports(owner_email, recorded_at)",
    ];

    for index in indexes {
        sqlx::query(index).execute(pool).await?;
    }

    Ok(())
}

#[cfg(test)]
pub mod test_support {
    use super::run_migrations;
    use sqlx::sqlite::SqlitePoolOptions;
    use sqlx::SqlitePool;

    /// Single-connection in-memory database with the real schema applied
    pub async fn setup_test_db() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();

        run_migrations(&pool, false).await.unwrap();

        pool
    }
}
