use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Pool, Sqlite,
};
use std::{path::Path, str::FromStr, time::Duration};
use tracing::info;

use crate::models::Seat;

#[derive(Clone)]
pub struct Database {
    pub pool: Pool<Sqlite>,
}

impl Database {
    pub async fn new(database_url: &str, pool_size: u32) -> Result<Self, sqlx::Error> {
        ensure_parent_dir(database_url)?;

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(pool_size.max(1))
            .acquire_timeout(Duration::from_secs(5))
            .connect_with(options)
            .await?;

        Ok(Database { pool })
    }

    pub async fn run_migrations(&self) -> Result<(), sqlx::migrate::MigrateError> {
        info!("Running database migrations...");
        sqlx::migrate!("./src/migrations")
            .run(&self.pool)
            .await?;
        info!("Migrations completed");
        Ok(())
    }

    /// Creates the schema and seeds the default seats on an empty table.
    /// Safe to call on every startup.
    pub async fn initialize(&self) -> Result<(), sqlx::Error> {
        self.run_migrations()
            .await
            .map_err(|e| sqlx::Error::Migrate(Box::new(e)))?;

        let inserted = Seat::seed_defaults(self).await?;
        if inserted > 0 {
            info!("Seeded {} default seats", inserted);
        }
        Ok(())
    }

    pub async fn health_check(&self) -> Result<(), sqlx::Error> {
        let mut conn = self.pool.acquire().await?;
        sqlx::query_scalar::<_, i64>("SELECT 1")
            .fetch_one(&mut *conn)
            .await?;
        Ok(())
    }
}

// SQLite не создаёт каталоги сам
fn ensure_parent_dir(database_url: &str) -> Result<(), sqlx::Error> {
    let Some(path) = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))
    else {
        return Ok(());
    };
    let path = path.split('?').next().unwrap_or_default();
    if path.is_empty() || path.starts_with(":memory:") {
        return Ok(());
    }

    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
pub(crate) async fn open_temp() -> (tempfile::TempDir, Database) {
    let dir = tempfile::tempdir().expect("tempdir");
    let url = format!("sqlite://{}", dir.path().join("seating.db").display());
    let db = Database::new(&url, 2).await.expect("connect");
    (dir, db)
}
