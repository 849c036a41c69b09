pub mod clients;

use std::path::Path;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Open (creating if needed) the SQLite database file.
pub async fn connect(path: &Path) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}

/// Create the schema if absent and log what the database holds.
pub async fn init(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    clients::ensure_table(pool).await?;

    let tables: Vec<String> = sqlx::query_scalar(
        "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
    )
    .fetch_all(pool)
    .await?;
    let rows = clients::count(pool).await?;

    tracing::info!(tables = ?tables, clients = rows, "Database ready");
    Ok(())
}
