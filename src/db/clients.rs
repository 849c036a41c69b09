use chrono::{SecondsFormat, Utc};

use crate::models::{Client, NewClient};

pub async fn ensure_table<'e, E: sqlx::SqliteExecutor<'e>>(executor: E) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS clients (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            phone TEXT NOT NULL,
            message TEXT,
            created_at TEXT NOT NULL
        )",
    )
    .execute(executor)
    .await?;
    Ok(())
}

/// Insert a validated submission. `created_at` is always the current UTC time.
pub async fn create<'e, E: sqlx::SqliteExecutor<'e>>(
    executor: E,
    client: &NewClient,
) -> Result<Client, sqlx::Error> {
    let created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);

    sqlx::query_as::<_, Client>(
        "INSERT INTO clients (name, email, phone, message, created_at)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING id, name, email, phone, message, created_at",
    )
    .bind(&client.name)
    .bind(&client.email)
    .bind(&client.phone)
    .bind(&client.message)
    .bind(created_at)
    .fetch_one(executor)
    .await
}

pub async fn list_newest_first<'e, E: sqlx::SqliteExecutor<'e>>(
    executor: E,
) -> Result<Vec<Client>, sqlx::Error> {
    sqlx::query_as::<_, Client>(
        "SELECT id, name, email, phone, message, created_at FROM clients ORDER BY id DESC",
    )
    .fetch_all(executor)
    .await
}

/// Stable ascending order, used for the spreadsheet export.
pub async fn list_oldest_first<'e, E: sqlx::SqliteExecutor<'e>>(
    executor: E,
) -> Result<Vec<Client>, sqlx::Error> {
    sqlx::query_as::<_, Client>(
        "SELECT id, name, email, phone, message, created_at FROM clients ORDER BY id ASC",
    )
    .fetch_all(executor)
    .await
}

pub async fn count<'e, E: sqlx::SqliteExecutor<'e>>(executor: E) -> Result<i64, sqlx::Error> {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM clients")
        .fetch_one(executor)
        .await?;
    Ok(row.0)
}
