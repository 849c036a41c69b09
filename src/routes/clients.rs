use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, header};
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};

use crate::auth::extractor::Admin;
use crate::config::EXPORT_FILE_NAME;
use crate::db;
use crate::error::AppError;
use crate::export;
use crate::models::{Client, NewClient};
use crate::state::SharedState;
use crate::submission::parser;

pub async fn list(
    _admin: Admin,
    State(state): State<SharedState>,
) -> Result<Json<Vec<Client>>, AppError> {
    let mut conn = state.pool.acquire().await?;
    let clients = db::clients::list_newest_first(&mut *conn).await?;
    Ok(Json(clients))
}

pub async fn create(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Value>, AppError> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok());
    let payload = parser::parse_body(content_type, &body);

    let new_client = NewClient::from_payload(&payload).inspect_err(|missing| {
        tracing::info!(fields = ?missing.0, "Rejected submission with missing fields");
    })?;

    let mut conn = state.pool.acquire().await?;
    let client = db::clients::create(&mut *conn, &new_client).await?;
    tracing::info!(client_id = client.id, "Stored client submission");

    Ok(Json(json!({ "ok": true, "message": "Client saved successfully." })))
}

pub async fn seed(
    _admin: Admin,
    State(state): State<SharedState>,
) -> Result<Json<Value>, AppError> {
    let mut tx = state.pool.begin().await?;
    for row in NewClient::demo_rows() {
        db::clients::create(&mut *tx, &row).await?;
    }
    tx.commit().await?;

    tracing::info!("Inserted demo clients");
    Ok(Json(json!({ "ok": true, "message": "Demo data inserted." })))
}

pub async fn export_excel(
    _admin: Admin,
    State(state): State<SharedState>,
) -> Result<Response, AppError> {
    let clients = {
        let mut conn = state
            .pool
            .acquire()
            .await
            .map_err(|e| AppError::Export(e.to_string()))?;
        db::clients::list_oldest_first(&mut *conn)
            .await
            .map_err(|e| AppError::Export(e.to_string()))?
    };
    let rows = clients.len();

    let path = state.config.export_path.clone();
    let bytes = tokio::task::spawn_blocking(move || export::write_workbook(&clients, &path))
        .await
        .map_err(|e| AppError::Export(e.to_string()))??;

    tracing::info!(rows, path = %state.config.export_path.display(), "Exported clients");

    Ok((
        [
            (header::CONTENT_TYPE, export::XLSX_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{EXPORT_FILE_NAME}\""),
            ),
        ],
        bytes,
    )
        .into_response())
}
