use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::export::ExportError;
use crate::models::MissingFields;

#[derive(Debug)]
pub enum AppError {
    MissingFields(MissingFields),
    Locked(String),
    Export(String),
    Database(sqlx::Error),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::MissingFields(missing) => write!(f, "Bad Request: {missing}"),
            AppError::Locked(msg) => write!(f, "Locked: {msg}"),
            AppError::Export(msg) => write!(f, "Export Error: {msg}"),
            AppError::Database(err) => write!(f, "Database Error: {err}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::MissingFields(missing) => (StatusCode::BAD_REQUEST, missing.to_string()),
            AppError::Locked(msg) => {
                tracing::warn!("Export target locked");
                (StatusCode::LOCKED, msg.clone())
            }
            AppError::Export(msg) => {
                tracing::error!("Export failed: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Export failed: {msg}"),
                )
            }
            AppError::Database(err) => {
                tracing::error!("Database error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = json!({ "ok": false, "error": message });
        (status, axum::Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Database(err)
    }
}

impl From<MissingFields> for AppError {
    fn from(missing: MissingFields) -> Self {
        AppError::MissingFields(missing)
    }
}

impl From<ExportError> for AppError {
    fn from(err: ExportError) -> Self {
        match err {
            ExportError::Locked(_) => {
                AppError::Locked("Close the Excel file and try again.".to_string())
            }
            ExportError::Failed(msg) => AppError::Export(msg),
        }
    }
}
