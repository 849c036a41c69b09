pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod export;
pub mod models;
pub mod routes;
pub mod state;
pub mod submission;
pub mod views;

use std::sync::Arc;

use axum::Router;
use axum::http::{HeaderName, HeaderValue};
use sqlx::SqlitePool;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::auth::session::cookie_key;
use crate::config::Config;
use crate::state::{AppState, SharedState};

pub fn build_app(pool: SqlitePool, config: Config) -> Router {
    let state: SharedState = Arc::new(AppState {
        pool,
        cookie_key: cookie_key(&config.secret_key),
        config,
    });

    Router::new()
        .merge(routes::api_routes())
        .merge(views::view_routes())
        .nest_service("/static", ServeDir::new("static"))
        .route("/health", axum::routing::get(health))
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-frame-options"),
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("referrer-policy"),
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
