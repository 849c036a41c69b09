use std::sync::Arc;

use axum_extra::extract::cookie::Key;
use sqlx::SqlitePool;

use crate::config::Config;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub pool: SqlitePool,
    pub config: Config,
    pub cookie_key: Key,
}
