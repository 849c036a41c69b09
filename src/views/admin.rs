use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse};

use crate::auth::extractor::Admin;
use crate::db;
use crate::error::AppError;
use crate::state::SharedState;

#[derive(Template)]
#[template(path = "admin/index.html")]
struct AdminTemplate {
    clients: Vec<ClientRow>,
}

struct ClientRow {
    id: i64,
    name: String,
    email: String,
    phone: String,
    message: String,
    created_at: String,
}

pub async fn index(
    _admin: Admin,
    State(state): State<SharedState>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.pool.acquire().await?;
    let clients = db::clients::list_newest_first(&mut *conn).await?;

    let rows = clients
        .into_iter()
        .map(|c| ClientRow {
            id: c.id,
            name: c.name,
            email: c.email,
            phone: c.phone,
            message: c.message.unwrap_or_default(),
            created_at: c.created_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        })
        .collect();

    let template = AdminTemplate { clients: rows };
    Ok(Html(template.render().unwrap_or_default()))
}
