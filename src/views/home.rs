use askama::Template;
use axum::response::{Html, IntoResponse};

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {}

pub async fn index() -> impl IntoResponse {
    Html(IndexTemplate {}.render().unwrap_or_default())
}
