use askama::Template;
use axum::Form;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum_extra::extract::SignedCookieJar;
use serde::Deserialize;

use crate::auth::credentials;
use crate::auth::session::{DEFAULT_LANDING, Session};
use crate::state::SharedState;

pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

#[derive(Template)]
#[template(path = "auth/login.html")]
struct LoginTemplate {
    error: Option<String>,
}

#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

fn render_login(error: Option<&str>) -> Html<String> {
    let template = LoginTemplate {
        error: error.map(str::to_string),
    };
    Html(template.render().unwrap_or_default())
}

pub async fn login_page(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    // Already logged in: skip the form
    let jar = SignedCookieJar::from_headers(&headers, state.cookie_key.clone());
    if Session::from_jar(&jar).is_authenticated() {
        return Redirect::to(DEFAULT_LANDING).into_response();
    }

    render_login(None).into_response()
}

pub async fn login_submit(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Form(form): Form<LoginForm>,
) -> Response {
    let jar = SignedCookieJar::from_headers(&headers, state.cookie_key.clone());
    let mut session = Session::from_jar(&jar);

    let username = form.username.trim();
    let password = form.password.trim();

    if !credentials::verify(&state.config.admin, username, password) {
        tracing::warn!("Rejected admin login");
        return render_login(Some(INVALID_CREDENTIALS)).into_response();
    }

    let destination = session.authenticate();
    tracing::info!(redirect = %destination, "Admin logged in");
    (session.save(jar), Redirect::to(&destination)).into_response()
}

pub async fn logout(State(state): State<SharedState>, headers: HeaderMap) -> impl IntoResponse {
    let jar = SignedCookieJar::from_headers(&headers, state.cookie_key.clone());
    tracing::info!("Session cleared");
    (Session::clear(jar), Redirect::to("/login"))
}
