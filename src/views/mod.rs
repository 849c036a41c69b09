pub mod admin;
pub mod auth;
pub mod home;

use axum::Router;
use axum::routing::get;

use crate::state::SharedState;

pub fn view_routes() -> Router<SharedState> {
    Router::new()
        // Public landing page
        .route("/", get(home::index))
        // Auth views
        .route("/login", get(auth::login_page).post(auth::login_submit))
        .route("/logout", get(auth::logout))
        // Admin
        .route("/admin", get(admin::index))
}
