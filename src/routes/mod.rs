pub mod clients;

use axum::Router;
use axum::routing::{get, post};

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        // Public submission, admin listing
        .route("/api/clients", get(clients::list).post(clients::create))
        // Admin
        .route("/api/seed", post(clients::seed))
        .route("/export/excel", get(clients::export_excel))
}
