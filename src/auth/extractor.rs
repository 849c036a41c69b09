use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::SignedCookieJar;

use crate::auth::session::Session;
use crate::state::SharedState;

/// Guard for admin-only handlers. Extraction succeeds only for an
/// authenticated session; otherwise the requested path is remembered and
/// the client is sent to the login page.
#[derive(Debug, Clone)]
pub struct Admin {
    pub session: Session,
}

impl FromRequestParts<SharedState> for Admin {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &SharedState,
    ) -> Result<Self, Self::Rejection> {
        let jar = SignedCookieJar::from_headers(&parts.headers, state.cookie_key.clone());
        let mut session = Session::from_jar(&jar);

        if session.is_authenticated() {
            return Ok(Admin { session });
        }

        tracing::debug!(path = %parts.uri.path(), "Anonymous request to protected route");
        session.remember(parts.uri.path());
        Err((session.save(jar), Redirect::to("/login")).into_response())
    }
}
