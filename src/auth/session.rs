use axum_extra::extract::SignedCookieJar;
use axum_extra::extract::cookie::{Cookie, Key, SameSite};
use sha2::{Digest, Sha512};

pub const SESSION_COOKIE: &str = "session";

/// Where a successful login lands when no protected path was requested first.
pub const DEFAULT_LANDING: &str = "/admin";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthState {
    #[default]
    Anonymous,
    Authenticated,
}

/// Per-request session state, carried in the signed `session` cookie.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub state: AuthState,
    /// Protected path captured before redirecting to the login page.
    pub next: Option<String>,
}

/// Derive the 64-byte cookie signing key from the configured secret.
pub fn cookie_key(secret: &str) -> Key {
    let digest = Sha512::digest(secret.as_bytes());
    Key::from(digest.as_slice())
}

impl Session {
    pub fn from_jar(jar: &SignedCookieJar) -> Self {
        jar.get(SESSION_COOKIE)
            .map(|cookie| Self::decode(cookie.value()))
            .unwrap_or_default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state == AuthState::Authenticated
    }

    /// Record the path to return to after login. Only local absolute paths are kept.
    pub fn remember(&mut self, path: &str) {
        if is_local_path(path) {
            self.next = Some(path.to_string());
        }
    }

    /// Mark the session authenticated and return the redirect target,
    /// consuming any remembered path.
    pub fn authenticate(&mut self) -> String {
        self.state = AuthState::Authenticated;
        self.next
            .take()
            .unwrap_or_else(|| DEFAULT_LANDING.to_string())
    }

    pub fn save(&self, jar: SignedCookieJar) -> SignedCookieJar {
        let cookie = Cookie::build((SESSION_COOKIE, self.encode()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .build();
        jar.add(cookie)
    }

    /// Drop every piece of session state.
    pub fn clear(jar: SignedCookieJar) -> SignedCookieJar {
        jar.remove(Cookie::build(SESSION_COOKIE).path("/").build())
    }

    pub fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        if self.is_authenticated() {
            serializer.append_pair("auth", "1");
        }
        if let Some(next) = &self.next {
            serializer.append_pair("next", next);
        }
        serializer.finish()
    }

    pub fn decode(value: &str) -> Self {
        let mut session = Session::default();
        for (key, val) in form_urlencoded::parse(value.as_bytes()) {
            match key.as_ref() {
                "auth" if val == "1" => session.state = AuthState::Authenticated,
                "next" => session.remember(&val),
                _ => {}
            }
        }
        session
    }
}

fn is_local_path(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//")
}
