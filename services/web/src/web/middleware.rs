//! services/web/src/web/middleware.rs
//!
//! Session middleware for the page routes.

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use fitflix_core::SessionContext;
use std::sync::Arc;
use tracing::{debug, error, info};
use uuid::Uuid;

use crate::config::Config;
use crate::web::state::{AppState, SessionHandle};

/// Name of the cookie carrying the session token.
pub const SESSION_COOKIE: &str = "fitflix_session";

/// Middleware that resolves the visitor's session from the cookie.
///
/// A missing, malformed, unknown or expired token starts a fresh session and
/// the response carries a new cookie. New sessions are stored after the
/// handler runs. An existing session is written back only when the handler
/// selected a city; otherwise just its expiry is refreshed, so a read that
/// overlaps a selection cannot undo it.
pub async fn with_session(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Response {
    // 1. Resolve or create the session
    let path = req.uri().path().to_string();
    let (handle, is_new) = match session_token(req.headers()) {
        Some(token) => match state.sessions.load(token).await {
            Ok(context) => (SessionHandle::new(token, path, context), false),
            Err(e) => {
                debug!("Discarding session cookie: {}", e);
                (new_session(path), true)
            }
        },
        None => (new_session(path), true),
    };

    // 2. Hand it to the handler
    req.extensions_mut().insert(handle.clone());
    let mut response = next.run(req).await;

    // 3. Persist a new or changed session, otherwise keep it alive
    let persisted = if is_new || handle.is_modified() {
        state
            .sessions
            .save(handle.token, handle.snapshot().await)
            .await
    } else {
        state.sessions.touch(handle.token).await
    };
    if let Err(e) = persisted {
        error!("Failed to persist session {}: {:?}", handle.token, e);
    }

    // 4. Issue the cookie for new sessions
    if is_new {
        match HeaderValue::from_str(&session_cookie(handle.token, &state.config)) {
            Ok(value) => {
                response.headers_mut().append(header::SET_COOKIE, value);
            }
            Err(e) => error!("Failed to build session cookie: {:?}", e),
        }
    }

    response
}

fn new_session(path: String) -> SessionHandle {
    let token = Uuid::new_v4();
    info!("Starting new session {}", token);
    SessionHandle::new(token, path, SessionContext::new())
}

/// Reads the session token from the `Cookie` header, ignoring other cookies.
pub fn session_token(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .find_map(|c| c.trim().strip_prefix(SESSION_COOKIE)?.strip_prefix('='))
        .and_then(|raw| Uuid::parse_str(raw.trim()).ok())
}

fn session_cookie(token: Uuid, config: &Config) -> String {
    let mut cookie = format!(
        "{}={}; HttpOnly; SameSite=Lax; Path=/; Max-Age={}",
        SESSION_COOKIE,
        token,
        config.session_ttl.num_seconds()
    );
    if config.cookie_secure {
        cookie.push_str("; Secure");
    }
    cookie
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(cookie: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(cookie).unwrap());
        headers
    }

    #[test]
    fn finds_token_among_other_cookies() {
        let token = Uuid::new_v4();
        let found = session_token(&headers(&format!(
            "theme=dark; {}={}; lang=en",
            SESSION_COOKIE, token
        )));
        assert_eq!(found, Some(token));
    }

    #[test]
    fn ignores_malformed_or_lookalike_cookies() {
        assert_eq!(session_token(&HeaderMap::new()), None);
        assert_eq!(session_token(&headers("fitflix_session=not-a-uuid")), None);
        assert_eq!(
            session_token(&headers(&format!("fitflix_sessionx={}", Uuid::new_v4()))),
            None
        );
    }

    #[test]
    fn cookie_honours_secure_flag() {
        let token = Uuid::new_v4();
        let mut config = Config::default();
        let plain = session_cookie(token, &config);
        assert!(plain.starts_with(&format!("fitflix_session={};", token)));
        assert!(plain.contains("Max-Age=86400"));
        assert!(!plain.contains("Secure"));

        config.cookie_secure = true;
        assert!(session_cookie(token, &config).ends_with("; Secure"));
    }
}
