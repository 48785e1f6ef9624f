pub mod middleware;
pub mod pages;
pub mod rest;
pub mod state;
pub mod views;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

pub use middleware::{with_session, SESSION_COOKIE};
pub use state::{AppState, SessionHandle};

/// Builds the application router: the session-scoped pages (including the
/// 404 fallback) plus the stateless JSON endpoints.
pub fn router(state: Arc<AppState>) -> Router {
    let pages = Router::new()
        .route("/", get(pages::home))
        .route("/gyms", get(pages::gyms))
        .route("/services", get(pages::services))
        .route("/memberships", get(pages::memberships))
        .route("/trainers", get(pages::trainers))
        .route("/trainer/{id}", get(pages::trainer_profile))
        .route("/city-selection", get(pages::city_selection))
        .route("/select-city", post(pages::select_city))
        .route("/book", get(pages::book))
        .route("/contact", get(pages::contact))
        .fallback(pages::not_found)
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            with_session,
        ));

    let api = Router::new()
        .route("/api/quote", get(rest::quote_handler))
        .route("/health", get(rest::health_handler));

    pages.merge(api).with_state(state)
}
