//! services/web/src/web/pages.rs
//!
//! The Axum handlers for the server-rendered pages and the city-selection
//! command.

use crate::error::WebError;
use crate::web::state::{AppState, SessionHandle};
use crate::web::views::{base_context, staggered};
use axum::{
    extract::{FromRequest, Path, Query, Request, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Extension, Form, Json,
};
use fitflix_core::effects::{particle_field, HERO_PARTICLES};
use fitflix_core::pricing::{self, format_amount};
use fitflix_core::{City, ServiceKind};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::sync::Arc;
use tera::Context;
use tracing::{info, warn};

/// How many gyms and trainers the landing page highlights.
const HIGHLIGHTS: usize = 3;

type PageResult = Result<Response, WebError>;

//=========================================================================================
// Request Payloads
//=========================================================================================

#[derive(Debug, Default, Deserialize)]
pub struct TrainersQuery {
    pub city: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CitySelectionQuery {
    pub return_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct BookQuery {
    pub service: Option<String>,
    pub duration: Option<String>,
}

/// The body of `POST /select-city`. Accepted as a urlencoded form or as JSON.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CitySelection {
    pub city_id: Option<String>,
    pub return_url: Option<String>,
}

impl<S> FromRequest<S> for CitySelection
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    /// Never rejects: an unreadable body is treated like an empty one, so the
    /// visitor is still redirected.
    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/json"));

        let parsed = if is_json {
            Json::<CitySelection>::from_request(req, state)
                .await
                .map(|Json(selection)| selection)
                .map_err(|e| e.body_text())
        } else {
            Form::<CitySelection>::from_request(req, state)
                .await
                .map(|Form(selection)| selection)
                .map_err(|e| e.body_text())
        };

        Ok(parsed.unwrap_or_else(|reason| {
            warn!("Unreadable city selection body: {}", reason);
            CitySelection::default()
        }))
    }
}

//=========================================================================================
// Booking summary model
//=========================================================================================

#[derive(Serialize)]
struct ServiceOption {
    value: &'static str,
    label: &'static str,
    selected: bool,
}

#[derive(Serialize)]
struct QuoteSummary {
    priced: bool,
    base_price: String,
    platform_fee: String,
    total: String,
}

//=========================================================================================
// Helpers
//=========================================================================================

/// Resolves the session city and starts the page model from it.
async fn page_context(state: &AppState, session: &SessionHandle, title: &str) -> (City, Context) {
    let city = session.current_city(&state.catalog).await;
    let return_path = redirect_target(Some(session.path.as_str()));
    let context = base_context(title, &city, state.catalog.cities(), return_path);
    (city, context)
}

fn render(state: &AppState, template: &str, context: &Context) -> PageResult {
    Ok(state.views.render(template, context)?.into_response())
}

fn render_not_found(state: &AppState, context: &Context) -> PageResult {
    let page = state.views.render("404.html", context)?;
    Ok((StatusCode::NOT_FOUND, page).into_response())
}

/// Only same-site paths are followed; anything else goes back to the root.
fn redirect_target(return_url: Option<&str>) -> &str {
    match return_url {
        Some(url)
            if url.starts_with('/')
                && !url.starts_with("//")
                && !url.contains('\\')
                && !url.chars().any(char::is_control) =>
        {
            url
        }
        _ => "/",
    }
}

//=========================================================================================
// Page Handlers
//=========================================================================================

/// GET / - Landing page with the first few gyms and trainers.
pub async fn home(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<SessionHandle>,
) -> PageResult {
    let (_, mut context) =
        page_context(&state, &session, "Fitflix - Transform Your Fitness Journey").await;

    let particles: Vec<String> = particle_field(&mut rand::rng(), HERO_PARTICLES)
        .iter()
        .map(|p| p.style())
        .collect();
    context.insert("particles", &particles);
    context.insert("gyms", &staggered(state.catalog.top_gyms(HIGHLIGHTS)));
    context.insert("trainers", &staggered(state.catalog.top_trainers(HIGHLIGHTS)));
    render(&state, "home.html", &context)
}

/// GET /gyms - Gyms in the session's city.
pub async fn gyms(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<SessionHandle>,
) -> PageResult {
    let (city, mut context) = page_context(&state, &session, "Gyms & Fitness Centers").await;
    context.insert("gyms", &staggered(state.catalog.list_gyms(&city.id)));
    render(&state, "gyms.html", &context)
}

/// GET /services
pub async fn services(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<SessionHandle>,
) -> PageResult {
    let (_, mut context) = page_context(&state, &session, "Our Services").await;
    context.insert("services", &staggered(state.catalog.services()));
    render(&state, "services.html", &context)
}

/// GET /memberships
pub async fn memberships(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<SessionHandle>,
) -> PageResult {
    let (_, mut context) = page_context(&state, &session, "Membership Plans").await;
    context.insert("plans", &staggered(state.catalog.memberships()));
    render(&state, "memberships.html", &context)
}

/// GET /trainers - Trainers in `?city=` or, without it, the session's city.
/// The query never changes the session.
pub async fn trainers(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<SessionHandle>,
    Query(query): Query<TrainersQuery>,
) -> PageResult {
    let (city, mut context) = page_context(&state, &session, "Personal Trainers").await;

    let city_id = query
        .city
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| city.id.clone());
    let shown_city = state.catalog.find_city(&city_id).ok();

    context.insert("filter_city_id", &city_id);
    context.insert("filter_city", &shown_city);
    context.insert("trainers", &staggered(state.catalog.list_trainers(&city_id)));
    render(&state, "trainers.html", &context)
}

/// GET /trainer/{id} - A single trainer's profile, or a 404 page.
pub async fn trainer_profile(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<SessionHandle>,
    Path(id): Path<String>,
) -> PageResult {
    let trainer = id
        .trim()
        .parse::<u32>()
        .ok()
        .and_then(|id| state.catalog.find_trainer_by_id(id).ok());

    match trainer {
        Some(trainer) => {
            let title = format!("{} - Personal Trainer", trainer.name);
            let (_, mut context) = page_context(&state, &session, &title).await;
            context.insert("trainer", trainer);
            render(&state, "trainer_profile.html", &context)
        }
        None => {
            let (_, context) = page_context(&state, &session, "Trainer Not Found").await;
            render_not_found(&state, &context)
        }
    }
}

/// GET /city-selection - The city picker.
pub async fn city_selection(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<SessionHandle>,
    Query(query): Query<CitySelectionQuery>,
) -> PageResult {
    let (_, mut context) = page_context(&state, &session, "Select Your City").await;
    context.insert("return_url", redirect_target(query.return_url.as_deref()));
    render(&state, "city_selection.html", &context)
}

/// POST /select-city - Switches the session's city, then redirects back.
///
/// An unknown city id is ignored; the redirect happens either way.
pub async fn select_city(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<SessionHandle>,
    selection: CitySelection,
) -> Response {
    let city_id = selection.city_id.unwrap_or_default();
    match session.select_city(&state.catalog, &city_id).await {
        Ok(city) => info!("Session {} switched to {}", session.token, city.id),
        Err(e) => warn!("Ignoring city selection for session {}: {}", session.token, e),
    }

    let target = redirect_target(selection.return_url.as_deref()).to_string();
    (StatusCode::FOUND, [(header::LOCATION, target)]).into_response()
}

/// GET /book - Booking form, with a summary when the query already picks a service.
pub async fn book(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<SessionHandle>,
    Query(query): Query<BookQuery>,
) -> PageResult {
    let (city, mut context) = page_context(&state, &session, "Book Your Session").await;

    let quote = pricing::quote_from_form(
        query.service.as_deref().unwrap_or_default(),
        query.duration.as_deref().unwrap_or_default(),
    );
    let options: Vec<ServiceOption> = ServiceKind::ALL
        .iter()
        .map(|kind| ServiceOption {
            value: kind.as_str(),
            label: kind.label(),
            selected: quote.service == Some(*kind),
        })
        .collect();
    let summary = QuoteSummary {
        priced: quote.is_priced(),
        base_price: format_amount(quote.base_price),
        platform_fee: format_amount(quote.platform_fee),
        total: format_amount(quote.total),
    };

    context.insert("service_options", &options);
    context.insert("duration", &quote.duration_minutes);
    context.insert("summary", &summary);
    context.insert("trainers", &state.catalog.list_trainers(&city.id));
    render(&state, "book.html", &context)
}

/// GET /contact
pub async fn contact(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<SessionHandle>,
) -> PageResult {
    let (_, context) = page_context(&state, &session, "Contact Us").await;
    render(&state, "contact.html", &context)
}

/// Catch-all for unmatched routes.
pub async fn not_found(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<SessionHandle>,
) -> PageResult {
    let (_, context) = page_context(&state, &session, "Page Not Found").await;
    render_not_found(&state, &context)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redirect_target_keeps_local_paths_only() {
        assert_eq!(redirect_target(None), "/");
        assert_eq!(redirect_target(Some("")), "/");
        assert_eq!(redirect_target(Some("/gyms")), "/gyms");
        assert_eq!(redirect_target(Some("/trainers?city=pune")), "/trainers?city=pune");
        assert_eq!(redirect_target(Some("https://evil.example")), "/");
        assert_eq!(redirect_target(Some("//evil.example")), "/");
        assert_eq!(redirect_target(Some("/\\evil.example")), "/");
        assert_eq!(redirect_target(Some("/gyms\r\nSet-Cookie: x=1")), "/");
    }
}
