//! services/web/src/web/rest.rs
//!
//! Contains the Axum handlers for the JSON endpoints and the master
//! definition for the OpenAPI specification.

use axum::{extract::Query, response::Json};
use fitflix_core::pricing::{self, format_amount};
use fitflix_core::BookingQuote;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, OpenApi, ToSchema};

//=========================================================================================
// OpenAPI Master Definition
//=========================================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        quote_handler,
        health_handler,
    ),
    components(
        schemas(QuoteResponse, QuoteDisplay, HealthResponse)
    ),
    tags(
        (name = "Fitflix API", description = "JSON endpoints backing the Fitflix booking pages.")
    )
)]
pub struct ApiDoc;

//=========================================================================================
// API Response and Payload Structs
//=========================================================================================

/// Raw booking form values. Both are optional, like the form fields.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct QuoteQuery {
    /// `gym-session`, `trainer-session` or `class` (`gym` and `trainer` also work).
    pub service: Option<String>,
    /// Duration in minutes.
    pub duration: Option<String>,
}

/// A priced booking.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct QuoteResponse {
    /// The recognised service, or null when none was picked.
    pub service: Option<String>,
    pub duration_minutes: Option<u32>,
    pub base_price: f64,
    pub platform_fee: f64,
    pub total: f64,
    /// Whether a service has been priced yet; the page only shows a summary then.
    pub priced: bool,
    pub display: QuoteDisplay,
}

/// The same amounts, formatted for display.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct QuoteDisplay {
    pub base_price: String,
    pub platform_fee: String,
    pub total: String,
}

impl From<BookingQuote> for QuoteResponse {
    fn from(quote: BookingQuote) -> Self {
        Self {
            service: quote.service.map(|kind| kind.as_str().to_string()),
            duration_minutes: quote.duration_minutes,
            base_price: quote.base_price,
            platform_fee: quote.platform_fee,
            total: quote.total,
            priced: quote.is_priced(),
            display: QuoteDisplay {
                base_price: format_amount(quote.base_price),
                platform_fee: format_amount(quote.platform_fee),
                total: format_amount(quote.total),
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

//=========================================================================================
// REST API Handlers
//=========================================================================================

/// Price a booking.
///
/// Used by the booking form to refresh its summary when the service or
/// duration changes. Unknown services price at zero plus the platform fee.
#[utoipa::path(
    get,
    path = "/api/quote",
    params(QuoteQuery),
    responses(
        (status = 200, description = "Price breakdown", body = QuoteResponse)
    )
)]
pub async fn quote_handler(Query(query): Query<QuoteQuery>) -> Json<QuoteResponse> {
    let quote = pricing::quote_from_form(
        query.service.as_deref().unwrap_or_default(),
        query.duration.as_deref().unwrap_or_default(),
    );
    Json(quote.into())
}

/// Liveness probe.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}
