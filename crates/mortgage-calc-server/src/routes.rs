use axum::{
    http::{header, HeaderName, Method},
    routing::get,
    Router,
};
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers::{
    current_interest_rate, health, mortgage_amount, not_found, payment_amount,
    update_interest_rate,
};
use crate::AppState;

/// Path prefix shared by every endpoint.
pub const API_PREFIX: &str = "/api/v1";

const CORS_MAX_AGE: Duration = Duration::from_secs(86400);

/// Build the full application router.
pub fn app(state: AppState) -> Router {
    // Each endpoint answers with and without the trailing slash.
    let api_routes = Router::new()
        .route("/payment-amount", get(payment_amount))
        .route("/payment-amount/", get(payment_amount))
        .route("/mortgage-amount", get(mortgage_amount))
        .route("/mortgage-amount/", get(mortgage_amount))
        .route(
            "/interest-rate",
            get(current_interest_rate).patch(update_interest_rate),
        )
        .route(
            "/interest-rate/",
            get(current_interest_rate).patch(update_interest_rate),
        )
        .route("/health", get(health));

    Router::new()
        .nest(API_PREFIX, api_routes)
        .fallback(not_found)
        .layer(cors())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::PATCH])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::CONTENT_LENGTH,
            HeaderName::from_static("x-requested-with"),
        ])
        .allow_credentials(false)
        .max_age(CORS_MAX_AGE)
}
