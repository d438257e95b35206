//! HTTP API for address to territory lookups.

mod handlers;
mod response;

use std::sync::Arc;

use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::geocode::GoogleGeocoder;
use crate::pip::TerritoryResolver;

pub use response::{ApiError, Coordinates, LookupResponse, LOOKUP_EXAMPLE};

/// Application state shared across handlers
pub struct AppState {
    pub resolver: TerritoryResolver,
    /// `None` when no API key is configured; lookups then fail with a 500
    pub geocoder: Option<GoogleGeocoder>,
}

/// Build the API router
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/api/lookup",
            get(handlers::lookup_get)
                .post(handlers::lookup_post)
                .options(handlers::preflight),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
