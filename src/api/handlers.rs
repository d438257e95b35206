//! Request handlers.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use super::{ApiError, AppState, Coordinates, LookupResponse};

#[derive(Debug, Deserialize, Default)]
pub struct LookupParams {
    address: Option<String>,
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    territories: usize,
    geocoder: bool,
}

/// Health check endpoint
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: if state.geocoder.is_some() { "ok" } else { "degraded" },
        territories: state.resolver.store().len(),
        geocoder: state.geocoder.is_some(),
    })
}

pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

pub async fn lookup_get(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LookupParams>,
) -> Result<Json<LookupResponse>, ApiError> {
    lookup(&state, params.address).await
}

/// POST body is `{"address": "..."}`; an unreadable body counts as a missing address
pub async fn lookup_post(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<LookupResponse>, ApiError> {
    let params: LookupParams = serde_json::from_slice(&body).unwrap_or_default();
    lookup(&state, params.address).await
}

async fn lookup(
    state: &AppState,
    address: Option<String>,
) -> Result<Json<LookupResponse>, ApiError> {
    // Blank counts as missing, but the address is echoed back exactly as sent
    let address = address
        .filter(|a| !a.trim().is_empty())
        .ok_or(ApiError::MissingAddress)?;

    let geocoder = state.geocoder.as_ref().ok_or_else(|| {
        error!("Lookup rejected: no geocoding API key configured");
        ApiError::MissingApiKey
    })?;

    let geocoded = geocoder
        .geocode(&address)
        .await
        .map_err(|e| ApiError::from_geocode(&address, e))?;

    let location = geocoded.location;
    let result = state.resolver.lookup(location.lng, location.lat);

    info!(
        "Resolved '{}' at {} to territory {:?}",
        address,
        location,
        result.territory_name.as_deref()
    );

    Ok(Json(LookupResponse {
        error: false,
        input_address: address,
        formatted_address: geocoded.formatted_address,
        coordinates: Coordinates {
            latitude: location.lat,
            longitude: location.lng,
        },
        result,
    }))
}
