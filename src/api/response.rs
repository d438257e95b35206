//! JSON response bodies for the lookup API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;

use crate::error::GeocodeError;
use crate::models::MatchResult;

pub const LOOKUP_EXAMPLE: &str = "/api/lookup?address=123 Main St, Denver, CO 80202";

#[derive(Debug, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Successful lookup
#[derive(Debug, Serialize)]
pub struct LookupResponse {
    pub error: bool,
    pub input_address: String,
    pub formatted_address: String,
    pub coordinates: Coordinates,
    #[serde(flatten)]
    pub result: MatchResult,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    input_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    example: Option<&'static str>,
}

/// Failures surfaced to API callers
#[derive(Debug)]
pub enum ApiError {
    MissingAddress,
    MissingApiKey,
    AddressNotFound { address: String, details: String },
    Internal(String),
}

impl ApiError {
    /// Map a geocoder failure, keeping the address the caller sent
    pub fn from_geocode(address: &str, err: GeocodeError) -> Self {
        match err {
            GeocodeError::NotFound { message, .. } => ApiError::AddressNotFound {
                address: address.to_string(),
                details: message,
            },
            other => ApiError::Internal(other.to_string()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingAddress | ApiError::AddressNotFound { .. } => StatusCode::BAD_REQUEST,
            ApiError::MissingApiKey | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(self) -> ErrorBody {
        let mut body = ErrorBody {
            error: true,
            message: String::new(),
            details: None,
            input_address: None,
            example: None,
        };

        match self {
            ApiError::MissingAddress => {
                body.message = "Missing required parameter: address".to_string();
                body.example = Some(LOOKUP_EXAMPLE);
            }
            ApiError::MissingApiKey => {
                body.message =
                    "Server configuration error: Missing Google Maps API key".to_string();
            }
            ApiError::AddressNotFound { address, details } => {
                body.message = "Could not find address".to_string();
                body.details = Some(details);
                body.input_address = Some(address);
            }
            ApiError::Internal(details) => {
                body.message = "Internal server error".to_string();
                body.details = Some(details);
            }
        }

        body
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(self.body())).into_response()
    }
}
