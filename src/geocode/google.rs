//! Google Maps geocoding client.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use crate::error::GeocodeError;
use crate::models::Point;

pub const DEFAULT_GEOCODE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

const FALLBACK_MESSAGE: &str = "Unable to geocode address";

/// A successfully geocoded address
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodedAddress {
    pub location: Point,
    pub formatted_address: String,
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    formatted_address: String,
    geometry: ResultGeometry,
}

#[derive(Debug, Deserialize)]
struct ResultGeometry {
    location: LatLng,
}

#[derive(Debug, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

/// Resolves free-text addresses to coordinates via the Google Maps API
#[derive(Clone)]
pub struct GoogleGeocoder {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl GoogleGeocoder {
    pub fn new(api_key: &str, base_url: &str, timeout: Duration) -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .user_agent("territory-lookup/0.1")
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            base_url: Url::parse(base_url)?,
        })
    }

    /// Geocode an address, returning the first result
    pub async fn geocode(&self, address: &str) -> Result<GeocodedAddress, GeocodeError> {
        let url = Url::parse_with_params(
            self.base_url.as_str(),
            &[("address", address), ("key", self.api_key.as_str())],
        )?;

        debug!("Geocoding '{}'", address);

        let data: GeocodeResponse = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if data.status == "OK" {
            if let Some(first) = data.results.into_iter().next() {
                let location = Point::new(first.geometry.location.lng, first.geometry.location.lat);
                debug!("Geocoded '{}' to {}", address, location);
                return Ok(GeocodedAddress {
                    location,
                    formatted_address: first.formatted_address,
                });
            }
        }

        warn!("Geocoding '{}' failed with status {}", address, data.status);
        Err(GeocodeError::NotFound {
            status: data.status,
            message: data
                .error_message
                .unwrap_or_else(|| FALLBACK_MESSAGE.to_string()),
        })
    }
}
