//! Address geocoding.

mod google;

pub use google::{GeocodedAddress, GoogleGeocoder, DEFAULT_GEOCODE_URL};
