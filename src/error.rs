//! Error types for the territory lookup library.

use std::path::PathBuf;

use thiserror::Error;

/// A territory table could not be turned into a store
#[derive(Error, Debug)]
pub enum TerritoryDataError {
    #[error("failed to read territory file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed territory data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("territory at index {index} has an empty name")]
    EmptyName { index: usize },

    #[error("territory '{name}' is declared more than once")]
    DuplicateName { name: String },

    #[error("territory '{name}' has {count} vertices, at least 3 are required")]
    TooFewVertices { name: String, count: usize },

    #[error("territory '{name}' has a non-finite coordinate at vertex {index}")]
    NonFiniteCoordinate { name: String, index: usize },
}

/// Geocoding provider failures
#[derive(Error, Debug)]
pub enum GeocodeError {
    /// The provider answered but could not place the address
    #[error("address not found ({status}): {message}")]
    NotFound { status: String, message: String },

    #[error("geocoding provider error: {0}")]
    Provider(#[from] reqwest::Error),

    #[error("invalid geocoder URL: {0}")]
    Url(#[from] url::ParseError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}
