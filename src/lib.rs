//! Territory lookup - resolves addresses to named service territories
//!
//! This library provides the territory store, point-in-polygon resolver,
//! geocoding client and HTTP API shared by the `lookup` and `check` binaries.

pub mod api;
pub mod config;
pub mod error;
pub mod geocode;
pub mod models;
pub mod pip;

pub use models::{MatchResult, Point, Ring, Territory};
pub use pip::{resolve, TerritoryResolver, TerritoryStore};
