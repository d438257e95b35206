//! Core data models for territory lookup.

pub mod matching;
pub mod territory;

pub use matching::{MatchResult, OUTSIDE_DESCRIPTION};
pub use territory::{Point, Ring, Territory};
