//! Result of resolving a point against the territory list.

use serde::{Deserialize, Serialize};

use super::Territory;

/// Description reported when a point falls outside every territory
pub const OUTSIDE_DESCRIPTION: &str = "Address is outside all service territories";

/// Outcome of a membership lookup.
///
/// Serialized with the field names exposed by the HTTP API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(rename = "territory_found")]
    pub found: bool,

    /// Name of the matching territory, `None` when nothing matched
    #[serde(rename = "territory")]
    pub territory_name: Option<String>,

    #[serde(rename = "territory_description")]
    pub description: String,
}

impl MatchResult {
    pub fn matched(territory: &Territory) -> Self {
        Self {
            found: true,
            territory_name: Some(territory.name.clone()),
            description: territory.description.clone(),
        }
    }

    pub fn no_match() -> Self {
        Self {
            found: false,
            territory_name: None,
            description: OUTSIDE_DESCRIPTION.to_string(),
        }
    }
}
