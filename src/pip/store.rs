//! Ordered, read-only territory store.

use std::fs;
use std::path::Path;

use hashbrown::HashSet;
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::TerritoryDataError;
use crate::models::Territory;

/// Territory table shipped with the service
const DEFAULT_TERRITORIES: &str = include_str!("../../data/territories.json");

#[derive(Debug, Deserialize)]
struct TerritoryFile {
    territories: Vec<Territory>,
}

/// Holds every territory in declaration order.
///
/// Order is significant: neighbouring territories share edges, and the first
/// one declared wins a tie. The store never changes after construction, so it
/// can be shared across threads behind an `Arc` without locking.
#[derive(Debug, Clone)]
pub struct TerritoryStore {
    territories: Vec<Territory>,
}

impl TerritoryStore {
    /// Load the built-in territory table
    pub fn load() -> Self {
        // The embedded table is validated by the tests below
        Self::from_json(DEFAULT_TERRITORIES).expect("Embedded territory table is invalid")
    }

    /// Load a territory table from a JSON file on disk
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, TerritoryDataError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| TerritoryDataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Loading territories from {}", path.display());
        Self::from_json(&content)
    }

    /// Parse and validate a territory table
    pub fn from_json(content: &str) -> Result<Self, TerritoryDataError> {
        let file: TerritoryFile = serde_json::from_str(content)?;
        Self::from_territories(file.territories)
    }

    /// Build a store from already constructed territories, keeping their order
    pub fn from_territories(territories: Vec<Territory>) -> Result<Self, TerritoryDataError> {
        // Names borrow from `territories`; the set must be gone before the move below
        {
            let mut seen = HashSet::new();
            for (index, territory) in territories.iter().enumerate() {
                if territory.name.trim().is_empty() {
                    return Err(TerritoryDataError::EmptyName { index });
                }
                if !seen.insert(territory.name.as_str()) {
                    return Err(TerritoryDataError::DuplicateName {
                        name: territory.name.clone(),
                    });
                }
            }
        }

        for territory in &territories {
            let count = territory.boundary.len();
            if count < 3 {
                return Err(TerritoryDataError::TooFewVertices {
                    name: territory.name.clone(),
                    count,
                });
            }

            if let Some(index) = territory
                .boundary
                .coords()
                .iter()
                .position(|c| !c.x.is_finite() || !c.y.is_finite())
            {
                return Err(TerritoryDataError::NonFiniteCoordinate {
                    name: territory.name.clone(),
                    index,
                });
            }

            debug!(
                "Territory {} ({} vertices, closed: {})",
                territory.name,
                count,
                territory.boundary.is_closed()
            );
        }

        info!("Loaded {} territories", territories.len());
        Ok(Self { territories })
    }

    /// All territories in declaration order
    pub fn territories(&self) -> &[Territory] {
        &self.territories
    }

    pub fn get(&self, name: &str) -> Option<&Territory> {
        self.territories.iter().find(|t| t.name == name)
    }

    pub fn len(&self) -> usize {
        self.territories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.territories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_builtin_table() {
        let store = TerritoryStore::load();
        let names: Vec<&str> = store.territories().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C", "D"]);
        assert_eq!(
            store.get("C").unwrap().description,
            "Northern portion of Southern Territory"
        );
        assert!(store.territories().iter().all(|t| t.boundary.is_closed()));
    }

    #[test]
    fn test_empty_table_is_valid() {
        let store = TerritoryStore::from_json(r#"{"territories": []}"#).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_rejects_invalid_json() {
        let err = TerritoryStore::from_json("{\"territories\": [").unwrap_err();
        assert!(matches!(err, TerritoryDataError::Parse(_)));
    }

    #[test]
    fn test_rejects_too_few_vertices() {
        let json = r#"{"territories": [
            {"name": "X", "description": "", "polygon": [[0, 0], [1, 1]]}
        ]}"#;
        let err = TerritoryStore::from_json(json).unwrap_err();
        assert!(matches!(
            err,
            TerritoryDataError::TooFewVertices { ref name, count: 2 } if name == "X"
        ));
    }

    #[test]
    fn test_rejects_duplicate_names() {
        let json = r#"{"territories": [
            {"name": "X", "description": "", "polygon": [[0, 0], [1, 0], [1, 1]]},
            {"name": "X", "description": "", "polygon": [[0, 0], [1, 0], [1, 1]]}
        ]}"#;
        let err = TerritoryStore::from_json(json).unwrap_err();
        assert!(matches!(err, TerritoryDataError::DuplicateName { .. }));
    }

    #[test]
    fn test_from_territories_keeps_order() {
        let ring = || crate::models::Ring::from(vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]);
        let store = TerritoryStore::from_territories(vec![
            Territory::new("second", "", ring()),
            Territory::new("first", "", ring()),
        ])
        .unwrap();
        let names: Vec<&str> = store.territories().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["second", "first"]);
    }

    #[test]
    fn test_rejects_empty_name() {
        let json = r#"{"territories": [
            {"name": " ", "description": "", "polygon": [[0, 0], [1, 0], [1, 1]]}
        ]}"#;
        let err = TerritoryStore::from_json(json).unwrap_err();
        assert!(matches!(err, TerritoryDataError::EmptyName { index: 0 }));
    }

    #[test]
    fn test_rejects_non_finite_coordinate() {
        let territory = Territory::new(
            "X",
            "",
            crate::models::Ring::from(vec![[0.0, 0.0], [f64::NAN, 0.0], [1.0, 1.0]]),
        );
        let err = TerritoryStore::from_territories(vec![territory]).unwrap_err();
        assert!(matches!(
            err,
            TerritoryDataError::NonFiniteCoordinate { index: 1, .. }
        ));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"territories": [{{"name": "Z", "description": "zone", "polygon": [[0, 0], [2, 0], [2, 2], [0, 2]]}}]}}"#
        )
        .unwrap();

        let store = TerritoryStore::from_path(file.path()).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("Z").unwrap().description, "zone");
    }

    #[test]
    fn test_from_missing_path() {
        let err = TerritoryStore::from_path("/nonexistent/territories.json").unwrap_err();
        assert!(matches!(err, TerritoryDataError::Io { .. }));
    }
}
