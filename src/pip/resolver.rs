//! Membership resolution: which territory contains a point.

use std::sync::Arc;
use tracing::debug;

use super::{ray_cast, TerritoryIndex, TerritoryStore};
use crate::models::{MatchResult, Point, Territory};

/// Find the first territory, in slice order, whose boundary contains `point`.
///
/// A territory matches when the even-odd ray cast places the point inside it
/// or the point lies exactly on its ring. Evaluation stops at the first match,
/// so a point shared by neighbouring territories (overlap, common edge or
/// common vertex) always goes to the one declared first. An empty slice
/// yields a no-match result.
pub fn resolve(point: Point, territories: &[Territory]) -> MatchResult {
    first_match(point, territories.iter())
}

fn first_match<'a, I>(point: Point, mut candidates: I) -> MatchResult
where
    I: Iterator<Item = &'a Territory>,
{
    candidates
        .find(|t| {
            ray_cast::contains(point, &t.boundary) || ray_cast::on_boundary(point, &t.boundary)
        })
        .map(MatchResult::matched)
        .unwrap_or_else(MatchResult::no_match)
}

/// Territory lookup service over a shared store
pub struct TerritoryResolver {
    store: Arc<TerritoryStore>,
    index: TerritoryIndex,
}

impl TerritoryResolver {
    /// Create a new resolver, building the spatial index for the store
    pub fn new(store: Arc<TerritoryStore>) -> Self {
        let index = TerritoryIndex::build(&store);
        Self { store, index }
    }

    /// Resolve a (longitude, latitude) pair
    pub fn lookup(&self, lng: f64, lat: f64) -> MatchResult {
        let point = Point::new(lng, lat);
        let territories = self.store.territories();

        // Candidates come back in store order, so the first hit is the same
        // territory a full linear scan would return
        let candidates = self.index.candidates(point);
        let result = first_match(point, candidates.iter().map(|&p| &territories[p]));

        debug!(
            "Territory lookup at {}: {:?}",
            point,
            result.territory_name.as_deref()
        );

        result
    }

    pub fn store(&self) -> &TerritoryStore {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Ring, OUTSIDE_DESCRIPTION};

    fn overlapping() -> Vec<Territory> {
        vec![
            Territory::new(
                "first",
                "declared first",
                Ring::from(vec![[0.0, 0.0], [6.0, 0.0], [6.0, 6.0], [0.0, 6.0]]),
            ),
            Territory::new(
                "second",
                "declared second",
                Ring::from(vec![[4.0, 4.0], [10.0, 4.0], [10.0, 10.0], [4.0, 10.0]]),
            ),
        ]
    }

    #[test]
    fn test_empty_territories() {
        let result = resolve(Point::new(1.0, 1.0), &[]);
        assert!(!result.found);
        assert!(result.territory_name.is_none());
        assert_eq!(result.description, OUTSIDE_DESCRIPTION);
    }

    #[test]
    fn test_first_declared_wins_on_overlap() {
        let territories = overlapping();
        let p = Point::new(5.0, 5.0);
        assert_eq!(
            resolve(p, &territories).territory_name.as_deref(),
            Some("first")
        );

        let reversed: Vec<Territory> = territories.into_iter().rev().collect();
        assert_eq!(
            resolve(p, &reversed).territory_name.as_deref(),
            Some("second")
        );
    }

    #[test]
    fn test_shared_vertex_goes_to_first_declared() {
        let territories = vec![
            Territory::new(
                "west",
                "",
                Ring::from(vec![[0.0, 0.0], [5.0, 0.0], [5.0, 5.0], [0.0, 5.0]]),
            ),
            Territory::new(
                "east",
                "",
                Ring::from(vec![[5.0, 0.0], [10.0, 0.0], [10.0, 5.0], [5.0, 5.0]]),
            ),
        ];
        // Top corner: the ray cast alone puts it outside both squares
        assert!(!ray_cast::contains(Point::new(5.0, 5.0), &territories[0].boundary));
        assert!(!ray_cast::contains(Point::new(5.0, 5.0), &territories[1].boundary));
        // Bottom corner: the ray cast alone puts it inside the east square only
        assert!(!ray_cast::contains(Point::new(5.0, 0.0), &territories[0].boundary));
        assert!(ray_cast::contains(Point::new(5.0, 0.0), &territories[1].boundary));

        let shared = Point::new(5.0, 5.0);
        assert_eq!(
            resolve(shared, &territories).territory_name.as_deref(),
            Some("west")
        );

        assert_eq!(
            resolve(Point::new(5.0, 0.0), &territories)
                .territory_name
                .as_deref(),
            Some("west")
        );

        let reversed: Vec<Territory> = territories.into_iter().rev().collect();
        assert_eq!(
            resolve(shared, &reversed).territory_name.as_deref(),
            Some("east")
        );
        assert_eq!(
            resolve(Point::new(5.0, 0.0), &reversed)
                .territory_name
                .as_deref(),
            Some("east")
        );
    }

    #[test]
    fn test_match_carries_description() {
        let result = resolve(Point::new(8.0, 8.0), &overlapping());
        assert!(result.found);
        assert_eq!(result.territory_name.as_deref(), Some("second"));
        assert_eq!(result.description, "declared second");
    }

    #[test]
    fn test_indexed_lookup_agrees_with_linear_scan() {
        let territories = overlapping();
        let store = Arc::new(TerritoryStore::from_territories(territories.clone()).unwrap());
        let resolver = TerritoryResolver::new(store);

        for x in [-1.0, 0.5, 3.0, 5.0, 5.5, 7.0, 9.9, 11.0] {
            for y in [-1.0, 0.5, 3.0, 5.0, 5.5, 7.0, 9.9, 11.0] {
                assert_eq!(
                    resolver.lookup(x, y),
                    resolve(Point::new(x, y), &territories),
                    "at ({}, {})",
                    x,
                    y
                );
            }
        }
    }

    #[test]
    fn test_empty_store() {
        let store = Arc::new(TerritoryStore::from_territories(vec![]).unwrap());
        let resolver = TerritoryResolver::new(store);
        assert!(!resolver.lookup(8.5, 47.4).found);
    }
}
