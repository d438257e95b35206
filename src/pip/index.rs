//! Spatial index for narrowing territory candidates.

use rstar::{RTree, RTreeObject, AABB};
use tracing::info;

use super::TerritoryStore;
use crate::models::Point;

/// Bounding box of one territory, tagged with its position in the store
#[derive(Debug, Clone)]
pub struct IndexedTerritory {
    pub position: usize,
    envelope: AABB<[f64; 2]>,
}

impl RTreeObject for IndexedTerritory {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        self.envelope
    }
}

/// R-tree over territory bounding boxes.
///
/// The index only prefilters. Callers still run the exact ray cast, and must
/// do so in store order to keep first-declared-wins semantics.
pub struct TerritoryIndex {
    tree: RTree<IndexedTerritory>,
}

impl TerritoryIndex {
    /// Build spatial index from a territory store
    pub fn build(store: &TerritoryStore) -> Self {
        let indexed: Vec<IndexedTerritory> = store
            .territories()
            .iter()
            .enumerate()
            .filter_map(|(position, territory)| {
                let rect = territory.boundary.bbox()?;
                Some(IndexedTerritory {
                    position,
                    envelope: AABB::from_corners(
                        [rect.min().x, rect.min().y],
                        [rect.max().x, rect.max().y],
                    ),
                })
            })
            .collect();

        let tree = RTree::bulk_load(indexed);
        info!("Spatial index built with {} entries", tree.size());

        Self { tree }
    }

    /// Store positions whose bounding box touches the point, ascending
    pub fn candidates(&self, point: Point) -> Vec<usize> {
        let query_envelope = AABB::from_point([point.lng, point.lat]);

        let mut positions: Vec<usize> = self
            .tree
            .locate_in_envelope_intersecting(&query_envelope)
            .map(|it| it.position)
            .collect();
        positions.sort_unstable();
        positions
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}
