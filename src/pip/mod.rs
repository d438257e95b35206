//! Point-in-Polygon (PIP) territory lookup.
//!
//! Holds the ordered territory table and resolves points against it with an
//! even-odd ray cast, using an R-tree to skip territories whose bounding box
//! cannot contain the point.

mod index;
pub mod ray_cast;
mod resolver;
mod store;

pub use index::TerritoryIndex;
pub use resolver::{resolve, TerritoryResolver};
pub use store::TerritoryStore;
