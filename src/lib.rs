//! Concave hull (alpha shape) computation for 2-D point clouds.
//!
//! Given a scattered set of points, [`compute_alpha_shape`] returns one or
//! more closed polygon rings tracing the outer and inner boundaries of the
//! cloud more tightly than a convex hull, tolerating holes and disjoint
//! clusters. The pipeline Delaunay-triangulates the points, rejects triangles
//! with outlier side lengths (a Tukey-fence rule tuned by `alpha`), extracts
//! the boundary edges of the surviving triangles, and stitches them into
//! rings ordered by enclosed area.
//!
//! The weighted undirected [`graph::Graph`] backing the ring assembly is also
//! usable standalone, together with a Dijkstra [`graph::shortest_path`] query.

pub mod error;
pub mod geometry;
pub mod graph;
pub mod hull;

pub use error::{AlphaShapeError, Result};
pub use geometry::Point2;
pub use graph::{shortest_path, Graph};
pub use hull::{compute_alpha_shape, AlphaShape};
