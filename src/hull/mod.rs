mod assemble;
mod filter;
mod rings;

use crate::error::{Result, ShapeError};
use crate::geometry::distance::{euclidean_distance, DistanceFn};
use crate::geometry::triangulate::delaunay_triangulation;
use crate::geometry::Point2;

/// Computes the concave hull (alpha shape) of a 2-D point cloud.
///
/// The point set is Delaunay-triangulated, triangles with outlier side
/// lengths are rejected by a Tukey fence tuned by `alpha`, and the boundary
/// edges of the surviving triangles are stitched into closed rings ordered by
/// enclosed area, largest first. Holes and disjoint clusters each yield their
/// own ring.
///
/// Larger `alpha` values keep more triangles and approach the convex hull;
/// smaller values carve deeper concavities and more holes.
#[derive(Debug, Clone, Copy)]
pub struct AlphaShape {
    alpha: f64,
    distance: DistanceFn,
}

impl Default for AlphaShape {
    fn default() -> Self {
        Self {
            alpha: 1.5,
            distance: euclidean_distance,
        }
    }
}

impl AlphaShape {
    /// Creates the operation with default parameters (`alpha = 1.5`,
    /// Euclidean distance).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the Tukey fence multiplier. Must be finite and greater than zero.
    #[must_use]
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the distance function used for side lengths and edge weights.
    #[must_use]
    pub fn with_distance(mut self, distance: DistanceFn) -> Self {
        self.distance = distance;
        self
    }

    /// Executes the computation, returning the closed rings of the alpha
    /// shape sorted by enclosed area descending. Each ring repeats its first
    /// point at the end.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::InvalidAlpha`] for a non-positive or non-finite
    /// `alpha`, [`ShapeError::DegenerateInput`] if fewer than 3 distinct
    /// points are given or all points are collinear, and
    /// [`ShapeError::Inconsistent`] if the triangulation is malformed.
    pub fn execute(&self, points: &[Point2]) -> Result<Vec<Vec<Point2>>> {
        let edges = self.edges(points)?;
        rings::assemble_rings(&edges, self.distance)
    }

    /// Returns the alpha triangulation: the triangles that survive the
    /// length filter, as point triples.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`AlphaShape::execute`].
    pub fn triangulation(&self, points: &[Point2]) -> Result<Vec<[Point2; 3]>> {
        let (points, accepted) = self.accepted_triangles(points)?;
        Ok(accepted
            .iter()
            .map(|tri| [points[tri[0]], points[tri[1]], points[tri[2]]])
            .collect())
    }

    /// Returns the boundary edges of the alpha shape as point pairs.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`AlphaShape::execute`].
    pub fn edges(&self, points: &[Point2]) -> Result<Vec<(Point2, Point2)>> {
        let (points, accepted) = self.accepted_triangles(points)?;
        let boundary = assemble::boundary_edges(&accepted)?;
        Ok(boundary
            .into_iter()
            .map(|(i, j)| (points[i], points[j]))
            .collect())
    }

    fn accepted_triangles(&self, points: &[Point2]) -> Result<(Vec<Point2>, Vec<[usize; 3]>)> {
        if !(self.alpha.is_finite() && self.alpha > 0.0) {
            return Err(ShapeError::InvalidAlpha { alpha: self.alpha }.into());
        }
        let triangulated = delaunay_triangulation(points)?;
        let accepted = filter::filter_triangles(
            &triangulated.triangles,
            &triangulated.points,
            self.distance,
            self.alpha,
        );
        Ok((triangulated.points, accepted))
    }
}

/// Computes the concave hull (alpha shape) of a point cloud, returning its
/// closed rings sorted by enclosed area descending.
///
/// Convenience wrapper around [`AlphaShape`].
///
/// # Errors
///
/// Same failure modes as [`AlphaShape::execute`].
pub fn compute_alpha_shape(
    points: &[Point2],
    alpha: f64,
    distance: DistanceFn,
) -> Result<Vec<Vec<Point2>>> {
    AlphaShape::new()
        .with_alpha(alpha)
        .with_distance(distance)
        .execute(points)
}
