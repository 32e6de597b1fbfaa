use std::collections::HashMap;

use spade::{DelaunayTriangulation, InsertionError, Point2 as SpadePoint2, Triangulation as _};

use crate::error::{Result, ShapeError};

use super::{Point2, PointKey};

/// A Delaunay triangulation of a point set.
///
/// `points` holds the distinct input points; each triangle references three
/// of them by index.
#[derive(Debug, Clone)]
pub struct Triangulated {
    /// The distinct input points, in first-seen order.
    pub points: Vec<Point2>,
    /// Triangles as index triples into `points`.
    pub triangles: Vec<[usize; 3]>,
}

/// Computes the Delaunay triangulation of a 2-D point set.
///
/// Duplicate input points are collapsed before triangulating, so triangle
/// indices always name distinct coordinates.
///
/// # Errors
///
/// Returns [`ShapeError::DegenerateInput`] if fewer than 3 distinct points
/// remain or all points are collinear, and [`ShapeError::Triangulation`] if a
/// coordinate is not a finite number.
pub fn delaunay_triangulation(points: &[Point2]) -> Result<Triangulated> {
    let mut unique: Vec<Point2> = Vec::with_capacity(points.len());
    let mut seen: HashMap<PointKey, usize> = HashMap::with_capacity(points.len());
    for p in points {
        seen.entry(PointKey::new(p)).or_insert_with(|| {
            unique.push(*p);
            unique.len() - 1
        });
    }

    if unique.len() < 3 {
        return Err(ShapeError::DegenerateInput(format!(
            "{} distinct points; at least 3 are required to triangulate",
            unique.len()
        ))
        .into());
    }

    let mut dt = DelaunayTriangulation::<SpadePoint2<f64>>::new();
    let mut vertex_map: HashMap<usize, usize> = HashMap::with_capacity(unique.len());
    for (idx, p) in unique.iter().enumerate() {
        let handle = dt
            .insert(SpadePoint2::new(p.x, p.y))
            .map_err(|e: InsertionError| ShapeError::Triangulation(format!("insert: {e}")))?;
        vertex_map.insert(handle.index(), idx);
    }

    let mut triangles = Vec::with_capacity(dt.num_inner_faces());
    for face in dt.inner_faces() {
        let verts = face.vertices();
        let mut tri = [0usize; 3];
        for (i, vh) in verts.iter().enumerate() {
            let spade_idx = vh.fix().index();
            tri[i] = *vertex_map.get(&spade_idx).ok_or_else(|| {
                ShapeError::Triangulation(format!("unknown vertex handle {spade_idx}"))
            })?;
        }
        triangles.push(tri);
    }

    if triangles.is_empty() {
        return Err(
            ShapeError::DegenerateInput("all points are collinear".to_string()).into(),
        );
    }

    Ok(Triangulated { points: unique, triangles })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn triangulates_unit_square() {
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ];
        let tri = delaunay_triangulation(&pts).unwrap();
        assert_eq!(tri.points.len(), 4);
        // a square splits into exactly two triangles
        assert_eq!(tri.triangles.len(), 2);
        for t in &tri.triangles {
            assert!(t.iter().all(|&i| i < 4));
            assert_ne!(t[0], t[1]);
            assert_ne!(t[1], t[2]);
            assert_ne!(t[0], t[2]);
        }
    }

    #[test]
    fn collapses_duplicate_points() {
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.5, 1.0),
        ];
        let tri = delaunay_triangulation(&pts).unwrap();
        assert_eq!(tri.points.len(), 3);
        assert_eq!(tri.triangles.len(), 1);
    }

    #[test]
    fn rejects_too_few_points() {
        let pts = vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)];
        assert!(delaunay_triangulation(&pts).is_err());
    }

    #[test]
    fn rejects_collinear_points() {
        let pts: Vec<Point2> = (0..5).map(|i| Point2::new(f64::from(i), 0.0)).collect();
        assert!(delaunay_triangulation(&pts).is_err());
    }
}
