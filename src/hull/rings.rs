use crate::error::Result;
use crate::geometry::distance::DistanceFn;
use crate::geometry::polygon::{ring_area, rotate_to_canonical_start};
use crate::geometry::{cmp_points, Point2, PointKey};
use crate::graph::Graph;

/// Stitches a set of boundary edges into closed polygon rings, largest
/// enclosed area first.
///
/// The edges are loaded into a [`Graph`] which is then consumed: each walk
/// starts at the lexicographically smallest vertex that still has an edge,
/// repeatedly steps to the lexicographically smallest remaining neighbor, and
/// removes every traversed edge until it returns to its start. The explicit
/// tie-break makes the decomposition at vertices of degree > 2 (touching
/// rings) deterministic across runs.
///
/// Walks that dead-end before closing, and rings with fewer than 3 distinct
/// vertices, are discarded as degenerate. Each surviving ring is rotated to
/// start at its smallest vertex and closed with a repeated first point.
pub(crate) fn assemble_rings(
    edges: &[(Point2, Point2)],
    distance: DistanceFn,
) -> Result<Vec<Vec<Point2>>> {
    let mut graph = Graph::from_edges(edges, distance)?;

    let mut measured: Vec<(f64, Vec<Point2>)> = Vec::new();
    while let Some(start) = smallest_active_vertex(&graph) {
        if let Some(ring) = walk_ring(&mut graph, start)? {
            measured.push((ring_area(&ring), ring));
        }
    }

    measured.sort_by(|(area_a, ring_a), (area_b, ring_b)| {
        area_b
            .total_cmp(area_a)
            .then_with(|| cmp_points(&ring_a[0], &ring_b[0]))
    });
    Ok(measured.into_iter().map(|(_, ring)| ring).collect())
}

/// The lexicographically smallest vertex with at least one remaining edge.
fn smallest_active_vertex(graph: &Graph) -> Option<Point2> {
    graph
        .nodes()
        .into_iter()
        .filter(|p| graph.neighbors(p).is_some_and(|ns| !ns.is_empty()))
        .min_by(cmp_points)
}

/// Walks one closed ring starting (and ending) at `start`, removing each
/// traversed edge from the graph.
fn walk_ring(graph: &mut Graph, start: Point2) -> Result<Option<Vec<Point2>>> {
    let start_key = PointKey::new(&start);
    let mut ring = vec![start];
    let mut current = start;

    loop {
        let next = match graph.neighbors(&current).and_then(|ns| ns.into_iter().next()) {
            Some(n) => n,
            // dead end before closing: malformed boundary, drop the walk
            None => return Ok(None),
        };
        graph.remove_edge(&current, &next)?;
        if PointKey::new(&next) == start_key {
            break;
        }
        ring.push(next);
        current = next;
    }

    if distinct_count(&ring) < 3 {
        return Ok(None);
    }

    let mut closed = rotate_to_canonical_start(&ring);
    closed.push(closed[0]);
    Ok(Some(closed))
}

fn distinct_count(ring: &[Point2]) -> usize {
    let mut keys: Vec<PointKey> = ring.iter().map(PointKey::new).collect();
    keys.sort_unstable();
    keys.dedup();
    keys.len()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::distance::euclidean_distance;
    use crate::geometry::TOLERANCE;

    #[test]
    fn single_square_ring() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(2.0, 0.0);
        let c = Point2::new(2.0, 2.0);
        let d = Point2::new(0.0, 2.0);
        let edges = vec![(a, b), (b, c), (c, d), (d, a)];

        let rings = assemble_rings(&edges, euclidean_distance).unwrap();
        assert_eq!(rings.len(), 1);

        let ring = &rings[0];
        // closed with a repeated first point, starting at the smallest vertex
        assert_eq!(ring.len(), 5);
        assert_eq!(ring[0], a);
        assert_eq!(ring[4], a);
        assert!((ring_area(ring) - 4.0).abs() < TOLERANCE);
    }

    #[test]
    fn two_disjoint_rings_sorted_by_area() {
        // small triangle far from a big square
        let edges = vec![
            (Point2::new(10.0, 0.0), Point2::new(11.0, 0.0)),
            (Point2::new(11.0, 0.0), Point2::new(10.5, 1.0)),
            (Point2::new(10.5, 1.0), Point2::new(10.0, 0.0)),
            (Point2::new(0.0, 0.0), Point2::new(3.0, 0.0)),
            (Point2::new(3.0, 0.0), Point2::new(3.0, 3.0)),
            (Point2::new(3.0, 3.0), Point2::new(0.0, 3.0)),
            (Point2::new(0.0, 3.0), Point2::new(0.0, 0.0)),
        ];

        let rings = assemble_rings(&edges, euclidean_distance).unwrap();
        assert_eq!(rings.len(), 2);
        assert!((ring_area(&rings[0]) - 9.0).abs() < TOLERANCE);
        assert!((ring_area(&rings[1]) - 0.5).abs() < TOLERANCE);
    }

    #[test]
    fn hole_produces_inner_ring() {
        // outer 4x4 square with an inner 1x1 square hole
        let outer = [
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 4.0),
            Point2::new(0.0, 4.0),
        ];
        let inner = [
            Point2::new(1.5, 1.5),
            Point2::new(2.5, 1.5),
            Point2::new(2.5, 2.5),
            Point2::new(1.5, 2.5),
        ];
        let mut edges = Vec::new();
        for i in 0..4 {
            edges.push((outer[i], outer[(i + 1) % 4]));
            edges.push((inner[i], inner[(i + 1) % 4]));
        }

        let rings = assemble_rings(&edges, euclidean_distance).unwrap();
        assert_eq!(rings.len(), 2);
        assert!((ring_area(&rings[0]) - 16.0).abs() < TOLERANCE);
        assert!((ring_area(&rings[1]) - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn walk_is_deterministic() {
        let edges = vec![
            (Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)),
            (Point2::new(1.0, 0.0), Point2::new(1.0, 1.0)),
            (Point2::new(1.0, 1.0), Point2::new(0.0, 1.0)),
            (Point2::new(0.0, 1.0), Point2::new(0.0, 0.0)),
        ];
        let first = assemble_rings(&edges, euclidean_distance).unwrap();
        let second = assemble_rings(&edges, euclidean_distance).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn open_chain_is_discarded() {
        let edges = vec![
            (Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)),
            (Point2::new(1.0, 0.0), Point2::new(2.0, 0.5)),
        ];
        let rings = assemble_rings(&edges, euclidean_distance).unwrap();
        assert!(rings.is_empty());
    }
}
