use std::cmp::Ordering;
use std::collections::BinaryHeap;

use slotmap::SecondaryMap;

use crate::error::{PathError, Result};
use crate::geometry::Point2;

use super::{Graph, NodeId};

/// Heap entry ordered by tentative distance.
///
/// `Ord` is reversed so the `BinaryHeap` behaves as a min-heap; ties compare
/// node identifiers to keep `PartialEq` and `Ord` consistent.
#[derive(Copy, Clone)]
struct State {
    cost: f64,
    node: NodeId,
}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for State {}

/// Computes the shortest path from `source` to `target` with Dijkstra's
/// algorithm, returning the ordered sequence of points from `source` to
/// `target` inclusive.
///
/// Edge weights are assumed non-negative; behavior with negative weights is
/// undefined. Ties between equal-length paths are broken by heap order.
///
/// # Errors
///
/// Returns [`PathError::UnreachableNode`] if `source` or `target` is not a
/// node of the graph, and [`PathError::NoPath`] if both are nodes but no path
/// connects them.
pub fn shortest_path(graph: &Graph, source: &Point2, target: &Point2) -> Result<Vec<Point2>> {
    let unreachable = |p: &Point2| PathError::UnreachableNode { x: p.x, y: p.y };
    let source_id = graph.lookup(source).ok_or_else(|| unreachable(source))?;
    let target_id = graph.lookup(target).ok_or_else(|| unreachable(target))?;

    if source_id == target_id {
        return Ok(vec![*source]);
    }

    let mut distances: SecondaryMap<NodeId, f64> = SecondaryMap::new();
    let mut predecessors: SecondaryMap<NodeId, NodeId> = SecondaryMap::new();
    let mut finalized: SecondaryMap<NodeId, ()> = SecondaryMap::new();
    let mut heap = BinaryHeap::new();

    distances.insert(source_id, 0.0);
    heap.push(State { cost: 0.0, node: source_id });

    let mut reached = false;
    while let Some(State { cost, node }) = heap.pop() {
        if finalized.insert(node, ()).is_some() {
            continue;
        }
        if node == target_id {
            reached = true;
            break;
        }
        for (neighbor, weight) in graph.edges_of(node) {
            let tentative = cost + weight;
            let improved = distances
                .get(neighbor)
                .map_or(true, |&known| tentative < known);
            if improved {
                distances.insert(neighbor, tentative);
                predecessors.insert(neighbor, node);
                heap.push(State { cost: tentative, node: neighbor });
            }
        }
    }

    if !reached {
        return Err(PathError::NoPath {
            ax: source.x,
            ay: source.y,
            bx: target.x,
            by: target.y,
        }
        .into());
    }

    // walk predecessors back from target; the chain ends at the source,
    // which has no predecessor entry
    let mut ids = vec![target_id];
    let mut current = target_id;
    while let Some(&prev) = predecessors.get(current) {
        ids.push(prev);
        current = prev;
    }
    ids.reverse();
    Ok(ids.into_iter().map(|id| graph.point(id)).collect())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::AlphaShapeError;
    use crate::geometry::distance::euclidean_distance;

    fn unit_square_graph() -> Graph {
        let edges = vec![
            (Point2::new(0.0, 0.0), Point2::new(0.0, 1.0)),
            (Point2::new(0.0, 1.0), Point2::new(1.0, 1.0)),
            (Point2::new(1.0, 1.0), Point2::new(1.0, 0.0)),
            (Point2::new(1.0, 0.0), Point2::new(0.0, 0.0)),
        ];
        Graph::from_edges(&edges, euclidean_distance).unwrap()
    }

    #[test]
    fn same_source_and_target() {
        let g = unit_square_graph();
        let p = Point2::new(0.0, 0.0);
        assert_eq!(shortest_path(&g, &p, &p).unwrap(), vec![p]);
    }

    #[test]
    fn adjacent_corners_take_direct_edge() {
        let g = unit_square_graph();
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 0.0);
        assert_eq!(shortest_path(&g, &a, &b).unwrap(), vec![a, b]);
    }

    #[test]
    fn detour_after_removing_direct_edge() {
        let mut g = unit_square_graph();
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 0.0);
        g.remove_edge(&a, &b).unwrap();

        let path = shortest_path(&g, &a, &b).unwrap();
        assert_eq!(
            path,
            vec![
                a,
                Point2::new(0.0, 1.0),
                Point2::new(1.0, 1.0),
                b,
            ]
        );
    }

    #[test]
    fn unreachable_when_endpoint_absent() {
        let g = unit_square_graph();
        let inside = Point2::new(0.0, 0.0);
        let outside = Point2::new(5.0, 5.0);
        assert!(matches!(
            shortest_path(&g, &inside, &outside),
            Err(AlphaShapeError::Path(PathError::UnreachableNode { .. }))
        ));
        assert!(matches!(
            shortest_path(&g, &outside, &inside),
            Err(AlphaShapeError::Path(PathError::UnreachableNode { .. }))
        ));
    }

    #[test]
    fn no_path_between_disconnected_components() {
        let mut g = unit_square_graph();
        let c = Point2::new(10.0, 10.0);
        let d = Point2::new(11.0, 10.0);
        g.add_edge(c, d, 1.0).unwrap();

        let a = Point2::new(0.0, 0.0);
        assert!(matches!(
            shortest_path(&g, &a, &c),
            Err(AlphaShapeError::Path(PathError::NoPath { .. }))
        ));
    }

    #[test]
    fn prefers_lighter_multi_hop_route() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 0.0);
        let c = Point2::new(2.0, 0.0);
        let mut g = Graph::new();
        g.add_edge(a, c, 10.0).unwrap();
        g.add_edge(a, b, 1.0).unwrap();
        g.add_edge(b, c, 1.0).unwrap();

        assert_eq!(shortest_path(&g, &a, &c).unwrap(), vec![a, b, c]);
    }
}
