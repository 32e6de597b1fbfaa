pub mod path;

use std::collections::{HashMap, HashSet};

use slotmap::{new_key_type, SecondaryMap, SlotMap};

use crate::error::{GraphError, Result};
use crate::geometry::distance::DistanceFn;
use crate::geometry::{cmp_points, Point2, PointKey};

pub use path::shortest_path;

new_key_type! {
    /// Unique identifier for a node in a [`Graph`].
    pub struct NodeId;
}

/// A weighted undirected graph over 2-D points.
///
/// Points are interned into [`NodeId`]s on first use, so all adjacency and
/// weight bookkeeping is keyed by dense identifiers rather than raw floating
/// point coordinates. Adjacency is kept symmetric, and a weight entry exists
/// in both directions exactly when the edge exists. Self-loops and parallel
/// edges are rejected.
///
/// Not designed for concurrent mutation; callers requiring parallel use must
/// serialize access externally.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: SlotMap<NodeId, Point2>,
    index: HashMap<PointKey, NodeId>,
    adjacency: SecondaryMap<NodeId, HashSet<NodeId>>,
    weights: SecondaryMap<NodeId, HashMap<NodeId, f64>>,
    edge_count: usize,
}

impl Graph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from undirected edges, weighting each edge with the
    /// given distance function.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateEdge`] if the edge list repeats a pair
    /// (in either direction), and [`GraphError::SelfLoop`] if an edge joins a
    /// point to itself.
    pub fn from_edges(edges: &[(Point2, Point2)], distance: DistanceFn) -> Result<Self> {
        let mut graph = Self::new();
        for (a, b) in edges {
            graph.add_edge_with(*a, *b, distance)?;
        }
        Ok(graph)
    }

    /// Adds an undirected edge between `a` and `b` with the given weight,
    /// interning unseen endpoints as new nodes.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::SelfLoop`] if `a == b` and
    /// [`GraphError::DuplicateEdge`] if the edge already exists in either
    /// direction.
    pub fn add_edge(&mut self, a: Point2, b: Point2, weight: f64) -> Result<()> {
        if PointKey::new(&a) == PointKey::new(&b) {
            return Err(GraphError::SelfLoop { x: a.x, y: a.y }.into());
        }
        if let (Some(na), Some(nb)) = (self.lookup(&a), self.lookup(&b)) {
            // adjacency is symmetric, one membership test covers both directions
            if self.adjacent(na, nb) {
                return Err(GraphError::DuplicateEdge {
                    ax: a.x,
                    ay: a.y,
                    bx: b.x,
                    by: b.y,
                }
                .into());
            }
        }

        let na = self.intern(a);
        let nb = self.intern(b);
        self.adjacency[na].insert(nb);
        self.adjacency[nb].insert(na);
        self.weights[na].insert(nb, weight);
        self.weights[nb].insert(na, weight);
        self.edge_count += 1;
        Ok(())
    }

    /// Adds an undirected edge, computing its weight from a distance function.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Graph::add_edge`].
    pub fn add_edge_with(&mut self, a: Point2, b: Point2, distance: DistanceFn) -> Result<()> {
        let weight = distance(&a, &b);
        self.add_edge(a, b, weight)
    }

    /// Removes the undirected edge between `a` and `b`. The endpoints remain
    /// nodes of the graph even if left with no neighbors.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::MissingEdge`] if the edge does not exist.
    pub fn remove_edge(&mut self, a: &Point2, b: &Point2) -> Result<()> {
        let missing = || GraphError::MissingEdge {
            ax: a.x,
            ay: a.y,
            bx: b.x,
            by: b.y,
        };
        let na = self.lookup(a).ok_or_else(missing)?;
        let nb = self.lookup(b).ok_or_else(missing)?;
        if !self.adjacent(na, nb) {
            return Err(missing().into());
        }

        self.adjacency[na].remove(&nb);
        self.adjacency[nb].remove(&na);
        self.weights[na].remove(&nb);
        self.weights[nb].remove(&na);
        self.edge_count -= 1;
        Ok(())
    }

    /// Returns `true` if the point is a node of the graph.
    #[must_use]
    pub fn contains(&self, p: &Point2) -> bool {
        self.lookup(p).is_some()
    }

    /// Returns all nodes, in first-insertion order.
    #[must_use]
    pub fn nodes(&self) -> Vec<Point2> {
        self.nodes.values().copied().collect()
    }

    /// Returns the neighbors of a point, sorted lexicographically by
    /// coordinates, or `None` if the point is not a node.
    #[must_use]
    pub fn neighbors(&self, p: &Point2) -> Option<Vec<Point2>> {
        let id = self.lookup(p)?;
        let mut result: Vec<Point2> = self.adjacency[id]
            .iter()
            .map(|&n| self.nodes[n])
            .collect();
        result.sort_by(cmp_points);
        Some(result)
    }

    /// Returns the weight of the edge between `a` and `b`, if it exists.
    #[must_use]
    pub fn weight(&self, a: &Point2, b: &Point2) -> Option<f64> {
        let na = self.lookup(a)?;
        let nb = self.lookup(b)?;
        self.weights[na].get(&nb).copied()
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns `true` if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn lookup(&self, p: &Point2) -> Option<NodeId> {
        self.index.get(&PointKey::new(p)).copied()
    }

    pub(crate) fn point(&self, id: NodeId) -> Point2 {
        self.nodes[id]
    }

    /// Iterates over `(neighbor, weight)` pairs of a node.
    pub(crate) fn edges_of(&self, id: NodeId) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        self.weights[id].iter().map(|(&n, &w)| (n, w))
    }

    fn intern(&mut self, p: Point2) -> NodeId {
        let key = PointKey::new(&p);
        if let Some(&id) = self.index.get(&key) {
            return id;
        }
        let id = self.nodes.insert(p);
        self.index.insert(key, id);
        self.adjacency.insert(id, HashSet::new());
        self.weights.insert(id, HashMap::new());
        id
    }

    fn adjacent(&self, a: NodeId, b: NodeId) -> bool {
        self.adjacency[a].contains(&b)
    }
}
