use thiserror::Error;

/// Top-level error type for the alphashape crate.
#[derive(Debug, Error)]
pub enum AlphaShapeError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Path(#[from] PathError),

    #[error(transparent)]
    Shape(#[from] ShapeError),
}

/// Errors raised by [`crate::graph::Graph`] mutations.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("edge (({ax}, {ay}), ({bx}, {by})) already exists")]
    DuplicateEdge { ax: f64, ay: f64, bx: f64, by: f64 },

    #[error("no edge (({ax}, {ay}), ({bx}, {by})) to remove")]
    MissingEdge { ax: f64, ay: f64, bx: f64, by: f64 },

    #[error("self-loop at ({x}, {y}) is not allowed")]
    SelfLoop { x: f64, y: f64 },
}

/// Errors raised by shortest-path queries.
#[derive(Debug, Error)]
pub enum PathError {
    #[error("Impossible to find path: ({x}, {y}) is not a node of the graph")]
    UnreachableNode { x: f64, y: f64 },

    #[error("There is no path between ({ax}, {ay}) and ({bx}, {by})")]
    NoPath { ax: f64, ay: f64, bx: f64, by: f64 },
}

/// Errors raised while computing an alpha shape.
#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("alpha = {alpha} is out of range; must be a finite value > 0")]
    InvalidAlpha { alpha: f64 },

    #[error("degenerate input: {0}")]
    DegenerateInput(String),

    #[error("triangulation failed: {0}")]
    Triangulation(String),

    #[error("inconsistent triangulation: {0}")]
    Inconsistent(String),
}

/// Convenience type alias for results using [`AlphaShapeError`].
pub type Result<T> = std::result::Result<T, AlphaShapeError>;
