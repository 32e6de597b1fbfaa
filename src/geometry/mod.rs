pub mod distance;
pub mod polygon;
pub mod triangulate;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Hashable identity key for a point, based on the exact bit patterns of its
/// coordinates. Used wherever points serve as map keys, avoiding `f64`
/// hashing/equality pitfalls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct PointKey(u64, u64);

impl PointKey {
    pub(crate) fn new(p: &Point2) -> Self {
        // adding +0.0 collapses -0.0 onto 0.0 so both key the same node
        Self((p.x + 0.0).to_bits(), (p.y + 0.0).to_bits())
    }
}

/// Total lexicographic order on points: by x, then by y.
pub(crate) fn cmp_points(a: &Point2, b: &Point2) -> std::cmp::Ordering {
    a.x.total_cmp(&b.x).then_with(|| a.y.total_cmp(&b.y))
}
