use crate::geometry::distance::DistanceFn;
use crate::geometry::Point2;

/// Edge-length acceptance interval derived from a Tukey fence over the pooled
/// side lengths of a triangulation.
///
/// A triangle passes only if all three of its sides fall strictly inside
/// `(min, max)`. When the pooled sample has no spread the interval collapses
/// to a point and every triangle is rejected; the strict comparison handles
/// that degenerate case without special-casing.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LengthFence {
    pub min: f64,
    pub max: f64,
}

impl LengthFence {
    /// Builds the fence `[q25 - alpha*iqr, q75 + alpha*iqr]` from all side
    /// lengths of the given triangles. Returns `None` for an empty
    /// triangle list.
    pub(crate) fn from_triangles(
        triangles: &[[usize; 3]],
        points: &[Point2],
        distance: DistanceFn,
        alpha: f64,
    ) -> Option<Self> {
        if triangles.is_empty() {
            return None;
        }
        let mut lengths = Vec::with_capacity(triangles.len() * 3);
        for tri in triangles {
            lengths.extend(side_lengths(tri, points, distance));
        }
        lengths.sort_by(f64::total_cmp);

        let q25 = quantile(&lengths, 0.25);
        let q75 = quantile(&lengths, 0.75);
        let iqr = q75 - q25;
        Some(Self {
            min: q25 - alpha * iqr,
            max: q75 + alpha * iqr,
        })
    }

    /// Returns `true` if every side length lies strictly inside the fence.
    pub(crate) fn accepts(&self, sides: &[f64; 3]) -> bool {
        sides.iter().all(|&s| self.min < s && s < self.max)
    }
}

/// Retains the triangles whose three side lengths all fall strictly inside
/// the Tukey fence computed from the whole triangulation.
pub(crate) fn filter_triangles(
    triangles: &[[usize; 3]],
    points: &[Point2],
    distance: DistanceFn,
    alpha: f64,
) -> Vec<[usize; 3]> {
    let Some(fence) = LengthFence::from_triangles(triangles, points, distance, alpha) else {
        return Vec::new();
    };
    triangles
        .iter()
        .filter(|tri| fence.accepts(&side_lengths(tri, points, distance)))
        .copied()
        .collect()
}

/// Side lengths of an index triangle.
fn side_lengths(tri: &[usize; 3], points: &[Point2], distance: DistanceFn) -> [f64; 3] {
    let (a, b, c) = (&points[tri[0]], &points[tri[1]], &points[tri[2]]);
    [distance(a, b), distance(b, c), distance(c, a)]
}

/// Quantile of a sorted non-empty sample, with linear interpolation between
/// adjacent order statistics.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}
