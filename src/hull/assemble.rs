use std::collections::HashSet;

use crate::error::{Result, ShapeError};

/// Extracts the boundary edges of a set of triangles by symmetric
/// cancellation of directed sides.
///
/// Each triangle contributes its three sides as directed edges. A side whose
/// reverse is already present is interior (shared by two triangles) and
/// cancels; a side that survives belongs to exactly one triangle and lies on
/// the boundary. The result is sorted by canonical `(min, max)` index pair so
/// downstream ring extraction is deterministic.
///
/// # Errors
///
/// Returns [`ShapeError::Inconsistent`] if a side is observed twice in the
/// same direction, or reappears after cancelling — either way an undirected
/// edge was shared by more than two triangles, which indicates a non-manifold
/// or otherwise malformed triangulation.
pub(crate) fn boundary_edges(triangles: &[[usize; 3]]) -> Result<Vec<(usize, usize)>> {
    let mut edges: HashSet<(usize, usize)> = HashSet::new();
    let mut cancelled: HashSet<(usize, usize)> = HashSet::new();
    for tri in triangles {
        for (i, j) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
            insert_side(&mut edges, &mut cancelled, i, j)?;
        }
    }

    let mut result: Vec<(usize, usize)> = edges.into_iter().collect();
    result.sort_by_key(|&(i, j)| (i.min(j), i.max(j)));
    Ok(result)
}

fn insert_side(
    edges: &mut HashSet<(usize, usize)>,
    cancelled: &mut HashSet<(usize, usize)>,
    i: usize,
    j: usize,
) -> Result<()> {
    if cancelled.contains(&(i.min(j), i.max(j))) {
        return Err(ShapeError::Inconsistent(format!(
            "side ({i}, {j}) reappeared after cancelling; edge shared by more than two triangles"
        ))
        .into());
    }
    if edges.remove(&(j, i)) {
        // interior side, shared by two triangles
        cancelled.insert((i.min(j), i.max(j)));
        return Ok(());
    }
    if !edges.insert((i, j)) {
        return Err(ShapeError::Inconsistent(format!(
            "side ({i}, {j}) traversed twice in the same direction"
        ))
        .into());
    }
    Ok(())
}
