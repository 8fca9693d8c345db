//! # Midpoint Subdivision
//!
//! Splits every triangle of a list into four smaller ones via edge midpoints.
//! One pass multiplies the triangle count by 4; `iterations` passes multiply
//! it by `4^iterations`.
//!
//! The emission order is a fixed contract: output triangles appear in
//! depth-first per-parent order, and within one parent `(A, B, C)` the four
//! children are emitted corner-A, corner-C, corner-B, then the central
//! triangle `(AC, AB, BC)` - which is wound opposite to its parent. Callers
//! that slice the output (wireframe pairing, draw ranges) rely on exactly
//! this order.

use rayon::prelude::*;

use crate::error::TessellateError;
use crate::midpoint::Midpoint;

/// Subdivides a triangle list `iterations` times.
///
/// With `iterations == 0` the input is returned unchanged (same points, same
/// order). Each iteration rewalks the whole list, so the total work is
/// proportional to the final size; for the iteration counts used by the
/// shape generators (<= 4) this is cheap.
///
/// # Errors
///
/// Returns [`TessellateError::InvalidTriangleList`] when the input length is
/// not divisible by 3, for every value of `iterations`.
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use tessellate::tessellate;
///
/// let tri = [DVec2::ZERO, DVec2::X, DVec2::Y];
/// assert_eq!(tessellate(&tri, 3).unwrap().len(), 3 * 64);
/// ```
pub fn tessellate<P: Midpoint>(
    triangles: &[P],
    iterations: u32,
) -> Result<Vec<P>, TessellateError> {
    validate(triangles)?;

    let mut points = triangles.to_vec();
    for _ in 0..iterations {
        let mut output = Vec::with_capacity(points.len() * 4);
        for tri in points.chunks_exact(3) {
            output.extend_from_slice(&subdivide_triangle(tri[0], tri[1], tri[2]));
        }
        points = output;
    }

    Ok(points)
}

/// Order-preserving parallel variant of [`tessellate`].
///
/// Each input triangle subdivides independently, so the per-iteration pass
/// parallelizes across triangles while `collect` keeps the emission order
/// identical to the serial path. Output is bit-identical to [`tessellate`].
pub fn tessellate_par<P>(triangles: &[P], iterations: u32) -> Result<Vec<P>, TessellateError>
where
    P: Midpoint + Send + Sync,
{
    validate(triangles)?;

    let mut points = triangles.to_vec();
    for _ in 0..iterations {
        points = points
            .par_chunks_exact(3)
            .flat_map_iter(|tri| subdivide_triangle(tri[0], tri[1], tri[2]))
            .collect();
    }

    Ok(points)
}

fn validate<P>(triangles: &[P]) -> Result<(), TessellateError> {
    if triangles.len() % 3 != 0 {
        return Err(TessellateError::InvalidTriangleList {
            len: triangles.len(),
        });
    }
    Ok(())
}

/// Emits the four children of one triangle, winding preserved.
///
/// The central triangle `(AC, AB, BC)` is reversed relative to its parent by
/// construction; the corner triangles keep the parent's orientation.
fn subdivide_triangle<P: Midpoint>(a: P, b: P, c: P) -> [P; 12] {
    let ab = a.midpoint(b);
    let ac = a.midpoint(c);
    let bc = b.midpoint(c);

    [
        a, ab, ac, // corner A
        c, ac, bc, // corner C
        b, bc, ab, // corner B
        ac, ab, bc, // central, reversed
    ]
}
