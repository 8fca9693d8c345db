//! # Sphere
//!
//! Geodesic sphere approximation: the icosahedron refined by midpoint
//! subdivision. Midpoints of chords fall inside the surface, so each
//! subdivided vertex is pushed back out radially; the pre-projection
//! shrinkage factor is kept in the spare homogeneous slot for the shader.

use config::constants::SHAPE_RADIUS;
use tessellate::tessellate;

use crate::error::MeshError;
use crate::mesh::{DrawRange, GeometryBuffer, Mesh, Topology};
use crate::primitives::{icosahedron, Shape};

/// Generates the subdivided-icosahedron sphere into `buffer`.
///
/// Per vertex, the radial length `l` of the subdivided point is computed,
/// the point is projected onto the sphere surface, and `l / r` is packed
/// into the otherwise-unused homogeneous component, where the shader reads
/// it back as an attenuation/displacement factor. The normal is the
/// homogeneous position itself - for a sphere centered at the origin the
/// center-to-vertex vector is the outward normal (left un-normalized).
///
/// The wireframe range is an independent-LINES list tracing each triangle
/// edge once per originating vertex: fill vertex `k` pairs with `k + 1`
/// within its triangle, wrapping to `k - 2` on the last corner, for 6 line
/// vertices per triangle.
pub fn generate(buffer: &mut GeometryBuffer, subdivisions: u32) -> Result<Mesh, MeshError> {
    let r = SHAPE_RADIUS;
    let mut data = tessellate(&icosahedron::vertices(), subdivisions)?;

    let offset = buffer.point_count();
    for point in &mut data {
        let l = (point.x * point.x + point.y * point.y + point.z * point.z).sqrt();
        let scale = r / l;
        point.x *= scale;
        point.y *= scale;
        point.z *= scale;
        point.w = l / r;
        buffer.push(*point, *point);
    }
    let count = buffer.point_count() - offset;

    let line_offset = buffer.point_count();
    for k in 0..count {
        let partner = if k % 3 < 2 { k + 1 } else { k - 2 };
        let start = data[k];
        let end = data[partner];
        buffer.push(start, start);
        buffer.push(end, end);
    }
    let line_count = buffer.point_count() - line_offset;

    Ok(Mesh {
        shape: Shape::Sphere { subdivisions },
        fill: DrawRange::new(Topology::Triangles, offset, count),
        wireframe: Some(DrawRange::new(Topology::Lines, line_offset, line_count)),
        has_normals: true,
    })
}
