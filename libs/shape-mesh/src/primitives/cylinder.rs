//! # Cylinder
//!
//! Ring lattice of `LAYERS` vertical bands by `SECTORS` angular divisions.
//! Odd layers shift by half a sector so cell edges form a brick pattern
//! instead of a continuous vertical seam. Each cell splits into two
//! triangles fanned around the mid-angle point shared by both.

use std::f64::consts::TAU;

use config::constants::{LAYERS, SECTORS, SHAPE_RADIUS};
use glam::DVec4;

use crate::mesh::{DrawRange, GeometryBuffer, Mesh, Topology};
use crate::primitives::Shape;

fn emit(buffer: &mut GeometryBuffer, y: f64, theta: f64) {
    let v = DVec4::new(SHAPE_RADIUS * theta.cos(), y, SHAPE_RADIUS * theta.sin(), 1.0);
    // Curved-surface normal: radial in the XZ plane.
    buffer.push(v, DVec4::new(v.x, 0.0, v.z, 0.0));
}

/// Generates the cylinder into `buffer`.
///
/// After the last layer, `2 * SECTORS` extra vertices retrace the top edge;
/// the wireframe range shares the fill's offset and extends over them as a
/// line strip.
pub fn generate(buffer: &mut GeometryBuffer) -> Mesh {
    let offset = buffer.point_count();
    let sector_angle = TAU / SECTORS as f64;
    let layer_height = 1.0 / LAYERS as f64;

    let mut fill_count = 0;
    let mut wire_count = 0;

    for l in 0..LAYERS {
        let y0 = -0.5 + layer_height * l as f64;
        let y1 = -0.5 + layer_height * (l as f64 + 1.0);
        let theta0 = if l % 2 == 0 { 0.0 } else { sector_angle / 2.0 };

        for s in 0..SECTORS {
            let s = s as f64;
            emit(buffer, y0, theta0 + s * sector_angle);
            emit(buffer, y0, theta0 + (s + 1.0) * sector_angle);
            emit(buffer, y1, theta0 + (s + 0.5) * sector_angle);

            emit(buffer, y1, theta0 + (s + 0.5) * sector_angle);
            emit(buffer, y0, theta0 + (s + 1.0) * sector_angle);
            emit(buffer, y1, theta0 + (s + 1.5) * sector_angle);
        }

        if l == LAYERS - 1 {
            fill_count = buffer.point_count() - offset;

            // Top-edge line strip for the wireframe overlay.
            for s in 0..SECTORS {
                let s = s as f64;
                emit(buffer, y1, theta0 + (s + 0.5) * sector_angle);
                emit(buffer, y1, theta0 + (s + 1.5) * sector_angle);
            }
            wire_count = buffer.point_count() - offset;
        }
    }

    Mesh {
        shape: Shape::Cylinder,
        fill: DrawRange::new(Topology::Triangles, offset, fill_count),
        wireframe: Some(DrawRange::new(Topology::LineStrip, offset, wire_count)),
        has_normals: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use config::constants::EPSILON;

    #[test]
    fn test_fill_and_wireframe_counts() {
        let mut buffer = GeometryBuffer::new();
        let mesh = generate(&mut buffer);

        assert_eq!(mesh.fill.count, 6 * SECTORS * LAYERS);
        let wire = mesh.wireframe.unwrap();
        assert_eq!(wire.offset, mesh.fill.offset);
        assert_eq!(wire.count, mesh.fill.count + 2 * SECTORS);
        assert_eq!(buffer.normal_count(), buffer.point_count());
    }

    #[test]
    fn test_each_layer_emits_six_per_sector() {
        let mut buffer = GeometryBuffer::new();
        let mesh = generate(&mut buffer);
        let fill = &buffer.points()[mesh.fill.offset..mesh.fill.end()];

        // Emission is layer-major, so layer l occupies one 6 * SECTORS chunk
        // bounded by its bottom and top heights.
        let layer_height = 1.0 / LAYERS as f64;
        for (l, chunk) in fill.chunks_exact(6 * SECTORS).enumerate() {
            let y0 = -0.5 + layer_height * l as f64;
            let y1 = -0.5 + layer_height * (l as f64 + 1.0);
            assert!(chunk.iter().all(|p| p.y == y0 || p.y == y1));
            assert!(chunk.iter().any(|p| p.y == y0));
            assert!(chunk.iter().any(|p| p.y == y1));
        }
        assert_eq!(fill.len() / (6 * SECTORS), LAYERS);
    }

    #[test]
    fn test_points_lie_on_the_barrel() {
        let mut buffer = GeometryBuffer::new();
        generate(&mut buffer);

        for point in buffer.points() {
            let radius = (point.x * point.x + point.z * point.z).sqrt();
            assert_relative_eq!(radius, SHAPE_RADIUS, max_relative = EPSILON);
            assert!(point.y >= -0.5 && point.y <= 0.5);
        }
    }

    #[test]
    fn test_normals_are_radial() {
        let mut buffer = GeometryBuffer::new();
        generate(&mut buffer);

        for (point, normal) in buffer.points().iter().zip(buffer.normals()) {
            assert_eq!(normal.x, point.x);
            assert_eq!(normal.y, 0.0);
            assert_eq!(normal.z, point.z);
            assert_eq!(normal.w, 0.0);
        }
    }
}
