//! # Icosahedron
//!
//! The 20-triangle polyhedron used both as a standalone shape and as the
//! base mesh for the subdivided sphere.

use std::f64::consts::TAU;

use config::constants::SHAPE_RADIUS;
use glam::DVec4;

use crate::mesh::{DrawRange, GeometryBuffer, Mesh, Topology};
use crate::primitives::Shape;

/// The 60-point triangle list of a regular icosahedron, radius 0.5.
///
/// Built from two rings of five vertices at latitude `±atan(1/2)` plus
/// explicit south/north poles shared by the five triangles of each cap.
/// Per step around the vertical axis, four triangles are emitted: lower
/// cap, two belt triangles, upper cap. No normals; when the sphere uses
/// this as its base, the radial direction serves as the normal downstream.
pub(crate) fn vertices() -> Vec<DVec4> {
    let r = SHAPE_RADIUS;
    let south = DVec4::new(0.0, -r, 0.0, 1.0);
    let north = DVec4::new(0.0, r, 0.0, 1.0);

    // Latitude of the vertex rings.
    let y = r * 0.5f64.atan().sin();
    let step = TAU / 5.0;
    let ring = |j: f64, y: f64| DVec4::new(r * (step * j).cos(), y, r * (step * j).sin(), 1.0);

    let mut points = Vec::with_capacity(60);
    for j in 0..5 {
        let j = f64::from(j);
        points.extend_from_slice(&[
            ring(j, -y),
            south,
            ring(j + 1.0, -y),
            //
            ring(j + 0.5, y),
            ring(j, -y),
            ring(j + 1.0, -y),
            //
            ring(j + 1.5, y),
            ring(j + 0.5, y),
            ring(j + 1.0, -y),
            //
            ring(j + 1.5, y),
            north,
            ring(j + 0.5, y),
        ]);
    }
    points
}

/// Generates the icosahedron into `buffer`.
///
/// The wireframe overlay reuses the fill range as a line strip.
pub fn generate(buffer: &mut GeometryBuffer) -> Mesh {
    let offset = buffer.point_count();
    for point in vertices() {
        buffer.push_point(point);
    }
    let count = buffer.point_count() - offset;

    Mesh {
        shape: Shape::Icosahedron,
        fill: DrawRange::new(Topology::Triangles, offset, count),
        wireframe: Some(DrawRange::new(Topology::LineStrip, offset, count)),
        has_normals: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use config::constants::EPSILON;

    #[test]
    fn test_sixty_points_twenty_triangles() {
        let points = vertices();
        assert_eq!(points.len(), 60);
        assert_eq!(points.len() % 3, 0);
    }

    #[test]
    fn test_every_vertex_on_the_sphere() {
        for point in vertices() {
            let length = point.truncate().length();
            assert_relative_eq!(length, SHAPE_RADIUS, max_relative = EPSILON);
            assert_eq!(point.w, 1.0);
        }
    }

    #[test]
    fn test_poles_are_shared() {
        let points = vertices();
        let south = DVec4::new(0.0, -SHAPE_RADIUS, 0.0, 1.0);
        let north = DVec4::new(0.0, SHAPE_RADIUS, 0.0, 1.0);
        assert_eq!(points.iter().filter(|p| **p == south).count(), 5);
        assert_eq!(points.iter().filter(|p| **p == north).count(), 5);
    }

    #[test]
    fn test_generate_ranges() {
        let mut buffer = GeometryBuffer::new();
        let mesh = generate(&mut buffer);

        assert_eq!(mesh.fill.topology, Topology::Triangles);
        assert_eq!(mesh.fill.count, 60);
        assert_eq!(mesh.wireframe, Some(DrawRange::new(Topology::LineStrip, 0, 60)));
        assert!(!mesh.has_normals);
        assert_eq!(buffer.normal_count(), 0);
    }
}
