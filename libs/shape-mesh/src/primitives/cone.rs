//! # Cone
//!
//! The cylinder's lattice with a radius that grows linearly from 0 at the
//! apex layer to `SHAPE_RADIUS` at the top. On the apex layer the first
//! triangle of each cell collapses to a point, so only the second one is
//! emitted.

use std::f64::consts::TAU;

use config::constants::{LAYERS, SECTORS, SHAPE_RADIUS};
use glam::DVec4;

use crate::mesh::{DrawRange, GeometryBuffer, Mesh, Topology};
use crate::primitives::Shape;

fn emit(buffer: &mut GeometryBuffer, y: f64, r: f64, theta: f64) {
    let v = DVec4::new(r * theta.cos(), y, r * theta.sin(), 1.0);
    // Outward conic-surface normal: angular tangent direction plus a fixed
    // downward slope term. Deliberately not normalized; the lighting path
    // normalizes per fragment.
    buffer.push(v, DVec4::new(theta.cos(), -1.0, theta.sin(), 0.0));
}

/// Generates the cone into `buffer`.
///
/// Same wireframe convention as the cylinder: the top edge is retraced as a
/// line strip extending the fill range.
pub fn generate(buffer: &mut GeometryBuffer) -> Mesh {
    let offset = buffer.point_count();
    let sector_angle = TAU / SECTORS as f64;
    let layer_height = 1.0 / LAYERS as f64;
    let layer_radius = SHAPE_RADIUS / LAYERS as f64;

    let mut fill_count = 0;
    let mut wire_count = 0;

    for l in 0..LAYERS {
        let y0 = -0.5 + layer_height * l as f64;
        let r0 = layer_radius * l as f64;
        let y1 = -0.5 + layer_height * (l as f64 + 1.0);
        let r1 = layer_radius * (l as f64 + 1.0);
        let theta0 = if l % 2 == 0 { 0.0 } else { sector_angle / 2.0 };

        for s in 0..SECTORS {
            let s = s as f64;
            // The apex layer's first triangle is degenerate (r0 == 0).
            if l > 0 {
                emit(buffer, y0, r0, theta0 + s * sector_angle);
                emit(buffer, y0, r0, theta0 + (s + 1.0) * sector_angle);
                emit(buffer, y1, r1, theta0 + (s + 0.5) * sector_angle);
            }

            emit(buffer, y1, r1, theta0 + (s + 0.5) * sector_angle);
            emit(buffer, y0, r0, theta0 + (s + 1.0) * sector_angle);
            emit(buffer, y1, r1, theta0 + (s + 1.5) * sector_angle);
        }

        if l == LAYERS - 1 {
            fill_count = buffer.point_count() - offset;

            for s in 0..SECTORS {
                let s = s as f64;
                emit(buffer, y1, r1, theta0 + (s + 0.5) * sector_angle);
                emit(buffer, y1, r1, theta0 + (s + 1.5) * sector_angle);
            }
            wire_count = buffer.point_count() - offset;
        }
    }

    Mesh {
        shape: Shape::Cone,
        fill: DrawRange::new(Topology::Triangles, offset, fill_count),
        wireframe: Some(DrawRange::new(Topology::LineStrip, offset, wire_count)),
        has_normals: true,
    }
}
