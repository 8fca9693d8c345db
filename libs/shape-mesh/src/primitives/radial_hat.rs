//! # Radial Hat
//!
//! A sampled `sin(r)/r` surface over a square domain spanning `[-2pi, 2pi]`
//! on both axes. Every grid cell becomes one independent 4-point quad - no
//! shared-vertex welding - so each cell can be drawn as its own triangle
//! fan with a closed line loop on top for the wireframe.

use std::f64::consts::PI;

use config::constants::{HAT_COLUMNS, HAT_ROWS};
use glam::DVec4;

use crate::mesh::{DrawRange, GeometryBuffer, Mesh, Topology};
use crate::primitives::Shape;

fn height(x: f64, y: f64) -> f64 {
    let r = (x * x + y * y).sqrt();
    if r != 0.0 {
        r.sin() / r
    } else {
        1.0
    }
}

/// Generates the radial hat into `buffer`.
///
/// Emits `(HAT_ROWS - 1) * (HAT_COLUMNS - 1)` quads of 4 vertices each over
/// the unit square `[-1, 1]^2` in XZ, heights sampled from the scaled
/// domain. The fill and wireframe ranges cover all quads; they are drawn in
/// consecutive 4-vertex slices (see [`Mesh::quad_slices`]).
pub fn generate(buffer: &mut GeometryBuffer) -> Mesh {
    let offset = buffer.point_count();
    let rows = HAT_ROWS;
    let columns = HAT_COLUMNS;

    let mut heights = vec![vec![0.0f64; columns]; rows];
    for (i, row) in heights.iter_mut().enumerate() {
        let x = PI * (4.0 * i as f64 / rows as f64 - 2.0);
        for (j, sample) in row.iter_mut().enumerate() {
            let y = PI * (4.0 * j as f64 / columns as f64 - 2.0);
            *sample = height(x, y);
        }
    }

    for i in 0..rows - 1 {
        let x0 = 2.0 * i as f64 / rows as f64 - 1.0;
        let x1 = 2.0 * (i + 1) as f64 / rows as f64 - 1.0;
        for j in 0..columns - 1 {
            let z0 = 2.0 * j as f64 / columns as f64 - 1.0;
            let z1 = 2.0 * (j + 1) as f64 / columns as f64 - 1.0;

            buffer.push_point(DVec4::new(x0, heights[i][j], z0, 1.0));
            buffer.push_point(DVec4::new(x1, heights[i + 1][j], z0, 1.0));
            buffer.push_point(DVec4::new(x1, heights[i + 1][j + 1], z1, 1.0));
            buffer.push_point(DVec4::new(x0, heights[i][j + 1], z1, 1.0));
        }
    }
    let count = buffer.point_count() - offset;

    Mesh {
        shape: Shape::RadialHat,
        fill: DrawRange::new(Topology::TriangleFan, offset, count),
        wireframe: Some(DrawRange::new(Topology::LineLoop, offset, count)),
        has_normals: false,
    }
}
