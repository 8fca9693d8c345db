//! # 2D Polygons
//!
//! The coarse flat shapes that feed the tessellator directly: a triangle, a
//! square pre-split into two triangles, and a hexagon pre-split into six
//! triangles fanning from its center. All fit the unit-ish square around
//! the origin, like the 3D primitives.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::error::MeshError;
use tessellate::tessellate;

/// Height of the hexagon's upper/lower vertex rows (`sqrt(3) / 4` for a
/// hexagon of width 1).
const HEX_ROW: f64 = 0.4330127;

/// The closed set of coarse 2D polygons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Polygon {
    /// A single triangle (3 points).
    Triangle,
    /// A square split into two triangles (6 points).
    Square,
    /// A hexagon split into a 6-triangle fan around the center (18 points).
    Hexagon,
}

impl Polygon {
    /// The coarse triangle list for this polygon.
    pub fn points(self) -> Vec<DVec2> {
        match self {
            Polygon::Triangle => vec![
                DVec2::new(-0.5, -0.5),
                DVec2::new(0.0, 0.5),
                DVec2::new(0.5, -0.5),
            ],
            Polygon::Square => vec![
                DVec2::new(-0.5, -0.5),
                DVec2::new(-0.5, 0.5),
                DVec2::new(0.5, -0.5),
                //
                DVec2::new(0.5, -0.5),
                DVec2::new(-0.5, 0.5),
                DVec2::new(0.5, 0.5),
            ],
            Polygon::Hexagon => vec![
                DVec2::new(0.0, 0.0),
                DVec2::new(-0.5, 0.0),
                DVec2::new(-0.25, HEX_ROW),
                //
                DVec2::new(0.0, 0.0),
                DVec2::new(-0.25, HEX_ROW),
                DVec2::new(0.25, HEX_ROW),
                //
                DVec2::new(0.0, 0.0),
                DVec2::new(0.25, HEX_ROW),
                DVec2::new(0.5, 0.0),
                //
                DVec2::new(0.0, 0.0),
                DVec2::new(-0.25, -HEX_ROW),
                DVec2::new(-0.5, 0.0),
                //
                DVec2::new(0.0, 0.0),
                DVec2::new(0.25, -HEX_ROW),
                DVec2::new(-0.25, -HEX_ROW),
                //
                DVec2::new(0.0, 0.0),
                DVec2::new(0.5, 0.0),
                DVec2::new(0.25, -HEX_ROW),
            ],
        }
    }

    /// The polygon refined by `iterations` rounds of midpoint subdivision.
    pub fn tessellated(self, iterations: u32) -> Result<Vec<DVec2>, MeshError> {
        Ok(tessellate(&self.points(), iterations)?)
    }
}

/// The circumcentre of a triangle: the point equidistant from all three
/// vertices. Used as the twist origin when the triangle is not centered on
/// the origin.
pub fn circumcentre(triangle: &[DVec2; 3]) -> DVec2 {
    let [a, b, c] = triangle;

    let d = 2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));
    let a2 = a.length_squared();
    let b2 = b.length_squared();
    let c2 = c.length_squared();

    DVec2::new(
        (a2 * (b.y - c.y) + b2 * (c.y - a.y) + c2 * (a.y - b.y)) / d,
        (a2 * (c.x - b.x) + b2 * (a.x - c.x) + c2 * (b.x - a.x)) / d,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use config::constants::EPSILON;

    #[test]
    fn test_point_counts() {
        assert_eq!(Polygon::Triangle.points().len(), 3);
        assert_eq!(Polygon::Square.points().len(), 6);
        assert_eq!(Polygon::Hexagon.points().len(), 18);
    }

    #[test]
    fn test_all_lists_are_triangle_lists() {
        for polygon in [Polygon::Triangle, Polygon::Square, Polygon::Hexagon] {
            assert_eq!(polygon.points().len() % 3, 0);
        }
    }

    #[test]
    fn test_tessellated_growth() {
        let refined = Polygon::Hexagon.tessellated(2).unwrap();
        assert_eq!(refined.len(), 18 * 16);
    }

    #[test]
    fn test_hexagon_fans_from_center() {
        let points = Polygon::Hexagon.points();
        for triangle in points.chunks_exact(3) {
            assert_eq!(triangle[0], DVec2::ZERO);
        }
    }

    #[test]
    fn test_circumcentre_of_default_triangle() {
        let triangle: [DVec2; 3] = Polygon::Triangle.points().try_into().unwrap();
        let centre = circumcentre(&triangle);

        assert_relative_eq!(centre.x, 0.0, epsilon = EPSILON);
        assert_relative_eq!(centre.y, -0.125, epsilon = EPSILON);

        // Equidistant from every vertex.
        let r = centre.distance(triangle[0]);
        for vertex in triangle {
            assert_relative_eq!(centre.distance(vertex), r, max_relative = EPSILON);
        }
    }
}
