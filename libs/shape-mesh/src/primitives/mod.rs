//! # Shape Generators
//!
//! One generator per primitive shape. Each is a stateless function of its
//! own geometry: it appends points (and normals, where the shape defines
//! them) to the caller's buffer and reports the ranges it wrote. Generators
//! never read or mutate render state.

pub mod cone;
pub mod cylinder;
pub mod icosahedron;
pub mod radial_hat;
pub mod sphere;

use serde::{Deserialize, Serialize};

use crate::error::MeshError;
use crate::mesh::{GeometryBuffer, Mesh};
use config::constants::DEFAULT_SPHERE_SUBDIVISIONS;

/// The closed set of generatable shapes.
///
/// The shape set is fixed and known at design time, so dispatch is a single
/// match in [`generate`] rather than open-ended virtual dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shape {
    /// 20-triangle polyhedron at radius 0.5.
    Icosahedron,
    /// Icosahedron refined by midpoint subdivision onto the sphere surface.
    Sphere {
        /// Subdivision iterations; triangle count grows 4x per iteration.
        subdivisions: u32,
    },
    /// Brick-pattern lattice of 8 layers x 20 sectors.
    Cylinder,
    /// Same lattice with radius growing linearly from the apex.
    Cone,
    /// 35x35 sampled sin(r)/r surface, one independent quad per cell.
    RadialHat,
}

impl Shape {
    /// Sphere at the default subdivision depth.
    pub fn sphere() -> Self {
        Self::Sphere {
            subdivisions: DEFAULT_SPHERE_SUBDIVISIONS,
        }
    }
}

/// Generates `shape` into `buffer` and returns its draw metadata.
///
/// Appends only; ranges of previously generated shapes remain valid. The
/// sole failure path is the sphere's internal tessellation, whose error
/// propagates unchanged.
///
/// # Example
///
/// ```rust
/// use shape_mesh::{generate, GeometryBuffer, Shape};
///
/// let mut buffer = GeometryBuffer::new();
/// let mesh = generate(Shape::Icosahedron, &mut buffer).unwrap();
/// assert_eq!(mesh.fill.count, 60);
/// ```
pub fn generate(shape: Shape, buffer: &mut GeometryBuffer) -> Result<Mesh, MeshError> {
    match shape {
        Shape::Icosahedron => Ok(icosahedron::generate(buffer)),
        Shape::Sphere { subdivisions } => sphere::generate(buffer, subdivisions),
        Shape::Cylinder => Ok(cylinder::generate(buffer)),
        Shape::Cone => Ok(cone::generate(buffer)),
        Shape::RadialHat => Ok(radial_hat::generate(buffer)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_accumulates_across_shapes() {
        let mut buffer = GeometryBuffer::new();

        let first = generate(Shape::Icosahedron, &mut buffer).unwrap();
        let second = generate(Shape::sphere(), &mut buffer).unwrap();

        // Append-only: the second shape starts where the first ended.
        assert_eq!(first.fill.offset, 0);
        assert_eq!(second.fill.offset, first.fill.end());

        let total = second
            .wireframe
            .expect("sphere has a wireframe range")
            .end();
        assert_eq!(buffer.point_count(), total);
    }

    #[test]
    fn test_default_sphere_subdivisions() {
        assert_eq!(
            Shape::sphere(),
            Shape::Sphere {
                subdivisions: DEFAULT_SPHERE_SUBDIVISIONS
            }
        );
    }
}
