//! # Shape Mesh
//!
//! Procedural mesh generation for a closed set of primitive shapes. Each
//! generator is a pure function that appends positions (and, where the shape
//! defines them, normals) into a caller-owned [`GeometryBuffer`] and returns
//! a [`Mesh`] record naming the sub-ranges it produced, ready for draw-call
//! slicing by a rendering layer.
//!
//! ## Architecture
//!
//! ```text
//! Polygon / Shape → (tessellate) → GeometryBuffer → Mesh (draw ranges)
//! ```
//!
//! All geometry is computed in f64; `GeometryBuffer` exposes flattened f32
//! exports for GPU upload. The buffer is append-only: adding a shape never
//! disturbs the ranges of shapes added before it.

pub mod error;
pub mod mesh;
pub mod polygon;
pub mod primitives;

pub use error::MeshError;
pub use mesh::{DrawRange, GeometryBuffer, Mesh, Topology};
pub use polygon::{circumcentre, Polygon};
pub use primitives::{generate, Shape};
