//! # Mesh Data Model
//!
//! The shared output buffer the generators append into, and the draw-range
//! metadata they hand back.
//!
//! All geometry calculations use f64 internally. Export to f32 only happens
//! at the GPU boundary.

use glam::DVec4;
use serde::{Deserialize, Serialize};

use crate::primitives::Shape;

/// Primitive topology for one draw call, mirroring the GL draw modes the
/// rendering layer issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Topology {
    /// Independent triangles, 3 vertices each.
    Triangles,
    /// Independent line segments, 2 vertices each.
    Lines,
    /// A connected strip of line segments.
    LineStrip,
    /// A fan of triangles around the first vertex of the range.
    TriangleFan,
    /// A closed loop of line segments.
    LineLoop,
}

/// A named contiguous sub-range of the shared buffer for a single draw call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawRange {
    /// How the vertices in the range are assembled.
    pub topology: Topology,
    /// Index of the first vertex in the shared buffer.
    pub offset: usize,
    /// Number of vertices in the range.
    pub count: usize,
}

impl DrawRange {
    /// Creates a draw range.
    pub fn new(topology: Topology, offset: usize, count: usize) -> Self {
        Self {
            topology,
            offset,
            count,
        }
    }

    /// One past the last vertex index of the range.
    #[inline]
    pub fn end(&self) -> usize {
        self.offset + self.count
    }
}

/// The public result of one generator invocation: which shape was produced,
/// where its vertices landed, and how to draw them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mesh {
    /// The shape this record describes.
    pub shape: Shape,
    /// Filled-surface draw range.
    pub fill: DrawRange,
    /// Wireframe-overlay draw range, if the shape defines one.
    pub wireframe: Option<DrawRange>,
    /// Whether the generator wrote a normal for every point in its ranges.
    pub has_normals: bool,
}

impl Mesh {
    /// Individual 4-vertex draw slices for per-quad topologies.
    ///
    /// The radial hat emits one independent quad per grid cell; its fill and
    /// wireframe ranges are drawn as consecutive 4-vertex fans/loops rather
    /// than one call. Returns an empty list for every other topology.
    pub fn quad_slices(&self) -> Vec<DrawRange> {
        match self.fill.topology {
            Topology::TriangleFan => (self.fill.offset..self.fill.end())
                .step_by(4)
                .map(|offset| DrawRange::new(Topology::TriangleFan, offset, 4))
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// Append-only vertex/normal storage shared by every shape added to a scene.
///
/// Callers own the buffer and pass it to [`crate::generate`]; generators
/// only ever append, so the draw ranges of previously added shapes stay
/// valid for the lifetime of the buffer. Deletion is not supported.
///
/// Shapes that produce normals keep `normals` parallel to `points` over
/// their own range. Shapes that produce none (icosahedron, radial hat) leave
/// the normal list untouched, so a buffer destined for lit rendering should
/// only receive normal-producing shapes.
#[derive(Debug, Clone, Default)]
pub struct GeometryBuffer {
    points: Vec<DVec4>,
    normals: Vec<DVec4>,
}

impl GeometryBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a buffer with pre-allocated point capacity.
    pub fn with_capacity(points: usize) -> Self {
        Self {
            points: Vec::with_capacity(points),
            normals: Vec::with_capacity(points),
        }
    }

    /// Returns the number of points.
    #[inline]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Returns the number of normals.
    #[inline]
    pub fn normal_count(&self) -> usize {
        self.normals.len()
    }

    /// Returns true if no shape has been generated into the buffer yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns a reference to the points.
    #[inline]
    pub fn points(&self) -> &[DVec4] {
        &self.points
    }

    /// Returns a reference to the normals.
    #[inline]
    pub fn normals(&self) -> &[DVec4] {
        &self.normals
    }

    /// Appends a point without a normal.
    pub(crate) fn push_point(&mut self, point: DVec4) {
        self.points.push(point);
    }

    /// Appends a point with its normal.
    pub(crate) fn push(&mut self, point: DVec4, normal: DVec4) {
        self.points.push(point);
        self.normals.push(normal);
    }

    /// Exports points as a flattened `[x, y, z, w, ...]` f32 array for GPU
    /// upload.
    pub fn points_f32(&self) -> Vec<f32> {
        flatten_f32(&self.points)
    }

    /// Exports normals as a flattened `[x, y, z, w, ...]` f32 array for GPU
    /// upload.
    pub fn normals_f32(&self) -> Vec<f32> {
        flatten_f32(&self.normals)
    }
}

fn flatten_f32(vectors: &[DVec4]) -> Vec<f32> {
    let mut result = Vec::with_capacity(vectors.len() * 4);
    for v in vectors {
        result.push(v.x as f32);
        result.push(v.y as f32);
        result.push(v.z as f32);
        result.push(v.w as f32);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_starts_empty() {
        let buffer = GeometryBuffer::new();
        assert!(buffer.is_empty());
        assert_eq!(buffer.point_count(), 0);
        assert_eq!(buffer.normal_count(), 0);
    }

    #[test]
    fn test_push_keeps_normals_parallel() {
        let mut buffer = GeometryBuffer::new();
        buffer.push(DVec4::new(1.0, 2.0, 3.0, 1.0), DVec4::X);
        buffer.push(DVec4::new(4.0, 5.0, 6.0, 1.0), DVec4::Y);
        assert_eq!(buffer.point_count(), buffer.normal_count());
    }

    #[test]
    fn test_points_f32_flattens_all_components() {
        let mut buffer = GeometryBuffer::new();
        buffer.push_point(DVec4::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(buffer.points_f32(), vec![1.0f32, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_draw_range_end() {
        let range = DrawRange::new(Topology::Triangles, 60, 900);
        assert_eq!(range.end(), 960);
    }
}
