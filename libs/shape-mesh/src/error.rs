//! # Mesh Errors
//!
//! Error types for shape mesh generation.

use tessellate::TessellateError;
use thiserror::Error;

/// Errors that can occur during mesh generation.
///
/// The shape generators themselves are total functions over fixed geometry;
/// the only failure path is the tessellation a shape performs internally,
/// which propagates unchanged.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MeshError {
    /// Subdivision rejected its input triangle list.
    #[error("tessellation failed: {0}")]
    Tessellation(#[from] TessellateError),
}
