//! # Tessellation Errors
//!
//! Error types for triangle-list subdivision.

use thiserror::Error;

/// Errors that can occur during tessellation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TessellateError {
    /// The input point sequence does not form whole triangles.
    ///
    /// Raised before any subdivision work happens; the computation never
    /// proceeds on malformed input, regardless of the iteration count.
    #[error("invalid triangle list: length {len} is not divisible by 3")]
    InvalidTriangleList { len: usize },
}
