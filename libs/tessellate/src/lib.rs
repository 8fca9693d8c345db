//! # Tessellate
//!
//! Midpoint subdivision of flat triangle lists. A triangle list is a point
//! sequence whose length is a multiple of 3; each consecutive triple forms
//! one triangle, and the winding order of a triple determines its facing.
//!
//! Each subdivision iteration splits every triangle into 4 via its edge
//! midpoints, growing the list by exactly 4x. Points are never mutated in
//! place; new points are produced by interpolation only.
//!
//! ## Usage
//!
//! ```rust
//! use glam::DVec2;
//! use tessellate::tessellate;
//!
//! let triangle = [
//!     DVec2::new(-0.5, -0.5),
//!     DVec2::new(0.0, 0.5),
//!     DVec2::new(0.5, -0.5),
//! ];
//!
//! let refined = tessellate(&triangle, 2).unwrap();
//! assert_eq!(refined.len(), 3 * 16);
//! ```

pub mod error;
pub mod midpoint;
pub mod subdivide;

pub use error::TessellateError;
pub use midpoint::Midpoint;
pub use subdivide::{tessellate, tessellate_par};
