//! # Config Crate
//!
//! Centralized configuration constants for the tessellation and mesh
//! generation pipeline. All magic numbers and tunable parameters are defined
//! here to ensure consistency across crates.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, SECTORS, LAYERS};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 1e-10;
//! assert!(value.abs() < EPSILON);
//!
//! // Use lattice resolution for cylinder/cone generation
//! let cell_count = SECTORS * LAYERS;
//! assert_eq!(cell_count, 160);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
