//! # Configuration Constants
//!
//! Centralized constants for shape mesh generation. All tessellation
//! parameters, lattice resolutions, and precision values are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Geometry**: Canonical shape dimensions
//! - **Resolution**: Lattice and grid sampling densities

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance, e.g. when checking that every subdivided sphere
/// vertex sits on the sphere surface.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(0.5, 0.5 + 1e-12));
/// ```
pub const EPSILON: f64 = 1e-9;

// =============================================================================
// GEOMETRY CONSTANTS
// =============================================================================

/// Canonical radius for the generated primitives.
///
/// The icosahedron, sphere, cylinder, and cone are all generated at this
/// radius, centered on the origin, so every shape fits the same unit-ish
/// bounding volume before per-instance scaling is applied downstream.
pub const SHAPE_RADIUS: f64 = 0.5;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Angular divisions around the vertical axis for cylinder/cone lattices.
pub const SECTORS: usize = 20;

/// Vertical bands for cylinder/cone lattices.
///
/// Odd layers are offset by half a sector angle, producing a brick pattern
/// that avoids a continuous vertical seam.
pub const LAYERS: usize = 8;

/// Default subdivision iterations for the icosahedron-based sphere.
///
/// Each iteration quadruples the triangle count, so the default of 3 turns
/// the 20-triangle icosahedron into a 1280-triangle sphere approximation.
pub const DEFAULT_SPHERE_SUBDIVISIONS: u32 = 3;

/// Sample rows for the radial-hat parametric surface.
pub const HAT_ROWS: usize = 35;

/// Sample columns for the radial-hat parametric surface.
pub const HAT_COLUMNS: usize = 35;
