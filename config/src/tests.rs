//! # Tests for Config Constants
//!
//! Unit tests verifying the relationships between configuration constants.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_epsilon_is_small() {
    assert!(EPSILON < 1e-6, "EPSILON should be small for precision");
}

// =============================================================================
// GEOMETRY TESTS
// =============================================================================

#[test]
fn test_shape_radius_is_half() {
    assert_eq!(SHAPE_RADIUS, 0.5);
}

// =============================================================================
// RESOLUTION TESTS
// =============================================================================

#[test]
fn test_lattice_resolution() {
    assert!(SECTORS >= 3, "SECTORS must form a closed ring");
    assert!(LAYERS >= 1, "LAYERS must produce at least one band");
}

#[test]
fn test_hat_grid_is_square() {
    assert_eq!(HAT_ROWS, HAT_COLUMNS);
    assert!(HAT_ROWS >= 2, "grid needs at least one cell");
}

#[test]
fn test_default_subdivisions_are_bounded() {
    // 4^n growth; anything past a handful of iterations is unusable for
    // interactive buffers.
    assert!(DEFAULT_SPHERE_SUBDIVISIONS <= 6);
}
