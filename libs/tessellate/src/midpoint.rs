//! # Midpoint Interpolation
//!
//! The point abstraction the subdivider works over. Any coordinate type that
//! can produce the componentwise mean of two values can be tessellated.

use glam::{DVec2, DVec3, DVec4};

/// Componentwise affine interpolation at factor 0.5.
///
/// A homogeneous/weight component, when present, interpolates exactly like
/// the spatial components - it is not treated specially.
pub trait Midpoint: Copy {
    /// Returns the arithmetic mean of `self` and `other`, per component.
    fn midpoint(self, other: Self) -> Self;
}

impl Midpoint for DVec2 {
    fn midpoint(self, other: Self) -> Self {
        self.lerp(other, 0.5)
    }
}

impl Midpoint for DVec3 {
    fn midpoint(self, other: Self) -> Self {
        self.lerp(other, 0.5)
    }
}

impl Midpoint for DVec4 {
    fn midpoint(self, other: Self) -> Self {
        self.lerp(other, 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midpoint_vec2() {
        let m = DVec2::new(0.0, 1.0).midpoint(DVec2::new(1.0, 3.0));
        assert_eq!(m, DVec2::new(0.5, 2.0));
    }

    #[test]
    fn test_midpoint_vec4_includes_w() {
        let a = DVec4::new(0.0, 0.0, 0.0, 1.0);
        let b = DVec4::new(2.0, 4.0, 6.0, 3.0);
        assert_eq!(a.midpoint(b), DVec4::new(1.0, 2.0, 3.0, 2.0));
    }
}
