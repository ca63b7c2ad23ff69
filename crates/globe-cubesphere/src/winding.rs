//! Triangle orientation checks against the sphere center.
//!
//! The mesh convention is counter-clockwise when viewed from outside, i.e.
//! `(v1 - v0) × (v2 - v0)` points away from the origin.

use glam::DVec3;

/// Unnormalized face normal `(v1 - v0) × (v2 - v0)`.
#[inline]
pub fn triangle_normal(v0: DVec3, v1: DVec3, v2: DVec3) -> DVec3 {
    (v1 - v0).cross(v2 - v0)
}

/// Triangle area.
#[inline]
pub fn triangle_area(v0: DVec3, v1: DVec3, v2: DVec3) -> f64 {
    0.5 * triangle_normal(v0, v1, v2).length()
}

/// Whether the triangle's normal points away from the sphere center.
///
/// Uses the centroid as the outward radial direction, so the vertices must be
/// given relative to the sphere center.
pub fn triangle_winds_outward(v0: DVec3, v1: DVec3, v2: DVec3) -> bool {
    let centroid = (v0 + v1 + v2) / 3.0;
    triangle_normal(v0, v1, v2).dot(centroid) > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ccw_from_outside_winds_outward() {
        // Seen from +Z looking down at the z = 1 plane, this is counter-clockwise.
        let v0 = DVec3::new(0.0, 0.0, 1.0);
        let v1 = DVec3::new(0.1, 0.0, 1.0);
        let v2 = DVec3::new(0.0, 0.1, 1.0);
        assert!(triangle_winds_outward(v0, v1, v2));
        assert!(!triangle_winds_outward(v0, v2, v1));
    }

    #[test]
    fn test_outward_on_negative_side() {
        // Bottom-cap order: +X before +Z turns toward -Y.
        let v0 = DVec3::new(0.0, -1.0, 0.0);
        let v1 = DVec3::new(0.1, -1.0, 0.0);
        let v2 = DVec3::new(0.0, -1.0, 0.1);
        assert!(triangle_winds_outward(v0, v1, v2));
        assert!(!triangle_winds_outward(v0, v2, v1));
        assert!(triangle_normal(v0, v1, v2).y < 0.0);
    }

    #[test]
    fn test_area_of_right_triangle() {
        let area = triangle_area(DVec3::ZERO, DVec3::X, DVec3::Y);
        assert!((area - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_collinear_triangle_has_zero_area() {
        let area = triangle_area(DVec3::ZERO, DVec3::X, DVec3::X * 2.0);
        assert_eq!(area, 0.0);
    }
}
