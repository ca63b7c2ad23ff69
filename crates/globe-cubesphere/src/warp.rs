//! Cube-to-sphere spherification warp.
//!
//! Lattice points are first rescaled from cube-grid coordinates `0..=divs` to
//! the symmetric `[-1, 1]` cube and then projected with the Everitt/Mathworld
//! mapping, which spreads area more evenly than normalizing the cube point:
//!
//! ```text
//! sx = x * sqrt(1 - y²/2 - z²/2 + y²z²/3)
//! sy = y * sqrt(1 - x²/2 - z²/2 + x²z²/3)
//! sz = z * sqrt(1 - x²/2 - y²/2 + x²y²/3)
//! ```
//!
//! The warp is per vertex and knows nothing about topology.

use glam::{DVec3, Vec3};

/// Rescale a lattice point in `0..=divs` to the `[-1, 1]` cube.
#[inline]
#[must_use]
pub fn lattice_to_cube(lattice: Vec3, divs: u32) -> DVec3 {
    lattice.as_dvec3() * (2.0 / f64::from(divs)) - DVec3::ONE
}

/// Analytic cube-to-sphere mapping for a point on the `[-1, 1]` cube surface.
///
/// Radicands are clamped at zero so round-off at exact edge and corner values
/// cannot produce `NaN`.
#[inline]
#[must_use]
pub fn cube_to_sphere_everitt(cube_point: DVec3) -> DVec3 {
    let x2 = cube_point.x * cube_point.x;
    let y2 = cube_point.y * cube_point.y;
    let z2 = cube_point.z * cube_point.z;

    DVec3::new(
        cube_point.x * radicand(y2, z2).sqrt(),
        cube_point.y * radicand(x2, z2).sqrt(),
        cube_point.z * radicand(x2, y2).sqrt(),
    )
}

#[inline]
fn radicand(a2: f64, b2: f64) -> f64 {
    (1.0 - a2 / 2.0 - b2 / 2.0 + a2 * b2 / 3.0).max(0.0)
}

/// Overwrite lattice positions in place with their unit-sphere positions.
pub fn spherify(positions: &mut [Vec3], divs: u32) {
    for p in positions.iter_mut() {
        *p = cube_to_sphere_everitt(lattice_to_cube(*p, divs)).as_vec3();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_lattice_to_cube_spans_symmetric_cube() {
        assert_eq!(lattice_to_cube(Vec3::ZERO, 4), DVec3::NEG_ONE);
        assert_eq!(lattice_to_cube(Vec3::splat(4.0), 4), DVec3::ONE);
        assert_eq!(lattice_to_cube(Vec3::new(2.0, 0.0, 4.0), 4), DVec3::new(0.0, -1.0, 1.0));
    }

    #[test]
    fn test_face_centers_map_to_axes() {
        let axes = [
            DVec3::X,
            DVec3::NEG_X,
            DVec3::Y,
            DVec3::NEG_Y,
            DVec3::Z,
            DVec3::NEG_Z,
        ];
        for axis in axes {
            let p = cube_to_sphere_everitt(axis);
            assert!((p - axis).length() < EPSILON, "{axis:?} mapped to {p:?}");
        }
    }

    #[test]
    fn test_corners_map_to_diagonals() {
        let expected = 1.0 / 3.0_f64.sqrt();
        for sx in [-1.0, 1.0] {
            for sy in [-1.0, 1.0] {
                for sz in [-1.0, 1.0] {
                    let p = cube_to_sphere_everitt(DVec3::new(sx, sy, sz));
                    assert!((p.x - sx * expected).abs() < EPSILON);
                    assert!((p.y - sy * expected).abs() < EPSILON);
                    assert!((p.z - sz * expected).abs() < EPSILON);
                }
            }
        }
    }

    #[test]
    fn test_all_surface_samples_on_unit_sphere() {
        let steps = 16;
        for i in 0..=steps {
            for j in 0..=steps {
                let s = 2.0 * i as f64 / steps as f64 - 1.0;
                let t = 2.0 * j as f64 / steps as f64 - 1.0;
                for p in [
                    DVec3::new(1.0, s, t),
                    DVec3::new(-1.0, s, t),
                    DVec3::new(s, 1.0, t),
                    DVec3::new(s, -1.0, t),
                    DVec3::new(s, t, 1.0),
                    DVec3::new(s, t, -1.0),
                ] {
                    let len = cube_to_sphere_everitt(p).length();
                    assert!((len - 1.0).abs() < EPSILON, "{p:?} has length {len}");
                }
            }
        }
    }

    #[test]
    fn test_radicand_clamped_off_surface() {
        // Not a cube-surface point; the raw radicand for x would be negative.
        let p = cube_to_sphere_everitt(DVec3::new(0.5, 2.0, 0.0));
        assert!(p.is_finite());
        assert_eq!(p.x, 0.0);
    }

    #[test]
    fn test_spherify_in_place() {
        let mut positions = vec![Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 2.0, 1.0)];
        spherify(&mut positions, 2);
        let corner = -1.0 / 3.0_f32.sqrt();
        assert!((positions[0] - Vec3::splat(corner)).length() < 1e-6);
        assert!((positions[1] - Vec3::Y).length() < 1e-6);
    }
}
