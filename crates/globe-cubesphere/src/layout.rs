//! Lattice layout of the subdivided cube surface.
//!
//! The cube spans `0..=divs` on every axis. Vertices are stored as `divs + 1`
//! perimeter rings from `y = 0` up to `y = divs`, then the interior of the top
//! cap, then the interior of the bottom cap. Both cap interiors are row-major
//! (`z` outer, `x` inner).
//!
//! Each ring walks the square cross-section:
//!
//! ```text
//!   offset 0 ..= d      (x = 0..=d,   z = 0)   along +x
//!   offset d+1 ..= 2d   (x = d,       z = 1..=d) along +z
//!   offset 2d+1 ..= 3d  (x = d-1..=0, z = d)   along -x
//!   offset 3d+1 .. 4d   (x = 0,       z = d-1..=1) along -z
//! ```
//!
//! The stitchers in [`crate::stitch`] rely on this exact order.

use glam::Vec3;
use tracing::warn;

use crate::error::CubesphereError;
use crate::stitch::Cap;

/// Index bookkeeping for one subdivision level.
///
/// A `GridLayout` can only be built for a level whose every vertex index fits
/// in a `u32`, so all offsets it hands out are infallible.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridLayout {
    divs: u32,
}

impl GridLayout {
    /// Validate `divs` and build its layout.
    ///
    /// Fails with [`CubesphereError::InvalidParameter`] for `divs == 0` and
    /// with [`CubesphereError::CapacityExceeded`] when the largest vertex
    /// index or the index buffer length would not be representable.
    pub fn new(divs: u32) -> Result<Self, CubesphereError> {
        if divs == 0 {
            warn!("rejected cubesphere subdivision level 0");
            return Err(CubesphereError::InvalidParameter { divs });
        }

        let d = u64::from(divs);
        let vertex_count = d
            .checked_mul(d)
            .and_then(|d2| d2.checked_mul(6))
            .and_then(|n| n.checked_add(2));
        let index_count = d.checked_mul(d).and_then(|d2| d2.checked_mul(36));

        let fits = match (vertex_count, index_count) {
            (Some(vertices), Some(indices)) => {
                vertices - 1 <= u64::from(u32::MAX) && usize::try_from(indices).is_ok()
            }
            _ => false,
        };
        if !fits {
            let vertex_count = vertex_count.unwrap_or(u64::MAX);
            warn!(divs, vertex_count, "cubesphere exceeds 32-bit index capacity");
            return Err(CubesphereError::CapacityExceeded { divs, vertex_count });
        }

        Ok(Self { divs })
    }

    /// Subdivisions per cube edge.
    #[inline]
    pub fn divs(&self) -> u32 {
        self.divs
    }

    /// Vertices in one perimeter ring (`4 * divs`).
    #[inline]
    pub fn ring_size(&self) -> u32 {
        4 * self.divs
    }

    /// Number of perimeter rings (`divs + 1`).
    #[inline]
    pub fn ring_count(&self) -> u32 {
        self.divs + 1
    }

    /// Index of the first vertex of ring `y`.
    #[inline]
    pub fn ring_start(&self, y: u32) -> u32 {
        debug_assert!(y <= self.divs, "ring {y} out of range");
        y * self.ring_size()
    }

    /// Vertices strictly inside one cap (`(divs - 1)²`).
    #[inline]
    pub fn cap_interior_len(&self) -> u32 {
        (self.divs - 1) * (self.divs - 1)
    }

    /// Index of the first top-cap interior vertex.
    #[inline]
    pub fn top_interior_start(&self) -> u32 {
        self.ring_count() * self.ring_size()
    }

    /// Index of the first bottom-cap interior vertex.
    #[inline]
    pub fn bottom_interior_start(&self) -> u32 {
        self.top_interior_start() + self.cap_interior_len()
    }

    /// Total number of lattice vertices.
    pub fn vertex_count(&self) -> usize {
        self.ring_count() as usize * self.ring_size() as usize
            + 2 * self.cap_interior_len() as usize
    }

    /// Quads in the side band (`divs` bands of `ring_size` quads).
    pub fn side_quad_count(&self) -> usize {
        self.divs as usize * self.ring_size() as usize
    }

    /// Quads in one cap (`divs²`).
    pub fn cap_quad_count(&self) -> usize {
        self.divs as usize * self.divs as usize
    }

    /// Total quads over the six cube faces.
    pub fn quad_count(&self) -> usize {
        self.side_quad_count() + 2 * self.cap_quad_count()
    }

    /// Length of the index buffer (six indices per quad).
    pub fn index_count(&self) -> usize {
        self.quad_count() * 6
    }

    /// Perimeter offset of the boundary lattice point `(x, z)`, or `None`
    /// when the point lies strictly inside the square.
    pub fn perimeter_offset(&self, x: u32, z: u32) -> Option<u32> {
        let d = self.divs;
        debug_assert!(x <= d && z <= d, "lattice point ({x}, {z}) out of range");
        if z == 0 {
            Some(x)
        } else if x == d {
            Some(d + z)
        } else if z == d {
            Some(3 * d - x)
        } else if x == 0 {
            Some(4 * d - z)
        } else {
            None
        }
    }

    /// Vertex index of lattice point `(x, z)` on the given cap.
    ///
    /// Direct lookup used to cross-check the cursor-driven cap sweep.
    pub fn cap_vertex(&self, cap: Cap, x: u32, z: u32) -> u32 {
        match self.perimeter_offset(x, z) {
            Some(offset) => cap.ring_start(self) + offset,
            None => cap.interior_start(self) + (z - 1) * (self.divs - 1) + (x - 1),
        }
    }
}

/// Lay out every lattice point in cube-grid coordinates, in storage order.
pub fn lattice_positions(layout: &GridLayout) -> Vec<Vec3> {
    let d = layout.divs();
    let df = d as f32;
    let mut positions = Vec::with_capacity(layout.vertex_count());

    for y in 0..=d {
        let yf = y as f32;
        for x in 0..=d {
            positions.push(Vec3::new(x as f32, yf, 0.0));
        }
        for z in 1..=d {
            positions.push(Vec3::new(df, yf, z as f32));
        }
        for x in (0..d).rev() {
            positions.push(Vec3::new(x as f32, yf, df));
        }
        for z in (1..d).rev() {
            positions.push(Vec3::new(0.0, yf, z as f32));
        }
    }

    for y in [df, 0.0] {
        for z in 1..d {
            for x in 1..d {
                positions.push(Vec3::new(x as f32, y, z as f32));
            }
        }
    }

    debug_assert_eq!(positions.len(), layout.vertex_count());
    positions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_divs_rejected() {
        assert_eq!(
            GridLayout::new(0),
            Err(CubesphereError::InvalidParameter { divs: 0 })
        );
    }

    #[test]
    fn test_capacity_limit() {
        // 6 * 26754² + 2 = 4_294_659_098 still fits, one more level does not.
        assert!(GridLayout::new(26_754).is_ok());
        assert!(matches!(
            GridLayout::new(26_755),
            Err(CubesphereError::CapacityExceeded { divs: 26_755, .. })
        ));
        assert!(matches!(
            GridLayout::new(u32::MAX),
            Err(CubesphereError::CapacityExceeded { .. })
        ));
    }

    #[test]
    fn test_single_division_is_a_cube() {
        let layout = GridLayout::new(1).unwrap();
        assert_eq!(layout.ring_size(), 4);
        assert_eq!(layout.cap_interior_len(), 0);
        assert_eq!(layout.vertex_count(), 8);
        assert_eq!(layout.quad_count(), 6);
        assert_eq!(layout.index_count(), 36);
    }

    #[test]
    fn test_counts_match_enumeration() {
        for divs in 1..=20 {
            let layout = GridLayout::new(divs).unwrap();
            let positions = lattice_positions(&layout);
            let d = divs as usize;
            assert_eq!(positions.len(), (d + 1) * 4 * d + 2 * (d - 1) * (d - 1));
            assert_eq!(positions.len(), layout.vertex_count());
            assert_eq!(layout.quad_count(), 6 * d * d);
        }
    }

    #[test]
    fn test_ring_walk_order_divs_two() {
        let layout = GridLayout::new(2).unwrap();
        let positions = lattice_positions(&layout);
        let ring0: Vec<Vec3> = positions[..8].to_vec();
        let expected = [
            (0.0, 0.0),
            (1.0, 0.0),
            (2.0, 0.0),
            (2.0, 1.0),
            (2.0, 2.0),
            (1.0, 2.0),
            (0.0, 2.0),
            (0.0, 1.0),
        ];
        for (p, &(x, z)) in ring0.iter().zip(expected.iter()) {
            assert_eq!(*p, Vec3::new(x, 0.0, z));
        }
        // Top interior, then bottom interior.
        assert_eq!(positions[24], Vec3::new(1.0, 2.0, 1.0));
        assert_eq!(positions[25], Vec3::new(1.0, 0.0, 1.0));
    }

    #[test]
    fn test_rings_are_unique_and_on_boundary() {
        for divs in 1..=8 {
            let layout = GridLayout::new(divs).unwrap();
            let positions = lattice_positions(&layout);
            let d = divs as f32;
            for y in 0..=divs {
                let start = layout.ring_start(y) as usize;
                let ring = &positions[start..start + layout.ring_size() as usize];
                for (i, p) in ring.iter().enumerate() {
                    assert_eq!(p.y, y as f32);
                    assert!(p.x == 0.0 || p.x == d || p.z == 0.0 || p.z == d);
                    assert!(!ring[..i].contains(p), "ring {y} revisits {p:?}");
                }
            }
        }
    }

    #[test]
    fn test_perimeter_offset_matches_ring_walk() {
        for divs in 1..=9 {
            let layout = GridLayout::new(divs).unwrap();
            let positions = lattice_positions(&layout);
            for (offset, p) in positions[..layout.ring_size() as usize].iter().enumerate() {
                assert_eq!(
                    layout.perimeter_offset(p.x as u32, p.z as u32),
                    Some(offset as u32)
                );
            }
        }
    }

    #[test]
    fn test_cap_vertex_lookup_matches_positions() {
        for divs in 1..=9 {
            let layout = GridLayout::new(divs).unwrap();
            let positions = lattice_positions(&layout);
            for (cap, y) in [(Cap::Top, divs as f32), (Cap::Bottom, 0.0)] {
                for z in 0..=divs {
                    for x in 0..=divs {
                        let idx = layout.cap_vertex(cap, x, z) as usize;
                        assert_eq!(positions[idx], Vec3::new(x as f32, y, z as f32));
                    }
                }
            }
        }
    }
}
