//! Cubesphere mesh generation: layout, stitching, then spherification.

use glam::Vec3;
use tracing::debug;

use crate::error::CubesphereError;
use crate::layout::{GridLayout, lattice_positions};
use crate::quad::emit_quads;
use crate::stitch::all_quads;
use crate::warp::spherify;

/// Position-only vertex in the layout uploaded to vertex buffers.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SphereVertex {
    /// Unit-sphere position.
    pub position: [f32; 3],
}

static_assertions::assert_eq_size!(SphereVertex, [f32; 3]);

/// A closed, outward-wound triangle mesh of the unit sphere.
///
/// Produced by [`generate`]; immutable afterwards. A new subdivision level
/// means a new mesh.
#[derive(Clone, Debug, PartialEq)]
pub struct CubesphereMesh {
    divs: u32,
    positions: Vec<Vec3>,
    indices: Vec<u32>,
}

static_assertions::assert_impl_all!(CubesphereMesh: Send, Sync);

impl CubesphereMesh {
    /// Subdivision level this mesh was built for.
    pub fn divs(&self) -> u32 {
        self.divs
    }

    /// Vertex positions on the unit sphere.
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Triangle list indices, three per triangle.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Number of quads (two triangles each).
    pub fn quad_count(&self) -> usize {
        self.indices.len() / 6
    }

    /// Iterate the triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Positions as GPU vertices.
    pub fn to_vertices(&self) -> Vec<SphereVertex> {
        self.positions
            .iter()
            .map(|p| SphereVertex {
                position: p.to_array(),
            })
            .collect()
    }

    /// Raw bytes of the position buffer (`3 × f32` per vertex).
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Raw bytes of the index buffer (`u32` per index).
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Split into `(positions, indices)`.
    pub fn into_parts(self) -> (Vec<Vec3>, Vec<u32>) {
        (self.positions, self.indices)
    }

    #[cfg(test)]
    pub(crate) fn from_raw(divs: u32, positions: Vec<Vec3>, indices: Vec<u32>) -> Self {
        Self {
            divs,
            positions,
            indices,
        }
    }
}

/// Generate the cubesphere for `divs` subdivisions per cube edge.
///
/// Errors are raised before anything is allocated: `divs == 0` is
/// [`CubesphereError::InvalidParameter`], and a level whose indices would not
/// fit in `u32` is [`CubesphereError::CapacityExceeded`].
pub fn generate(divs: u32) -> Result<CubesphereMesh, CubesphereError> {
    let layout = GridLayout::new(divs)?;
    let _span = tracing::debug_span!("generate_cubesphere", divs).entered();

    let mut positions = lattice_positions(&layout);

    let mut indices = Vec::with_capacity(layout.index_count());
    let quads = emit_quads(&mut indices, all_quads(layout));
    debug_assert_eq!(quads, layout.quad_count(), "stitcher quad count drifted");
    debug_assert!(
        indices.iter().all(|&i| (i as usize) < positions.len()),
        "stitcher emitted an out-of-range index"
    );

    spherify(&mut positions, divs);

    debug!(
        vertices = positions.len(),
        quads,
        triangles = indices.len() / 3,
        "generated cubesphere"
    );

    Ok(CubesphereMesh {
        divs,
        positions,
        indices,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divs_one_is_warped_cube() {
        let mesh = generate(1).unwrap();
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.quad_count(), 6);
        assert_eq!(mesh.triangle_count(), 12);
        assert_eq!(mesh.indices().len(), 36);
        assert!(mesh.indices().iter().all(|&i| i < 8));

        let corner = 1.0 / 3.0_f32.sqrt();
        for p in mesh.positions() {
            assert!((p.abs() - Vec3::splat(corner)).length() < 1e-6, "{p:?}");
        }
    }

    #[test]
    fn test_zero_divs_is_invalid() {
        assert_eq!(
            generate(0),
            Err(CubesphereError::InvalidParameter { divs: 0 })
        );
    }

    #[test]
    fn test_oversized_divs_rejected_before_allocation() {
        assert!(matches!(
            generate(1_000_000),
            Err(CubesphereError::CapacityExceeded { divs: 1_000_000, .. })
        ));
    }

    #[test]
    fn test_first_quad_is_side_band_origin() {
        let mesh = generate(3).unwrap();
        let ring = 12;
        assert_eq!(&mesh.indices()[..6], &[0, ring, 1, 1, ring, ring + 1]);
    }

    #[test]
    fn test_byte_views_match_lengths() {
        let mesh = generate(4).unwrap();
        assert_eq!(mesh.vertex_bytes().len(), mesh.vertex_count() * 12);
        assert_eq!(mesh.index_bytes().len(), mesh.indices().len() * 4);
        let vertices = mesh.to_vertices();
        assert_eq!(vertices.len(), mesh.vertex_count());
        assert_eq!(
            bytemuck::cast_slice::<SphereVertex, u8>(&vertices),
            mesh.vertex_bytes()
        );
    }

    #[test]
    fn test_generation_is_deterministic() {
        assert_eq!(generate(7).unwrap(), generate(7).unwrap());
    }

    #[test]
    fn test_into_parts() {
        let mesh = generate(2).unwrap();
        let (positions, indices) = mesh.clone().into_parts();
        assert_eq!(positions, mesh.positions());
        assert_eq!(indices, mesh.indices());
    }
}
