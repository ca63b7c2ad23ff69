//! Topology and geometry checks for generated meshes.
//!
//! A stitching bug shows up here as a defect rather than as a visual crack in
//! the renderer. The checks cover index bounds, degenerate and duplicate
//! triangles, edge manifoldness, outward winding and distance from the unit
//! sphere.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::mesh::CubesphereMesh;
use crate::winding::{triangle_area, triangle_winds_outward};

/// Allowed deviation of a vertex from unit length.
pub const SPHERE_TOLERANCE: f32 = 1e-5;

/// Smallest triangle area still considered non-degenerate.
const MIN_TRIANGLE_AREA: f64 = 1e-12;

/// The first problem found in a mesh.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TopologyDefect {
    /// An index points past the vertex buffer.
    #[error("triangle {triangle} references vertex {index}, but there are only {vertex_count}")]
    IndexOutOfRange {
        /// Triangle number.
        triangle: usize,
        /// The offending index.
        index: u32,
        /// Vertex buffer length.
        vertex_count: usize,
    },

    /// A triangle repeats a vertex or has (near) zero area.
    #[error("triangle {triangle} {indices:?} is degenerate")]
    DegenerateTriangle {
        /// Triangle number.
        triangle: usize,
        /// Its indices.
        indices: [u32; 3],
    },

    /// The same three vertices form more than one triangle.
    #[error("triangle {triangle} {indices:?} duplicates an earlier triangle")]
    DuplicateTriangle {
        /// Triangle number of the second occurrence.
        triangle: usize,
        /// Its indices.
        indices: [u32; 3],
    },

    /// An edge is not shared by exactly two triangles with opposite directions.
    #[error("edge ({a}, {b}) is used {uses} times")]
    NonManifoldEdge {
        /// Smaller endpoint.
        a: u32,
        /// Larger endpoint.
        b: u32,
        /// Number of triangles using the edge, or the count of one direction.
        uses: u32,
    },

    /// A triangle faces the sphere center.
    #[error("triangle {triangle} {indices:?} winds inward")]
    InwardTriangle {
        /// Triangle number.
        triangle: usize,
        /// Its indices.
        indices: [u32; 3],
    },

    /// A vertex is not on the unit sphere.
    #[error("vertex {vertex} has length {length}")]
    OffSphere {
        /// Vertex index.
        vertex: usize,
        /// Its distance from the origin.
        length: f32,
    },
}

/// Summary of a mesh that passed every check.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshReport {
    /// Vertex count.
    pub vertices: usize,
    /// Distinct undirected edges.
    pub edges: usize,
    /// Triangle count.
    pub triangles: usize,
    /// `V - E + F`; 2 for a closed sphere.
    pub euler_characteristic: i64,
    /// Largest `| |p| - 1 |` over all vertices.
    pub max_radius_error: f32,
}

/// Run every check and return a report, or the first defect found.
pub fn validate(mesh: &CubesphereMesh) -> Result<MeshReport, TopologyDefect> {
    let positions = mesh.positions();
    let vertex_count = positions.len();

    let mut max_radius_error = 0.0_f32;
    for (vertex, p) in positions.iter().enumerate() {
        let length = p.length();
        let error = (length - 1.0).abs();
        if error > SPHERE_TOLERANCE {
            return Err(TopologyDefect::OffSphere { vertex, length });
        }
        max_radius_error = max_radius_error.max(error);
    }

    let mut seen = FxHashSet::default();
    let mut directed: FxHashMap<(u32, u32), u32> = FxHashMap::default();

    for (triangle, indices) in mesh.triangles().enumerate() {
        if let Some(&index) = indices.iter().find(|&&i| i as usize >= vertex_count) {
            return Err(TopologyDefect::IndexOutOfRange {
                triangle,
                index,
                vertex_count,
            });
        }

        let [a, b, c] = indices;
        let [v0, v1, v2] = indices.map(|i| positions[i as usize].as_dvec3());
        if a == b || b == c || a == c || triangle_area(v0, v1, v2) < MIN_TRIANGLE_AREA {
            return Err(TopologyDefect::DegenerateTriangle { triangle, indices });
        }

        let mut key = indices;
        key.sort_unstable();
        if !seen.insert(key) {
            return Err(TopologyDefect::DuplicateTriangle { triangle, indices });
        }

        if !triangle_winds_outward(v0, v1, v2) {
            return Err(TopologyDefect::InwardTriangle { triangle, indices });
        }

        for edge in [(a, b), (b, c), (c, a)] {
            *directed.entry(edge).or_default() += 1;
        }
    }

    // Closed and consistently wound: each directed edge once, its reverse once.
    let mut edges = 0;
    for (&(a, b), &uses) in &directed {
        let reverse = directed.get(&(b, a)).copied().unwrap_or(0);
        if uses != 1 || reverse != 1 {
            let (lo, hi) = if a < b { (a, b) } else { (b, a) };
            return Err(TopologyDefect::NonManifoldEdge {
                a: lo,
                b: hi,
                uses: uses + reverse,
            });
        }
        if a < b {
            edges += 1;
        }
    }

    let triangles = mesh.triangle_count();
    Ok(MeshReport {
        vertices: vertex_count,
        edges,
        triangles,
        euler_characteristic: vertex_count as i64 - edges as i64 + triangles as i64,
        max_radius_error,
    })
}
