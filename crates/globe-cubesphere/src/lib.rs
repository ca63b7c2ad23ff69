//! Cube-sphere mesh generation.
//!
//! Builds a closed, outward-wound triangle mesh of the unit sphere from a
//! subdivided cube in three independent stages:
//!
//! 1. [`layout`]: lattice points of the cube surface in a fixed order.
//! 2. [`stitch`]: quads over those indices (side band plus two cap sweeps),
//!    split into triangles by [`quad`].
//! 3. [`warp`]: the Everitt cube-to-sphere mapping applied per vertex.
//!
//! [`generate`] runs all three; [`MeshCache`] rebuilds only when the
//! subdivision level changes; [`validate()`] checks the topology.

mod cache;
mod error;
pub mod layout;
mod mesh;
pub mod quad;
pub mod stitch;
mod validate;
pub mod warp;
mod winding;

pub use cache::MeshCache;
pub use error::CubesphereError;
pub use layout::{GridLayout, lattice_positions};
pub use mesh::{CubesphereMesh, SphereVertex, generate};
pub use quad::Quad;
pub use stitch::{Cap, CapSweep, all_quads, side_band};
pub use validate::{MeshReport, SPHERE_TOLERANCE, TopologyDefect, validate};
pub use warp::{cube_to_sphere_everitt, lattice_to_cube, spherify};
pub use winding::{triangle_area, triangle_normal, triangle_winds_outward};
