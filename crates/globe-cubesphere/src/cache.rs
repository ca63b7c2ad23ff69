//! Keeps the current sphere mesh and rebuilds it only when the subdivision
//! level changes.
//!
//! A renderer holds one [`MeshCache`] and asks for the configured level every
//! frame. When [`MeshCache::generation`] moves, the previous mesh has been
//! dropped and the GPU copy must be replaced; deferring the release of the old
//! GPU buffers until in-flight frames finish is the renderer's job.

use tracing::info;

use crate::error::CubesphereError;
use crate::mesh::{CubesphereMesh, generate};

/// Current mesh plus a rebuild counter.
#[derive(Debug, Default)]
pub struct MeshCache {
    current: Option<CubesphereMesh>,
    generation: u64,
}

impl MeshCache {
    /// An empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the mesh for `divs`, regenerating it if the level changed.
    ///
    /// On error the previous mesh stays cached.
    pub fn get_or_generate(&mut self, divs: u32) -> Result<&CubesphereMesh, CubesphereError> {
        let mesh = match self.current.take() {
            Some(mesh) if mesh.divs() == divs => mesh,
            previous => match generate(divs) {
                Ok(mesh) => {
                    self.generation += 1;
                    info!(
                        divs,
                        previous = ?previous.as_ref().map(CubesphereMesh::divs),
                        generation = self.generation,
                        "rebuilt sphere mesh"
                    );
                    mesh
                }
                Err(e) => {
                    self.current = previous;
                    return Err(e);
                }
            },
        };
        Ok(self.current.insert(mesh))
    }

    /// The cached mesh, if any.
    pub fn current(&self) -> Option<&CubesphereMesh> {
        self.current.as_ref()
    }

    /// Number of meshes built so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Drop the cached mesh. The next request rebuilds.
    pub fn clear(&mut self) {
        self.current = None;
    }
}
