//! Errors raised before any mesh buffers are allocated.

/// Reasons a cubesphere cannot be generated for a requested subdivision level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CubesphereError {
    /// The subdivision level is below 1.
    #[error("invalid subdivision level {divs}: must be at least 1")]
    InvalidParameter {
        /// The rejected subdivision level.
        divs: u32,
    },

    /// The mesh would need vertex indices that do not fit in a `u32`.
    #[error("subdivision level {divs} needs {vertex_count} vertices, exceeding 32-bit index capacity")]
    CapacityExceeded {
        /// The rejected subdivision level.
        divs: u32,
        /// Number of vertices the mesh would need, saturated at `u64::MAX`.
        vertex_count: u64,
    },
}
