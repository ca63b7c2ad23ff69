//! Quad faces and their fixed two-triangle split.
//!
//! Every stitcher emits [`Quad`]s and every quad is split the same way, so the
//! whole mesh shares one winding: counter-clockwise when viewed from outside.
//!
//! ```text
//!   tl ---- tr
//!   |     / |
//!   |   /   |        triangles: (bl, tl, br) and (br, tl, tr)
//!   | /     |
//!   bl ---- br
//! ```

/// Four vertex indices of one grid cell, named as seen from outside the mesh.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Quad {
    /// Bottom-left corner.
    pub bottom_left: u32,
    /// Bottom-right corner.
    pub bottom_right: u32,
    /// Top-left corner.
    pub top_left: u32,
    /// Top-right corner.
    pub top_right: u32,
}

impl Quad {
    /// Build a quad from its corners in `(bl, br, tl, tr)` order.
    #[inline]
    #[must_use]
    pub const fn new(bottom_left: u32, bottom_right: u32, top_left: u32, top_right: u32) -> Self {
        Self {
            bottom_left,
            bottom_right,
            top_left,
            top_right,
        }
    }

    /// The same cell seen from the other side: rows swapped, winding reversed.
    #[inline]
    #[must_use]
    pub const fn mirrored(self) -> Self {
        Self::new(
            self.top_left,
            self.top_right,
            self.bottom_left,
            self.bottom_right,
        )
    }

    /// The two triangles sharing the bottom-right to top-left diagonal.
    #[inline]
    #[must_use]
    pub const fn triangles(self) -> [[u32; 3]; 2] {
        [
            [self.bottom_left, self.top_left, self.bottom_right],
            [self.bottom_right, self.top_left, self.top_right],
        ]
    }

    /// The six indices of [`Quad::triangles`], flattened for an index buffer.
    #[inline]
    #[must_use]
    pub const fn indices(self) -> [u32; 6] {
        [
            self.bottom_left,
            self.top_left,
            self.bottom_right,
            self.bottom_right,
            self.top_left,
            self.top_right,
        ]
    }

    /// The corners in `(bl, br, tl, tr)` order.
    #[inline]
    #[must_use]
    pub const fn corners(self) -> [u32; 4] {
        [
            self.bottom_left,
            self.bottom_right,
            self.top_left,
            self.top_right,
        ]
    }
}

/// Append the index runs of `quads` to `indices`, returning how many quads were written.
pub fn emit_quads(indices: &mut Vec<u32>, quads: impl IntoIterator<Item = Quad>) -> usize {
    let mut count = 0;
    for quad in quads {
        indices.extend_from_slice(&quad.indices());
        count += 1;
    }
    count
}
