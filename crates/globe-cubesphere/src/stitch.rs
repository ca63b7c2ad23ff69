//! Topology stitching: side band and cap sweeps.
//!
//! Stitching works on vertex indices only. It depends on [`GridLayout`] and
//! never looks at positions, so it can be verified independently of the
//! spherification warp.

use crate::layout::GridLayout;
use crate::quad::Quad;

/// One of the two square caps closing the side band.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cap {
    /// The cap at `y = divs`, facing +Y.
    Top,
    /// The cap at `y = 0`, facing −Y.
    Bottom,
}

impl Cap {
    /// Both caps in emission order.
    pub const BOTH: [Cap; 2] = [Cap::Top, Cap::Bottom];

    /// Index of the first vertex of the ring bounding this cap.
    #[inline]
    pub fn ring_start(self, layout: &GridLayout) -> u32 {
        match self {
            Cap::Top => layout.ring_start(layout.divs()),
            Cap::Bottom => layout.ring_start(0),
        }
    }

    /// Index of the first interior vertex of this cap.
    #[inline]
    pub fn interior_start(self, layout: &GridLayout) -> u32 {
        match self {
            Cap::Top => layout.top_interior_start(),
            Cap::Bottom => layout.bottom_interior_start(),
        }
    }
}

/// Quads of the four side faces, ring pair by ring pair from the bottom up.
///
/// The last quad of each band wraps back to the first perimeter offset,
/// closing the vertical seam.
pub fn side_band(layout: GridLayout) -> impl Iterator<Item = Quad> {
    let ring = layout.ring_size();
    (0..layout.divs()).flat_map(move |y| {
        let base = layout.ring_start(y);
        (0..ring).map(move |q| {
            let next = (q + 1) % ring;
            Quad::new(base + q, base + next, base + ring + q, base + ring + next)
        })
    })
}

/// All quads of the mesh: side band, then top cap, then bottom cap.
pub fn all_quads(layout: GridLayout) -> impl Iterator<Item = Quad> {
    side_band(layout)
        .chain(CapSweep::new(layout, Cap::Top))
        .chain(CapSweep::new(layout, Cap::Bottom))
}

/// Cursor state machine that sweeps one cap row by row.
///
/// The cap is a `divs × divs` grid of cells over lattice points `(x, z)`.
/// Layer `n` is the row of cells between lattice rows `n` and `n + 1`. The
/// first layer bridges the start edge of the ring (`z = 0`) to the first
/// interior row, the last layer bridges the final interior row to the
/// opposite edge (`z = divs`), and every layer in between is a corner quad on
/// each side around a straight run of interior cells.
///
/// Four cursors track where the current layer's vertices live:
///
/// - `west`: ring vertex at `x = 0` of the lower row. Walks the ring
///   backwards, wrapping from offset `0` to `4·divs − 1` after the first layer.
/// - `east`: ring vertex at `x = divs` of the lower row. Walks forwards.
/// - `interior`: first interior vertex `(1, layer)` of the lower row. Steps
///   by `divs − 1` per layer.
/// - `rim`: ring vertex at the current column on the start edge during the
///   first layer, or on the opposite edge during the last. Walks forwards on
///   the start edge and backwards on the opposite edge.
///
/// [`CapSweep::advance`] is a pure transition; the iterator impl just drives
/// it. The bottom cap uses the same sweep with every quad mirrored, so both
/// caps face outward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CapSweep {
    cap: Cap,
    divs: u32,
    ring_start: u32,
    layer: u32,
    column: u32,
    west: u32,
    east: u32,
    interior: u32,
    rim: u32,
}

impl CapSweep {
    /// Start a sweep at the first cell of the given cap.
    pub fn new(layout: GridLayout, cap: Cap) -> Self {
        let divs = layout.divs();
        let ring_start = cap.ring_start(&layout);
        Self {
            cap,
            divs,
            ring_start,
            layer: 0,
            column: 0,
            west: ring_start,
            east: ring_start + divs,
            // Row 0 has no interior vertices; this is where row 0 would start
            // so that one stride lands on row 1.
            interior: cap.interior_start(&layout) - (divs - 1),
            rim: ring_start,
        }
    }

    /// The cap being swept.
    pub fn cap(&self) -> Cap {
        self.cap
    }

    /// Current layer (row of cells), `divs` once finished.
    pub fn layer(&self) -> u32 {
        self.layer
    }

    /// Current column within the layer.
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Whether every cell of the cap has been emitted.
    pub fn is_finished(&self) -> bool {
        self.layer >= self.divs
    }

    /// Cells still to be emitted.
    pub fn remaining(&self) -> usize {
        if self.is_finished() {
            return 0;
        }
        let d = self.divs as usize;
        (d - self.layer as usize) * d - self.column as usize
    }

    /// The quad for the current cell, without advancing.
    ///
    /// Must not be called on a finished sweep.
    pub fn quad(&self) -> Quad {
        debug_assert!(!self.is_finished(), "cap sweep already finished");
        let x = self.column;
        let quad = Quad::new(
            self.vertex(x, false),
            self.vertex(x + 1, false),
            self.vertex(x, true),
            self.vertex(x + 1, true),
        );
        match self.cap {
            Cap::Top => quad,
            Cap::Bottom => quad.mirrored(),
        }
    }

    /// Emit the current cell and return the state for the next one.
    ///
    /// Returns `None` once the last layer has been emitted.
    #[must_use]
    pub fn advance(self) -> Option<(Quad, Self)> {
        if self.is_finished() {
            return None;
        }
        let quad = self.quad();
        let d = self.divs;
        let mut next = self;

        next.column += 1;
        if self.layer == 0 {
            next.rim += 1;
        } else if self.layer == d - 1 {
            next.rim -= 1;
        }

        if next.column == d {
            next.column = 0;
            next.layer += 1;
            next.west = self.upper_west();
            next.east += 1;
            if next.layer < d {
                next.interior += d - 1;
            }
            if next.layer == d - 1 {
                next.rim = self.ring_start + 3 * d;
            }
        }

        Some((quad, next))
    }

    /// Ring vertex at `x = 0` of the upper row.
    fn upper_west(&self) -> u32 {
        if self.layer == 0 {
            self.ring_start + 4 * self.divs - 1
        } else {
            self.west - 1
        }
    }

    /// Vertex at column `a` (one of `column`, `column + 1`) of the lower or upper row.
    fn vertex(&self, a: u32, upper: bool) -> u32 {
        let d = self.divs;
        let row = self.layer + u32::from(upper);
        if a == 0 {
            if upper { self.upper_west() } else { self.west }
        } else if a == d {
            self.east + u32::from(upper)
        } else if row == 0 {
            self.rim + (a - self.column)
        } else if row == d {
            self.rim - (a - self.column)
        } else if upper {
            self.interior + (d - 1) + (a - 1)
        } else {
            self.interior + (a - 1)
        }
    }
}

impl Iterator for CapSweep {
    type Item = Quad;

    fn next(&mut self) -> Option<Quad> {
        let (quad, next) = self.advance()?;
        *self = next;
        Some(quad)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for CapSweep {}
