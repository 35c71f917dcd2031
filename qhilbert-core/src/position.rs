//! The `(x, y)` coordinate produced for every distance.

use bytemuck::{Pod, Zeroable};

/// A cell of the Hilbert grid.
///
/// Laid out as two packed `u32`s so that a `&mut [Position]` can be viewed as an
/// interleaved `&mut [u32]` (`x0, y0, x1, y1, ...`) by the batch transpose.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Pod, Zeroable)]
pub struct Position {
    /// Column, in `[0, width)`.
    pub x: u32,
    /// Row, in `[0, width)`.
    pub y: u32,
}

const _: () = assert!(
    core::mem::size_of::<Position>() == 2 * core::mem::size_of::<u32>(),
    "Position must be exactly two packed u32s"
);

impl Position {
    /// The first cell of every curve.
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// Creates a position.
    #[inline(always)]
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Swaps the coordinates.
    #[inline(always)]
    #[must_use]
    pub const fn transposed(self) -> Self {
        Self {
            x: self.y,
            y: self.x,
        }
    }

    /// `|dx| + |dy|`.
    #[inline]
    #[must_use]
    pub const fn manhattan(self, other: Self) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// `max(|dx|, |dy|)`.
    #[inline]
    #[must_use]
    pub const fn chebyshev(self, other: Self) -> u32 {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        if dx > dy {
            dx
        } else {
            dy
        }
    }
}

impl From<(u32, u32)> for Position {
    fn from((x, y): (u32, u32)) -> Self {
        Self { x, y }
    }
}

impl From<Position> for (u32, u32) {
    fn from(p: Position) -> Self {
        (p.x, p.y)
    }
}

impl From<[u32; 2]> for Position {
    fn from([x, y]: [u32; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Position> for [u32; 2] {
    fn from(p: Position) -> Self {
        [p.x, p.y]
    }
}
