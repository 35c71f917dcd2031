//! Cascade planning: how a batch of `count` distances is split across lane widths.
//!
//! The plan depends only on the count and the starting lane width, never on the
//! distance values, so it is computed separately from the decoding itself.

use crate::lanes::LaneWidth;

/// A run of consecutive equal-width blocks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    /// Lane width of every block in the run.
    pub lanes: LaneWidth,
    /// Index of the first distance in the run.
    pub offset: usize,
    /// Number of blocks (`>= 1`).
    pub blocks: usize,
}

impl Segment {
    /// Number of distances covered.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.blocks * self.lanes.lanes()
    }

    /// Always `false`: empty runs are never emitted.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.blocks == 0
    }

    /// Offsets of the blocks in this run.
    pub fn block_offsets(&self) -> impl Iterator<Item = usize> {
        let step = self.lanes.lanes();
        let offset = self.offset;
        (0..self.blocks).map(move |b| offset + b * step)
    }
}

/// Splits `count` distances into runs, widest first, starting at `start`.
///
/// Each level takes as many whole blocks as fit into what remains, then hands the
/// rest to the next narrower level. `X1` is always the last level, so the runs
/// cover `[0, count)` exactly and in order. Levels that get no block are skipped.
///
/// ```ignore
/// // 5 distances on a 4-lane target: one X4 block, then one scalar.
/// let runs: Vec<_> = plan(5, LaneWidth::X4).collect();
/// assert_eq!(runs[0], Segment { lanes: LaneWidth::X4, offset: 0, blocks: 1 });
/// assert_eq!(runs[1], Segment { lanes: LaneWidth::X1, offset: 4, blocks: 1 });
/// ```
pub fn plan(count: usize, start: LaneWidth) -> impl Iterator<Item = Segment> {
    let mut cursor = 0;
    start.cascade().filter_map(move |lanes| {
        let blocks = (count - cursor) / lanes.lanes();
        let segment = Segment {
            lanes,
            offset: cursor,
            blocks,
        };
        cursor += segment.len();
        (!segment.is_empty()).then_some(segment)
    })
}
