// =============================================================================
// Output Sinks
// =============================================================================
//
// Where decoded lanes go. The batch kernels produce planar X and Y vectors; a sink
// either stores them as they are (structure of arrays) or transposes them into
// `(x, y)` pairs (array of structs) through `interleave_pairs`.

use crate::lanes::Lanes;
use crate::position::Position;

/// Destination of a batch decode, indexed like the distance slice.
pub trait PositionSink {
    /// Number of output slots.
    fn slots(&self) -> usize;

    /// Stores one block of `L::LANES` decoded positions starting at `offset`.
    fn store_lanes<L: Lanes>(&mut self, offset: usize, xs: L, ys: L);

    /// Stores a single decoded position.
    fn store(&mut self, offset: usize, position: Position);
}

/// Writes `xs[i]` and `ys[i]` as the `i`-th `(x, y)` pair of `out`.
///
/// The transpose used by every lane width: `out` is viewed as a flat run of
/// `[x, y]` words, so the write is a plain zip with no per-width shuffles.
///
/// # Panics
///
/// Panics if the three slices differ in length.
#[inline]
pub fn interleave_pairs(xs: &[u32], ys: &[u32], out: &mut [Position]) {
    assert!(
        xs.len() == out.len() && ys.len() == out.len(),
        "interleave_pairs: lane slices and output must have equal length"
    );
    let pairs: &mut [[u32; 2]] = bytemuck::cast_slice_mut(out);
    for ((pair, &x), &y) in pairs.iter_mut().zip(xs).zip(ys) {
        *pair = [x, y];
    }
}

impl PositionSink for [Position] {
    #[inline]
    fn slots(&self) -> usize {
        self.len()
    }

    #[inline(always)]
    fn store_lanes<L: Lanes>(&mut self, offset: usize, xs: L, ys: L) {
        let xs = xs.to_array();
        let ys = ys.to_array();
        interleave_pairs(
            xs.as_ref(),
            ys.as_ref(),
            &mut self[offset..offset + L::LANES],
        );
    }

    #[inline(always)]
    fn store(&mut self, offset: usize, position: Position) {
        self[offset] = position;
    }
}

/// Structure-of-arrays output: x and y coordinates in separate slices.
#[derive(Debug)]
pub struct Planar<'a> {
    xs: &'a mut [u32],
    ys: &'a mut [u32],
}

impl<'a> Planar<'a> {
    /// Wraps the two coordinate slices.
    ///
    /// # Panics
    ///
    /// Panics if `xs` and `ys` differ in length.
    pub fn new(xs: &'a mut [u32], ys: &'a mut [u32]) -> Self {
        assert_eq!(xs.len(), ys.len(), "x and y output slices differ in length");
        Self { xs, ys }
    }
}

impl PositionSink for Planar<'_> {
    #[inline]
    fn slots(&self) -> usize {
        self.xs.len()
    }

    #[inline(always)]
    fn store_lanes<L: Lanes>(&mut self, offset: usize, xs: L, ys: L) {
        let end = offset + L::LANES;
        self.xs[offset..end].copy_from_slice(xs.to_array().as_ref());
        self.ys[offset..end].copy_from_slice(ys.to_array().as_ref());
    }

    #[inline(always)]
    fn store(&mut self, offset: usize, position: Position) {
        self.xs[offset] = position.x;
        self.ys[offset] = position.y;
    }
}
