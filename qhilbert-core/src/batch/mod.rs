// =============================================================================
// Batch Engine
// =============================================================================
//
// Decodes a slice of distances through a descending cascade of lane widths:
//
//   X16 blocks while >= 16 remain
//   X8  blocks while >=  8 remain
//   X4  blocks while >=  4 remain
//   X1  (scalar decoder) for the rest
//
// Every vector level runs the generic parallel-prefix transform on its lanes, so
// the output is bit-identical to calling `decode` per element whatever the lane
// width. The fast entry points validate nothing per element; `try_decode_batch`
// scans the input first.

/// Cascade planning (which lane width covers which indices).
pub mod plan;

/// Output sinks and the `(x, y)` interleave primitive.
pub mod sink;

pub use plan::{plan, Segment};
pub use sink::{interleave_pairs, Planar, PositionSink};

use crate::curve::{decode, decode_lanes};
use crate::error::HilbertError;
use crate::lanes::{u32x4, u32x8, LaneWidth, Lanes, U32x16};
use crate::position::Position;
use crate::width::Width;

/// Decodes one block of one lane width at `offset`.
type Kernel<S> = fn(Width, &[u32], &mut S, usize);

#[inline(always)]
fn vector_block<L: Lanes, S: PositionSink + ?Sized>(
    width: Width,
    distances: &[u32],
    out: &mut S,
    offset: usize,
) {
    let block = L::load(&distances[offset..offset + L::LANES]);
    let (xs, ys) = decode_lanes(width, block);
    out.store_lanes(offset, xs, ys);
}

#[inline(always)]
fn scalar_block<S: PositionSink + ?Sized>(
    width: Width,
    distances: &[u32],
    out: &mut S,
    offset: usize,
) {
    out.store(offset, decode(width, distances[offset]));
}

/// Kernel table: one lane processor per cascade level.
fn kernel<S: PositionSink + ?Sized>(lanes: LaneWidth) -> Kernel<S> {
    match lanes {
        LaneWidth::X16 => vector_block::<U32x16, S>,
        LaneWidth::X8 => vector_block::<u32x8, S>,
        LaneWidth::X4 => vector_block::<u32x4, S>,
        LaneWidth::X1 => scalar_block::<S>,
    }
}

/// Runs the cascade into any sink. Caller guarantees `out.slots() == distances.len()`.
fn run<S: PositionSink + ?Sized>(width: Width, distances: &[u32], out: &mut S, start: LaneWidth) {
    log::trace!(
        "decode_batch: {} distances, order {}, starting at {}",
        distances.len(),
        width.order(),
        start
    );
    for segment in plan(distances.len(), start) {
        let kernel = kernel::<S>(segment.lanes);
        for offset in segment.block_offsets() {
            kernel(width, distances, out, offset);
        }
    }
}

// =============================================================================
// Entry Points
// =============================================================================

/// Decodes every distance into `positions`, `positions[i] = decode(width, distances[i])`.
///
/// Starts the cascade at [`LaneWidth::widest`]. Distances are not range-checked.
///
/// # Panics
///
/// Panics if `positions.len() != distances.len()`.
#[inline]
pub fn decode_batch(width: Width, distances: &[u32], positions: &mut [Position]) {
    decode_batch_from(width, distances, positions, LaneWidth::widest());
}

/// [`decode_batch`] with an explicit starting lane width.
///
/// Any start yields the same output. `LaneWidth::X1` is the pure scalar path.
///
/// # Panics
///
/// Panics if `positions.len() != distances.len()`.
pub fn decode_batch_from(
    width: Width,
    distances: &[u32],
    positions: &mut [Position],
    start: LaneWidth,
) {
    assert_eq!(
        distances.len(),
        positions.len(),
        "decode_batch: output must have one slot per distance"
    );
    run(width, distances, positions, start);
}

/// Structure-of-arrays variant: `(xs[i], ys[i]) = decode(width, distances[i])`.
///
/// # Panics
///
/// Panics if `xs` or `ys` is not as long as `distances`.
#[inline]
pub fn decode_batch_planar(width: Width, distances: &[u32], xs: &mut [u32], ys: &mut [u32]) {
    decode_batch_planar_from(width, distances, xs, ys, LaneWidth::widest());
}

/// [`decode_batch_planar`] with an explicit starting lane width.
///
/// # Panics
///
/// Panics if `xs` or `ys` is not as long as `distances`.
pub fn decode_batch_planar_from(
    width: Width,
    distances: &[u32],
    xs: &mut [u32],
    ys: &mut [u32],
    start: LaneWidth,
) {
    let mut sink = Planar::new(xs, ys);
    assert_eq!(
        distances.len(),
        sink.slots(),
        "decode_batch_planar: outputs must have one slot per distance"
    );
    run(width, distances, &mut sink, start);
}

/// Checked [`decode_batch`]. On error `positions` is left untouched.
///
/// # Errors
///
/// - [`HilbertError::LengthMismatch`] if `positions.len() != distances.len()`
/// - [`HilbertError::OutOfDomain`] for the first distance `>= width^2`
pub fn try_decode_batch(
    width: Width,
    distances: &[u32],
    positions: &mut [Position],
) -> Result<(), HilbertError> {
    if distances.len() != positions.len() {
        return Err(HilbertError::LengthMismatch {
            distances: distances.len(),
            positions: positions.len(),
        });
    }
    if let Some(index) = distances.iter().position(|&d| !width.contains(d)) {
        return Err(HilbertError::OutOfDomain {
            index,
            distance: distances[index],
            area: width.area(),
        });
    }
    run(width, distances, positions, LaneWidth::widest());
    Ok(())
}
