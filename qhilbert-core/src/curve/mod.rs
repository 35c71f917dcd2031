// =============================================================================
// Scalar Decoder
// =============================================================================
//
// One distance in, one position out. Two algorithms that agree on every input:
//
// - `decode`: the branchless parallel-prefix transform (default)
// - `decode_iterative`: serial quadrant rotation, kept as the reference
//
// Both ignore distance bits above `2 * order`, so they also agree outside the
// curve domain. Use `try_decode` to reject such distances instead.

/// Kani formal verification proofs.
#[cfg(kani)]
mod kani_proofs;

/// Generic parallel-prefix transform, shared with every batch lane width.
pub mod prefix;

/// Serial quadrant-rotation algorithm.
pub mod rotation;

pub use prefix::{decode_interleaved, decode_lanes};
pub use rotation::decode_iterative;

use crate::error::HilbertError;
use crate::intrinsics::split_odd_even;
use crate::position::Position;
use crate::width::Width;

/// Maps `distance` along the Hilbert curve of side `width` to its `(x, y)` cell.
///
/// `distance` should lie in `[0, width^2)`. This is not checked; higher bits are
/// ignored.
///
/// # Example
///
/// ```ignore
/// let w = Width::new(2)?;
/// assert_eq!(decode(w, 2), Position::new(1, 1));
/// ```
#[inline]
#[must_use]
pub fn decode(width: Width, distance: u32) -> Position {
    let (x, y) = split_odd_even(decode_interleaved::<u32>(width, distance));
    Position { x, y }
}

/// Checked [`decode`].
///
/// # Errors
///
/// Returns [`HilbertError::OutOfDomain`] if `distance >= width^2`.
pub fn try_decode(width: Width, distance: u32) -> Result<Position, HilbertError> {
    if !width.contains(distance) {
        return Err(HilbertError::OutOfDomain {
            index: 0,
            distance,
            area: width.area(),
        });
    }
    Ok(decode(width, distance))
}
