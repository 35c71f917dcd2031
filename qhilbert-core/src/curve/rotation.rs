//! Quadrant-rotation decoding.
//!
//! The serial reference algorithm: walks the distance two bits at a time from the
//! least significant group, growing the square one level per step and rotating or
//! reflecting the partial coordinate whenever the group selects a lower quadrant.

use crate::position::Position;
use crate::width::Width;

/// Decodes `distance` by quadrant rotation.
///
/// Bits above `2 * order` are never read.
#[must_use]
pub fn decode_iterative(width: Width, distance: u32) -> Position {
    let side = width.get();
    let mut remaining = distance;
    let mut x = 0u32;
    let mut y = 0u32;
    let mut level = 1u32;

    while level < side {
        let region_x = 1 & (remaining >> 1);
        let region_y = 1 & (remaining ^ region_x);

        if region_y == 0 {
            if region_x == 1 {
                x = level - 1 - x;
                y = level - 1 - y;
            }
            core::mem::swap(&mut x, &mut y);
        }

        x += level * region_x;
        y += level * region_y;

        remaining >>= 2;
        level <<= 1;
    }

    Position { x, y }
}
