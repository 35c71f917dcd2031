// =============================================================================
// Parallel-Prefix Hilbert Decoding
// =============================================================================
//
// Branchless inverse Hilbert transform over whole distance words. The distance is
// read as 2-bit groups, most significant first. Each group contributes a "swap"
// and a "complement" control bit, and the state at a group is the XOR of the
// controls of every group above it, which is an XOR prefix scan. Undoing the
// Gray-code-like encoding with that state yields the coordinates bit-interleaved:
// x in the odd bit positions, y in the even ones.
//
// Everything here is generic over `Lanes`, so the scalar decoder and every batch
// lane width execute the same instruction sequence.

use crate::intrinsics::bits::EVEN_BITS;
use crate::intrinsics::{unshuffle, xor_scan_pairs};
use crate::lanes::Lanes;
use crate::width::Width;

/// Decodes each lane to its interleaved coordinate word (`x` odd bits, `y` even bits).
///
/// Distance bits above `2 * order` are ignored. The result has no bits above
/// `2 * order`.
#[inline(always)]
pub fn decode_interleaved<L: Lanes>(width: Width, distances: L) -> L {
    let even = L::splat(EVEN_BITS);
    let mask = L::splat(width.distance_mask());

    // Unused high groups become `01`, which is "neither swap nor complement".
    let s = distances.and(mask).or(L::splat(width.padding()));
    let sr = s.shift_right::<1>().and(even);

    // Per group `hl`: bit 0 = !(h ^ l) (swap), bit 1 = h & l (complement).
    let cs = s.and(even).wrapping_add(sr).xor(even);
    let cs = xor_scan_pairs(cs);

    let swap = cs.and(even);
    let comp = cs.shift_right::<1>().and(even);

    let t = s.and(swap).xor(comp);
    s.xor(sr).xor(t).xor(t.shift_left::<1>()).and(mask)
}

/// Decodes each lane to planar `(xs, ys)` vectors.
#[inline(always)]
pub fn decode_lanes<L: Lanes>(width: Width, distances: L) -> (L, L) {
    let s = unshuffle(decode_interleaved(width, distances));
    (s.shift_right::<16>(), s.and(L::splat(0xFFFF)))
}
