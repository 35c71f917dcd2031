// =============================================================================
// Outer Perfect Shuffle (SWAR delta swaps)
// =============================================================================
//
// A word with bits `a15 b15 ... a1 b1 a0 b0` (odd bits `a`, even bits `b`) is
// unshuffled into `a15..a0 b15..b0`: odd bits in the high half, even bits in the
// low half. Each stage is a delta swap, which is its own inverse, so running the
// stages in reverse order shuffles back.

use crate::lanes::Lanes;

/// Swaps the bit groups selected by `mask` with the groups `S` positions above them.
///
/// `mask` must select the lower member of every pair and must not overlap itself
/// shifted left by `S`.
#[inline(always)]
pub fn delta_swap<L: Lanes, const S: u32>(word: L, mask: u32) -> L {
    let t = word.xor(word.shift_right::<S>()).and(L::splat(mask));
    word.xor(t).xor(t.shift_left::<S>())
}

/// Gathers odd bits into the high 16 bits and even bits into the low 16 bits.
///
/// Strides 1, 2, 4, 8.
#[inline(always)]
pub fn unshuffle<L: Lanes>(word: L) -> L {
    let word = delta_swap::<L, 1>(word, 0x2222_2222);
    let word = delta_swap::<L, 2>(word, 0x0C0C_0C0C);
    let word = delta_swap::<L, 4>(word, 0x00F0_00F0);
    delta_swap::<L, 8>(word, 0x0000_FF00)
}

/// Inverse of [`unshuffle`]: interleaves the high half into the odd bits and the
/// low half into the even bits.
#[inline(always)]
pub fn shuffle<L: Lanes>(word: L) -> L {
    let word = delta_swap::<L, 8>(word, 0x0000_FF00);
    let word = delta_swap::<L, 4>(word, 0x00F0_00F0);
    let word = delta_swap::<L, 2>(word, 0x0C0C_0C0C);
    delta_swap::<L, 1>(word, 0x2222_2222)
}
